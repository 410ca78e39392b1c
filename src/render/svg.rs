//! SVG serialization of a composed scene.
//!
//! Output is deterministic: fixed element order, fixed attribute order.
//! Hover behavior is emitted as CSS rules in an embedded <style> block so
//! the standalone document behaves like the pure `compose` function does
//! with a `hovered` argument; click-through is an SVG hyperlink around
//! each work head.

use crate::errors::AppResult;
use crate::render::layout::{
    DIM_OPACITY, Element, ElementClass, HIGHLIGHT_COLOR, HOVER_TRANSITION_MS, Scene, Shape,
};
use std::fs;
use std::path::Path;

const FONT_SIZE: f64 = 9.0;

/// Serialize the scene to a complete SVG document.
pub fn document(scene: &Scene) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = scene.width,
        h = scene.height
    ));

    out.push_str(&style_block());

    out.push_str(&format!(
        "  <rect class=\"background\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        scene.width, scene.height, scene.background
    ));

    // Work elements are grouped per work so the CSS hover rules can address
    // one marker triple at a time; everything else is emitted flat.
    let mut open_group: Option<String> = None;

    for el in &scene.elements {
        match (&open_group, &el.work) {
            (Some(current), Some(qid)) if current == qid => {}
            (Some(_), _) => {
                out.push_str("  </g>\n");
                open_group = None;
            }
            (None, _) => {}
        }

        if open_group.is_none()
            && let Some(qid) = &el.work
        {
            out.push_str(&format!(
                "  <g class=\"work\" id=\"{}\">\n",
                escape(qid)
            ));
            open_group = Some(qid.clone());
        }

        out.push_str(&element(el));
    }

    if open_group.is_some() {
        out.push_str("  </g>\n");
    }

    out.push_str("</svg>\n");
    out
}

/// Write the document to disk.
pub fn write_svg(path: &Path, scene: &Scene) -> AppResult<()> {
    fs::write(path, document(scene))?;
    Ok(())
}

fn element(el: &Element) -> String {
    let class = el.class.css();
    let id_attr = match &el.id {
        Some(id) => format!(" id=\"{}\"", escape(id)),
        None => String::new(),
    };
    let opacity_attr = if el.opacity < 1.0 {
        format!(" opacity=\"{}\"", num(el.opacity))
    } else {
        String::new()
    };

    let body = match &el.shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => {
            let rx_attr = if *rx > 0.0 {
                format!(" rx=\"{r}\" ry=\"{r}\"", r = num(*rx))
            } else {
                String::new()
            };
            format!(
                "<rect class=\"{}\"{}{} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>",
                class,
                id_attr,
                rx_attr,
                num(*x),
                num(*y),
                num(*width),
                num(*height),
                el.fill,
                opacity_attr
            )
        }
        Shape::Line { x1, y1, x2, y2 } => format!(
            "<line class=\"{}\"{} x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\"{}/>",
            class,
            id_attr,
            num(*x1),
            num(*y1),
            num(*x2),
            num(*y2),
            el.fill,
            opacity_attr
        ),
        Shape::Text { x, y, content } => {
            let anchor = if el.class == ElementClass::Axis {
                " text-anchor=\"middle\""
            } else {
                ""
            };
            format!(
                "<text class=\"{}\"{}{} x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\"{}>{}</text>",
                class,
                id_attr,
                anchor,
                num(*x),
                num(*y),
                el.fill,
                num(FONT_SIZE),
                opacity_attr,
                escape(content)
            )
        }
    };

    match &el.link {
        Some(href) => format!(
            "  <a href=\"{}\" target=\"_self\">{}</a>\n",
            escape(href),
            body
        ),
        None => format!("  {}\n", body),
    }
}

/// Hover contract as CSS: dimming of everything outside the hovered work,
/// highlight color on the hovered head, label reveal, all over one
/// transition. Mirrors the styles `compose` produces for a hovered scene.
fn style_block() -> String {
    format!(
        "  <style>\n    \
         .axis, .life-line, .life-text, .work-stalk, .work-head, .work-label {{ transition: opacity {ms}ms, fill {ms}ms; }}\n    \
         .work-label {{ opacity: 0; }}\n    \
         svg:has(.work:hover) .axis,\n    \
         svg:has(.work:hover) .life-line,\n    \
         svg:has(.work:hover) .life-text,\n    \
         svg:has(.work:hover) .work:not(:hover) {{ opacity: {dim}; }}\n    \
         .work:hover .work-stalk {{ opacity: {dim}; }}\n    \
         .work:hover .work-head {{ fill: {hl}; }}\n    \
         .work:hover .work-label {{ opacity: 1; }}\n  \
         </style>\n",
        ms = HOVER_TRANSITION_MS,
        dim = num(DIM_OPACITY),
        hl = HIGHLIGHT_COLOR
    )
}

/// Compact numeric formatting: whole numbers without a fraction, everything
/// else with two decimals.
fn num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
