//! Scene composition.
//!
//! `compose` is a pure function: (timeline data, today, hovered work) →
//! list of visual elements with their styles. Interaction state is an
//! input, not something mutated on a live canvas, so hover behavior can be
//! exercised headlessly; the SVG writer mirrors the same rules as CSS.

use crate::models::{TimelineResult, WorkRecord};
use crate::render::scale::TimeScale;
use chrono::NaiveDate;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 150;

/// Baseline of the axis; marks hang from y = AXIS_Y - STALK_HEIGHT down to it.
pub const AXIS_Y: f64 = 100.0;
pub const STALK_HEIGHT: f64 = 40.0;
pub const STALK_WIDTH: f64 = 1.0;
pub const HEAD_SIZE: f64 = 10.0;
pub const HEAD_RADIUS: f64 = 2.0;
pub const LABEL_OFFSET_X: f64 = 12.0;
pub const LABEL_OFFSET_Y: f64 = 9.0;
pub const LIFE_TEXT_GAP: f64 = 5.0;
pub const TICK_LENGTH: f64 = 6.0;
pub const TICK_LABEL_Y: f64 = 118.0;
pub const AXIS_TICKS: usize = 10;

pub const BACKGROUND_COLOR: &str = "black";
pub const MARK_COLOR: &str = "magenta";
pub const HIGHLIGHT_COLOR: &str = "white";
pub const TEXT_COLOR: &str = "white";
pub const AXIS_COLOR: &str = "white";

/// Opacity the non-hovered elements fade to, and how long the fade takes.
pub const DIM_OPACITY: f64 = 0.2;
pub const HOVER_TRANSITION_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    Axis,
    LifeLine,
    LifeText,
    WorkStalk,
    WorkHead,
    WorkLabel,
}

impl ElementClass {
    pub fn css(&self) -> &'static str {
        match self {
            ElementClass::Axis => "axis",
            ElementClass::LifeLine => "life-line",
            ElementClass::LifeText => "life-text",
            ElementClass::WorkStalk => "work-stalk",
            ElementClass::WorkHead => "work-head",
            ElementClass::WorkLabel => "work-label",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
    },
}

#[derive(Debug, Clone)]
pub struct Element {
    pub class: ElementClass,
    /// Element identity; the head carries the work's catalog link token.
    pub id: Option<String>,
    /// QID of the work this element belongs to, for hover matching.
    pub work: Option<String>,
    pub shape: Shape,
    pub fill: &'static str,
    pub opacity: f64,
    /// Click-through target (heads only).
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub elements: Vec<Element>,
}

impl Scene {
    fn empty() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: BACKGROUND_COLOR,
            elements: Vec::new(),
        }
    }
}

/// Compose the full scene for one timeline.
///
/// `hovered` is the QID of the work currently under the pointer, if any:
/// with a hover active, every axis/life/stalk element and every other head
/// dims to DIM_OPACITY, the hovered head switches to the highlight color at
/// full opacity, and the hovered label becomes visible. With no hover, all
/// labels sit at opacity 0 and everything else at full opacity.
pub fn compose(
    result: &TimelineResult,
    today: NaiveDate,
    link_base: &str,
    hovered: Option<&str>,
) -> Scene {
    let mut scene = Scene::empty();

    // Empty result: background canvas only, no axis, no marks.
    let Some(life) = &result.life else {
        return scene;
    };

    let scale = TimeScale::new(life.birth, life.end(today));
    let dim = hovered.is_some();
    let base_opacity = if dim { DIM_OPACITY } else { 1.0 };

    push_axis(&mut scene, &scale, base_opacity);

    for event in life.events() {
        push_life_mark(&mut scene, scale.map(event.date), event.label(), base_opacity);
    }

    for work in result.works.iter().filter(|w| w.has_link()) {
        push_work_marks(&mut scene, &scale, work, link_base, hovered);
    }

    scene
}

fn push_axis(scene: &mut Scene, scale: &TimeScale, opacity: f64) {
    use crate::render::scale::{RANGE_END, RANGE_START};

    scene.elements.push(Element {
        class: ElementClass::Axis,
        id: None,
        work: None,
        shape: Shape::Line {
            x1: RANGE_START,
            y1: AXIS_Y,
            x2: RANGE_END,
            y2: AXIS_Y,
        },
        fill: AXIS_COLOR,
        opacity,
        link: None,
    });

    for tick in scale.ticks(AXIS_TICKS) {
        scene.elements.push(Element {
            class: ElementClass::Axis,
            id: None,
            work: None,
            shape: Shape::Line {
                x1: tick.x,
                y1: AXIS_Y,
                x2: tick.x,
                y2: AXIS_Y + TICK_LENGTH,
            },
            fill: AXIS_COLOR,
            opacity,
            link: None,
        });

        scene.elements.push(Element {
            class: ElementClass::Axis,
            id: None,
            work: None,
            shape: Shape::Text {
                x: tick.x,
                y: TICK_LABEL_Y,
                content: tick.label,
            },
            fill: AXIS_COLOR,
            opacity,
            link: None,
        });
    }
}

fn push_life_mark(scene: &mut Scene, x: f64, label: String, opacity: f64) {
    scene.elements.push(Element {
        class: ElementClass::LifeLine,
        id: None,
        work: None,
        shape: Shape::Rect {
            x,
            y: AXIS_Y - STALK_HEIGHT,
            width: STALK_WIDTH,
            height: STALK_HEIGHT,
            rx: 0.0,
        },
        fill: TEXT_COLOR,
        opacity,
        link: None,
    });

    scene.elements.push(Element {
        class: ElementClass::LifeText,
        id: None,
        work: None,
        shape: Shape::Text {
            x,
            y: AXIS_Y - STALK_HEIGHT - LIFE_TEXT_GAP,
            content: label,
        },
        fill: TEXT_COLOR,
        opacity,
        link: None,
    });
}

fn push_work_marks(
    scene: &mut Scene,
    scale: &TimeScale,
    work: &WorkRecord,
    link_base: &str,
    hovered: Option<&str>,
) {
    // callers filter on has_link, but keep the guard local
    let Some(token) = &work.link_token else {
        return;
    };

    let x = scale.map(work.earliest_publication);
    let dim = hovered.is_some();
    let is_hovered = hovered == Some(work.qid.as_str());

    scene.elements.push(Element {
        class: ElementClass::WorkStalk,
        id: None,
        work: Some(work.qid.clone()),
        shape: Shape::Rect {
            x,
            y: AXIS_Y - STALK_HEIGHT,
            width: STALK_WIDTH,
            height: STALK_HEIGHT,
            rx: 0.0,
        },
        fill: MARK_COLOR,
        opacity: if dim { DIM_OPACITY } else { 1.0 },
        link: None,
    });

    let (head_fill, head_opacity) = if is_hovered {
        (HIGHLIGHT_COLOR, 1.0)
    } else if dim {
        (MARK_COLOR, DIM_OPACITY)
    } else {
        (MARK_COLOR, 1.0)
    };

    scene.elements.push(Element {
        class: ElementClass::WorkHead,
        id: Some(token.clone()),
        work: Some(work.qid.clone()),
        shape: Shape::Rect {
            x,
            y: AXIS_Y - STALK_HEIGHT,
            width: HEAD_SIZE,
            height: HEAD_SIZE,
            rx: HEAD_RADIUS,
        },
        fill: head_fill,
        opacity: head_opacity,
        link: Some(format!("{}{}", link_base, token)),
    });

    scene.elements.push(Element {
        class: ElementClass::WorkLabel,
        id: None,
        work: Some(work.qid.clone()),
        shape: Shape::Text {
            x: x + LABEL_OFFSET_X,
            y: AXIS_Y - STALK_HEIGHT + LABEL_OFFSET_Y,
            content: work.label_text(),
        },
        fill: TEXT_COLOR,
        opacity: if is_hovered { 1.0 } else { 0.0 },
        link: None,
    });
}
