use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Subject;
use crate::query::client;
use crate::render::layout::compose;
use crate::render::svg::write_svg;
use crate::ui::messages::{success, warning};
use crate::utils::date::today;
use crate::utils::path::{ensure_writable, resolve_output};

/// Handle the `render` command: one fetch, one layout pass, one SVG file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        subject,
        file,
        input,
        force,
    } = cmd
    {
        let subject = Subject::new(subject.as_str());
        let result = client::load(&subject, input.as_deref(), cfg)?;

        let path = resolve_output(file, cfg);
        ensure_writable(&path, *force)?;

        if result.is_empty() {
            warning(format!(
                "No timeline data for {}; writing an empty canvas",
                subject
            ));
        }

        for work in result.works.iter().filter(|w| !w.has_link()) {
            warning(format!("Skipping '{}': no catalog link", work.label));
        }

        let scene = compose(&result, today(), &cfg.link_base, None);
        write_svg(&path, &scene)?;

        success(format!("Timeline written: {}", path.display()));
    }

    Ok(())
}
