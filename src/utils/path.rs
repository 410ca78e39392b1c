use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check whether a file can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` is set → Ok
/// - file exists and `force == false` → ask the user for confirmation.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Render cancelled: existing file not overwritten",
        )))
    }
}

/// Resolve the output file: relative paths land in the configured output
/// directory when one is set, otherwise in the current directory.
pub fn resolve_output(file: &str, cfg: &Config) -> PathBuf {
    let path = Path::new(file);

    if path.is_absolute() || cfg.default_output.is_empty() {
        path.to_path_buf()
    } else {
        Path::new(&cfg.default_output).join(path)
    }
}
