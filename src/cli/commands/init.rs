use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default values
pub fn handle() -> AppResult<()> {
    println!("⚙️  Initializing biotimeline…");

    let path = Config::init_all()?;
    let cfg = Config::load();

    println!("📄 Config file : {}", path.display());
    println!("🌐 Endpoint    : {}", cfg.endpoint);

    success("Configuration initialized");
    Ok(())
}
