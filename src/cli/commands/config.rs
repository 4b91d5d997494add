use crate::cli::commands::Session;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// `config` prints the active configuration, `config init` writes it to
/// the configuration file.
pub fn handle(session: &Session) -> AppResult<()> {
    let cfg = &session.cfg;

    match session.input.note.as_str() {
        "" => {
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            print!("{}", cfg.to_yaml()?);
            Ok(())
        }
        "init" => {
            if session.test_mode {
                info("Test mode: configuration file not written.");
                return Ok(());
            }
            let path = cfg.save()?;
            success(format!("Configuration written to {}", path.display()));
            Ok(())
        }
        other => Err(AppError::Config(format!(
            "unknown config action '{}' (expected 'init')",
            other
        ))),
    }
}
