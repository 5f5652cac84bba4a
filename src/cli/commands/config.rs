use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            let written = Config::init(path, *force)?;
            success(format!("Config file: {}", written.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let file = path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_file);
            if !file.exists() {
                warning(format!("{} not found, showing defaults", file.display()));
            }
            info("Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if !*init && !*print_config {
            info("Nothing to do: use --print or --init");
        }
    }

    Ok(())
}
