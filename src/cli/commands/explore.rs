use crate::config::Config;
use crate::core::session::run_session;
use crate::errors::AppResult;
use std::io;

/// Handle the `explore` command (and the no-command default)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    run_session(cfg, &mut input, &mut out)?;
    Ok(())
}
