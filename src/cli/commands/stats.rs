use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader;
use crate::errors::AppResult;
use crate::models::Filters;
use crate::ui::report;
use std::io::{self, Write};

/// Handle the `stats` command: one non-interactive cycle.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        city,
        month,
        day,
        raw,
    } = cmd
    {
        let filters = Filters::new(*city, *month, *day);
        let table = loader::load_data(cfg, &filters)?;

        let mut out = io::stdout().lock();
        report::print_selection(&mut out, &filters, &table)?;
        report::print_reports(&mut out, &table, cfg)?;

        if let Some(n) = raw {
            let rows = table.slice(0, *n);
            writeln!(out)?;
            write!(out, "{}", report::render_rows(&table, rows))?;
        }
    }
    Ok(())
}
