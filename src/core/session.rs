//! Interactive session: filters → load → reports → raw rows → restart?

use std::io::{BufRead, Write};
use tracing::info;

use crate::config::Config;
use crate::core::loader;
use crate::core::viewer::RawPager;
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::ui::messages::{self, Kind};
use crate::ui::{prompt, report};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.";
pub const NO_MORE_ROWS: &str = "No more rows to display.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Done,
}

/// Run cycles until the user declines to restart or input ends.
/// Returns the number of completed cycles.
pub fn run_session<R: BufRead, W: Write>(
    cfg: &Config,
    input: &mut R,
    out: &mut W,
) -> AppResult<usize> {
    let mut state = SessionState::Active;
    let mut cycles = 0;

    while state == SessionState::Active {
        state = match run_cycle(cfg, input, out) {
            Ok(next) => {
                cycles += 1;
                next
            }
            // stdin closed: same as answering "no"
            Err(AppError::InputClosed) => {
                writeln!(out)?;
                SessionState::Done
            }
            Err(e) => return Err(e),
        };
    }

    info!(cycles, "session finished");
    Ok(cycles)
}

/// One filter → load → report cycle; the table is dropped when it returns.
pub fn run_cycle<R: BufRead, W: Write>(
    cfg: &Config,
    input: &mut R,
    out: &mut W,
) -> AppResult<SessionState> {
    writeln!(out, "{GREETING}")?;
    let filters = prompt::get_filters(input, out)?;
    writeln!(out, "{}", cfg.separator_line())?;

    let table = loader::load_data(cfg, &filters)?;
    info!(%filters, rows = table.len(), "selection loaded");

    report::print_selection(out, &filters, &table)?;
    report::print_reports(out, &table, cfg)?;
    browse_raw_rows(input, out, &table, cfg.page_size)?;

    let restart = prompt::confirm(input, out, RESTART_QUESTION)?;
    Ok(if restart {
        SessionState::Active
    } else {
        SessionState::Done
    })
}

/// Show `page_size` rows for every "yes"; stops on any other answer.
pub fn browse_raw_rows<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    table: &TripTable,
    page_size: usize,
) -> AppResult<()> {
    let mut pager = RawPager::new(table, page_size);
    let mut question = format!("\nWould you like to view {page_size} rows of data? Enter yes or no:");

    while prompt::confirm(input, out, &question)? {
        let start = pager.offset();
        let page = pager.next_page();
        if page.is_empty() {
            messages::write(out, Kind::Info, NO_MORE_ROWS)?;
            break;
        }

        writeln!(
            out,
            "Rows {}-{} of {}",
            start + 1,
            start + page.len(),
            table.len()
        )?;
        write!(out, "{}", report::render_rows(table, page))?;
        question = format!("\nWould you like to view {page_size} more rows? Enter yes or no:");
    }

    Ok(())
}
