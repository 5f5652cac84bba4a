//! Human-readable console reports for the four aggregators and the raw viewer.
//!
//! Everything writes to a caller-supplied `Write` so the session can be driven
//! from stdin/stdout as well as from in-memory buffers.

use std::io::Write;
use std::time::Instant;

use crate::config::Config;
use crate::core::stats::{duration_stats, station_stats, time_stats, user_stats};
use crate::errors::AppResult;
use crate::models::{Filters, Trip, TripTable};
use crate::ui::messages::{self, Kind};
use crate::utils::colors::label;
use crate::utils::date::{month_name, weekday_name};
use crate::utils::formatting::{bold, format_number};
use crate::utils::describe_breakdown;
use crate::utils::table::Table;

pub const NO_DATA_FILTERS: &str = "Sorry, no data available for the selected filters.";
pub const NO_DATA_CITY: &str = "Sorry, no data available for selected city.";

fn section<W: Write>(out: &mut W, title: &str) -> AppResult<Instant> {
    writeln!(out, "\n{}\n", bold(title))?;
    Ok(Instant::now())
}

fn finish<W: Write>(out: &mut W, started: Instant, sep: &str) -> AppResult<()> {
    writeln!(
        out,
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{sep}")?;
    Ok(())
}

fn no_data<W: Write>(out: &mut W, msg: &str) -> AppResult<()> {
    messages::write(out, Kind::Warning, msg)?;
    Ok(())
}

fn counts<W: Write>(out: &mut W, rows: &[(String, usize)]) -> AppResult<()> {
    let mut t = Table::new(&["value", "count"]);
    for (value, n) in rows {
        t.add_row(vec![value.clone(), n.to_string()]);
    }
    // skip the header line, labels are printed by the caller
    for line in t.render().lines().skip(1) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Echo the active selection and how many trips it kept.
pub fn print_selection<W: Write>(out: &mut W, filters: &Filters, table: &TripTable) -> AppResult<()> {
    writeln!(out, "{} {}", label("Filters:"), filters)?;
    writeln!(out, "{} {}", label("Trips:"), table.len())?;
    Ok(())
}

pub fn print_time_stats<W: Write>(out: &mut W, table: &TripTable, sep: &str) -> AppResult<()> {
    let started = section(out, "Calculating The Most Frequent Times of Travel...")?;

    match time_stats(table) {
        Some(s) => {
            writeln!(out, "Most common month: {}", month_name(s.popular_month))?;
            writeln!(
                out,
                "Most common day of the week: {}",
                weekday_name(s.popular_weekday)
            )?;
            writeln!(out, "Most common start hour: {}", s.popular_hour)?;
        }
        None => no_data(out, NO_DATA_FILTERS)?,
    }

    finish(out, started, sep)
}

pub fn print_station_stats<W: Write>(out: &mut W, table: &TripTable, sep: &str) -> AppResult<()> {
    let started = section(out, "Calculating The Most Popular Stations and Trip...")?;

    match station_stats(table) {
        Some(s) => {
            writeln!(out, "Most commonly used start station: {}", s.popular_start)?;
            writeln!(out, "Most commonly used end station: {}", s.popular_end)?;
            writeln!(out, "Most frequent trip: {}", s.popular_route)?;
        }
        None => no_data(out, NO_DATA_FILTERS)?,
    }

    finish(out, started, sep)
}

pub fn print_duration_stats<W: Write>(
    out: &mut W,
    table: &TripTable,
    sep: &str,
) -> AppResult<()> {
    let started = section(out, "Calculating Trip Duration...")?;

    let s = duration_stats(table);
    writeln!(
        out,
        "Total travel time: {} ({} seconds)",
        describe_breakdown(&s.breakdown),
        format_number(s.total_secs)
    )?;
    match s.mean_secs {
        Some(mean) => writeln!(
            out,
            "Average trip duration: {} seconds",
            format_number(mean)
        )?,
        None => no_data(out, NO_DATA_FILTERS)?,
    }

    finish(out, started, sep)
}

pub fn print_user_stats<W: Write>(out: &mut W, table: &TripTable, sep: &str) -> AppResult<()> {
    let started = section(out, "Calculating User Stats...")?;

    let s = user_stats(table);

    writeln!(out, "Counts of user types:")?;
    if s.user_types.is_empty() {
        no_data(out, NO_DATA_FILTERS)?;
    } else {
        counts(out, &s.user_types)?;
    }

    writeln!(out, "Counts of gender:")?;
    match &s.genders {
        None => no_data(out, NO_DATA_CITY)?,
        Some(g) if g.is_empty() => no_data(out, NO_DATA_FILTERS)?,
        Some(g) => counts(out, g)?,
    }

    writeln!(out, "Birth years:")?;
    match s.birth_years {
        Some(b) => {
            writeln!(out, "  Earliest: {}", b.earliest)?;
            writeln!(out, "  Most recent: {}", b.most_recent)?;
            writeln!(out, "  Most common: {}", b.most_common)?;
        }
        None if !table.has_birth_year => no_data(out, NO_DATA_CITY)?,
        None => no_data(out, NO_DATA_FILTERS)?,
    }

    finish(out, started, sep)
}

/// All four statistics sections, in order.
pub fn print_reports<W: Write>(out: &mut W, table: &TripTable, cfg: &Config) -> AppResult<()> {
    let sep = cfg.separator_line();
    print_time_stats(out, table, &sep)?;
    print_station_stats(out, table, &sep)?;
    print_duration_stats(out, table, &sep)?;
    print_user_stats(out, table, &sep)?;
    Ok(())
}

/// Every column of `rows`, derived ones included, no truncation.
pub fn render_rows(table: &TripTable, rows: &[Trip]) -> String {
    let mut t = Table::new(table.display_headers().as_slice());
    for trip in rows {
        t.add_row(trip.display_cells());
    }
    t.render()
}
