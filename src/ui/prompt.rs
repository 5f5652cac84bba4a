//! Line-based console prompts.
//!
//! Each question is paired with a validator returning `Some(value)` to accept
//! or `None` to ask again; `ask` drives the loop. End of input surfaces as
//! `AppError::InputClosed`.

use std::io::{BufRead, Write};

use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, Filters, MonthFilter};

pub const CITY_QUESTION: &str =
    "Please select one of the following cities: Chicago, New York City or Washington.";
pub const CITY_REJECTION: &str = "Invalid entry, please enter one of the three cities above.";

pub const MONTH_QUESTION: &str = "Please select one month from the following, or all: January, February, March, April, May, June, or all.";
pub const MONTH_REJECTION: &str =
    "Invalid entry, please enter one of the months listed above or all.";

pub const DAY_QUESTION: &str = "Please select a day of the week or all: Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or all.";
pub const DAY_REJECTION: &str = "Invalid entry, please enter one of the days listed above or all.";

/// Read one line; `InputClosed` on EOF.
pub fn read_line<R: BufRead>(input: &mut R) -> AppResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Ask `question` until `validate` accepts the answer.
pub fn ask<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    question: &str,
    rejection: &str,
    validate: F,
) -> AppResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        writeln!(out, "{question}")?;
        out.flush()?;

        let answer = read_line(input)?;
        match validate(&answer) {
            Some(value) => return Ok(value),
            None => writeln!(out, "{rejection}")?,
        }
    }
}

/// Yes/no question: only "yes" (any case) counts as yes.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> AppResult<bool> {
    writeln!(out, "{question}")?;
    out.flush()?;
    Ok(read_line(input)?.eq_ignore_ascii_case("yes"))
}

/// Collect city, month and day, re-prompting each until valid.
pub fn get_filters<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> AppResult<Filters> {
    let city = ask(input, out, CITY_QUESTION, CITY_REJECTION, City::from_input)?;
    let month = ask(input, out, MONTH_QUESTION, MONTH_REJECTION, MonthFilter::from_input)?;
    let day = ask(input, out, DAY_QUESTION, DAY_REJECTION, DayFilter::from_input)?;
    Ok(Filters::new(city, month, day))
}
