//! Formatting utilities used for the console reports.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (not chars: station names can be wide).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

pub fn separator(ch: &str, len: usize) -> String {
    ch.repeat(len)
}

/// Total seconds split into whole days, hours, minutes and the remaining seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl DurationBreakdown {
    pub fn from_seconds(total: f64) -> Self {
        if !total.is_finite() || total <= 0.0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0.0,
            };
        }

        let days = (total / 86_400.0).floor();
        let rest = total - days * 86_400.0;
        let hours = (rest / 3_600.0).floor();
        let rest = rest - hours * 3_600.0;
        let minutes = (rest / 60.0).floor();
        let seconds = rest - minutes * 60.0;

        Self {
            days: days as u64,
            hours: hours as u64,
            minutes: minutes as u64,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> f64 {
        self.days as f64 * 86_400.0
            + self.hours as f64 * 3_600.0
            + self.minutes as f64 * 60.0
            + self.seconds
    }
}

/// es: "2 days, 3 hours, 4 minutes, 5 seconds"
pub fn describe_breakdown(b: &DurationBreakdown) -> String {
    format!(
        "{} {}, {} {}, {} {}, {} {}",
        b.days,
        plural(b.days, "day"),
        b.hours,
        plural(b.hours, "hour"),
        b.minutes,
        plural(b.minutes, "minute"),
        b.seconds.trunc() as u64,
        plural(b.seconds.trunc() as u64, "second"),
    )
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

/// Integers print bare, fractions keep up to three decimals.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let s = format!("{:.3}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
