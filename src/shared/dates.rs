use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Sentinel end date for positions that are still ongoing.
pub const PRESENT: &str = "Present";

/// Sentinel returned when an end date precedes a start date.
pub const INVALID_DURATION: &str = "Invalid duration";

//
// ──────────────────────────────────────────────────────────
// Display formats
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    /// "Jan 2023", "1y 5mo"
    Short,
    /// "January 2023", "1 yr 5 mos"
    Medium,
    /// "January 2023", "1 year and 5 months"
    Long,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        DisplayFormat::Medium
    }
}

//
// ──────────────────────────────────────────────────────────
// Parsing
// ──────────────────────────────────────────────────────────
//

/// Parses an ISO `YYYY-MM-DD` date, falling back to an RFC 3339
/// timestamp's date part. Returns `None` for anything else, including
/// the `Present` sentinel.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Whole-month difference via calendar year/month subtraction, not
/// elapsed-day division. Negative when `end` is before `start`'s month.
fn whole_month_diff(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

//
// ──────────────────────────────────────────────────────────
// Date formatting
// ──────────────────────────────────────────────────────────
//

/// Formats a date as a month/year label ("Jan 2023" or "January 2023").
/// The `Present` sentinel and unparseable input pass through unchanged.
pub fn format_date(date: &str, format: DisplayFormat) -> String {
    if date == PRESENT {
        return date.to_string();
    }
    match parse_flexible_date(date) {
        Some(parsed) => match format {
            DisplayFormat::Short => parsed.format("%b %Y").to_string(),
            DisplayFormat::Medium | DisplayFormat::Long => parsed.format("%B %Y").to_string(),
        },
        None => date.to_string(),
    }
}

/// "Jan 2022 - Jun 2023", "Jan 2022 - Present"
pub fn format_date_range(start: &str, end: &str, format: DisplayFormat) -> String {
    format!(
        "{} - {}",
        format_date(start, format),
        format_date(end, format)
    )
}

/// Full date for article bylines ("February 26, 2024").
pub fn format_full_date(date: &str) -> String {
    match parse_flexible_date(date) {
        Some(parsed) => parsed.format("%B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Compact timeline label (`M/YYYY`). `Present` passes through.
pub fn format_experience_date(date: &str) -> String {
    if date == PRESENT {
        return date.to_string();
    }
    match parse_flexible_date(date) {
        Some(parsed) => format!("{}/{}", parsed.month(), parsed.year()),
        None => date.to_string(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Duration
// ──────────────────────────────────────────────────────────
//

/// Duration between two dates, where `end` may be the `Present`
/// sentinel. Resolves `Present` against the system clock; see
/// [`calculate_duration_as_of`] for the deterministic core.
pub fn calculate_duration(start: &str, end: &str, format: DisplayFormat) -> String {
    calculate_duration_as_of(start, end, today(), format)
}

/// Deterministic duration calculation. An end date before the start
/// date, or an unparseable date, yields the `Invalid duration` sentinel
/// rather than an error: callers sit in rendering paths.
pub fn calculate_duration_as_of(
    start: &str,
    end: &str,
    today: NaiveDate,
    format: DisplayFormat,
) -> String {
    let Some(start_date) = parse_flexible_date(start) else {
        return INVALID_DURATION.to_string();
    };
    let end_date = if end == PRESENT {
        today
    } else {
        match parse_flexible_date(end) {
            Some(date) => date,
            None => return INVALID_DURATION.to_string(),
        }
    };

    let total_months = whole_month_diff(start_date, end_date);
    if total_months < 0 {
        return INVALID_DURATION.to_string();
    }

    let years = total_months / 12;
    let months = total_months % 12;

    match format {
        DisplayFormat::Short => format_duration_short(years, months),
        DisplayFormat::Medium => format_duration_medium(years, months),
        DisplayFormat::Long => format_duration_long(years, months),
    }
}

fn format_duration_short(years: i32, months: i32) -> String {
    if years == 0 {
        return format!("{}mo", months);
    }
    if months == 0 {
        return format!("{}y", years);
    }
    format!("{}y {}mo", years, months)
}

fn format_duration_medium(years: i32, months: i32) -> String {
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} yr{}", years, if years != 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!(
            "{} mo{}",
            months,
            if months != 1 { "s" } else { "" }
        ));
    }
    parts.join(" ")
}

fn format_duration_long(years: i32, months: i32) -> String {
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!(
            "{} year{}",
            years,
            if years != 1 { "s" } else { "" }
        ));
    }
    if months > 0 {
        parts.push(format!(
            "{} month{}",
            months,
            if months != 1 { "s" } else { "" }
        ));
    }
    parts.join(" and ")
}

//
// ──────────────────────────────────────────────────────────
// Relative time
// ──────────────────────────────────────────────────────────
//

/// "2 years ago" style label, resolved against the system clock.
pub fn relative_time_string(date: &str) -> String {
    relative_time_string_as_of(date, today())
}

/// Deterministic relative-time core. `Present` reads as "Current";
/// anything within the last day reads as "Recently".
pub fn relative_time_string_as_of(date: &str, today: NaiveDate) -> String {
    if date == PRESENT {
        return "Current".to_string();
    }
    let Some(parsed) = parse_flexible_date(date) else {
        return "Recently".to_string();
    };

    let delta_days = (parsed - today).num_days();
    let delta_weeks = ((delta_days as f64) / 7.0).round() as i64;
    let delta_months = ((delta_days as f64) / 30.0).round() as i64;
    let delta_years = ((delta_months as f64) / 12.0).round() as i64;

    let unit = |count: i64, name: &str| -> String {
        format!("{} {}{} ago", count, name, if count == 1 { "" } else { "s" })
    };

    if delta_years.abs() > 0 {
        unit(delta_years.abs(), "year")
    } else if delta_months.abs() > 0 {
        unit(delta_months.abs(), "month")
    } else if delta_weeks.abs() > 0 {
        unit(delta_weeks.abs(), "week")
    } else if delta_days.abs() > 0 {
        unit(delta_days.abs(), "day")
    } else {
        "Recently".to_string()
    }
}

//
// ──────────────────────────────────────────────────────────
// Sorting
// ──────────────────────────────────────────────────────────
//

/// Sorts date strings chronologically. The `Present` sentinel sorts
/// last ascending and first descending; unparseable strings compare
/// lexicographically so the order stays total.
pub fn sort_dates(mut dates: Vec<String>, ascending: bool) -> Vec<String> {
    use std::cmp::Ordering;

    dates.sort_by(|a, b| {
        let ord = match (a.as_str(), b.as_str()) {
            (PRESENT, PRESENT) => Ordering::Equal,
            (PRESENT, _) => Ordering::Greater,
            (_, PRESENT) => Ordering::Less,
            (a, b) => match (parse_flexible_date(a), parse_flexible_date(b)) {
                (Some(da), Some(db)) => da.cmp(&db),
                _ => a.cmp(b),
            },
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    dates
}
