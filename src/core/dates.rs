use chrono::{DateTime, Months, Utc};

/// Add `months` calendar months to a timestamp.
///
/// Day-of-month is preserved where the target month has it, and clamped to
/// the last valid day otherwise (Jan 31 + 1 month = Feb 28, or Feb 29 in a
/// leap year). The time-of-day component is unchanged.
///
/// Returns `None` only if the result would overflow the representable range.
pub fn add_calendar_months(ts: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    ts.checked_add_months(Months::new(months))
}
