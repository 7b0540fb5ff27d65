//! Display formatting for amounts and dates (Indian Rupee, en-IN conventions).

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as rupees with two decimals and en-IN digit grouping,
/// e.g. `₹12,34,567.89`. Negative amounts keep the sign after the symbol
/// (`₹-500.00`), the way the browser's `toLocaleString` renders them.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}0.00", CURRENCY_SYMBOL);
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let rupees = cents / 100;
    let paise = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}{}{}.{:02}", CURRENCY_SYMBOL, sign, group_indian(rupees), paise)
}

/// Group digits the Indian way: the last three digits, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Parse the date part of anything the backend sends: `YYYY-MM-DD`,
/// naive ISO timestamps (`2024-06-03T12:30:00.123456`) or RFC 3339.
/// Timestamps carrying an offset are shown on the viewer's local calendar day;
/// naive values are already local.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_date_in(input, &Local)
}

/// `parse_date` with offset timestamps converted into `tz`
pub fn parse_date_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// en-IN short date (`3/6/2024` for 3 June 2024). Unparseable input is returned as-is.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => input.to_string(),
    }
}

/// Month key (`YYYY-MM`) used by the plan and budget-status endpoints
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// `YYYY-MM-DD`, the value format of an `<input type="date">`
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_small_amounts() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(5.0), "₹5.00");
        assert_eq!(format_currency(999.999), "₹1,000.00");
        assert_eq!(format_currency(250.5), "₹250.50");
    }

    #[test]
    fn test_currency_indian_grouping() {
        assert_eq!(format_currency(1234.0), "₹1,234.00");
        assert_eq!(format_currency(12345.0), "₹12,345.00");
        assert_eq!(format_currency(123456.0), "₹1,23,456.00");
        assert_eq!(format_currency(1234567.89), "₹12,34,567.89");
        assert_eq!(format_currency(123456789.0), "₹12,34,56,789.00");
    }

    #[test]
    fn test_currency_negative_and_non_finite() {
        assert_eq!(format_currency(-500.0), "₹-500.00");
        assert_eq!(format_currency(-123456.7), "₹-1,23,456.70");
        assert_eq!(format_currency(-0.001), "₹0.00");
        assert_eq!(format_currency(f64::NAN), "₹0.00");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-06-03"), "3/6/2024");
        assert_eq!(format_date("2024-06-03T12:30:00.123456"), "3/6/2024");
        assert_eq!(format_date("2024-12-25T08:00:00"), "25/12/2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_offset_timestamps_use_viewer_day() {
        let ist = chrono::FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let utc = chrono::Utc;

        // 20:00 UTC is already the next morning in India
        assert_eq!(
            parse_date_in("2024-06-03T20:00:00Z", &ist),
            NaiveDate::from_ymd_opt(2024, 6, 4)
        );
        assert_eq!(
            parse_date_in("2024-11-09T02:00:00+05:30", &utc),
            NaiveDate::from_ymd_opt(2024, 11, 8)
        );
        // Naive timestamps are not shifted
        assert_eq!(
            parse_date_in("2024-06-03T23:30:00", &ist),
            NaiveDate::from_ymd_opt(2024, 6, 3)
        );
    }

    #[test]
    fn test_month_key_and_input_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(month_key(date), "2024-03");
        assert_eq!(input_date(date), "2024-03-07");
    }
}
