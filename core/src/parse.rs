use anyhow::{anyhow, bail, Result};
use chrono::{NaiveDate, NaiveTime};

use crate::model::task::Priority;

/// Parse a priority code: exactly one of C, H, N, L, case-insensitive.
pub fn parse_priority(input: &str) -> Result<Priority> {
    let normalized = input.trim().to_uppercase();
    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => {
            Priority::from_code(code).ok_or_else(|| anyhow!("unknown priority code '{}'", code))
        }
        _ => bail!("priority must be a single letter"),
    }
}

/// Parse a `year-month-day` date. The parts need no zero-padding on input;
/// formatting back with `%Y-%m-%d` pads month and day to two digits.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    if parts.len() != 3 {
        bail!("expected yyyy-mm-dd, got '{}'", input.trim());
    }
    let year: i32 = parts[0].parse()?;
    let month: u32 = parts[1].parse()?;
    let day: u32 = parts[2].parse()?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("no such calendar date: {}-{}-{}", year, month, day))
}

/// Parse an `hour:minute` time of day.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    if parts.len() != 2 {
        bail!("expected hh:mm, got '{}'", input.trim());
    }
    let hour: u32 = parts[0].parse()?;
    let minute: u32 = parts[1].parse()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| anyhow!("no such time of day: {}:{}", hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priority_accepts_all_codes() {
        assert_eq!(parse_priority("C").unwrap(), Priority::Critical);
        assert_eq!(parse_priority("h").unwrap(), Priority::High);
        assert_eq!(parse_priority(" n ").unwrap(), Priority::Normal);
        assert_eq!(parse_priority("l").unwrap(), Priority::Low);
    }

    #[test]
    fn test_parse_priority_rejects_bad_input() {
        assert!(parse_priority("").is_err());
        assert!(parse_priority("x").is_err());
        assert!(parse_priority("CH").is_err());
        assert!(parse_priority("high").is_err());
        assert!(parse_priority("1").is_err());
    }

    #[test]
    fn test_parse_date_pads_on_format() {
        let date = parse_date("2024-6-5").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-06-05");

        let date = parse_date("2024-12-25").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-12-25");
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        // wrong separator count
        assert!(parse_date("2024-06").is_err());
        assert!(parse_date("2024-06-15-1").is_err());
        assert!(parse_date("2024/06/15").is_err());
        // non-numeric parts
        assert!(parse_date("2024-jun-15").is_err());
        assert!(parse_date("").is_err());
        // impossible calendar dates
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-00-10").is_err());
    }

    #[test]
    fn test_parse_date_accepts_leap_day() {
        assert!(parse_date("2024-2-29").is_ok());
    }

    #[test]
    fn test_parse_time_pads_on_format() {
        let time = parse_time("9:5").unwrap();
        assert_eq!(time.format("%H:%M").to_string(), "09:05");

        let time = parse_time("23:59").unwrap();
        assert_eq!(time.format("%H:%M").to_string(), "23:59");
    }

    #[test]
    fn test_parse_time_rejects_bad_input() {
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("10:60").is_err());
        assert!(parse_time("10").is_err());
        assert!(parse_time("10:20:30").is_err());
        assert!(parse_time("ten:30").is_err());
        assert!(parse_time("").is_err());
    }
}
