//! Calendar helpers for date archive titles.

/// English month names, indexed from January.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up the month name for a 1-based month number.
///
/// Accepts zero-padded values (`"03"`) as they appear in archive URLs.
/// Returns `None` for anything outside `1..=12` or not a number.
pub fn month_name(month: &str) -> Option<&'static str> {
    let month: u8 = month.trim().parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(MONTHS[usize::from(month - 1)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name("1"), Some("January"));
        assert_eq!(month_name("12"), Some("December"));
    }

    #[test]
    fn test_month_name_all_months() {
        let names: Vec<_> = (1..=12)
            .map(|m| month_name(&m.to_string()).unwrap())
            .collect();
        assert_eq!(names, MONTHS);
    }

    #[test]
    fn test_month_name_zero_padded() {
        assert_eq!(month_name("03"), Some("March"));
        assert_eq!(month_name(" 7 "), Some("July"));
    }

    #[test]
    fn test_month_name_invalid() {
        assert_eq!(month_name("0"), None);
        assert_eq!(month_name("13"), None);
        assert_eq!(month_name("-1"), None);
        assert_eq!(month_name("march"), None);
        assert_eq!(month_name(""), None);
    }
}
