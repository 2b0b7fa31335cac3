/// Display formatting helpers shared by the table and detail views.

/// Group a whole number with thousands separators.
/// Example: 48250 -> "48,250"
pub fn group_thousands(value: u64) -> String {
    let mut digits = value.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped = format!(",{}{}", &digits[split..], grouped);
        digits.truncate(split);
    }
    format!("{}{}", digits, grouped)
}

/// Format an amount as dollars.
/// Example: 2400.0 -> "$2,400", 1234.5 -> "$1,234.50"
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = (cents / 100).unsigned_abs();
    let fraction = (cents % 100).unsigned_abs();

    let sign = if cents < 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}${}", sign, group_thousands(whole))
    } else {
        format!("{}${}.{:02}", sign, group_thousands(whole), fraction)
    }
}

/// Format a metadata timestamp for table cells.
pub fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(48250), "48,250");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(2400.0), "$2,400");
        assert_eq!(format_amount(950.0), "$950");
    }

    #[test]
    fn test_format_amount_keeps_cents() {
        assert_eq!(format_amount(1234.5), "$1,234.50");
        assert_eq!(format_amount(0.99), "$0.99");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1250.0), "-$1,250");
    }
}
