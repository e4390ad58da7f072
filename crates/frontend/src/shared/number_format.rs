//! Number formatting for on-screen tables

/// Formats a number with a space as thousands separator and `decimals` digits
/// after the point
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
///
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with 2 decimals and thousands separator
///
/// ```
/// use frontend::shared::number_format::format_money;
///
/// assert_eq!(format_money(1234567.89), "1 234 567.89");
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Integer with thousands separator
pub fn format_number_int(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}
