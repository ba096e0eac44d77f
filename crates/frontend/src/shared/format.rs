//! Display helpers for table cells.

use chrono::NaiveDate;

/// `2024-05-01` or `2024-05-01T10:00:00` → `01/05/2024`. Anything else is shown as is.
pub fn format_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Whole đồng with dot thousands separators: `1250000` → `1.250.000 ₫`.
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

pub fn format_optional_vnd(amount: Option<f64>) -> String {
    amount.map(format_vnd).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-01"), "01/05/2024");
        assert_eq!(format_date("2024-12-31T23:59:59"), "31/12/2024");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
        assert_eq!(format_vnd(1000.0), "1.000 ₫");
        assert_eq!(format_vnd(1250000.4), "1.250.000 ₫");
        assert_eq!(format_vnd(-45000.0), "-45.000 ₫");
        assert_eq!(format_optional_vnd(None), "-");
    }
}
