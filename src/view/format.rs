/// Group the integer part with commas: `12345.6` becomes `"12,346"`
pub fn thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = group_digits(&format!("{:.0}", rounded.abs()));

    if rounded < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Locale-style number: grouped integer part and up to three fraction
/// digits with trailing zeros removed, so `12500.25` stays `"12,500.25"`
pub fn grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Drop a trailing `.0` so whole numbers read like integers
pub fn compact(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Two-decimal money amount with its currency
pub fn money(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{:.2} {}", value, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.4), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(12345.6), "12,346");
        assert_eq!(thousands(1234567.0), "1,234,567");
        assert_eq!(thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_grouped_keeps_fraction_digits() {
        assert_eq!(grouped(12500.0), "12,500");
        assert_eq!(grouped(12500.25), "12,500.25");
        assert_eq!(grouped(1234567.5), "1,234,567.5");
        assert_eq!(grouped(0.125), "0.125");
        assert_eq!(grouped(999.0004), "999");
        assert_eq!(grouped(-1500.5), "-1,500.5");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(150.0), "150");
        assert_eq!(compact(12.5), "12.5");
    }

    #[test]
    fn test_money() {
        assert_eq!(money(415.456, "TL"), "415.46 TL");
        assert_eq!(money(3.0, ""), "3.00");
    }
}
