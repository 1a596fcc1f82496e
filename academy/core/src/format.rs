/// Group separator used by the ru-RU number format.
const GROUP_SEPARATOR: char = '\u{a0}';

/// Format a number with ru-RU conventions: non-breaking space between
/// thousands groups, comma before at most three fraction digits.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value.abs() * 1000.0).round() as u128;
    let int_part = rounded / 1000;
    let frac_part = rounded % 1000;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if value < 0.0 && rounded != 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac_part != 0 {
        let frac = format!("{frac_part:03}");
        out.push(',');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Course price as shown in the catalog table.
pub fn format_price(price: f64) -> String {
    format!("{} ₽", format_number(price))
}
