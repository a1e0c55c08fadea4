// src/util/format.rs
use chrono::Local;

/// Group digits in threes with commas: `1024` -> `1,024`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimals at most, trailing zeros dropped: `25.0` -> `25`, `33.3333` -> `33.33`.
pub fn format_percent(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

/// Local time of day used to prefix output log entries.
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
