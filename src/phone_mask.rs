/// Formats whatever the user typed as a US number, `(AAA) BBB-CCCC`.
/// Non-digits are dropped and digits past the tenth are discarded.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect();

    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
