/// Keys that open or close a FAQ item from its summary.
pub fn is_toggle_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Enter", true)]
    #[case(" ", true)]
    #[case("Spacebar", false)]
    #[case("Tab", false)]
    #[case("Escape", false)]
    fn toggle_keys(#[case] key: &str, #[case] toggles: bool) {
        assert_eq!(is_toggle_key(key), toggles);
    }
}
