#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
    pub body_focused: bool,
}

/// First Tab from an unfocused page jumps into the hero instead of
/// walking through the nav.
pub fn skips_to_hero(press: &KeyPress) -> bool {
    press.key == "Tab" && !press.shift && press.body_focused
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Tab", false, true, true)]
    #[case("Tab", true, true, false)]
    #[case("Tab", false, false, false)]
    #[case("Enter", false, true, false)]
    fn skip_rule(#[case] key: &str, #[case] shift: bool, #[case] body_focused: bool, #[case] expected: bool) {
        let press = KeyPress {
            key: key.to_string(),
            shift,
            body_focused,
        };
        assert_eq!(skips_to_hero(&press), expected);
    }
}
