pub const MOBILE_DIGITS: usize = 10;

/// Keeps ASCII digits only, capped at ten.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(MOBILE_DIGITS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbols_and_truncates() {
        assert_eq!(normalize("98a76-54321999"), "9876543219");
        assert_eq!(normalize("+91 98765 43210"), "9198765432");
        assert_eq!(normalize("(987) 654"), "987654");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(normalize("९८७६५४३२१०"), "");
        assert_eq!(normalize("１２3"), "3");
    }

    #[test]
    fn output_is_always_short_and_numeric() {
        for input in ["", "1", "12345678901234567890", "a1b2c3d4e5f6g7h8i9j0k1", "--------"] {
            let out = normalize(input);
            assert!(out.len() <= MOBILE_DIGITS);
            assert!(out.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
