use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating passenger mobile numbers
    /// Optional country code (with leading +), optional separator, 6-14 digit subscriber number
    /// - Valid: "+91-9876543210", "+919876543210", "9876543210", "91 9876543210"
    /// - Invalid: "12345", "abc1234567", "+91-98765"
    pub static ref MOBILE_NUMBER_REGEX: Regex =
        Regex::new(r"^\+?\d{1,4}[-\s]?\d{6,14}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_number_regex_valid() {
        assert!(MOBILE_NUMBER_REGEX.is_match("+91-9876543210"));
        assert!(MOBILE_NUMBER_REGEX.is_match("+919876543210"));
        assert!(MOBILE_NUMBER_REGEX.is_match("9876543210"));
        assert!(MOBILE_NUMBER_REGEX.is_match("91 9876543210"));
        assert!(MOBILE_NUMBER_REGEX.is_match("+1 2025550123"));
    }

    #[test]
    fn test_mobile_number_regex_invalid() {
        assert!(!MOBILE_NUMBER_REGEX.is_match("12345")); // too short
        assert!(!MOBILE_NUMBER_REGEX.is_match("+91-98765")); // subscriber part too short
        assert!(!MOBILE_NUMBER_REGEX.is_match("abc1234567")); // letters
        assert!(!MOBILE_NUMBER_REGEX.is_match("98765-43210")); // separator splits subscriber digits
        assert!(!MOBILE_NUMBER_REGEX.is_match("+123456789012345678901")); // too long
        assert!(!MOBILE_NUMBER_REGEX.is_match("")); // empty
    }
}
