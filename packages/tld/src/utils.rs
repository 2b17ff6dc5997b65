use hex;
use tiny_keccak::Keccak;
use unicode_segmentation::UnicodeSegmentation;

pub const MAX_NAME_LENGTH: usize = 140;

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    o
}

pub fn get_token_id_from_name(name: &str) -> String {
    hex::encode(keccak256(name.as_bytes()))
}

/// Length of a domain name as a user sees it, counted in grapheme clusters.
pub fn name_length(name: &str) -> usize {
    name.graphemes(true).count()
}

pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Names carry no TLD suffix, so dots are rejected along with whitespace.
pub fn is_valid_name(name: &str) -> bool {
    let length = name_length(name);
    length > 0
        && length <= MAX_NAME_LENGTH
        && !name.chars().any(|c| c == '.' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_counts_graphemes() {
        assert_eq!(name_length("user2"), 5);
        assert_eq!(name_length("usr2"), 4);
        assert_eq!(name_length(""), 0);
        // "e" + combining acute accent is a single character for pricing
        assert_eq!(name_length("cafe\u{301}"), 4);
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("satrap"));
        assert!(is_valid_name("a"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("sub.satrap"));
        assert!(!is_valid_name("two words"));
        assert!(!is_valid_name(&"x".repeat(MAX_NAME_LENGTH + 1)));
        assert!(is_valid_name(&"x".repeat(MAX_NAME_LENGTH)));
    }

    #[test]
    fn test_token_id_is_keccak_of_name() {
        assert_eq!(
            get_token_id_from_name("alice"),
            "9c0257114eb9399a2985f8e75dad7600c5d89fe3824ffa99ec1c3eb8bf3b0501"
        );
    }
}
