use once_cell::sync::Lazy;
use rand::Rng;

/// Letters a word may contain, and the pool filler letters are drawn from
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Position of each letter within the alphabet, used for quick membership checks
static LETTER_INDEX: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut index = [None; 128];
    for (i, &b) in ALPHABET.iter().enumerate() {
        index[b as usize] = Some(i as u8);
    }
    index
});

/// Check whether a character can appear in a placed word
pub fn is_word_letter(letter: char) -> bool {
    letter.is_ascii() && LETTER_INDEX[letter as usize].is_some()
}

/// Check that a word is non-empty and made only of `A`-`Z`
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_word_letter)
}

/// Trim and uppercase raw input. Returns `None` if the result is not a valid word.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_uppercase();
    is_valid_word(&word).then_some(word)
}

/// Draw a uniformly random filler letter
pub fn random_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_word_letters() {
        assert!(is_word_letter('A'));
        assert!(is_word_letter('Z'));
        assert!(!is_word_letter('a'));
        assert!(!is_word_letter('-'));
        assert!(!is_word_letter('É'));
    }

    #[test]
    fn test_valid_words() {
        assert!(is_valid_word("CAT"));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("Cat"));
        assert!(!is_valid_word("ICE CREAM"));
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  lion "), Some("LION".to_string()));
        assert_eq!(normalize_word("Sushi"), Some("SUSHI".to_string()));
        assert_eq!(normalize_word("   "), None);
        assert_eq!(normalize_word("t-rex"), None);
    }

    #[test]
    fn test_random_letters_are_uppercase() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let letter = random_letter(&mut rng);
            assert!(letter.is_ascii_uppercase(), "unexpected filler {letter:?}");
        }
    }
}
