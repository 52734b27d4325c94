//! The embedded English wordlist.

use std::sync::OnceLock;

/// Number of words in the list. Each word encodes 11 bits.
pub const WORDLIST_LEN: usize = 2048;

const WORDLIST_TXT: &str = include_str!("english.txt");

static WORDLIST: OnceLock<Vec<&'static str>> = OnceLock::new();

/// The full wordlist, parsed once per process.
pub(crate) fn wordlist() -> &'static [&'static str] {
    WORDLIST.get_or_init(|| WORDLIST_TXT.split_ascii_whitespace().collect())
}

/// Index of a word in the list. The list is sorted, so binary search applies.
pub(crate) fn word_index(word: &str) -> Option<usize> {
    wordlist().binary_search(&word).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordlist_shape() {
        let words = wordlist();
        assert_eq!(words.len(), WORDLIST_LEN);
        let mut sorted = words.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), WORDLIST_LEN);
        assert_eq!(&sorted[..], words);
    }

    #[test]
    fn test_wordlist_anchors() {
        let words = wordlist();
        assert_eq!(words[0], "abandon");
        assert_eq!(words[3], "about");
        assert_eq!(words[2047], "zoo");
    }

    #[test]
    fn test_word_index() {
        assert_eq!(word_index("abandon"), Some(0));
        assert_eq!(word_index("zoo"), Some(2047));
        assert_eq!(word_index("notaword"), None);
    }
}
