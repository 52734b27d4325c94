//! Mnemonic phrases over a fixed English wordlist.
//!
//! Converts entropy of 16, 20, 24, 28, or 32 bytes into a phrase of
//! 12, 15, 18, 21, or 24 words and back. A checksum of
//! `entropy_bits / 32` bits, taken from the front of SHA-256(entropy),
//! is appended to the entropy before the combined bit stream is split
//! into 11-bit word indices.

mod wordlist;

pub use wordlist::WORDLIST_LEN;

use crate::hash::sha256;
use crate::MnemonicError;
use wordlist::{word_index, wordlist};

/// Entropy lengths in bytes accepted by [`Mnemonic::from_entropy`].
pub const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// A validated mnemonic phrase together with the entropy it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    entropy: Vec<u8>,
    words: Vec<&'static str>,
}

impl Mnemonic {
    /// Build the mnemonic encoding the given entropy.
    ///
    /// # Arguments
    /// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
    ///
    /// # Returns
    /// The mnemonic, or [`MnemonicError::InvalidLength`] with the
    /// rejected byte count.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, MnemonicError> {
        if !ENTROPY_LENGTHS.contains(&entropy.len()) {
            return Err(MnemonicError::InvalidLength(entropy.len()));
        }
        Ok(Mnemonic {
            entropy: entropy.to_vec(),
            words: words_from_entropy(entropy),
        })
    }

    /// Rebuild a mnemonic from its words, validating the checksum.
    ///
    /// # Arguments
    /// * `words` - The phrase words in order.
    ///
    /// # Returns
    /// The mnemonic, or [`MnemonicError::InvalidLength`] for a word
    /// count outside {12, 15, 18, 21, 24},
    /// [`MnemonicError::UnknownWord`] for a word missing from the
    /// wordlist, or [`MnemonicError::InvalidChecksum`] when the
    /// recomputed checksum bits disagree.
    pub fn from_words<'a, I>(words: I) -> Result<Self, MnemonicError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: Vec<&str> = words.into_iter().collect();
        let entropy_len = match words.len() {
            12 => 16,
            15 => 20,
            18 => 24,
            21 => 28,
            24 => 32,
            n => return Err(MnemonicError::InvalidLength(n)),
        };

        let mut bits = Vec::with_capacity(words.len() * 11);
        let mut canonical = Vec::with_capacity(words.len());
        for word in words {
            let index =
                word_index(word).ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))?;
            canonical.push(wordlist()[index]);
            for i in (0..11).rev() {
                bits.push((index >> i) & 1 == 1);
            }
        }

        let mut entropy = vec![0u8; entropy_len];
        for (i, &bit) in bits[..entropy_len * 8].iter().enumerate() {
            if bit {
                entropy[i / 8] |= 1 << (7 - i % 8);
            }
        }

        let digest = sha256(&entropy);
        for (i, &bit) in bits[entropy_len * 8..].iter().enumerate() {
            let expected = (digest[i / 8] >> (7 - i % 8)) & 1 == 1;
            if bit != expected {
                return Err(MnemonicError::InvalidChecksum);
            }
        }

        Ok(Mnemonic { entropy, words: canonical })
    }

    /// Rebuild a mnemonic from a whitespace-separated phrase.
    ///
    /// # Arguments
    /// * `phrase` - The phrase; any amount of whitespace separates words.
    ///
    /// # Returns
    /// The mnemonic, or the error [`Mnemonic::from_words`] reports.
    pub fn from_phrase(phrase: &str) -> Result<Self, MnemonicError> {
        Self::from_words(phrase.split_whitespace())
    }

    /// The entropy this mnemonic encodes.
    pub fn to_entropy(&self) -> Vec<u8> {
        self.entropy.clone()
    }

    /// Iterate over the phrase words in order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The phrase as a single space-separated string.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

/// Map entropy to words: entropy bits, then checksum bits, in 11-bit
/// chunks indexing the wordlist. Caller has validated the length.
fn words_from_entropy(entropy: &[u8]) -> Vec<&'static str> {
    let checksum_bits = entropy.len() * 8 / 32;
    let digest = sha256(entropy);

    let mut bits = Vec::with_capacity(entropy.len() * 8 + checksum_bits);
    for byte in entropy {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    for i in 0..checksum_bits {
        bits.push((digest[i / 8] >> (7 - i % 8)) & 1 == 1);
    }

    bits.chunks(11)
        .map(|chunk| {
            let mut index = 0usize;
            for &bit in chunk {
                index = (index << 1) | usize::from(bit);
            }
            wordlist()[index]
        })
        .collect()
}
