//! Word bank - the candidate target words, grouped by category.
//!
//! Words are uppercase Swedish and at most [`MAX_WORD_LEN`] letters long so
//! they always fit on the target row.

use crate::rng::RandomSource;
use crate::types::{WordCategory, MAX_WORD_LEN};

/// A target word together with its category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    pub text: &'static str,
    pub category: WordCategory,
}

impl Word {
    pub const fn new(text: &'static str, category: WordCategory) -> Self {
        Self { text, category }
    }

    /// Length in letters (not bytes)
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub const WORD_BANK: [(WordCategory, &[&str]); 5] = [
    (
        WordCategory::FamousFigures,
        &["BAMSE", "PIPPI", "EMIL", "MUMIN", "ALFONS", "LANSEN", "NANSEN"],
    ),
    (
        WordCategory::Cities,
        &["MALMÖ", "VISBY", "GÄVLE", "LULEÅ", "UMEÅ", "LUND", "BORÅS", "FALUN"],
    ),
    (
        WordCategory::Animals,
        &["ÄLGEN", "BJÖRN", "VARG", "RÄVEN", "UGGLA", "LODJUR", "SÄLEN", "HAREN"],
    ),
    (
        WordCategory::Food,
        &["KORV", "PIZZA", "KAKA", "SOPPA", "FISK", "BRÖD", "GLASS", "SYLT"],
    ),
    (
        WordCategory::Christmas,
        &["NISSE", "TOMTE", "GRAN", "KLAPP", "SNÖBOLL", "JULBAK"],
    ),
];

/// Pick a random word: first a uniform category, then a uniform word in it.
pub fn random_word(rng: &mut impl RandomSource) -> Word {
    let idx = rng.next_below(WORD_BANK.len() as u32) as usize;
    let (category, words) = WORD_BANK[idx];
    let text = rng.pick(words).copied().unwrap_or(words[0]);
    Word::new(text, category)
}

/// Every word in the bank, in table order
pub fn all_words() -> impl Iterator<Item = Word> {
    WORD_BANK.iter().flat_map(|&(category, words)| {
        words.iter().map(move |&text| Word::new(text, category))
    })
}

/// Words of a single category
pub fn words_in(category: WordCategory) -> &'static [&'static str] {
    WORD_BANK
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SequenceRng, SimpleRng};

    #[test]
    fn test_every_word_fits_the_target_row() {
        for word in all_words() {
            assert!(!word.is_empty());
            assert!(word.len() <= MAX_WORD_LEN, "{} is too long", word.text);
        }
    }

    #[test]
    fn test_words_are_uppercase_alphabet_letters() {
        for word in all_words() {
            for c in word.text.chars() {
                assert!(
                    crate::types::ALPHABET.contains(&c),
                    "{} contains {:?}",
                    word.text,
                    c
                );
            }
        }
    }

    #[test]
    fn test_random_word_uses_category_then_word() {
        // Category 2 (animals), word 1 (BJÖRN)
        let mut rng = SequenceRng::new(vec![2, 1]);
        let word = random_word(&mut rng);
        assert_eq!(word, Word::new("BJÖRN", WordCategory::Animals));
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_random_word_is_from_the_bank() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..100 {
            let word = random_word(&mut rng);
            assert!(words_in(word.category).contains(&word.text));
        }
    }

    #[test]
    fn test_all_words_count() {
        assert_eq!(all_words().count(), 37);
        assert_eq!(words_in(WordCategory::Christmas).len(), 6);
    }
}
