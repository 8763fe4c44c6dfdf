//! Word bank: ordered difficulty tiers of candidate words plus a uniform picker.
//!
//! Tier 0 holds the shortest words. Tiers are only ever walked forward by the
//! progression policy; the bank itself is immutable after construction.

use crate::error::GameError;
use crate::rng::IndexSource;

// Built-in tier lists live in their own files:
mod tier1;
mod tier2;
mod tier3;
mod tier4;

pub use tier1::TIER1_WORDS;
pub use tier2::TIER2_WORDS;
pub use tier3::TIER3_WORDS;
pub use tier4::TIER4_WORDS;

/// One difficulty bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    pub name: String,
    pub words: Vec<String>,
}

impl Tier {
    pub fn new(name: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    pub fn from_static(name: &str, words: &[&str]) -> Self {
        Self::new(name, words.iter().map(|w| w.to_string()).collect())
    }
}

/// Immutable ordered set of tiers.
#[derive(Clone, Debug)]
pub struct WordBank {
    tiers: Vec<Tier>,
}

impl WordBank {
    /// Fails with [`GameError::NoTiers`] if `tiers` is empty. Individual tiers
    /// may be empty; picking from one reports [`GameError::EmptyTier`].
    pub fn new(tiers: Vec<Tier>) -> Result<Self, GameError> {
        if tiers.is_empty() {
            return Err(GameError::NoTiers);
        }
        Ok(Self { tiers })
    }

    /// The four reference tiers, shortest first.
    pub fn builtin() -> Self {
        Self {
            tiers: vec![
                Tier::from_static(tier1::TIER1_NAME, &TIER1_WORDS),
                Tier::from_static(tier2::TIER2_NAME, &TIER2_WORDS),
                Tier::from_static(tier3::TIER3_NAME, &TIER3_WORDS),
                Tier::from_static(tier4::TIER4_NAME, &TIER4_WORDS),
            ],
        }
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    pub fn tier(&self, index: usize) -> Option<&Tier> {
        self.tiers.get(index)
    }

    /// Pick a word uniformly at random from tier `tier`.
    pub fn pick_word<R: IndexSource + ?Sized>(
        &self,
        tier: usize,
        rng: &mut R,
    ) -> Result<&str, GameError> {
        let words = match self.tiers.get(tier) {
            Some(t) if !t.words.is_empty() => &t.words,
            _ => return Err(GameError::EmptyTier { tier }),
        };
        let idx = rng.next_index(words.len());
        // Guard against a misbehaving source rather than panicking on index.
        words
            .get(idx)
            .or_else(|| words.last())
            .map(String::as_str)
            .ok_or(GameError::EmptyTier { tier })
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Comparison form of typed text and target words: trimmed, lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Replays a fixed list of indices.
    struct Scripted(Vec<usize>);

    impl IndexSource for Scripted {
        fn next_index(&mut self, _len: usize) -> usize {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_builtin_has_four_nonempty_tiers() {
        let bank = WordBank::builtin();
        assert_eq!(bank.tier_count(), 4);
        for i in 0..4 {
            assert!(!bank.tier(i).unwrap().words.is_empty());
        }
        assert_eq!(bank.tier(0).unwrap().name, "short");
        assert_eq!(bank.tier(3).unwrap().name, "very long");
    }

    #[test]
    fn test_builtin_words_are_lowercase_and_unique_per_tier() {
        let bank = WordBank::builtin();
        for i in 0..bank.tier_count() {
            let tier = bank.tier(i).unwrap();
            let mut seen = HashSet::new();
            for w in &tier.words {
                assert_eq!(&normalize(w), w, "word '{}' in tier {} is not normalized", w, i);
                assert!(seen.insert(w), "duplicate word '{}' in tier {}", w, i);
            }
        }
    }

    #[test]
    fn test_pick_uses_index_source() {
        let bank = WordBank::builtin();
        let mut src = Scripted(vec![0, 29]);
        assert_eq!(bank.pick_word(0, &mut src).unwrap(), "kat");
        assert_eq!(bank.pick_word(0, &mut src).unwrap(), "var");
    }

    #[test]
    fn test_pick_out_of_range_index_falls_back_to_last() {
        let bank = WordBank::builtin();
        let mut src = Scripted(vec![999]);
        assert_eq!(bank.pick_word(3, &mut src).unwrap(), "teknologiudvikling");
    }

    #[test]
    fn test_empty_or_missing_tier() {
        let bank = WordBank::new(vec![Tier::from_static("a", &["ord"]), Tier::new("b", vec![])])
            .unwrap();
        let mut src = Scripted(vec![]);
        assert_eq!(bank.pick_word(1, &mut src), Err(GameError::EmptyTier { tier: 1 }));
        assert_eq!(bank.pick_word(5, &mut src), Err(GameError::EmptyTier { tier: 5 }));
        assert_eq!(WordBank::new(vec![]).err(), Some(GameError::NoTiers));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" Kat "), "kat");
        assert_eq!(normalize("\tØKONOMI\n"), "økonomi");
        assert_eq!(normalize("   "), "");
    }
}
