//! Tier progression: counts correct words inside the current tier and decides
//! when to move on.

/// Result of recording one correct word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuccessRecord {
    /// Threshold reached. Also true on the last tier, where the index stays put;
    /// the caller resets speed either way.
    pub tier_advanced: bool,
}

#[derive(Clone, Debug)]
pub struct Progression {
    tier_index: usize,
    correct_in_tier: u32,
    words_per_tier: u32,
    tier_count: usize,
}

impl Progression {
    pub fn new(words_per_tier: u32, tier_count: usize) -> Self {
        Self {
            tier_index: 0,
            correct_in_tier: 0,
            words_per_tier: words_per_tier.max(1),
            tier_count: tier_count.max(1),
        }
    }

    pub fn tier_index(&self) -> usize {
        self.tier_index
    }

    pub fn correct_in_tier(&self) -> u32 {
        self.correct_in_tier
    }

    pub fn is_last_tier(&self) -> bool {
        self.tier_index + 1 >= self.tier_count
    }

    pub fn record_success(&mut self) -> SuccessRecord {
        self.correct_in_tier += 1;
        if self.correct_in_tier < self.words_per_tier {
            return SuccessRecord {
                tier_advanced: false,
            };
        }
        if !self.is_last_tier() {
            self.tier_index += 1;
        }
        self.correct_in_tier = 0;
        SuccessRecord {
            tier_advanced: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_after_threshold() {
        let mut p = Progression::new(3, 4);
        assert!(!p.record_success().tier_advanced);
        assert!(!p.record_success().tier_advanced);
        assert_eq!(p.correct_in_tier(), 2);
        assert!(p.record_success().tier_advanced);
        assert_eq!(p.tier_index(), 1);
        assert_eq!(p.correct_in_tier(), 0);
    }

    #[test]
    fn test_last_tier_resets_counter_but_keeps_index() {
        let mut p = Progression::new(2, 2);
        p.record_success();
        p.record_success();
        assert_eq!(p.tier_index(), 1);
        assert!(p.is_last_tier());
        p.record_success();
        let rec = p.record_success();
        assert!(rec.tier_advanced);
        assert_eq!(p.tier_index(), 1);
        assert_eq!(p.correct_in_tier(), 0);
    }

    #[test]
    fn test_index_never_exceeds_last_tier() {
        let mut p = Progression::new(1, 4);
        for _ in 0..100 {
            p.record_success();
            assert!(p.tier_index() < 4);
        }
        assert_eq!(p.tier_index(), 3);
    }

    #[test]
    fn test_single_tier_bank() {
        let mut p = Progression::new(25, 1);
        for _ in 0..24 {
            assert!(!p.record_success().tier_advanced);
        }
        assert!(p.record_success().tier_advanced);
        assert_eq!(p.tier_index(), 0);
    }
}
