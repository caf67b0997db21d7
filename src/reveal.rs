//! One-shot reveal flags for elements observed for viewport entry.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First intersection: apply the reveal and stop observing.
    Revealed,
    AlreadyRevealed,
    NotIntersecting,
    UnknownTarget,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|flag| **flag).count()
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> RevealOutcome {
        let Some(flag) = self.revealed.get_mut(index) else {
            return RevealOutcome::UnknownTarget;
        };

        if *flag {
            return RevealOutcome::AlreadyRevealed;
        }
        if !is_intersecting {
            return RevealOutcome::NotIntersecting;
        }

        *flag = true;
        RevealOutcome::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals() {
        let mut set = RevealSet::new(3);
        assert_eq!(set.on_intersection(1, true), RevealOutcome::Revealed);
        assert!(set.is_revealed(1));
        assert_eq!(set.revealed_count(), 1);
    }

    #[test]
    fn reveal_is_permanent_across_exit_and_reentry() {
        let mut set = RevealSet::new(1);
        set.on_intersection(0, true);

        assert_eq!(set.on_intersection(0, false), RevealOutcome::AlreadyRevealed);
        assert_eq!(set.on_intersection(0, true), RevealOutcome::AlreadyRevealed);
        assert!(set.is_revealed(0));
    }

    #[test]
    fn non_intersecting_entries_leave_flag_unset() {
        let mut set = RevealSet::new(2);
        assert_eq!(set.on_intersection(0, false), RevealOutcome::NotIntersecting);
        assert!(!set.is_revealed(0));
        assert_eq!(set.on_intersection(0, true), RevealOutcome::Revealed);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut set = RevealSet::new(1);
        assert_eq!(set.on_intersection(4, true), RevealOutcome::UnknownTarget);
        assert!(!set.is_revealed(4));
        assert_eq!(set.revealed_count(), 0);
    }
}
