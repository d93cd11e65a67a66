#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Pending,
    Revealed,
}

impl RevealLatch {
    pub fn observe(&mut self, visible_ratio: f64, threshold: f64) -> bool {
        if *self == Self::Revealed || !(visible_ratio >= threshold) {
            return false;
        }

        *self = Self::Revealed;
        true
    }

    pub fn force(&mut self) -> bool {
        let changed = *self == Self::Pending;
        *self = Self::Revealed;
        changed
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }

    pub fn class(self, pending: &'static str, revealed: &'static str) -> &'static str {
        match self {
            Self::Pending => pending,
            Self::Revealed => revealed,
        }
    }
}

pub fn observation_thresholds(threshold: f64) -> Vec<f64> {
    let mut thresholds: Vec<f64> = (0..=10).map(|step| f64::from(step) / 10.0).collect();
    if (0.0..=1.0).contains(&threshold) {
        thresholds.push(threshold);
    }
    thresholds.sort_by(f64::total_cmp);
    thresholds.dedup_by(|a, b| (*a - *b).abs() < f64::EPSILON);
    thresholds
}

/// The larger of the element's own visible ratio and the share of the
/// viewport it covers.
pub fn visible_fraction(intersection_ratio: f64, covered_height: f64, viewport_height: f64) -> f64 {
    if viewport_height > 0.0 {
        intersection_ratio.max(covered_height / viewport_height)
    } else {
        intersection_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        assert!(!RevealLatch::default().is_revealed());
    }

    #[test]
    fn below_threshold_keeps_pending() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(0.29, 0.3));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn flips_once_and_stays_revealed() {
        let mut latch = RevealLatch::default();

        assert!(latch.observe(0.3, 0.3));
        assert!(latch.is_revealed());

        assert!(!latch.observe(0.0, 0.3));
        assert!(latch.is_revealed());

        assert!(!latch.observe(1.0, 0.3));
        assert!(latch.is_revealed());
    }

    #[test]
    fn nan_ratio_is_ignored() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(f64::NAN, 0.3));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn force_reveals_pending_latch_once() {
        let mut latch = RevealLatch::default();
        assert!(latch.force());
        assert!(!latch.force());
        assert!(latch.is_revealed());
    }

    #[test]
    fn class_reflects_state() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.class("hidden-below", "slide-in-up"), "hidden-below");
        latch.force();
        assert_eq!(latch.class("hidden-below", "slide-in-up"), "slide-in-up");
    }

    #[test]
    fn thresholds_cover_unit_range_and_include_reveal_point() {
        let thresholds = observation_thresholds(0.35);
        assert_eq!(thresholds.first(), Some(&0.0));
        assert_eq!(thresholds.last(), Some(&1.0));
        assert!(thresholds.contains(&0.35));
        assert_eq!(thresholds.len(), 12);
    }

    #[test]
    fn thresholds_do_not_duplicate_tenths() {
        assert_eq!(observation_thresholds(0.3).len(), 11);
    }

    #[test]
    fn tall_sections_count_viewport_coverage() {
        assert_eq!(visible_fraction(0.1, 400.0, 800.0), 0.5);
        assert_eq!(visible_fraction(0.6, 100.0, 800.0), 0.6);
        assert_eq!(visible_fraction(0.2, 100.0, 0.0), 0.2);
    }
}
