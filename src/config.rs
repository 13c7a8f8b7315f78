use log::Level;

use crate::error::RevealError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How the features section decides it has been scrolled into view and what
/// it marks once it has.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the section that must be inside the viewport.
    pub threshold: f64,
    pub card_selector: &'static str,
    pub marker_class: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            card_selector: ".feature-card",
            marker_class: "fade-in",
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<(), RevealError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RevealError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_section_markup() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.2);
        assert_eq!(config.card_selector, ".feature-card");
        assert_eq!(config.marker_class, "fade-in");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        for threshold in [0.0, 1.0] {
            let config = RevealConfig { threshold, ..RevealConfig::default() };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn threshold_outside_unit_range_is_rejected() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            let config = RevealConfig { threshold, ..RevealConfig::default() };
            assert!(matches!(config.validate(), Err(RevealError::InvalidThreshold(_))));
        }
    }
}
