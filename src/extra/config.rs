//! Extra-hour engine configuration.

use crate::code::ShiftCode;
use crate::decision::check_pool;
use crate::grid::{OPERATIVE_LABEL, TOWER_LABEL};

/// Configuration for the extra-hour engine.
///
/// # Examples
///
/// ```
/// use u_rosterfill::extra::ExtraConfig;
///
/// let config = ExtraConfig::default()
///     .with_workers(["GCE", "YIS"])
///     .with_tower_threshold(2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.eligible_workers.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ExtraConfig {
    /// Workers who may receive `1T`/`7`, in tie order.
    pub eligible_workers: Vec<String>,

    /// Worker subject to the tower capacity limit on `1T` days.
    pub tower_worker: Option<String>,

    /// Tower aggregate above which the tower worker is excluded.
    pub tower_threshold: i64,

    /// Label of the headcount row.
    pub headcount_label: String,

    /// Label of the tower aggregate row.
    pub tower_label: String,

    /// Headcount that calls for a `7`; one more or above calls for `1T`.
    pub seven_headcount: i64,

    /// Random seed for the final tie-break (None for entropy).
    pub seed: Option<u64>,
}

impl Default for ExtraConfig {
    fn default() -> Self {
        Self {
            eligible_workers: ["GCE", "YIS", "MAQ", "DJO", "AFG", "JLF", "JMV"]
                .into_iter()
                .map(String::from)
                .collect(),
            tower_worker: Some("GCE".to_string()),
            tower_threshold: 3,
            headcount_label: OPERATIVE_LABEL.to_string(),
            tower_label: TOWER_LABEL.to_string(),
            seven_headcount: 9,
            seed: None,
        }
    }
}

impl ExtraConfig {
    /// Replaces the eligible worker list.
    pub fn with_workers<I, S>(mut self, workers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligible_workers = workers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets or clears the tower-restricted worker.
    pub fn with_tower_worker(mut self, worker: Option<&str>) -> Self {
        self.tower_worker = worker.map(String::from);
        self
    }

    pub fn with_tower_threshold(mut self, threshold: i64) -> Self {
        self.tower_threshold = threshold;
        self
    }

    pub fn with_seven_headcount(mut self, headcount: i64) -> Self {
        self.seven_headcount = headcount;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Target code for a day's headcount.
    pub fn target_for(&self, headcount: i64) -> Option<ShiftCode> {
        if headcount < self.seven_headcount {
            None
        } else if headcount == self.seven_headcount {
            Some(ShiftCode::Seven)
        } else {
            Some(ShiftCode::OneT)
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.eligible_workers.is_empty() {
            return Err("eligible_workers must not be empty".into());
        }
        check_pool("eligible_workers", &self.eligible_workers)?;
        if self.headcount_label.trim().is_empty() {
            return Err("headcount_label must not be blank".into());
        }
        if self.tower_worker.is_some() && self.tower_label.trim().is_empty() {
            return Err("tower_label must not be blank when a tower worker is set".into());
        }
        if self.tower_threshold < 0 {
            return Err(format!(
                "tower_threshold must be non-negative, got {}",
                self.tower_threshold
            ));
        }
        if self.seven_headcount < 1 {
            return Err(format!(
                "seven_headcount must be positive, got {}",
                self.seven_headcount
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtraConfig::default();
        assert_eq!(config.eligible_workers.len(), 7);
        assert_eq!(config.tower_worker.as_deref(), Some("GCE"));
        assert_eq!(config.tower_threshold, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_thresholds() {
        let config = ExtraConfig::default();
        assert_eq!(config.target_for(0), None);
        assert_eq!(config.target_for(8), None);
        assert_eq!(config.target_for(9), Some(ShiftCode::Seven));
        assert_eq!(config.target_for(10), Some(ShiftCode::OneT));
        assert_eq!(config.target_for(25), Some(ShiftCode::OneT));
    }

    #[test]
    fn test_validate_empty_workers() {
        let config = ExtraConfig::default().with_workers(Vec::<String>::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_threshold() {
        let config = ExtraConfig::default().with_tower_threshold(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_worker() {
        let config = ExtraConfig::default().with_workers(["GCE", " "]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_worker() {
        let config = ExtraConfig::default().with_workers(["GCE", "YIS", "gce "]);
        let err = config.validate().unwrap_err();
        assert!(err.contains("eligible_workers lists gce"), "{err}");
        assert!(ExtraConfig::default().validate().is_ok());
    }
}
