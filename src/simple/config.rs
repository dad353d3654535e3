//! Simplified-shift engine configuration.

use crate::code::{CodeSet, SIMPLE_ELEVEN, SIMPLE_THIRTEEN, SIMPLE_TWELVE};
use crate::decision::check_pool;

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Configuration for the simplified-shift engine.
///
/// # Examples
///
/// ```
/// use u_rosterfill::simple::SimpleConfig;
///
/// let config = SimpleConfig::default()
///     .with_workers(["HLG", "ECE", "DFB"])
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(config.plan_for(10).is_none());
/// assert_eq!(config.plan_for(12).map(|p| p.len()), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct SimpleConfig {
    /// Workers for MANR/TANR/MASR/TASR/ASIG on normal days, in tie order.
    pub eligible_workers: Vec<String>,

    /// First-choice pool for MLPR/TLPR/TLPT on conflict days.
    pub preferred_conflict: Vec<String>,

    /// Used for the first conflict phase only when nobody preferred is free.
    pub alternate_conflict: Vec<String>,

    /// Pool for the second conflict phase.
    pub second_conflict: Vec<String>,

    /// Rewrite the operative headcount row before assigning.
    pub refresh_headcount: bool,

    /// Random seed for the final tie-break (None for entropy).
    pub seed: Option<u64>,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            eligible_workers: owned(&[
                "PHD", "HLG", "MEI", "VCM", "ROP", "ECE", "WEH", "DFB", "MLS", "FCE", "JBV", "GMT",
                "BRS", "HZG", "JIS", "CDT", "WGG", "GCE",
            ]),
            preferred_conflict: owned(&["YIS", "MAQ", "DJO", "AFG", "JLF", "JMV"]),
            alternate_conflict: owned(&["FCE", "JBV", "GCE", "GMT", "HZG", "JIS", "CDT", "WGG"]),
            second_conflict: owned(&[
                "HLG", "ECE", "DFB", "MLS", "FCE", "JBV", "GMT", "BRS", "HZG", "JIS", "CDT", "WGG",
                "GCE",
            ]),
            refresh_headcount: true,
            seed: None,
        }
    }
}

impl SimpleConfig {
    /// Replaces the normal-day worker list.
    pub fn with_workers<I, S>(mut self, workers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligible_workers = workers.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the three conflict-day pools.
    pub fn with_conflict_pools<S: Into<String>>(
        mut self,
        preferred: impl IntoIterator<Item = S>,
        alternate: impl IntoIterator<Item = S>,
        second: impl IntoIterator<Item = S>,
    ) -> Self {
        self.preferred_conflict = preferred.into_iter().map(Into::into).collect();
        self.alternate_conflict = alternate.into_iter().map(Into::into).collect();
        self.second_conflict = second.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_refresh_headcount(mut self, refresh: bool) -> Self {
        self.refresh_headcount = refresh;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Codes to place for a headcount; a day needs at least as many
    /// available workers as codes.
    pub fn plan_for(&self, headcount: i64) -> Option<CodeSet> {
        match headcount {
            i64::MIN..=10 => None,
            11 => Some(SIMPLE_ELEVEN),
            12 => Some(SIMPLE_TWELVE),
            _ => Some(SIMPLE_THIRTEEN),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.eligible_workers.is_empty() {
            return Err("eligible_workers must not be empty".into());
        }
        let pools = [
            ("eligible_workers", &self.eligible_workers),
            ("preferred_conflict", &self.preferred_conflict),
            ("alternate_conflict", &self.alternate_conflict),
            ("second_conflict", &self.second_conflict),
        ];
        for (name, pool) in pools {
            check_pool(name, pool)?;
        }
        Ok(())
    }
}
