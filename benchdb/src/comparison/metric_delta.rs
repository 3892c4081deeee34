use serde::Serialize;

/// Which direction of change counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Preference {
    HigherIsBetter,
    LowerIsBetter,
}

/// Change of one metric from a baseline to a candidate benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub baseline: f64,
    pub candidate: f64,
    pub delta: f64,
    /// Relative change in percent of the baseline; 0 when the baseline is 0.
    pub percentage: f64,
    pub is_better: bool,
    pub is_equal: bool,
}

impl MetricDelta {
    /// Changes below this many percent are reported as equal.
    pub const EQUALITY_THRESHOLD: f64 = 0.01;

    pub fn new(
        baseline: f64,
        candidate: f64,
        preference: Preference,
    ) -> Self {
        let delta = candidate - baseline;
        let percentage = if baseline != 0.0 {
            delta / baseline * 100.0
        } else {
            0.0
        };
        let is_better = match preference {
            Preference::HigherIsBetter => delta > 0.0,
            Preference::LowerIsBetter => delta < 0.0,
        };

        Self {
            baseline,
            candidate,
            delta,
            percentage,
            is_better,
            is_equal: percentage.abs() < Self::EQUALITY_THRESHOLD,
        }
    }
}
