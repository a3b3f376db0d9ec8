//! Distance covered over one run + walk cycle

use serde::{Deserialize, Serialize};

use crate::models::RunWalkPlan;

/// Per-cycle distance split for a solved plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleBreakdown {
    /// Run segment plus walk segment (min)
    pub cycle_minutes: f64,
    /// Distance a cycle must cover at the target pace (km)
    pub target_km: f64,
    /// Distance covered while running (km)
    pub run_km: f64,
    /// Distance covered while walking (km)
    pub walk_km: f64,
}

impl CycleBreakdown {
    /// Compute the breakdown for `plan` when running at `run_pace` min/km
    pub fn new(plan: &RunWalkPlan, run_pace: f64) -> Self {
        let cycle_minutes = plan.cycle_duration();
        Self {
            cycle_minutes,
            target_km: distance(cycle_minutes, plan.target_pace),
            run_km: distance(plan.run_duration, run_pace),
            walk_km: distance(plan.walk_duration, plan.walk_pace),
        }
    }

    /// Running plus walking distance
    pub fn covered_km(&self) -> f64 {
        self.run_km + self.walk_km
    }
}

/// Kilometres covered in `minutes` at `pace`; infinite when the pace is not positive
fn distance(minutes: f64, pace: f64) -> f64 {
    if pace > 0.0 {
        minutes / pace
    } else {
        f64::INFINITY
    }
}
