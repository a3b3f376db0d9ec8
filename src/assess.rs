//! Outcome classification for one calculation request
//!
//! [`assess`] runs an ordered decision procedure over a plan:
//!
//! 1. any non-positive input is reported as [`Outcome::InvalidInput`] and
//!    the solver is never called
//! 2. a walking pace faster than the target raises [`Advisory::WalkFasterThanTarget`],
//!    which does not block the calculation
//! 3. a solved pace no faster than walking (and no advisory) is
//!    [`Outcome::Degenerate`]
//! 4. any other solved pace is [`Outcome::Valid`]
//! 5. everything else is [`Outcome::NoSolution`]

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::breakdown::CycleBreakdown;
use crate::format::format_pace;
use crate::models::{Field, RunWalkPlan};
use crate::solver::solve_plan;

/// Remedies suggested when the target cannot be reached
pub const NO_SOLUTION_REMEDIES: [&str; 4] = [
    "a slower target pace",
    "shorter walk breaks",
    "longer run segments",
    "a faster walking pace",
];

/// Non-blocking warning attached to a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// Walking alone is faster than the overall target
    WalkFasterThanTarget,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::WalkFasterThanTarget => {
                "Heads up! Your walking pace is faster than your overall target pace. \
                 This means you could hit your target by mostly walking, or even just walking!"
            }
        }
    }
}

/// Final result of a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// One or more inputs were zero or negative
    InvalidInput { fields: Vec<Field> },
    /// The running pace needed to reach the target
    Valid {
        run_pace: f64,
        breakdown: CycleBreakdown,
    },
    /// The required running pace is no faster than walking
    Degenerate { run_pace: f64 },
    /// No running pace reaches the target
    NoSolution,
}

/// A plan together with its classified outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub plan: RunWalkPlan,
    pub advisory: Option<Advisory>,
    pub outcome: Outcome,
}

/// Classify a plan
pub fn assess(plan: &RunWalkPlan) -> Assessment {
    let invalid = plan.invalid_fields();
    if !invalid.is_empty() {
        debug!(fields = ?invalid, "rejecting plan before solving");
        return Assessment {
            plan: *plan,
            advisory: None,
            outcome: Outcome::InvalidInput { fields: invalid },
        };
    }

    let advisory = (plan.walk_pace < plan.target_pace).then_some(Advisory::WalkFasterThanTarget);

    // With a positive denominator p_run >= p_walk exactly when p_target >= p_walk,
    // so decide on the inputs rather than the rounded solution
    let no_faster_than_walking = advisory.is_none() && plan.target_pace >= plan.walk_pace;

    let outcome = match solve_plan(plan) {
        Some(run_pace) if no_faster_than_walking => Outcome::Degenerate { run_pace },
        Some(run_pace) => Outcome::Valid {
            run_pace,
            breakdown: CycleBreakdown::new(plan, run_pace),
        },
        None => Outcome::NoSolution,
    };

    info!(
        run_duration = plan.run_duration,
        walk_duration = plan.walk_duration,
        walk_pace = plan.walk_pace,
        target_pace = plan.target_pace,
        advisory = advisory.is_some(),
        outcome = outcome.kind(),
        "assessed run-walk plan"
    );

    Assessment {
        plan: *plan,
        advisory,
        outcome,
    }
}

impl Outcome {
    /// Short machine-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::InvalidInput { .. } => "invalid_input",
            Outcome::Valid { .. } => "valid",
            Outcome::Degenerate { .. } => "degenerate",
            Outcome::NoSolution => "no_solution",
        }
    }

    pub fn run_pace(&self) -> Option<f64> {
        match self {
            Outcome::Valid { run_pace, .. } | Outcome::Degenerate { run_pace } => Some(*run_pace),
            _ => None,
        }
    }
}

impl Assessment {
    /// Headline messages for the outcome, in display order
    pub fn messages(&self) -> Vec<String> {
        let plan = &self.plan;
        match &self.outcome {
            Outcome::InvalidInput { fields } => fields
                .iter()
                .map(|field| field.invalid_message().to_string())
                .collect(),
            Outcome::Valid { run_pace, .. } => vec![
                format!(
                    "To achieve an overall average pace of {}/km...",
                    format_pace(Some(plan.target_pace))
                ),
                format!(
                    "You need to run your running segments at approximately: {}/km",
                    format_pace(Some(*run_pace))
                ),
            ],
            Outcome::Degenerate { run_pace } => vec![format!(
                "The calculated running pace ({}/km) is no faster than your walking pace ({}/km). \
                 This usually means your target pace ({}/km) is very achievable with your current \
                 walk ratio and pace. You might not need to 'run' faster than your walk!",
                format_pace(Some(*run_pace)),
                format_pace(Some(plan.walk_pace)),
                format_pace(Some(plan.target_pace)),
            )],
            Outcome::NoSolution => vec![format!(
                "Could not calculate a valid running pace. This often means the target average \
                 pace is too fast for the chosen run/walk durations and your walking pace. \
                 Consider {}. Also ensure all inputs are sensible.",
                join_remedies(&NO_SOLUTION_REMEDIES)
            )],
        }
    }
}

fn join_remedies(remedies: &[&str]) -> String {
    match remedies.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MinSec;

    #[test]
    fn test_reference_plan_is_valid() {
        let assessment = assess(&RunWalkPlan::default());
        assert_eq!(assessment.advisory, None);

        match assessment.outcome {
            Outcome::Valid { run_pace, breakdown } => {
                assert!((run_pace - 300.0 / 42.5).abs() < 1e-12);
                assert_eq!(breakdown.cycle_minutes, 5.0);
            }
            other => panic!("expected valid outcome, got {:?}", other),
        }

        let messages = assessment_messages(&RunWalkPlan::default());
        assert!(messages[0].contains("7'30\"/km"));
        assert!(messages[1].contains("7'04\"/km"));
    }

    #[test]
    fn test_all_zero_inputs() {
        let assessment = assess(&RunWalkPlan::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(
            assessment.outcome,
            Outcome::InvalidInput {
                fields: Field::ALL.to_vec()
            }
        );
        assert_eq!(assessment.advisory, None);
        assert_eq!(assessment.messages().len(), 4);
        assert_eq!(
            assessment.messages()[0],
            "Running segment duration must be positive."
        );
    }

    #[test]
    fn test_walk_faster_than_target_warns() {
        // 5*(4+1) - 7*1 = 18 > 0, p_run = 140/18 > 7
        let assessment = assess(&RunWalkPlan::new(4.0, 1.0, 5.0, 7.0));
        assert_eq!(assessment.advisory, Some(Advisory::WalkFasterThanTarget));
        assert_eq!(assessment.outcome.kind(), "valid");

        // 5*(1+4) - 7*4 = -3
        let assessment = assess(&RunWalkPlan::new(1.0, 4.0, 5.0, 7.0));
        assert_eq!(assessment.advisory, Some(Advisory::WalkFasterThanTarget));
        assert_eq!(assessment.outcome, Outcome::NoSolution);
    }

    #[test]
    fn test_degenerate_when_target_equals_walk_pace() {
        let assessment = assess(&RunWalkPlan::new(4.0, 1.0, 9.0, 9.0));
        assert_eq!(assessment.advisory, None);
        match assessment.outcome {
            Outcome::Degenerate { run_pace } => assert!((run_pace - 9.0).abs() < 1e-12),
            other => panic!("expected degenerate outcome, got {:?}", other),
        }
        assert!(assessment.messages()[0].contains("no faster than your walking pace (9'00\"/km)"));
    }

    #[test]
    fn test_fast_target_with_slow_walk_is_still_reachable() {
        // 10*(1+4) - 3*4 = 38 > 0, so a 3:00 target only asks for a very fast run
        let assessment = assess(&RunWalkPlan::new(1.0, 4.0, 10.0, 3.0));
        assert_eq!(assessment.outcome.kind(), "valid");
        assert!(assessment.outcome.run_pace().unwrap() < 1.0);
    }

    #[test]
    fn test_unreachable_target() {
        // 10*(1+4) - 13*4 = -2
        let assessment = assess(&RunWalkPlan::new(1.0, 4.0, 10.0, 13.0));
        assert_eq!(assessment.outcome, Outcome::NoSolution);
        assert!(assessment.messages()[0].contains(
            "a slower target pace, shorter walk breaks, longer run segments, or a faster walking pace"
        ));
    }

    #[test]
    fn test_target_equal_to_walk_pace_is_always_degenerate() {
        for pace_seconds in (6 * 60)..(13 * 60) {
            let pace = MinSec::from_decimal_minutes(f64::from(pace_seconds) / 60.0);
            for run_seconds in (30..=600).step_by(10) {
                for walk_seconds in (10..=180).step_by(10) {
                    let plan = RunWalkPlan::from_min_sec(
                        MinSec::from_decimal_minutes(f64::from(run_seconds) / 60.0),
                        MinSec::from_decimal_minutes(f64::from(walk_seconds) / 60.0),
                        pace,
                        pace,
                    );
                    let assessment = assess(&plan);
                    assert_eq!(assessment.advisory, None);
                    assert_eq!(
                        assessment.outcome.kind(),
                        "degenerate",
                        "plan {:?} gave {:?}",
                        plan,
                        assessment.outcome
                    );
                }
            }
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let assessment = assess(&RunWalkPlan::new(1.0, 4.0, 10.0, 13.0));
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["outcome"]["kind"], "no_solution");
        assert_eq!(json["advisory"], "walk_faster_than_target");
    }

    fn assessment_messages(plan: &RunWalkPlan) -> Vec<String> {
        assess(plan).messages()
    }
}
