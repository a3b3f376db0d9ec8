//! Closed-form solver for the running pace of a run-walk-run cycle
//!
//! Over one cycle the distance covered is `t_run / p_run + t_walk / p_walk`,
//! and the average pace is the cycle duration divided by that distance.
//! Setting the average pace to `p_target` and isolating `p_run` gives
//!
//! ```text
//! p_run = (t_run * p_target * p_walk) / (p_walk * (t_run + t_walk) - p_target * t_walk)
//! ```
//!
//! A non-positive denominator means no running pace can reach the target.

use crate::models::RunWalkPlan;
use tracing::debug;

/// Denominator of the closed-form solution
pub fn denominator(t_run: f64, p_target: f64, p_walk: f64, t_walk: f64) -> f64 {
    p_walk * (t_run + t_walk) - p_target * t_walk
}

/// Solve for the running pace (min/km)
///
/// Returns `None` when no physically valid pace exists. A returned value is
/// always finite and strictly positive.
pub fn solve(t_run: f64, p_target: f64, p_walk: f64, t_walk: f64) -> Option<f64> {
    let numerator = t_run * p_target * p_walk;
    let denominator = denominator(t_run, p_target, p_walk, t_walk);

    if denominator.is_nan() || denominator <= 0.0 {
        debug!(t_run, p_target, p_walk, t_walk, denominator, "no running pace reaches target");
        return None;
    }

    let p_run = numerator / denominator;
    if !p_run.is_finite() || p_run <= 0.0 {
        debug!(t_run, p_target, p_walk, t_walk, p_run, "solved pace is not usable");
        return None;
    }

    debug!(t_run, p_target, p_walk, t_walk, p_run, "solved running pace");
    Some(p_run)
}

/// [`solve`] for a whole plan
pub fn solve_plan(plan: &RunWalkPlan) -> Option<f64> {
    solve(
        plan.run_duration,
        plan.target_pace,
        plan.walk_pace,
        plan.walk_duration,
    )
}

/// Average pace over one cycle when running at `p_run`
///
/// Inverse of [`solve`]; used to check a solution against the pace equation.
pub fn average_pace(t_run: f64, p_run: f64, p_walk: f64, t_walk: f64) -> f64 {
    (t_run + t_walk) / (t_run / p_run + t_walk / p_walk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_scenario() {
        let denom = denominator(4.0, 7.5, 10.0, 1.0);
        assert!((denom - 42.5).abs() < 1e-12);

        let p_run = solve(4.0, 7.5, 10.0, 1.0).unwrap();
        assert!((p_run - 300.0 / 42.5).abs() < 1e-12);
        assert!(p_run < 7.5);
        assert!((average_pace(4.0, p_run, 10.0, 1.0) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_unreachable_target() {
        // 10*(1+4) - 20*4 = -30
        assert_eq!(solve(1.0, 20.0, 10.0, 4.0), None);
        // Exactly zero denominator: 10*(1+1) - 20*1 = 0
        assert_eq!(solve(1.0, 20.0, 10.0, 1.0), None);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(solve(0.0, 0.0, 0.0, 0.0), None);
        assert_eq!(solve(4.0, 7.5, 0.0, 1.0), None);
        assert_eq!(solve(0.0, 7.5, 10.0, 1.0), None);
        assert_eq!(solve(f64::NAN, 7.5, 10.0, 1.0), None);
        assert_eq!(solve(4.0, f64::INFINITY, 10.0, 1.0), None);
    }

    #[test]
    fn test_equal_walk_and_target_pace() {
        let p_run = solve(3.0, 8.0, 8.0, 2.0).unwrap();
        assert!((p_run - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_plan() {
        let plan = RunWalkPlan::default();
        assert_eq!(solve_plan(&plan), solve(4.0, 7.5, 10.0, 1.0));
    }

    proptest! {
        #[test]
        fn test_solution_satisfies_pace_equation(
            t_run in 0.1f64..30.0,
            t_walk in 0.1f64..10.0,
            p_walk in 6.0f64..20.0,
            p_target in 2.0f64..20.0,
        ) {
            let denom = denominator(t_run, p_target, p_walk, t_walk);
            match solve(t_run, p_target, p_walk, t_walk) {
                Some(p_run) => {
                    prop_assert!(denom > 0.0);
                    prop_assert!(p_run.is_finite() && p_run > 0.0);
                    let avg = average_pace(t_run, p_run, p_walk, t_walk);
                    prop_assert!((avg - p_target).abs() < 1e-9 * p_target.max(1.0));
                }
                None => prop_assert!(p_target * t_walk >= p_walk * (t_run + t_walk)),
            }
        }

        #[test]
        fn test_no_solution_when_walking_uses_up_target(
            t_run in 0.1f64..30.0,
            t_walk in 0.1f64..10.0,
            p_walk in 1.0f64..20.0,
            excess in 0.0f64..10.0,
        ) {
            // Smallest target that makes the denominator non-positive, plus slack
            let p_target = p_walk * (t_run + t_walk) / t_walk + excess;
            prop_assume!(p_target * t_walk >= p_walk * (t_run + t_walk));
            prop_assert_eq!(solve(t_run, p_target, p_walk, t_walk), None);
        }
    }
}
