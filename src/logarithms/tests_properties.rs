// Invariants of the logarithm core: round trips, domain guards, the three
// equation families and the real-world conversions.

use super::applications;
use super::{explain_calculation, log_base, solve_equation, Equation};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}

#[test]
fn round_trip_recovers_the_argument() {
    let arguments = [0.5, 2.0, 8.0, 100.0, 1234.5];
    let bases = [2.0, 10.0, std::f64::consts::E, 3.7, 0.5];
    for &x in &arguments {
        for &base in &bases {
            let y = log_base(x, base).unwrap();
            assert_close(base.powf(y), x, 1e-9 * x.max(1.0));
        }
    }
}

#[test]
fn invalid_inputs_have_no_value() {
    assert_eq!(log_base(5.0, 1.0), None);
    assert_eq!(log_base(5.0, 0.0), None);
    assert_eq!(log_base(5.0, -2.0), None);
    assert_eq!(log_base(0.0, 10.0), None);
    assert_eq!(log_base(-5.0, 10.0), None);
}

#[test]
fn log_of_one_is_zero() {
    for &base in &[2.0, 10.0, std::f64::consts::E, 7.3] {
        assert_eq!(log_base(1.0, base), Some(0.0));
    }
}

#[test]
fn log_of_the_base_is_one() {
    for &base in &[2.0, 10.0, std::f64::consts::E, 7.3] {
        assert_close(log_base(base, base).unwrap(), 1.0, 1e-12);
    }
}

#[test]
fn common_bases_use_the_direct_primitives() {
    assert_eq!(log_base(8.0, 2.0), Some(3.0));
    assert_close(log_base(1000.0, 10.0).unwrap(), 3.0, 1e-12);
    let e = std::f64::consts::E;
    assert_close(log_base(e * e, e).unwrap(), 2.0, 1e-12);
}

#[test]
fn pure_functions_repeat_themselves() {
    assert_eq!(log_base(42.0, 7.0), log_base(42.0, 7.0));
    assert_eq!(explain_calculation(42.0, 7.0), explain_calculation(42.0, 7.0));
}

#[test]
fn explanation_distinguishes_the_three_failure_modes() {
    let negative_argument = explain_calculation(-5.0, 10.0);
    let negative_base = explain_calculation(5.0, -2.0);
    let base_one = explain_calculation(5.0, 1.0);

    assert!(negative_argument.starts_with("Error"));
    assert!(negative_base.starts_with("Error"));
    assert!(base_one.starts_with("Error"));
    assert_ne!(negative_argument, negative_base);
    assert_ne!(negative_base, base_one);
    assert_ne!(negative_argument, base_one);
}

#[test]
fn explanation_walks_through_a_valid_calculation() {
    let explanation = explain_calculation(100.0, 10.0);
    assert!(explanation.contains("To what power must 10 be raised to get 100?"));
    assert!(explanation.contains("10^y = 100"));
    assert!(explanation.contains("y = 2.000000"));
    assert!(explanation.contains("We can verify this"));
}

#[test]
fn solving_for_the_argument() {
    let solution = solve_equation(Equation::ForArgument { base: 10.0, k: 2.0 });
    assert_close(solution.value.unwrap(), 100.0, 1e-9);
    assert!(solution.explanation.contains("x = 10^2 = 100"));

    let invalid = solve_equation(Equation::ForArgument { base: 1.0, k: 2.0 });
    assert_eq!(invalid.value, None);
    assert!(invalid.explanation.starts_with("Error"));
}

#[test]
fn solving_for_the_base() {
    let solution = solve_equation(Equation::ForBase { k: 100.0, x: 2.0 });
    assert_close(solution.value.unwrap(), 10.0, 1e-9);

    let zero_exponent = solve_equation(Equation::ForBase { k: 100.0, x: 0.0 });
    assert_eq!(zero_exponent.value, Some(100.0));
    assert!(zero_exponent.explanation.contains("only true if"));

    let invalid = solve_equation(Equation::ForBase { k: -3.0, x: 2.0 });
    assert_eq!(invalid.value, None);
}

#[test]
fn solving_for_the_duration() {
    let solution = solve_equation(Equation::ForDuration {
        principal: 1000.0,
        rate: 0.05,
        target: 2000.0,
    });
    assert_close(solution.value.unwrap(), 2f64.ln() / 1.05f64.ln(), 1e-12);
    // about 14.2 years to double at 5%
    assert_close(solution.value.unwrap(), 14.2067, 1e-3);
}

#[test]
fn zero_rate_reaches_only_the_unchanged_target() {
    let reached = solve_equation(Equation::ForDuration {
        principal: 1000.0,
        rate: 0.0,
        target: 1000.0,
    });
    assert_eq!(reached.value, Some(0.0));

    let unreachable = solve_equation(Equation::ForDuration {
        principal: 1000.0,
        rate: 0.0,
        target: 2000.0,
    });
    assert_eq!(unreachable.value, None);
    assert!(!unreachable.explanation.is_empty());
}

#[test]
fn duration_guards_reject_bad_parameters() {
    let negative_principal = solve_equation(Equation::ForDuration {
        principal: -1.0,
        rate: 0.05,
        target: 10.0,
    });
    assert_eq!(negative_principal.value, None);

    let total_loss = solve_equation(Equation::ForDuration {
        principal: 10.0,
        rate: -1.0,
        target: 20.0,
    });
    assert_eq!(total_loss.value, None);

    // A negative rate above -100% still shrinks toward a smaller target
    let decay = solve_equation(Equation::ForDuration {
        principal: 1000.0,
        rate: -0.5,
        target: 250.0,
    });
    assert_close(decay.value.unwrap(), 2.0, 1e-12);
}

#[test]
fn real_world_conversions_match_their_formulas() {
    assert_close(applications::ph_from_concentration(0.001).unwrap(), 3.0, 1e-9);
    assert_eq!(applications::ph_from_concentration(0.0), None);
    assert_close(applications::concentration_from_ph(3.0), 0.001, 1e-12);
    assert_close(applications::decibel_change(1000.0).unwrap(), 30.0, 1e-9);
    assert_close(applications::intensity_ratio_from_decibels(30.0), 1000.0, 1e-6);
    assert_close(applications::magnitude_difference(100.0).unwrap(), 2.0, 1e-9);
    assert_close(applications::magnitude_energy_difference(1000.0).unwrap(), 2.0, 1e-9);
    assert_eq!(applications::magnitude_difference(-1.0), None);
}

#[test]
fn growth_times_follow_the_compound_formula() {
    assert_close(
        applications::time_to_multiply(0.06, 2.0).unwrap(),
        2f64.ln() / 1.06f64.ln(),
        1e-12,
    );
    assert_eq!(applications::time_to_multiply(0.0, 2.0), None);
    assert_eq!(applications::time_to_multiply(0.0, 1.0), Some(0.0));
    assert_eq!(applications::time_to_multiply(-1.0, 2.0), None);
    assert_eq!(applications::time_to_multiply(0.05, 0.0), None);
}
