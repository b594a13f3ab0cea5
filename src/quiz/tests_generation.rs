// Generator invariants: every question ships exactly four distinct options,
// correct_index points at the true answer after shuffling, and each category
// derives its answer the way its template says it does.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::options::{format_value, integer_options, numeric_options};
use super::{easy, generate_question, hard, medium, performance_summary, Difficulty, Question};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn assert_well_formed(question: &Question) {
    assert_eq!(question.options.len(), 4, "question: {}", question.text);
    let distinct: HashSet<&String> = question.options.iter().collect();
    assert_eq!(distinct.len(), 4, "duplicated option in {:?}", question.options);
    assert!(question.correct_index < 4);
    assert!(!question.text.is_empty());
    assert!(!question.explanation.is_empty());
}

#[test]
fn every_tier_keeps_the_option_invariants() {
    for (seed, difficulty) in [
        (1, Difficulty::Easy),
        (2, Difficulty::Medium),
        (3, Difficulty::Hard),
    ] {
        let mut rng = rng(seed);
        for _ in 0..1000 {
            let question = generate_question(&mut rng, difficulty);
            assert_well_formed(&question);
        }
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let first = generate_question(&mut rng(42), Difficulty::Medium);
    let second = generate_question(&mut rng(42), Difficulty::Medium);
    assert_eq!(first.text, second.text);
    assert_eq!(first.options, second.options);
    assert_eq!(first.correct_index, second.correct_index);
    assert_eq!(first.explanation, second.explanation);
}

#[test]
fn basic_log_answers_are_the_exponent() {
    let mut rng = rng(10);
    for _ in 0..500 {
        let question = easy::evaluate_basic_log(&mut rng);
        assert_well_formed(&question);
        let exponent: i64 = question.correct_option().parse().unwrap();
        assert!((1..=5).contains(&exponent));
        assert!(question.explanation.contains(&format!("= {}.", exponent)));
    }
}

#[test]
fn property_questions_offer_the_four_rules() {
    let expected: HashSet<&str> = ["Product Rule", "Quotient Rule", "Power Rule", "Zero Property"]
        .into_iter()
        .collect();
    let mut rng = rng(11);
    for _ in 0..200 {
        let question = easy::identify_property(&mut rng);
        assert_well_formed(&question);
        let offered: HashSet<&str> = question.options.iter().map(|option| option.as_str()).collect();
        assert_eq!(offered, expected);
        assert!(question.explanation.contains(question.correct_option()));
    }
}

#[test]
fn basic_equations_solve_to_a_power_of_the_base() {
    let allowed: HashSet<i64> = [2, 4, 8, 10, 100, 1000].into_iter().collect();
    let mut rng = rng(12);
    for _ in 0..500 {
        let question = easy::basic_equation(&mut rng);
        assert_well_formed(&question);
        let answer: i64 = question.correct_option().parse().unwrap();
        assert!(allowed.contains(&answer), "unexpected answer {}", answer);
    }
}

#[test]
fn simplifications_echo_into_the_explanation() {
    let mut rng = rng(13);
    for _ in 0..500 {
        let question = medium::apply_property(&mut rng);
        assert_well_formed(&question);
        assert!(question.text.starts_with("Simplify"));
        assert!(question.explanation.contains(question.correct_option()));
    }
}

#[test]
fn moderate_equations_have_positive_numeric_answers() {
    let mut rng = rng(14);
    for _ in 0..500 {
        let question = medium::moderate_equation(&mut rng);
        assert_well_formed(&question);
        for option in &question.options {
            let value: f64 = option.parse().unwrap();
            assert!(value > 0.0, "non-positive option {} in {:?}", option, question.options);
        }
        assert!(question.explanation.contains(question.correct_option()));
    }
}

#[test]
fn application_answers_come_from_the_fixed_scenarios() {
    let allowed: HashSet<&str> = ["11.9", "2", "3", "30"].into_iter().collect();
    let mut rng = rng(15);
    for _ in 0..500 {
        let question = medium::application(&mut rng);
        assert_well_formed(&question);
        assert!(
            allowed.contains(question.correct_option()),
            "unexpected answer {}",
            question.correct_option()
        );
    }
}

#[test]
fn complex_equations_state_their_solution() {
    let nested_allowed: HashSet<i64> = [4, 16, 256].into_iter().collect();
    let mut rng = rng(16);
    for _ in 0..500 {
        let question = hard::complex_equation(&mut rng);
        assert_well_formed(&question);
        let answer: f64 = question.correct_option().parse().unwrap();
        assert!(answer > 0.0);
        if question.text.contains("log₂(log₂") {
            assert!(
                nested_allowed.contains(&(answer as i64)),
                "unexpected nested answer {}",
                answer
            );
        }
    }
}

#[test]
fn multi_step_answers_follow_the_given_approximations() {
    let allowed: HashSet<&str> = [
        "0.78", "1.08", "1.38", "1.26", "1.56", "1.86", // 2^p × 3^q decompositions
        "6.64", "9.97", "13.29", // change of base from the 0.3010 table value
    ]
    .into_iter()
    .collect();
    let mut rng = rng(17);
    for _ in 0..500 {
        let question = hard::multi_step(&mut rng);
        assert_well_formed(&question);
        assert!(
            allowed.contains(question.correct_option()),
            "unexpected answer {}",
            question.correct_option()
        );
    }
}

#[test]
fn real_world_answers_follow_their_scales() {
    let mut rng = rng(18);
    for _ in 0..500 {
        let question = hard::real_world(&mut rng);
        assert_well_formed(&question);
        let answer: f64 = question.correct_option().parse().unwrap();
        assert!(answer > 0.0);
        if question.text.contains("dB louder") {
            assert!(["100", "1000", "10000"].contains(&question.correct_option()));
        }
        if question.text.contains("Richter") {
            assert!(["1.33", "2", "2.67"].contains(&question.correct_option()));
        }
    }
}

#[test]
fn numeric_distractors_stay_distinct_and_positive() {
    let mut rng = rng(19);
    for _ in 0..1000 {
        let (options, correct_index) = numeric_options(&mut rng, 14.21);
        assert_eq!(options.len(), 4);
        let distinct: HashSet<&String> = options.iter().collect();
        assert_eq!(distinct.len(), 4);
        assert_eq!(options[correct_index], "14.21");
        for option in &options {
            assert!(option.parse::<f64>().unwrap() > 0.0);
        }
    }
}

#[test]
fn rounding_collisions_fall_back_to_wider_offsets() {
    // 0.01 collapses three of the four factor perturbations onto itself
    let mut rng = rng(20);
    for _ in 0..100 {
        let (options, correct_index) = numeric_options(&mut rng, 0.01);
        assert_eq!(options.len(), 4);
        let distinct: HashSet<&String> = options.iter().collect();
        assert_eq!(distinct.len(), 4);
        assert_eq!(options[correct_index], "0.01");
    }
}

#[test]
fn integer_distractors_widen_around_small_answers() {
    let mut rng = rng(21);
    for _ in 0..100 {
        let (options, correct_index) = integer_options(&mut rng, 1);
        let mut sorted: Vec<i64> = options.iter().map(|option| option.parse().unwrap()).collect();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert_eq!(options[correct_index], "1");
    }
}

#[test]
fn rendered_values_drop_noise_but_keep_two_decimals() {
    assert_eq!(format_value(2.0), "2");
    assert_eq!(format_value(11.895661), "11.9");
    assert_eq!(format_value(1.333333), "1.33");
    assert_eq!(format_value(0.674), "0.67");
}

#[test]
fn summary_grades_each_band() {
    assert!(performance_summary(9, 10).contains("Excellent"));
    assert!(performance_summary(7, 10).contains("Good job"));
    assert!(performance_summary(5, 10).contains("review some concepts"));
    assert!(performance_summary(2, 10).contains("revisit"));
    assert!(performance_summary(0, 0).contains("0.0%"));
}

#[test]
fn summary_reports_the_score_line() {
    let summary = performance_summary(7, 10);
    assert!(summary.contains("7/10"));
    assert!(summary.contains("70.0%"));
}
