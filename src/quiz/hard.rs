use rand::seq::SliceRandom;
use rand::Rng;

use crate::logarithms::applications;
use crate::quiz::options::{format_value, integer_options, numeric_options};
use crate::quiz::Question;

// Tabulated approximations given to the student inside the question text,
// so the expected answers must be derived from these exact constants
const LOG10_OF_2: f64 = 0.3010;
const LOG10_OF_3: f64 = 0.4771;

pub fn complex_equation<R: Rng + ?Sized>(rng: &mut R) -> Question {
    if rng.gen_bool(0.5) {
        return nested_log(rng);
    }
    return exponential_match(rng);
}

fn nested_log<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let c = rng.gen_range(1..=3u32);
    let inner = 2i64.pow(c);
    let value = 2i64.pow(inner as u32);

    let question = format!("Solve for x: log₂(log₂(x)) = {}", c);
    let explanation = format!(
        "Work from the outside in.\n\n\
        If log₂(log₂(x)) = {}, then log₂(x) = 2^{} = {}.\n\n\
        Applying the definition once more, x = 2^{} = {}.",
        c, c, inner, inner, value
    );

    let (options, correct_index) = integer_options(rng, value);
    return Question::new(question, options, correct_index, explanation);
}

fn exponential_match<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let a = rng.gen_range(3..=5i64);
    let g = rng.gen_range(1..=3i64);
    let solution = 2.0 * g as f64 / (a - 2) as f64;
    let correct = (solution * 100.0).round() / 100.0;

    let question = format!("Solve for x: 2^({}x) = 4^(x + {})", a, g);
    let explanation = format!(
        "Write both sides with base 2: 4^(x + {}) = 2^(2x + {}).\n\n\
        Equal bases mean equal exponents, so {}x = 2x + {}.\n\n\
        Solving the linear equation gives x = {}/{} = {}.",
        g,
        2 * g,
        a,
        2 * g,
        2 * g,
        a - 2,
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(question, options, correct_index, explanation);
}

pub fn multi_step<R: Rng + ?Sized>(rng: &mut R) -> Question {
    if rng.gen_bool(0.5) {
        return decompose_with_known_logs(rng);
    }
    return change_of_base(rng);
}

fn decompose_with_known_logs<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let p = rng.gen_range(1..=3u32);
    let q = rng.gen_range(1..=2u32);
    let n = 2i64.pow(p) * 3i64.pow(q);
    let correct = ((p as f64 * LOG10_OF_2 + q as f64 * LOG10_OF_3) * 100.0).round() / 100.0;

    let question = format!(
        "Given log(2) ≈ {} and log(3) ≈ {}, what is log({})?",
        LOG10_OF_2, LOG10_OF_3, n
    );
    let explanation = format!(
        "First factor the argument: {} = 2^{} × 3^{}.\n\n\
        By the product rule, log({}) = log(2^{}) + log(3^{}).\n\n\
        By the power rule, that is {} × log(2) + {} × log(3) = {} × {} + {} × {} = {}.",
        n,
        p,
        q,
        n,
        p,
        q,
        p,
        q,
        p,
        LOG10_OF_2,
        q,
        LOG10_OF_3,
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(question, options, correct_index, explanation);
}

fn change_of_base<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let k = rng.gen_range(2..=4u32);
    let n = 10i64.pow(k);
    let correct = ((k as f64 / LOG10_OF_2) * 100.0).round() / 100.0;

    let question = format!("Given log(2) ≈ {}, what is log₂({})?", LOG10_OF_2, n);
    let explanation = format!(
        "Change the base to 10: log₂({}) = log({}) / log(2).\n\n\
        Since {} = 10^{}, log({}) = {}.\n\n\
        So log₂({}) = {} / {} ≈ {}.",
        n,
        n,
        n,
        k,
        n,
        k,
        n,
        k,
        LOG10_OF_2,
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(question, options, correct_index, explanation);
}

pub fn real_world<R: Rng + ?Sized>(rng: &mut R) -> Question {
    match rng.gen_range(0..3) {
        0 => investment_growth(rng),
        1 => earthquake_energy(rng),
        _ => loudness_factor(rng),
    }
}

fn investment_growth<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let choices = [("triple", 3.0), ("quadruple", 4.0), ("quintuple", 5.0)];
    let (word, factor) = choices[rng.gen_range(0..choices.len())];
    let percent = rng.gen_range(4..=10i64);
    let rate = percent as f64 / 100.0;

    // The rate and factor come from fixed valid pools, so the helper always answers
    let solution = applications::time_to_multiply(rate, factor).unwrap();
    let correct = (solution * 100.0).round() / 100.0;

    let question = format!(
        "How many years will it take for an investment to {} at an annual interest rate of {}%?",
        word, percent
    );
    let explanation = format!(
        "Growing by a factor of {} at {}% per year means (1 + {})^t = {}.\n\n\
        Taking logarithms, t = log({}) / log(1 + {}) ≈ {} years.",
        factor,
        percent,
        rate,
        factor,
        factor,
        rate,
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(question, options, correct_index, explanation);
}

fn earthquake_energy<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let exponent = rng.gen_range(2..=4u32);
    let ratio = 10i64.pow(exponent);

    let solution = applications::magnitude_energy_difference(ratio as f64).unwrap();
    let correct = (solution * 100.0).round() / 100.0;

    let question = format!(
        "One earthquake releases {} times more energy than another. How many points apart are they on the Richter scale?",
        ratio
    );
    let explanation = format!(
        "Richter energy grows as E ∝ 10^(1.5M), so an energy ratio of {} means 1.5 × ΔM = log({}) = {}.\n\n\
        Dividing by 1.5, ΔM = {} / 1.5 ≈ {}.",
        ratio,
        ratio,
        exponent,
        exponent,
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(question, options, correct_index, explanation);
}

fn loudness_factor<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let decibels = *[20i64, 30, 40].choose(rng).unwrap();
    let ratio = applications::intensity_ratio_from_decibels(decibels as f64);
    let correct = (ratio * 100.0).round() / 100.0;

    let question = format!(
        "One sound is {} dB louder than another. By what factor is its intensity greater?",
        decibels
    );
    let explanation = format!(
        "Decibels compare intensities as dB = 10 × log(I₂/I₁).\n\n\
        A gap of {} dB means log(I₂/I₁) = {} / 10 = {}, so the intensity ratio is 10^{} = {}.",
        decibels,
        decibels,
        decibels / 10,
        decibels / 10,
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(question, options, correct_index, explanation);
}
