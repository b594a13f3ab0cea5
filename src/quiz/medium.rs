use rand::Rng;

use crate::logarithms::applications;
use crate::quiz::options::{fixed_options, format_value, numeric_options};
use crate::quiz::Question;

pub fn apply_property<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let x: i64 = rng.gen_range(2..=9);
    let y: i64 = rng.gen_range(2..=9);

    // One expression per property, paired with its simplification and value
    let operations = [
        format!("log({} × {})", x, y),
        format!("log({} ÷ {})", x * y, y),
        format!("log({}^{})", x, y),
        format!("log(√{})", x * x),
    ];
    let answers = [
        format!("log({}) + log({})", x, y),
        format!("log({}) - log({})", x * y, y),
        format!("{} × log({})", y, x),
        format!("log({}) ÷ 2", x * x),
    ];
    let results = [
        (x as f64).log10() + (y as f64).log10(),
        (x as f64).log10(),
        y as f64 * (x as f64).log10(),
        (x as f64).log10(),
    ];

    let selected = rng.gen_range(0..operations.len());
    let correct = answers[selected].clone();
    let others: Vec<String> = answers
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != selected)
        .map(|(_, answer)| answer.clone())
        .collect();

    let question = format!("Simplify the expression: {}", operations[selected]);
    let explanation = format!(
        "To simplify {}, we apply the matching logarithm property.\n\n\
        The correct simplification is {}.\n\n\
        Calculating the result: {:.4}",
        operations[selected], correct, results[selected]
    );

    let (options, correct_index) = fixed_options(rng, correct, others);
    return Question::new(question, options, correct_index, explanation);
}

pub fn moderate_equation<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let a: i64 = rng.gen_range(2..=4);
    let b: i64 = rng.gen_range(1..=3);
    let power = 10f64.powi(a as i32);

    let equations = [
        format!("log(x) + log(x - {}) = {}", b, a),
        format!("log(x) - log(x - {}) = {}", b, a),
        format!("log(x^2) = {}", a),
        format!("log(x) = log({}) - log({})", a * b, b),
    ];
    let solutions = [
        (b as f64 + ((b * b) as f64 + 4.0 * power).sqrt()) / 2.0,
        b as f64 * power / (power - 1.0),
        10f64.powf(a as f64 / 2.0),
        a as f64,
    ];
    let steps = [
        format!(
            "log(x) + log(x - {}) = log(x(x - {})), so x(x - {}) = 10^{} and the quadratic formula gives the positive root.",
            b, b, b, a
        ),
        format!(
            "log(x) - log(x - {}) = log(x/(x - {})), so x/(x - {}) = 10^{} and solving the linear equation gives x.",
            b, b, b, a
        ),
        format!("log(x^2) = 2 × log(x), so log(x) = {}/2 and x = 10^({}/2).", a, a),
        format!(
            "log({}) - log({}) = log({}/{}) = log({}), so x = {}.",
            a * b,
            b,
            a * b,
            b,
            a,
            a
        ),
    ];

    let selected = rng.gen_range(0..equations.len());
    let correct = (solutions[selected] * 100.0).round() / 100.0;

    let question = format!("Solve for x: {}", equations[selected]);
    let explanation = format!(
        "To solve {}, apply logarithm properties first:\n\n{}\n\nThe solution is x = {}.",
        equations[selected],
        steps[selected],
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(question, options, correct_index, explanation);
}

struct Scenario {
    name: &'static str,
    question: &'static str,
    formula: &'static str,
    solution: f64,
    approach: &'static str,
}

pub fn application<R: Rng + ?Sized>(rng: &mut R) -> Question {
    // Fixed instances with the derivation carried by the applications helpers.
    // The inputs are constants well inside each helper's domain, so the
    // unwraps can never fire.
    let scenarios = [
        Scenario {
            name: "compound interest",
            question: "How many years will it take for an investment of $1000 to double at an annual interest rate of 6%?",
            formula: "t = log(2) / log(1 + r)",
            solution: applications::time_to_multiply(0.06, 2.0).unwrap(),
            approach: "Using the compound interest formula A = P(1+r)^t, we set A = 2P and solve for t.",
        },
        Scenario {
            name: "the Richter scale",
            question: "An earthquake has an amplitude 100 times stronger than a reference earthquake. How many points higher is it on the Richter scale?",
            formula: "difference = log(A₂/A₁)",
            solution: applications::magnitude_difference(100.0).unwrap(),
            approach: "The Richter scale is logarithmic, so the difference in magnitude is log(A₂) - log(A₁) = log(A₂/A₁).",
        },
        Scenario {
            name: "the pH scale",
            question: "A solution has a hydrogen ion concentration of 0.001 mol/L. What is its pH?",
            formula: "pH = -log([H⁺])",
            solution: applications::ph_from_concentration(0.001).unwrap(),
            approach: "The pH scale is the negative logarithm of the hydrogen ion concentration.",
        },
        Scenario {
            name: "sound intensity",
            question: "If the sound intensity increases by a factor of 1000, by how many decibels does the sound level increase?",
            formula: "difference = 10 × log(I₂/I₁)",
            solution: applications::decibel_change(1000.0).unwrap(),
            approach: "Decibels compare intensities on a logarithmic scale, scaled by a factor of 10.",
        },
    ];

    let selected = &scenarios[rng.gen_range(0..scenarios.len())];
    let correct = (selected.solution * 100.0).round() / 100.0;

    let explanation = format!(
        "This problem involves {}.\n\n{}\n\nUsing the formula {}, the answer is {}.",
        selected.name,
        selected.approach,
        selected.formula,
        format_value(correct)
    );

    let (options, correct_index) = numeric_options(rng, correct);
    return Question::new(
        selected.question.to_string(),
        options,
        correct_index,
        explanation,
    );
}
