use rand::Rng;

use crate::quiz::options::{fixed_options, integer_options};
use crate::quiz::Question;

pub fn evaluate_basic_log<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let exponent = rng.gen_range(1..=5u32);

    // base 2, base 10 or base e, shown with the notation used across the bot
    let (base_text, notation, value_text) = match rng.gen_range(0..3) {
        0 => ("2", "log₂", 2i64.pow(exponent).to_string()),
        1 => ("10", "log", 10i64.pow(exponent).to_string()),
        _ => (
            "e",
            "ln",
            format!("{:.4}", std::f64::consts::E.powi(exponent as i32)),
        ),
    };

    let question = format!("What is the value of {}({})?", notation, value_text);
    let explanation = format!(
        "To find {}({}), we need to determine what power of {} equals {}.\n\n\
        Since {}^{} = {}, we have {}({}) = {}.",
        notation, value_text, base_text, value_text, base_text, exponent, value_text, notation, value_text, exponent
    );

    let (options, correct_index) = integer_options(rng, exponent as i64);
    return Question::new(question, options, correct_index, explanation);
}

pub fn identify_property<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let properties = [
        (
            "Product Rule",
            "log(x × y) = log(x) + log(y)",
            "log(100 × 10) = log(100) + log(10) = 2 + 1 = 3",
        ),
        (
            "Quotient Rule",
            "log(x ÷ y) = log(x) - log(y)",
            "log(1000 ÷ 10) = log(1000) - log(10) = 3 - 1 = 2",
        ),
        (
            "Power Rule",
            "log(x^n) = n × log(x)",
            "log(100^3) = 3 × log(100) = 3 × 2 = 6",
        ),
        ("Zero Property", "log(1) = 0", "log(1) = 0 because 10^0 = 1"),
    ];

    let selected = rng.gen_range(0..properties.len());
    let (name, formula, example) = properties[selected];
    let others: Vec<String> = properties
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != selected)
        .map(|(_, property)| property.0.to_string())
        .collect();

    let question = format!(
        "Which logarithm property is represented by the formula: {}?",
        formula
    );
    let explanation = format!(
        "The formula {} represents the {}.\n\nExample: {}",
        formula, name, example
    );

    let (options, correct_index) = fixed_options(rng, name.to_string(), others);
    return Question::new(question, options, correct_index, explanation);
}

pub fn basic_equation<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let exponent = rng.gen_range(1..=3u32);
    let (base, notation) = if rng.gen_bool(0.5) {
        (2i64, "log₂")
    } else {
        (10i64, "log")
    };
    let value = base.pow(exponent);

    let question = format!("Solve for x: {}(x) = {}", notation, exponent);
    let explanation = format!(
        "To solve {}(x) = {}, we look for the value of x whose logarithm base {} is {}.\n\n\
        Using the definition of logarithms, if {}(x) = {}, then x = {}^{}.\n\n\
        Therefore, x = {}^{} = {}.",
        notation, exponent, base, exponent, notation, exponent, base, exponent, base, exponent, value
    );

    let (options, correct_index) = integer_options(rng, value);
    return Question::new(question, options, correct_index, explanation);
}
