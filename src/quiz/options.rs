use rand::seq::SliceRandom;
use rand::Rng;

// Answers are compared as the rendered strings the user taps, so every
// distinctness check happens after rendering, not on the raw numbers.
pub(crate) fn format_value(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    return format!("{}", rounded);
}

pub(crate) fn numeric_options<R: Rng + ?Sized>(rng: &mut R, correct: f64) -> (Vec<String>, usize) {
    let correct_text = format_value(correct);
    let mut options = vec![correct_text.clone()];

    let mut factors = vec![0.5, 0.8, 1.2, 1.5];
    factors.shuffle(rng);
    for factor in factors {
        if options.len() == 4 {
            break;
        }
        let candidate = correct * factor;
        let candidate_text = format_value(candidate);
        if candidate > 0.0 && !options.contains(&candidate_text) {
            options.push(candidate_text);
        }
    }

    // Rounding can collapse nearby factors onto the same rendered value;
    // widen with additive offsets until four distinct options exist
    let mut offset = 1.0;
    while options.len() < 4 {
        let candidate_text = format_value(correct + offset);
        if !options.contains(&candidate_text) {
            options.push(candidate_text);
        }
        offset += 1.0;
    }

    return shuffle_with_answer(rng, options, correct_text);
}

pub(crate) fn integer_options<R: Rng + ?Sized>(rng: &mut R, correct: i64) -> (Vec<String>, usize) {
    let correct_text = correct.to_string();
    let mut options = vec![correct_text.clone()];

    let mut offsets: Vec<i64> = vec![-2, -1, 1, 2];
    offsets.shuffle(rng);
    for offset in offsets {
        if options.len() == 4 {
            break;
        }
        let candidate = correct + offset;
        if candidate > 0 && !options.contains(&candidate.to_string()) {
            options.push(candidate.to_string());
        }
    }

    // Small answers lose their negative neighbours, so grow upward instead
    let mut extra = 3;
    while options.len() < 4 {
        let candidate = correct + extra;
        if candidate > 0 && !options.contains(&candidate.to_string()) {
            options.push(candidate.to_string());
        }
        extra += 1;
    }

    return shuffle_with_answer(rng, options, correct_text);
}

pub(crate) fn fixed_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: String,
    others: Vec<String>,
) -> (Vec<String>, usize) {
    let mut options = vec![correct.clone()];
    options.extend(others);
    return shuffle_with_answer(rng, options, correct);
}

fn shuffle_with_answer<R: Rng + ?Sized>(
    rng: &mut R,
    mut options: Vec<String>,
    correct_text: String,
) -> (Vec<String>, usize) {
    options.shuffle(rng);
    // The correct text was inserted by the caller, so position always finds it
    let correct_index = options.iter().position(|option| option == &correct_text).unwrap();
    return (options, correct_index);
}
