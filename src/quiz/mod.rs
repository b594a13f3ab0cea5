pub mod ai_helper;
pub mod easy;
pub mod hard;
pub mod medium;
mod options;

#[cfg(test)]
mod tests_generation;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn new(text: String, options: Vec<String>, correct_index: usize, explanation: String) -> Self {
        Self {
            text,
            options,
            correct_index,
            explanation,
        }
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

pub fn generate_question<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    // Each tier picks one of its three question categories uniformly
    match difficulty {
        Difficulty::Easy => match rng.gen_range(0..3) {
            0 => easy::evaluate_basic_log(rng),
            1 => easy::identify_property(rng),
            _ => easy::basic_equation(rng),
        },
        Difficulty::Medium => match rng.gen_range(0..3) {
            0 => medium::apply_property(rng),
            1 => medium::moderate_equation(rng),
            _ => medium::application(rng),
        },
        Difficulty::Hard => match rng.gen_range(0..3) {
            0 => hard::complex_equation(rng),
            1 => hard::multi_step(rng),
            _ => hard::real_world(rng),
        },
    }
}

pub fn performance_summary(score: usize, total: usize) -> String {
    let percentage = if total == 0 {
        0.0
    } else {
        score as f64 / total as f64 * 100.0
    };

    let assessment = if percentage >= 90.0 {
        "Excellent! You have a strong understanding of logarithms!"
    } else if percentage >= 70.0 {
        "Good job! You understand most logarithm concepts."
    } else if percentage >= 50.0 {
        "You've got the basics, but might want to review some concepts."
    } else {
        "You might need to revisit the earlier sections to strengthen your understanding."
    };

    return format!(
        "Your final score: {}/{} ({:.1}%)\n{}",
        score, total, percentage, assessment
    );
}
