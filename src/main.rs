mod logarithms;
mod quiz;

use std::sync::Arc;

use chatgpt::{client::ChatGPT, config::ChatGPTEngine};
use dotenv::dotenv;
use logarithms::{applications, Equation};
use quiz::{ai_helper::QuizHelper, Difficulty};
use rand::seq::SliceRandom;
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
    types::{ChatAction, KeyboardButton, KeyboardMarkup},
};

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceiveFullName,
    RecieveActivityChoice,
    CalculatorRecieveValue,
    CalculatorRecieveBase {
        x: f64,
    },
    SolverRecieveEquationKind,
    SolverRecieveParameters {
        kind: EquationKind,
    },
    ConverterRecieveKind,
    ConverterRecieveValue {
        kind: ConverterKind,
    },
    QuizRecieveDifficulty,
    QuizRecieveAmountOfQuestions {
        difficulty: Difficulty,
    },
    QuizInProgress {
        quiz: quiz::Quiz,
        question_number: usize,
        score: usize,
    },
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub enum EquationKind {
    ForArgument,
    ForBase,
    ForDuration,
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub enum ConverterKind {
    DoublingTime,
    PhFromConcentration,
    ConcentrationFromPh,
    DecibelChange,
    MagnitudeDifference,
}

type UserInfoStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() {
    dotenv().expect("Failed to load .env file");
    let CHATGPT_API_KEY = std::env::var("CHATGPT_API_KEY").expect("CHATGPT_API_KEY is not set");

    pretty_env_logger::init();
    log::info!("Starting logarithm tutor bot...");

    let bot = Bot::from_env();

    println!("Establishing connection to the database...");
    let storage: UserInfoStorage = SqliteStorage::open("db.sqlite", Json)
        .await
        .unwrap()
        .erase();
    println!("Connection established");

    let gpt = {
        let mut gpt = ChatGPT::new(CHATGPT_API_KEY).expect("Unable to connect with ChatGPT");

        gpt.config.engine = ChatGPTEngine::Gpt35Turbo;
        gpt.config.timeout = std::time::Duration::from_secs(15);

        gpt
    };

    let quiz_helper = Arc::new(QuizHelper::new(gpt, quiz::ai_helper::Personality::Napier));

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ReceiveFullName].endpoint(receive_full_name))
            .branch(dptree::case![State::RecieveActivityChoice].endpoint(receive_activity_choice))
            .branch(dptree::case![State::CalculatorRecieveValue].endpoint(calculator_receive_value))
            .branch(dptree::case![State::CalculatorRecieveBase { x }].endpoint(calculator_receive_base))
            .branch(
                dptree::case![State::SolverRecieveEquationKind]
                    .endpoint(solver_receive_equation_kind),
            )
            .branch(
                dptree::case![State::SolverRecieveParameters { kind }]
                    .endpoint(solver_receive_parameters),
            )
            .branch(dptree::case![State::ConverterRecieveKind].endpoint(converter_receive_kind))
            .branch(
                dptree::case![State::ConverterRecieveValue { kind }]
                    .endpoint(converter_receive_value),
            )
            .branch(dptree::case![State::QuizRecieveDifficulty].endpoint(quiz_receive_difficulty))
            .branch(
                dptree::case![State::QuizRecieveAmountOfQuestions { difficulty }]
                    .endpoint(quiz_receive_amount_of_questions),
            )
            .branch(
                dptree::case![State::QuizInProgress {
                    quiz,
                    question_number,
                    score
                }]
                .endpoint(
                    move |bot: Bot,
                          dialogue: QuizDialogue,
                          (quiz, question_number, score): (quiz::Quiz, usize, usize),
                          msg: Message| {
                        quiz_in_progress(
                            quiz_helper.clone(),
                            bot,
                            dialogue,
                            (quiz.clone(), question_number, score),
                            msg,
                        )
                    },
                ),
            ),
    )
    .dependencies(dptree::deps![storage])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const GREETING_TEXT: &str = "Hi! I'm a logarithm tutor bot. I'll help you learn how logarithms work! Let's get acquainted. What's your name?";
async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;

    dialogue.update(State::ReceiveFullName).await?;
    Ok(())
}

const CALCULATOR_ACTIVITY: &str = "Evaluate a logarithm";
const SOLVER_ACTIVITY: &str = "Solve an equation";
const CONVERTER_ACTIVITY: &str = "Real-world conversions";
const QUIZ_ACTIVITY: &str = "Take a quiz";

fn activity_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(CALCULATOR_ACTIVITY),
            KeyboardButton::new(SOLVER_ACTIVITY),
        ],
        vec![
            KeyboardButton::new(CONVERTER_ACTIVITY),
            KeyboardButton::new(QUIZ_ACTIVITY),
        ],
    ])
}

async fn receive_full_name(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(full_name) => {
            bot.send_message(msg.chat.id, format!("Nice to meet you, {}!", full_name))
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, "Please send your name (as text)")
                .await?;
            return Ok(());
        }
    }

    bot.send_message(msg.chat.id, "What would you like to do?")
        .reply_markup(activity_keyboard())
        .await?;

    dialogue.update(State::RecieveActivityChoice).await?;
    return Ok(());
}

const SOLVE_FOR_ARGUMENT: &str = "Solve log_b(x) = k for x";
const SOLVE_FOR_BASE: &str = "Solve log_b(k) = x for b";
const SOLVE_FOR_DURATION: &str = "Time to grow: P(1+r)^t = A";

const CONVERT_DOUBLING: &str = "Doubling time from a growth rate";
const CONVERT_PH: &str = "pH from a hydrogen ion concentration";
const CONVERT_CONCENTRATION: &str = "Hydrogen ion concentration from pH";
const CONVERT_DECIBELS: &str = "Decibel change from an intensity ratio";
const CONVERT_MAGNITUDE: &str = "Richter difference from an amplitude ratio";

const DIFFICULTY_EASY: &str = "Easy";
const DIFFICULTY_MEDIUM: &str = "Medium";
const DIFFICULTY_HARD: &str = "Hard";

async fn receive_activity_choice(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(CALCULATOR_ACTIVITY) => {
            bot.send_message(msg.chat.id, "Send the number x you want the logarithm of")
                .await?;
            dialogue.update(State::CalculatorRecieveValue).await?;
            return Ok(());
        }
        Some(SOLVER_ACTIVITY) => {
            let keyboard = KeyboardMarkup::new(vec![
                vec![KeyboardButton::new(SOLVE_FOR_ARGUMENT)],
                vec![KeyboardButton::new(SOLVE_FOR_BASE)],
                vec![KeyboardButton::new(SOLVE_FOR_DURATION)],
            ]);
            bot.send_message(msg.chat.id, "Which equation would you like to solve?")
                .reply_markup(keyboard)
                .await?;
            dialogue.update(State::SolverRecieveEquationKind).await?;
            return Ok(());
        }
        Some(CONVERTER_ACTIVITY) => {
            let keyboard = KeyboardMarkup::new(vec![
                vec![KeyboardButton::new(CONVERT_DOUBLING)],
                vec![KeyboardButton::new(CONVERT_PH)],
                vec![KeyboardButton::new(CONVERT_CONCENTRATION)],
                vec![KeyboardButton::new(CONVERT_DECIBELS)],
                vec![KeyboardButton::new(CONVERT_MAGNITUDE)],
            ]);
            bot.send_message(msg.chat.id, "Which conversion would you like?")
                .reply_markup(keyboard)
                .await?;
            dialogue.update(State::ConverterRecieveKind).await?;
            return Ok(());
        }
        Some(QUIZ_ACTIVITY) => {
            let keyboard = KeyboardMarkup::new(vec![vec![
                KeyboardButton::new(DIFFICULTY_EASY),
                KeyboardButton::new(DIFFICULTY_MEDIUM),
                KeyboardButton::new(DIFFICULTY_HARD),
            ]]);
            bot.send_message(msg.chat.id, "Choose a difficulty level")
                .reply_markup(keyboard)
                .await?;
            dialogue.update(State::QuizRecieveDifficulty).await?;
            return Ok(());
        }
        _ => {
            bot.send_message(msg.chat.id, "Please choose one of the options")
                .await?;
            return Ok(());
        }
    }
}

async fn calculator_receive_value(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let x: f64 = match msg.text().unwrap_or_default().trim().parse() {
        Ok(x) => x,
        Err(_) => {
            bot.send_message(msg.chat.id, "Please send a number, e.g. 100 or 2.5")
                .await?;
            return Ok(());
        }
    };

    bot.send_message(
        msg.chat.id,
        "Now send the base (a number, or e for the natural logarithm)",
    )
    .await?;
    dialogue.update(State::CalculatorRecieveBase { x }).await?;
    Ok(())
}

async fn calculator_receive_base(
    bot: Bot,
    dialogue: QuizDialogue,
    x: f64,
    msg: Message,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default().trim().to_string();
    let base: f64 = if text == "e" {
        std::f64::consts::E
    } else {
        match text.parse() {
            Ok(base) => base,
            Err(_) => {
                bot.send_message(msg.chat.id, "Please send a number (or e)")
                    .await?;
                return Ok(());
            }
        }
    };

    if let Some(value) = logarithms::log_base(x, base) {
        bot.send_message(
            msg.chat.id,
            format!("{}({}) = {:.6}", logarithms::log_symbol(base), x, value),
        )
        .await?;
    }
    // For invalid input the walkthrough carries the matching error text
    bot.send_message(msg.chat.id, logarithms::explain_calculation(x, base))
        .await?;

    bot.send_message(msg.chat.id, "What would you like to do next?")
        .reply_markup(activity_keyboard())
        .await?;
    dialogue.update(State::RecieveActivityChoice).await?;
    Ok(())
}

async fn solver_receive_equation_kind(
    bot: Bot,
    dialogue: QuizDialogue,
    msg: Message,
) -> HandlerResult {
    let (kind, prompt) = match msg.text() {
        Some(SOLVE_FOR_ARGUMENT) => (
            EquationKind::ForArgument,
            "Send the base and k separated by a space, e.g. \"10 2\"",
        ),
        Some(SOLVE_FOR_BASE) => (
            EquationKind::ForBase,
            "Send k and x separated by a space, e.g. \"100 2\"",
        ),
        Some(SOLVE_FOR_DURATION) => (
            EquationKind::ForDuration,
            "Send the principal, rate and target separated by spaces, e.g. \"1000 0.05 2000\"",
        ),
        _ => {
            bot.send_message(msg.chat.id, "Please choose one of the options")
                .await?;
            return Ok(());
        }
    };

    bot.send_message(msg.chat.id, prompt).await?;
    dialogue
        .update(State::SolverRecieveParameters { kind })
        .await?;
    Ok(())
}

async fn solver_receive_parameters(
    bot: Bot,
    dialogue: QuizDialogue,
    kind: EquationKind,
    msg: Message,
) -> HandlerResult {
    let numbers: Vec<f64> = msg
        .text()
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|part| part.parse().ok())
        .collect();

    let equation = match (&kind, numbers.as_slice()) {
        (EquationKind::ForArgument, [base, k]) => Equation::ForArgument { base: *base, k: *k },
        (EquationKind::ForBase, [k, x]) => Equation::ForBase { k: *k, x: *x },
        (EquationKind::ForDuration, [principal, rate, target]) => Equation::ForDuration {
            principal: *principal,
            rate: *rate,
            target: *target,
        },
        _ => {
            bot.send_message(
                msg.chat.id,
                "That doesn't look right. Send just the numbers, separated by spaces",
            )
            .await?;
            return Ok(());
        }
    };

    let solution = logarithms::solve_equation(equation);
    match solution.value {
        Some(value) => {
            bot.send_message(msg.chat.id, format!("Solution: {}", value))
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, "This one has no solution")
                .await?;
        }
    }
    bot.send_message(msg.chat.id, solution.explanation).await?;

    bot.send_message(msg.chat.id, "What would you like to do next?")
        .reply_markup(activity_keyboard())
        .await?;
    dialogue.update(State::RecieveActivityChoice).await?;
    Ok(())
}

async fn converter_receive_kind(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let (kind, prompt) = match msg.text() {
        Some(CONVERT_DOUBLING) => (
            ConverterKind::DoublingTime,
            "Send the growth rate per period, e.g. 0.05 for 5%",
        ),
        Some(CONVERT_PH) => (
            ConverterKind::PhFromConcentration,
            "Send the hydrogen ion concentration in mol/L, e.g. 0.001",
        ),
        Some(CONVERT_CONCENTRATION) => (
            ConverterKind::ConcentrationFromPh,
            "Send the pH value, e.g. 7",
        ),
        Some(CONVERT_DECIBELS) => (
            ConverterKind::DecibelChange,
            "Send the intensity ratio, e.g. 1000",
        ),
        Some(CONVERT_MAGNITUDE) => (
            ConverterKind::MagnitudeDifference,
            "Send the amplitude ratio, e.g. 100",
        ),
        _ => {
            bot.send_message(msg.chat.id, "Please choose one of the options")
                .await?;
            return Ok(());
        }
    };

    bot.send_message(msg.chat.id, prompt).await?;
    dialogue
        .update(State::ConverterRecieveValue { kind })
        .await?;
    Ok(())
}

async fn converter_receive_value(
    bot: Bot,
    dialogue: QuizDialogue,
    kind: ConverterKind,
    msg: Message,
) -> HandlerResult {
    let value: f64 = match msg.text().unwrap_or_default().trim().parse() {
        Ok(value) => value,
        Err(_) => {
            bot.send_message(msg.chat.id, "Please send a number").await?;
            return Ok(());
        }
    };

    let reply = match kind {
        ConverterKind::DoublingTime => match applications::time_to_multiply(value, 2.0) {
            Some(t) => format!(
                "At a rate of {} per period, the amount doubles after {:.2} periods",
                value, t
            ),
            None => "A doubling time needs a rate above -100% and different from zero".to_string(),
        },
        ConverterKind::PhFromConcentration => match applications::ph_from_concentration(value) {
            Some(ph) => format!("A concentration of {} mol/L has pH {:.2}", value, ph),
            None => "The concentration must be positive".to_string(),
        },
        ConverterKind::ConcentrationFromPh => format!(
            "pH {} corresponds to a hydrogen ion concentration of {:e} mol/L",
            value,
            applications::concentration_from_ph(value)
        ),
        ConverterKind::DecibelChange => match applications::decibel_change(value) {
            Some(decibels) => format!(
                "An intensity ratio of {} is a change of {:.2} dB",
                value, decibels
            ),
            None => "The intensity ratio must be positive".to_string(),
        },
        ConverterKind::MagnitudeDifference => match applications::magnitude_difference(value) {
            Some(difference) => format!(
                "An amplitude ratio of {} is {:.2} points on the Richter scale",
                value, difference
            ),
            None => "The amplitude ratio must be positive".to_string(),
        },
    };
    bot.send_message(msg.chat.id, reply).await?;

    bot.send_message(msg.chat.id, "What would you like to do next?")
        .reply_markup(activity_keyboard())
        .await?;
    dialogue.update(State::RecieveActivityChoice).await?;
    Ok(())
}

async fn quiz_receive_difficulty(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let difficulty = match msg.text() {
        Some(DIFFICULTY_EASY) => Difficulty::Easy,
        Some(DIFFICULTY_MEDIUM) => Difficulty::Medium,
        Some(DIFFICULTY_HARD) => Difficulty::Hard,
        _ => {
            bot.send_message(msg.chat.id, "Please choose one of the options")
                .await?;
            return Ok(());
        }
    };

    let keyboard = KeyboardMarkup::new(vec![
        vec![KeyboardButton::new("5")],
        vec![KeyboardButton::new("10")],
        vec![KeyboardButton::new("15")],
    ]);
    bot.send_message(msg.chat.id, "Choose the number of questions")
        .reply_markup(keyboard)
        .await?;
    dialogue
        .update(State::QuizRecieveAmountOfQuestions { difficulty })
        .await?;
    Ok(())
}

static LOGARITHM_FACTS: [&str; 11] = [
    "The word 'logarithm' comes from the Greek words 'logos' (ratio) and 'arithmos' (number).",
    "Logarithms were invented in the early 17th century by John Napier as a calculation aid.",
    "Before electronic calculators, logarithm tables were used to perform complex calculations.",
    "The Richter scale for measuring earthquakes is a logarithmic scale.",
    "Every logarithmic function passes through the point (1, 0).",
    "The natural logarithm (base e) is especially useful in calculus and growth or decay problems.",
    "The pH scale is a negative logarithmic scale of hydrogen ion concentration.",
    "In computer science, logarithms help analyze the efficiency of algorithms.",
    "Musical intervals are based on logarithmic frequency ratios.",
    "Human perception of sound and light intensity follows a logarithmic pattern.",
    "The decibel (dB) scale for sound intensity is logarithmic.",
];

async fn quiz_receive_amount_of_questions(
    bot: Bot,
    dialogue: QuizDialogue,
    difficulty: Difficulty,
    msg: Message,
) -> HandlerResult {
    if let None = msg.text() {
        bot.send_message(msg.chat.id, "Please send a number").await?;
        return Ok(());
    }
    if let Err(_) = msg.text().unwrap().parse::<usize>() {
        bot.send_message(msg.chat.id, "Please send a number").await?;
        return Ok(());
    }

    // It is safe to unwrap here because we've already checked that the input is a number
    let amount: usize = msg.text().unwrap().parse().unwrap();
    if amount == 0 {
        bot.send_message(msg.chat.id, "The number of questions can't be 0")
            .await?;
        return Ok(());
    }

    let quiz = quiz::Quiz::new(
        (0..amount)
            .map(|_| quiz::generate_question(&mut rand::thread_rng(), difficulty))
            .collect(),
    );

    // The fact list is never empty, so choose always returns something
    let fact = LOGARITHM_FACTS.choose(&mut rand::thread_rng()).unwrap();
    bot.send_message(msg.chat.id, format!("Fun logarithm fact: {}", fact))
        .await?;

    bot.send_message(msg.chat.id, "Great! Let's start the quiz!")
        .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new("Go!")]]))
        .await?;

    dialogue
        .update(State::QuizInProgress {
            quiz,
            question_number: 0,
            score: 0,
        })
        .await?;
    Ok(())
}

async fn quiz_in_progress(
    ai_helper: Arc<QuizHelper>,
    bot: Bot,
    dialogue: QuizDialogue,
    (quiz, question_number, score): (quiz::Quiz, usize, usize),
    msg: Message,
) -> HandlerResult {
    let mut current_score = score;
    if question_number != 0 {
        let answer = msg.text().unwrap_or_default();
        let question = &quiz.questions[question_number - 1];
        if answer == question.correct_option() {
            bot.send_message(msg.chat.id, "Correct! Well done!").await?;
            current_score += 1;
        } else {
            // We don't really care about the result here, so we'll just ignore the error if this action is unsuccessful
            // But it adds to the user's experience if it works!
            let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;

            let ai_reply: String = ai_helper
                .generate_reply_to_wrong_answer(question.clone(), answer.to_string())
                // If the AI fails to generate a reply, we'll just show the stored explanation
                // Sometimes it may happen due to timeout or other reasons
                .await
                .unwrap_or(format!(
                    "The correct answer is {}.\n\n{}",
                    question.correct_option(),
                    question.explanation
                ));

            bot.send_message(msg.chat.id, format!("Not quite!\n\n{}", ai_reply))
                .await?;
        }
    }

    if question_number >= quiz.questions.len() {
        bot.send_message(
            msg.chat.id,
            format!(
                "The quiz is over!\n{}\nWhat would you like to do next?",
                quiz::performance_summary(current_score, quiz.questions.len())
            ),
        )
        .reply_markup(activity_keyboard())
        .await?;

        if let Ok(tip) = ai_helper
            .generate_study_tip(current_score, quiz.questions.len())
            .await
        {
            bot.send_message(msg.chat.id, tip).await?;
        }

        dialogue.update(State::RecieveActivityChoice).await?;
        return Ok(());
    }

    let question = &quiz.questions[question_number];
    let question_text = format!(
        "Question #{} of {}:\n{}",
        question_number + 1,
        quiz.questions.len(),
        question.text
    );

    bot.send_message(msg.chat.id, question_text)
        .reply_markup(KeyboardMarkup::new(
            question
                .options
                .iter()
                .map(|option| vec![KeyboardButton::new(option.clone())])
                .collect::<Vec<_>>(),
        ))
        .await?;

    dialogue
        .update(State::QuizInProgress {
            quiz,
            question_number: question_number + 1,
            score: current_score,
        })
        .await?;
    Ok(())
}
