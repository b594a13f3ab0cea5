use crate::quiz::Question;
use chatgpt::prelude::*;
use chatgpt::types::CompletionResponse;

pub struct QuizHelper {
    personality: Personality,
    chat_gpt: ChatGPT,
}
impl QuizHelper {
    pub fn new(chat_gpt: ChatGPT, personality: Personality) -> Self {
        Self {
            personality,
            chat_gpt,
        }
    }

    pub async fn generate_reply_to_wrong_answer(
        &self,
        question: Question,
        given_answer: String,
    ) -> Result<String> {
        println!(
            "Generating reply to wrong answer for question: {:?}",
            question.text
        );
        let correct_answer = question
            .options
            .get(question.correct_index)
            .ok_or(chatgpt::err::Error::BackendError {
                message: "No correct answer found".to_string(),
                error_type: "QuizError".to_string(),
            })?;

        let prompt = format!("You are a chat bot helping students learn logarithms.
        The student was solving this problem:
        {}
        The student answered {}, but the correct answer is {}.
        Generate a reply explaining what went wrong, leaning on this reference solution:
        {}
        Write the reply as if you were {}. Limit yourself to 1-2 medium paragraphs.",
         question.text, given_answer, correct_answer, question.explanation, self.personality.get_personality());

        let response: CompletionResponse = self.chat_gpt.send_message(&prompt).await?;
        let content = response.message().clone().content;

        println!("Completion: {:?}", content);

        Ok(content)
    }

    pub async fn generate_study_tip(&self, score: usize, total: usize) -> Result<String> {
        println!("Generating study tip for a score of {}/{}", score, total);
        let prompt = format!("You are a chat bot helping students learn logarithms.
        The student just finished a quiz and answered {} out of {} questions correctly.
        Suggest one concrete logarithm topic to review next, with a short sentence of encouragement.
        Write the reply as if you were {}. Limit the reply to 2 sentences.",
         score, total, self.personality.get_personality());

        let response: CompletionResponse = self.chat_gpt.send_message(&prompt).await?;
        let content = response.message().clone().content;

        println!("Completion: {:?}", content);

        Ok(content)
    }
}

pub enum Personality {
    Napier,
    Euler,
    Briggs,
}
impl Personality {
    pub fn get_personality(&self) -> String {
        match self {
            Personality::Napier => "John Napier, the inventor of logarithms",
            Personality::Euler => "Leonhard Euler",
            Personality::Briggs => "Henry Briggs, the author of the first base-10 log tables",
        }
        .to_string()
    }
}
