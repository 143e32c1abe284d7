use crate::backend::{
    Backend, BackendError, ChatMessage, ChatRole, GeneratedQuiz, QuizQuestion, QuizRequest,
    RecommendationFeedback, ScoredQuiz,
};
use sp_core::StudyError;
use sp_core::store::Store;
use sp_core::study::{RequestContext, StudyCore};
use sp_core::types::ProgressSnapshot;
use sp_core::types::io::CompleteQuizInput;
use sp_events::types::EventSource;

/// Question pool backing demo-mode quiz generation. Deliberately
/// generic: demo quizzes exercise the flow, not the syllabus.
const SAMPLE_QUESTIONS: &[(&str, &[&str], usize)] = &[
    (
        "Which plan spreads reviews out as material gets older?",
        &["Cramming", "Spaced repetition", "Skimming", "Highlighting"],
        1,
    ),
    (
        "What should you do first with a practice exam?",
        &[
            "Memorize the answer key",
            "Take it under timed conditions",
            "Read every explanation",
            "Skip to the hard questions",
        ],
        1,
    ),
    (
        "A study streak is broken by",
        &[
            "a day with no study activity",
            "a low quiz score",
            "switching certifications",
            "pausing a goal",
        ],
        0,
    ),
];

/// Composition layer between the UI and the remote platform. The first
/// backend failure flips the core into demo mode (a one-shot
/// substitution, no retry) and every later call is served from the
/// in-memory store.
pub struct Gateway<S: Store, B: Backend> {
    core: StudyCore<S>,
    backend: B,
}

impl<S: Store, B: Backend> Gateway<S, B> {
    pub fn new(core: StudyCore<S>, backend: B) -> Self {
        Self { core, backend }
    }

    pub fn core(&self) -> &StudyCore<S> {
        &self.core
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether the "simulated data" banner should be shown.
    pub fn demo_banner(&self) -> Result<bool, StudyError> {
        self.core.demo_mode()
    }

    pub fn progress(&self, user_id: &str) -> Result<ProgressSnapshot, StudyError> {
        if self.core.demo_mode()? {
            return self.core.progress().snapshot();
        }
        match self.backend.fetch_progress(user_id) {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                self.enter_demo_mode(&err)?;
                self.core.progress().snapshot()
            }
        }
    }

    pub fn generate_quiz(&self, request: &QuizRequest) -> Result<GeneratedQuiz, StudyError> {
        if self.core.demo_mode()? {
            return Ok(demo_quiz(request));
        }
        match self.backend.generate_quiz(request) {
            Ok(quiz) => Ok(quiz),
            Err(err) => {
                self.enter_demo_mode(&err)?;
                Ok(demo_quiz(request))
            }
        }
    }

    /// Scores the quiz and, in demo mode, records the result in the
    /// store so progress and achievements move like they would against
    /// the live platform.
    pub fn submit_quiz(
        &self,
        quiz: &GeneratedQuiz,
        answers: &[usize],
    ) -> Result<ScoredQuiz, StudyError> {
        if self.core.demo_mode()? {
            return self.record_demo_quiz(quiz, answers);
        }
        match self.backend.submit_quiz(quiz, answers) {
            Ok(scored) => Ok(scored),
            Err(err) => {
                self.enter_demo_mode(&err)?;
                self.record_demo_quiz(quiz, answers)
            }
        }
    }

    pub fn chat(&self, history: &[ChatMessage]) -> Result<ChatMessage, StudyError> {
        if self.core.demo_mode()? {
            return Ok(demo_chat_reply(history));
        }
        match self.backend.send_chat(history) {
            Ok(reply) => Ok(reply),
            Err(err) => {
                self.enter_demo_mode(&err)?;
                Ok(demo_chat_reply(history))
            }
        }
    }

    pub fn recommendation_feedback(
        &self,
        feedback: &RecommendationFeedback,
    ) -> Result<(), StudyError> {
        if self.core.demo_mode()? {
            tracing::debug!(title = %feedback.title, "feedback dropped in demo mode");
            return Ok(());
        }
        match self.backend.recommendation_feedback(feedback) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.enter_demo_mode(&err)?;
                Ok(())
            }
        }
    }

    fn record_demo_quiz(
        &self,
        quiz: &GeneratedQuiz,
        answers: &[usize],
    ) -> Result<ScoredQuiz, StudyError> {
        let scored = score_quiz(quiz, answers);
        self.core.quizzes().complete(
            &self.ctx(),
            CompleteQuizInput {
                certification: quiz.certification.clone(),
                difficulty: quiz.difficulty,
                score: scored.score,
                question_count: scored.question_count,
                seconds_taken: None,
            },
        )?;
        Ok(scored)
    }

    fn enter_demo_mode(&self, err: &BackendError) -> Result<(), StudyError> {
        tracing::warn!(error = %err, "backend call failed, serving demo data");
        self.core.set_demo_mode(&self.ctx(), true)
    }

    fn ctx(&self) -> RequestContext {
        RequestContext::new(EventSource::Gateway, None)
    }
}

fn demo_quiz(request: &QuizRequest) -> GeneratedQuiz {
    let count = request.question_count.clamp(1, 20) as usize;
    let questions: Vec<QuizQuestion> = (0..count)
        .map(|index| {
            let (prompt, choices, answer_index) = SAMPLE_QUESTIONS[index % SAMPLE_QUESTIONS.len()];
            QuizQuestion {
                prompt: prompt.to_string(),
                choices: choices.iter().map(|choice| (*choice).to_string()).collect(),
                answer_index,
            }
        })
        .collect();
    GeneratedQuiz {
        certification: request.certification.clone(),
        difficulty: request.difficulty,
        questions,
    }
}

fn score_quiz(quiz: &GeneratedQuiz, answers: &[usize]) -> ScoredQuiz {
    let total = quiz.questions.len();
    let correct = quiz
        .questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.answer_index == **answer)
        .count();
    let score = if total == 0 {
        0
    } else {
        u32::try_from(correct * 100 / total).unwrap_or(100)
    };
    ScoredQuiz {
        score,
        question_count: u32::try_from(total).unwrap_or(u32::MAX),
    }
}

fn demo_chat_reply(history: &[ChatMessage]) -> ChatMessage {
    let topic = history
        .iter()
        .rev()
        .find(|message| message.role == ChatRole::User)
        .map_or("your question", |message| message.content.as_str());
    ChatMessage {
        role: ChatRole::Assistant,
        content: format!(
            "You're in demo mode, so here's a canned pointer on \"{topic}\": break it into \
             a quiz session and a review session, then check the explanation for anything \
             you missed."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::types::enums::Difficulty;

    fn request(count: u32) -> QuizRequest {
        QuizRequest {
            certification: "aws-saa".to_string(),
            difficulty: Difficulty::Beginner,
            question_count: count,
        }
    }

    #[test]
    fn demo_quiz_honors_the_requested_count() {
        assert_eq!(demo_quiz(&request(5)).questions.len(), 5);
        assert_eq!(demo_quiz(&request(0)).questions.len(), 1);
    }

    #[test]
    fn perfect_answers_score_100() {
        let quiz = demo_quiz(&request(3));
        let answers: Vec<usize> = quiz.questions.iter().map(|q| q.answer_index).collect();
        let scored = score_quiz(&quiz, &answers);
        assert_eq!(scored.score, 100);
        assert_eq!(scored.question_count, 3);
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let quiz = demo_quiz(&request(4));
        let scored = score_quiz(&quiz, &[]);
        assert_eq!(scored.score, 0);
    }
}
