use serde::{Deserialize, Serialize};
use sp_core::types::ProgressSnapshot;
use sp_core::types::enums::Difficulty;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("http status {status}")]
    Http { status: u16 },
    #[error("response decode failed: {message}")]
    Decode { message: String },
    #[error("not implemented")]
    NotImplemented,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub certification: String,
    pub difficulty: Difficulty,
    pub question_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuiz {
    pub certification: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredQuiz {
    pub score: u32,
    pub question_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationFeedback {
    pub title: String,
    pub accepted: bool,
}

/// The remote study platform, reduced to the typed calls this client
/// makes. The server itself is out of scope; implementations translate
/// these into whatever wire protocol they speak.
pub trait Backend {
    fn fetch_progress(&self, user_id: &str) -> Result<ProgressSnapshot, BackendError>;
    fn generate_quiz(&self, request: &QuizRequest) -> Result<GeneratedQuiz, BackendError>;
    fn submit_quiz(
        &self,
        quiz: &GeneratedQuiz,
        answers: &[usize],
    ) -> Result<ScoredQuiz, BackendError>;
    fn send_chat(&self, history: &[ChatMessage]) -> Result<ChatMessage, BackendError>;
    fn recommendation_feedback(
        &self,
        feedback: &RecommendationFeedback,
    ) -> Result<(), BackendError>;
}

/// Stand-in used until a real transport is wired up. Every call fails,
/// which sends the gateway straight into demo mode.
pub struct UnavailableBackend;

impl Backend for UnavailableBackend {
    fn fetch_progress(&self, _user_id: &str) -> Result<ProgressSnapshot, BackendError> {
        Err(BackendError::NotImplemented)
    }

    fn generate_quiz(&self, _request: &QuizRequest) -> Result<GeneratedQuiz, BackendError> {
        Err(BackendError::NotImplemented)
    }

    fn submit_quiz(
        &self,
        _quiz: &GeneratedQuiz,
        _answers: &[usize],
    ) -> Result<ScoredQuiz, BackendError> {
        Err(BackendError::NotImplemented)
    }

    fn send_chat(&self, _history: &[ChatMessage]) -> Result<ChatMessage, BackendError> {
        Err(BackendError::NotImplemented)
    }

    fn recommendation_feedback(
        &self,
        _feedback: &RecommendationFeedback,
    ) -> Result<(), BackendError> {
        Err(BackendError::NotImplemented)
    }
}
