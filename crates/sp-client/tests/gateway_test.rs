use sp_client::backend::{
    Backend, BackendError, ChatMessage, ChatRole, GeneratedQuiz, QuizRequest,
    RecommendationFeedback, ScoredQuiz,
};
use sp_client::gateway::Gateway;
use sp_core::study::StudyCore;
use sp_core::types::ProgressSnapshot;
use sp_core::types::enums::Difficulty;
use sp_mem::MemStore;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts calls and fails every one of them.
#[derive(Default)]
struct DownBackend {
    calls: AtomicUsize,
}

impl DownBackend {
    fn fail<T>(&self) -> Result<T, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(BackendError::Unavailable {
            reason: "connection refused".to_string(),
        })
    }
}

impl Backend for DownBackend {
    fn fetch_progress(&self, _user_id: &str) -> Result<ProgressSnapshot, BackendError> {
        self.fail()
    }

    fn generate_quiz(&self, _request: &QuizRequest) -> Result<GeneratedQuiz, BackendError> {
        self.fail()
    }

    fn submit_quiz(
        &self,
        _quiz: &GeneratedQuiz,
        _answers: &[usize],
    ) -> Result<ScoredQuiz, BackendError> {
        self.fail()
    }

    fn send_chat(&self, _history: &[ChatMessage]) -> Result<ChatMessage, BackendError> {
        self.fail()
    }

    fn recommendation_feedback(
        &self,
        _feedback: &RecommendationFeedback,
    ) -> Result<(), BackendError> {
        self.fail()
    }
}

fn gateway() -> Gateway<MemStore, DownBackend> {
    Gateway::new(StudyCore::new(MemStore::new()), DownBackend::default())
}

#[test]
fn first_failure_flips_demo_mode_and_serves_store_data() {
    let gateway = gateway();
    assert!(!gateway.demo_banner().unwrap());

    let snapshot = gateway.progress("user-1").unwrap();
    assert_eq!(snapshot.total_study_minutes, 0);
    assert!(gateway.demo_banner().unwrap());
}

#[test]
fn fallback_is_one_shot_with_no_retry() {
    let gateway = gateway();
    gateway.progress("user-1").unwrap();
    gateway.progress("user-1").unwrap();
    gateway.progress("user-1").unwrap();

    // Only the first call ever reached the backend.
    assert_eq!(gateway.backend().calls.load(Ordering::SeqCst), 1);
}

#[test]
fn demo_quiz_round_trip_lands_in_the_store() {
    let gateway = gateway();
    let quiz = gateway
        .generate_quiz(&QuizRequest {
            certification: "aws-saa".to_string(),
            difficulty: Difficulty::Beginner,
            question_count: 3,
        })
        .unwrap();
    assert!(gateway.demo_banner().unwrap());

    let answers: Vec<usize> = quiz.questions.iter().map(|q| q.answer_index).collect();
    let scored = gateway.submit_quiz(&quiz, &answers).unwrap();
    assert_eq!(scored.score, 100);

    let snapshot = gateway.core().progress().snapshot().unwrap();
    assert_eq!(snapshot.quizzes_completed, 1);
    assert_eq!(snapshot.average_score, 100);
    assert_eq!(gateway.core().quizzes().list().unwrap().len(), 1);
}

#[test]
fn chat_falls_back_to_a_demo_reply() {
    let gateway = gateway();
    let reply = gateway
        .chat(&[ChatMessage {
            role: ChatRole::User,
            content: "How do I prepare for the networking section?".to_string(),
        }])
        .unwrap();

    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(reply.content.contains("demo mode"));
}
