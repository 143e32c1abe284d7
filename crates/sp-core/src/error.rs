use crate::types::enums::{GoalStatus, PathStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum GoalError {
    #[error("goal not found")]
    NotFound,
    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: GoalStatus, to: GoalStatus },
    #[error("milestone not found: {label}")]
    MilestoneNotFound { label: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("study path not found")]
    NotFound,
    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: PathStatus, to: PathStatus },
    #[error("no current topic")]
    NoCurrentTopic,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile unreadable: {message}")]
    Unreadable { message: String },
    #[error("profile malformed: {message}")]
    Malformed { message: String },
}

#[derive(Debug, Error)]
pub enum StudyError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("internal error: {message}")]
    Internal { message: String },
}
