pub mod analytics;
pub mod earned;
pub mod engine;
pub mod error;
pub mod events;
pub mod goals;
pub mod paths;
pub mod profile;
pub mod progress;
pub mod quizzes;
pub mod recommend;
pub mod sessions;
pub mod settings;
pub mod stopwatch;
pub mod store;
pub mod study;
pub mod validation;

pub mod types;

pub use crate::error::StudyError;
pub use crate::store::Store;
pub use crate::study::{RequestContext, StudyCore};
