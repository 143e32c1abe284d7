use crate::error::{GoalError, PathError, QuizError, SessionError};
use crate::types::enums::{GoalStatus, PathStatus};
use crate::types::io::{
    CompleteQuizInput, CreateGoalInput, CreateSessionInput, StartPathInput, UpdateSessionInput,
};

const MINUTES_PER_DAY: u16 = 24 * 60;

pub fn validate_session_input(input: &CreateSessionInput) -> Result<(), SessionError> {
    if input.title.trim().is_empty() {
        return Err(SessionError::InvalidInput {
            message: "title must not be empty".to_string(),
        });
    }
    if input.duration_minutes == 0 {
        return Err(SessionError::InvalidInput {
            message: "duration must be positive".to_string(),
        });
    }
    if input.start_minute >= MINUTES_PER_DAY {
        return Err(SessionError::InvalidInput {
            message: "start minute must fall within the day".to_string(),
        });
    }
    Ok(())
}

pub fn validate_session_patch(input: &UpdateSessionInput) -> Result<(), SessionError> {
    if input.duration_minutes == Some(0) {
        return Err(SessionError::InvalidInput {
            message: "duration must be positive".to_string(),
        });
    }
    if input.start_minute.is_some_and(|minute| minute >= MINUTES_PER_DAY) {
        return Err(SessionError::InvalidInput {
            message: "start minute must fall within the day".to_string(),
        });
    }
    if input.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
        return Err(SessionError::InvalidInput {
            message: "title must not be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_goal_input(input: &CreateGoalInput) -> Result<(), GoalError> {
    if input.title.trim().is_empty() {
        return Err(GoalError::InvalidInput {
            message: "title must not be empty".to_string(),
        });
    }
    if input.target_value == 0 {
        return Err(GoalError::InvalidInput {
            message: "target must be positive".to_string(),
        });
    }
    let mut previous = 0;
    for milestone in &input.milestones {
        if milestone.threshold <= previous {
            return Err(GoalError::InvalidInput {
                message: "milestone thresholds must be strictly ascending".to_string(),
            });
        }
        if milestone.threshold > input.target_value {
            return Err(GoalError::InvalidInput {
                message: "milestone threshold exceeds the target".to_string(),
            });
        }
        previous = milestone.threshold;
    }
    Ok(())
}

pub fn validate_goal_transition(from: GoalStatus, to: GoalStatus) -> Result<(), GoalError> {
    use GoalStatus::{Active, Completed, Paused};

    if from == to {
        return Ok(());
    }

    let valid = matches!(
        (from, to),
        (Active, Completed) | (Active, Paused) | (Paused, Active) | (Paused, Completed)
    );

    if valid {
        Ok(())
    } else {
        Err(GoalError::InvalidTransition { from, to })
    }
}

pub fn validate_path_input(input: &StartPathInput) -> Result<(), PathError> {
    if input.title.trim().is_empty() {
        return Err(PathError::InvalidInput {
            message: "title must not be empty".to_string(),
        });
    }
    if input.certification.trim().is_empty() {
        return Err(PathError::InvalidInput {
            message: "certification must not be empty".to_string(),
        });
    }
    if input.topics.is_empty() {
        return Err(PathError::InvalidInput {
            message: "a path needs at least one topic".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path_transition(from: PathStatus, to: PathStatus) -> Result<(), PathError> {
    use PathStatus::{Active, Completed, Paused};

    if from == to {
        return Ok(());
    }

    let valid = matches!(
        (from, to),
        (Active, Paused) | (Active, Completed) | (Paused, Active)
    );

    if valid {
        Ok(())
    } else {
        Err(PathError::InvalidTransition { from, to })
    }
}

pub fn validate_quiz_input(input: &CompleteQuizInput) -> Result<(), QuizError> {
    if input.certification.trim().is_empty() {
        return Err(QuizError::InvalidInput {
            message: "certification must not be empty".to_string(),
        });
    }
    if input.score > 100 {
        return Err(QuizError::InvalidInput {
            message: "score must be between 0 and 100".to_string(),
        });
    }
    if input.question_count == 0 {
        return Err(QuizError::InvalidInput {
            message: "question count must be positive".to_string(),
        });
    }
    Ok(())
}
