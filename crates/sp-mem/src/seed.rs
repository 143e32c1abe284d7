use crate::store::{MemState, MemStore};
use chrono::{DateTime, Duration, Utc};
use sp_core::analytics;
use sp_core::engine;
use sp_core::profile::Profile;
use sp_core::types::enums::{
    Difficulty, GoalKind, GoalStatus, PathStatus, Priority, SessionKind, TopicStatus,
};
use sp_core::types::{
    ActiveStudyPath, EarnedAchievement, GoalId, GoalMilestone, PathId, ProgressSnapshot, QuizId,
    QuizRecord, SessionId, StudyGoal, StudySession, Topic,
};

const DEFAULT_CERTS: &[&str] = &["aws-saa", "az-104"];

const TOPIC_TITLES: &[&str] = &[
    "Core concepts",
    "Networking",
    "Storage",
    "Security",
    "Monitoring",
    "Cost management",
];

/// The state the store re-initializes to on every load. Derived fields
/// (snapshot counters, trend, earned ledger) are computed from the
/// seeded records with the same functions the live mutations use, so a
/// fresh store is indistinguishable from one that arrived at this state
/// organically.
pub fn demo_store(profile: &Profile) -> MemStore {
    MemStore::with_state(demo_state(profile, Utc::now()))
}

pub fn demo_state(profile: &Profile, now: DateTime<Utc>) -> MemState {
    let certs: Vec<String> = if profile.certifications.is_empty() {
        DEFAULT_CERTS.iter().map(|cert| (*cert).to_string()).collect()
    } else {
        profile.certifications.clone()
    };

    let mut state = MemState {
        demo_mode: true,
        ..MemState::default()
    };

    for (index, cert) in certs.iter().enumerate() {
        let completed = if index == 0 { 3 } else { 1 };
        state.paths.push(seed_path(cert, completed, index, now));
    }

    state.quizzes = seed_quizzes(&certs, now);
    state.sessions = seed_sessions(certs.first().map_or("aws-saa", String::as_str), now);

    state.progress = derive_snapshot(&state, now);
    state.goals = seed_goals(profile, &state.progress, now);

    for achievement in engine::evaluate(&state.progress, &state.progress.certifications) {
        if achievement.earned {
            state.earned.push(EarnedAchievement {
                achievement_id: achievement.id,
                earned_at: now,
            });
        }
    }

    state
}

fn seed_path(cert: &str, completed: u32, index: usize, now: DateTime<Utc>) -> ActiveStudyPath {
    let topics: Vec<Topic> = TOPIC_TITLES
        .iter()
        .enumerate()
        .map(|(position, title)| {
            let position = position as u32;
            let status = if position < completed {
                TopicStatus::Completed
            } else if position == completed {
                TopicStatus::Current
            } else {
                TopicStatus::Locked
            };
            Topic {
                id: position + 1,
                title: (*title).to_string(),
                status,
            }
        })
        .collect();

    let total = topics.len() as u32;
    let current_topic = topics
        .iter()
        .find(|topic| topic.status == TopicStatus::Current)
        .map(|topic| topic.title.clone());

    ActiveStudyPath {
        id: PathId::generate(),
        title: format!("{cert} exam path"),
        certification: cert.to_string(),
        started_at: now - Duration::days(21),
        last_accessed_at: now - Duration::days(index as i64 + 1),
        topics_total: total,
        topics_completed: completed,
        current_topic,
        estimated_minutes_remaining: (total - completed) * 45,
        status: PathStatus::Active,
        progress_percent: u8::try_from(completed * 100 / total).unwrap_or(100),
        topics,
    }
}

fn seed_quizzes(certs: &[String], now: DateTime<Utc>) -> Vec<QuizRecord> {
    let scores = [72, 85, 78, 91, 84];
    scores
        .iter()
        .enumerate()
        .map(|(index, score)| {
            let completed_at = now - Duration::days(scores.len() as i64 - 1 - index as i64);
            QuizRecord {
                id: QuizId::generate(),
                certification: certs[index % certs.len()].clone(),
                difficulty: if index % 2 == 0 {
                    Difficulty::Intermediate
                } else {
                    Difficulty::Beginner
                },
                score: *score,
                question_count: 20,
                completed_at,
                seconds_taken: Some(600 + index as u32 * 45),
            }
        })
        .collect()
}

fn seed_sessions(cert: &str, now: DateTime<Utc>) -> Vec<StudySession> {
    let yesterday = (now - Duration::days(1)).date_naive();
    let tomorrow = (now + Duration::days(1)).date_naive();
    vec![
        StudySession {
            id: SessionId::generate(),
            title: "Review flagged questions".to_string(),
            description: None,
            date: yesterday,
            start_minute: 18 * 60,
            duration_minutes: 45,
            kind: SessionKind::Review,
            certification: Some(cert.to_string()),
            priority: Priority::Medium,
            completed: true,
            reminder: false,
            created_at: now - Duration::days(3),
            updated_at: now - Duration::days(1),
        },
        StudySession {
            id: SessionId::generate(),
            title: "Practice quiz block".to_string(),
            description: Some("Timed, exam conditions".to_string()),
            date: tomorrow,
            start_minute: 19 * 60 + 30,
            duration_minutes: 60,
            kind: SessionKind::Quiz,
            certification: Some(cert.to_string()),
            priority: Priority::High,
            completed: false,
            reminder: true,
            created_at: now - Duration::days(2),
            updated_at: now - Duration::days(2),
        },
    ]
}

fn seed_goals(profile: &Profile, progress: &ProgressSnapshot, now: DateTime<Utc>) -> Vec<StudyGoal> {
    let weekly_target = profile.weekly_minutes_target.unwrap_or(300);
    let weekly_current = weekly_target.min(progress.total_study_minutes) / 2;
    let time_goal = StudyGoal {
        id: GoalId::generate(),
        title: "Weekly study time".to_string(),
        description: Some("Stay on pace for the exam date".to_string()),
        kind: GoalKind::Time,
        target_value: weekly_target,
        current_value: weekly_current,
        unit: "minutes".to_string(),
        deadline: Some((now + Duration::days(5)).date_naive()),
        priority: Priority::High,
        status: GoalStatus::Active,
        created_at: now - Duration::days(7),
        milestones: [weekly_target / 3, weekly_target * 2 / 3]
            .iter()
            .map(|threshold| GoalMilestone {
                threshold: *threshold,
                label: format!("{threshold} minutes"),
                completed: weekly_current >= *threshold,
                completed_at: (weekly_current >= *threshold).then_some(now - Duration::days(2)),
            })
            .collect(),
    };

    let score_goal = StudyGoal {
        id: GoalId::generate(),
        title: "Average score above 90".to_string(),
        description: None,
        kind: GoalKind::Score,
        target_value: 90,
        current_value: progress.average_score,
        unit: "percent".to_string(),
        deadline: None,
        priority: Priority::Medium,
        status: GoalStatus::Active,
        created_at: now - Duration::days(10),
        milestones: Vec::new(),
    };

    vec![time_goal, score_goal]
}

fn derive_snapshot(state: &MemState, now: DateTime<Utc>) -> ProgressSnapshot {
    let today = now.date_naive();
    let mut snapshot = ProgressSnapshot::default();

    // Four days of logged time ending today keeps the seeded streak alive.
    for (offset, minutes) in [(3, 35), (2, 50), (1, 25), (0, 30)] {
        let date = (now - Duration::days(offset)).date_naive();
        analytics::record_study_minutes(&mut snapshot.trend, date, minutes);
        snapshot.total_study_minutes += minutes;
    }

    let quiz_days: Vec<_> = state
        .quizzes
        .iter()
        .map(|quiz| quiz.completed_at.date_naive())
        .collect();
    for date in quiz_days {
        if let Some(score) = analytics::day_score(&state.quizzes, date) {
            analytics::record_quiz_score(&mut snapshot.trend, date, score);
        }
    }

    let scores: Vec<u32> = state.quizzes.iter().map(|quiz| quiz.score).collect();
    snapshot.quizzes_completed = scores.len() as u32;
    snapshot.average_score = analytics::integer_mean(&scores);
    snapshot.streak_days = analytics::streak_days(&snapshot.trend, today);
    snapshot.certifications = analytics::cert_progress_from_paths(&state.paths);

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_counters_match_seeded_records() {
        let state = demo_state(&Profile::default(), Utc::now());
        assert_eq!(
            state.progress.quizzes_completed as usize,
            state.quizzes.len()
        );
        assert_eq!(
            state.progress.certifications.len(),
            DEFAULT_CERTS.len()
        );
        assert!(state.demo_mode);
    }

    #[test]
    fn seeded_streak_reaches_today() {
        let state = demo_state(&Profile::default(), Utc::now());
        assert!(state.progress.streak_days >= 4);
    }

    #[test]
    fn profile_certifications_override_defaults() {
        let profile = Profile {
            certifications: vec!["ccna".to_string()],
            ..Profile::default()
        };
        let state = demo_state(&profile, Utc::now());
        assert_eq!(state.paths.len(), 1);
        assert!(state.progress.certifications.contains_key("ccna"));
    }

    #[test]
    fn seeded_ledger_matches_engine_output() {
        let state = demo_state(&Profile::default(), Utc::now());
        let earned_ids: Vec<&str> = state
            .earned
            .iter()
            .map(|entry| entry.achievement_id.as_str())
            .collect();
        for achievement in engine::evaluate(&state.progress, &state.progress.certifications) {
            assert_eq!(
                achievement.earned,
                earned_ids.contains(&achievement.id.as_str())
            );
        }
    }
}
