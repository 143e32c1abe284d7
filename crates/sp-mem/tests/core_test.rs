use sp_core::StudyError;
use sp_core::error::{PathError, SessionError};
use sp_core::stopwatch::Stopwatch;
use sp_core::study::{RequestContext, StudyCore};
use sp_core::types::enums::{Difficulty, GoalKind, GoalStatus, PathStatus, SessionKind};
use sp_core::types::io::{
    CompleteQuizInput, CreateGoalInput, CreateSessionInput, MilestoneInput, SessionFilter,
    StartPathInput, UpdateSessionInput,
};
use sp_core::types::SessionId;
use sp_events::types::EventSource;
use sp_mem::MemStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn ctx() -> RequestContext {
    RequestContext::new(EventSource::Ui, None)
}

fn core() -> StudyCore<MemStore> {
    StudyCore::new(MemStore::new())
}

fn quiz(cert: &str, score: u32) -> CompleteQuizInput {
    CompleteQuizInput {
        certification: cert.to_string(),
        difficulty: Difficulty::Intermediate,
        score,
        question_count: 20,
        seconds_taken: None,
    }
}

fn counting_listener(core: &StudyCore<MemStore>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let clone = Arc::clone(&count);
    core.subscribe(move || {
        clone.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn one_mutation_wakes_each_listener_once_in_order() {
    let core = core();
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let order = Arc::clone(&order);
        core.subscribe(move || order.lock().unwrap().push(tag));
    }

    core.progress().add_study_time(&ctx(), 30).unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn unsubscribed_listener_receives_nothing() {
    let core = core();
    let count = Arc::new(AtomicUsize::new(0));
    let id = {
        let count = Arc::clone(&count);
        core.subscribe(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    };

    core.unsubscribe(id);
    core.unsubscribe(id);
    core.progress().add_study_time(&ctx(), 30).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn unknown_session_update_is_not_found_and_silent() {
    let core = core();
    let count = counting_listener(&core);

    let result = core.sessions().update(
        &ctx(),
        &SessionId::generate(),
        UpdateSessionInput {
            completed: Some(true),
            ..UpdateSessionInput::default()
        },
    );

    assert!(matches!(
        result,
        Err(StudyError::Session(SessionError::NotFound))
    ));
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(core.sessions().list(SessionFilter::default()).unwrap().is_empty());
}

#[test]
fn quiz_average_is_the_exact_integer_mean() {
    let core = core();
    for score in [80, 90, 70] {
        core.quizzes().complete(&ctx(), quiz("aws-saa", score)).unwrap();
    }

    let snapshot = core.progress().snapshot().unwrap();
    assert_eq!(snapshot.quizzes_completed, 3);
    assert_eq!(snapshot.average_score, 80);
}

#[test]
fn stopwatch_flush_lands_in_the_store() {
    let core = core();
    let mut watch = Stopwatch::new();
    watch.start();
    watch.tick(125);
    let minutes = watch.stop();
    assert_eq!(minutes, 3);

    core.progress().add_study_time(&ctx(), minutes).unwrap();
    assert_eq!(core.progress().snapshot().unwrap().total_study_minutes, 3);
}

#[test]
fn dedicated_learner_unlocks_exactly_at_threshold() {
    let short = core();
    short.progress().add_study_time(&ctx(), 599).unwrap();
    let achievements = short.achievements().list().unwrap();
    let dedicated = achievements
        .iter()
        .find(|a| a.id == "dedicated-learner")
        .unwrap();
    assert!(!dedicated.earned);
    assert!(dedicated.earned_at.is_none());

    let enough = core();
    enough.progress().add_study_time(&ctx(), 600).unwrap();
    let achievements = enough.achievements().list().unwrap();
    let dedicated = achievements
        .iter()
        .find(|a| a.id == "dedicated-learner")
        .unwrap();
    assert!(dedicated.earned);
    assert!(dedicated.earned_at.is_some());
    assert_eq!(dedicated.progress, dedicated.max_progress);
}

#[test]
fn earned_badge_survives_a_metric_drop() {
    let core = core();
    core.quizzes().complete(&ctx(), quiz("aws-saa", 100)).unwrap();

    let stamped_at = core
        .achievements()
        .list()
        .unwrap()
        .into_iter()
        .find(|a| a.id == "sharp-shooter")
        .unwrap();
    assert!(stamped_at.earned);
    let first_stamp = stamped_at.earned_at.unwrap();

    // Average falls to 50, well under the 90 threshold.
    core.quizzes().complete(&ctx(), quiz("aws-saa", 0)).unwrap();

    let after_drop = core
        .achievements()
        .list()
        .unwrap()
        .into_iter()
        .find(|a| a.id == "sharp-shooter")
        .unwrap();
    assert!(after_drop.earned);
    assert_eq!(after_drop.earned_at, Some(first_stamp));
}

#[test]
fn goal_progress_auto_completes_and_stamps_milestones() {
    let core = core();
    let goal = core
        .goals()
        .add(
            &ctx(),
            CreateGoalInput {
                title: "Finish the course".to_string(),
                description: None,
                kind: GoalKind::Time,
                target_value: 100,
                unit: "minutes".to_string(),
                deadline: None,
                priority: None,
                milestones: vec![MilestoneInput {
                    threshold: 50,
                    label: "halfway".to_string(),
                }],
            },
        )
        .unwrap();

    let updated = core.goals().record_progress(&ctx(), &goal.id, 100).unwrap();

    assert_eq!(updated.status, GoalStatus::Completed);
    let milestone = &updated.milestones[0];
    assert!(milestone.completed);
    assert!(milestone.completed_at.is_some());

    let bodies: Vec<String> = core
        .events()
        .list(None, None)
        .unwrap()
        .into_iter()
        .filter_map(|record| {
            record.body.get("type").and_then(|value| {
                value.as_str().map(str::to_string)
            })
        })
        .collect();
    assert!(bodies.contains(&"GoalCompleted".to_string()));
    assert!(bodies.contains(&"MilestoneReached".to_string()));
}

#[test]
fn failed_mutation_rolls_back_and_stays_silent() {
    let core = core();
    let count = counting_listener(&core);

    let result = core.quizzes().complete(&ctx(), quiz("aws-saa", 101));

    assert!(result.is_err());
    assert!(core.quizzes().list().unwrap().is_empty());
    assert!(core.events().list(None, None).unwrap().is_empty());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn finishing_every_topic_completes_the_path_and_the_cert() {
    let core = core();
    let path = core
        .paths()
        .start(
            &ctx(),
            StartPathInput {
                title: "ccna crash course".to_string(),
                certification: "ccna".to_string(),
                topics: vec!["Switching".to_string(), "Routing".to_string()],
                estimated_minutes_remaining: 90,
            },
        )
        .unwrap();

    core.paths().advance_topic(&ctx(), &path.id).unwrap();
    let done = core.paths().advance_topic(&ctx(), &path.id).unwrap();

    assert_eq!(done.status, PathStatus::Completed);
    assert_eq!(done.progress_percent, 100);
    assert_eq!(done.current_topic, None);

    let mastery = core
        .achievements()
        .list()
        .unwrap()
        .into_iter()
        .find(|a| a.id == "cert-ccna")
        .unwrap();
    assert!(mastery.earned);

    let again = core.paths().advance_topic(&ctx(), &path.id);
    assert!(matches!(
        again,
        Err(StudyError::Path(PathError::InvalidInput { .. }))
    ));
}

#[test]
fn sessions_round_trip_through_add_update_delete() {
    let core = core();
    let session = core
        .sessions()
        .add(
            &ctx(),
            CreateSessionInput {
                title: "Morning review".to_string(),
                description: None,
                date: chrono::Utc::now().date_naive(),
                start_minute: 8 * 60,
                duration_minutes: 30,
                kind: SessionKind::Review,
                certification: Some("aws-saa".to_string()),
                priority: None,
                reminder: false,
            },
        )
        .unwrap();

    let updated = core
        .sessions()
        .update(
            &ctx(),
            &session.id,
            UpdateSessionInput {
                completed: Some(true),
                ..UpdateSessionInput::default()
            },
        )
        .unwrap();
    assert!(updated.completed);

    let completed_only = core
        .sessions()
        .list(SessionFilter {
            completed: Some(true),
            ..SessionFilter::default()
        })
        .unwrap();
    assert_eq!(completed_only.len(), 1);

    core.sessions().delete(&ctx(), &session.id).unwrap();
    assert!(core.sessions().get(&session.id).unwrap().is_none());
    assert!(matches!(
        core.sessions().delete(&ctx(), &session.id),
        Err(StudyError::Session(SessionError::NotFound))
    ));
}

#[test]
fn event_log_sequences_are_strictly_increasing() {
    let core = core();
    core.progress().add_study_time(&ctx(), 10).unwrap();
    core.progress().add_study_time(&ctx(), 10).unwrap();
    core.quizzes().complete(&ctx(), quiz("aws-saa", 90)).unwrap();

    let events = core.events().list(None, None).unwrap();
    assert!(!events.is_empty());
    for pair in events.windows(2) {
        assert!(pair[1].seq > pair[0].seq);
    }

    let tail = core.events().list(Some(events[0].seq), None).unwrap();
    assert_eq!(tail.len(), events.len() - 1);
}

#[test]
fn demo_mode_toggle_notifies_and_reads_back() {
    let core = core();
    let count = counting_listener(&core);

    core.set_demo_mode(&ctx(), true).unwrap();

    assert!(core.demo_mode().unwrap());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
