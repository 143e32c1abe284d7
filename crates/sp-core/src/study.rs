use crate::analytics;
use crate::engine;
use crate::earned::EarnedRepository;
use crate::error::{GoalError, PathError, ProgressError, SessionError, StudyError};
use crate::events::EventRepository;
use crate::goals::GoalRepository;
use crate::paths::PathRepository;
use crate::progress::ProgressRepository;
use crate::quizzes::QuizRepository;
use crate::recommend::{self, StudyRecommendation};
use crate::sessions::SessionRepository;
use crate::settings::SettingsRepository;
use crate::store::Store;
use crate::types::enums::{GoalStatus, PathStatus, Priority, TopicStatus};
use crate::types::event::EventBody;
use crate::types::io::{
    CompleteQuizInput, CreateGoalInput, CreateSessionInput, SessionFilter, StartPathInput,
    UpdateGoalInput, UpdatePathInput, UpdateSessionInput,
};
use crate::types::{
    Achievement, ActiveStudyPath, EarnedAchievement, GoalId, GoalMilestone, PathId,
    ProgressSnapshot, QuizId, QuizRecord, QuizStats, SessionId, StudyGoal, StudySession, Topic,
};
use crate::validation::{
    validate_goal_input, validate_goal_transition, validate_path_input, validate_path_transition,
    validate_quiz_input, validate_session_input, validate_session_patch,
};
use chrono::{DateTime, NaiveDate, Utc};
use sp_events::bus::{ListenerBus, ListenerId};
use sp_events::types::{EventRecord, EventSource};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub source: EventSource,
    pub correlation_id: Option<String>,
}

impl RequestContext {
    pub fn new(source: EventSource, correlation_id: Option<String>) -> Self {
        Self {
            source,
            correlation_id,
        }
    }
}

/// The observable study store. Owns the backing [`Store`] and the
/// listener registry; constructed once by the composition root and
/// passed by reference; there is no ambient global instance.
pub struct StudyCore<S: Store> {
    store: S,
    bus: ListenerBus,
}

impl<S: Store> StudyCore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            bus: ListenerBus::new(),
        }
    }

    /// Registers a zero-argument callback invoked after every successful
    /// mutation, in registration order.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bus.subscribe(listener)
    }

    /// No-op for ids that were never issued or were already removed.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.bus.unsubscribe(id);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn demo_mode(&self) -> Result<bool, StudyError> {
        self.store.settings().demo_mode()
    }

    pub fn set_demo_mode(&self, ctx: &RequestContext, enabled: bool) -> Result<(), StudyError> {
        self.with_events(ctx, |store| {
            store.settings().set_demo_mode(enabled)?;
            Ok(((), vec![EventBody::DemoModeChanged { enabled }]))
        })
    }

    pub fn sessions(&self) -> SessionsApi<'_, S> {
        SessionsApi { core: self }
    }

    pub fn goals(&self) -> GoalsApi<'_, S> {
        GoalsApi { core: self }
    }

    pub fn paths(&self) -> PathsApi<'_, S> {
        PathsApi { core: self }
    }

    pub fn quizzes(&self) -> QuizzesApi<'_, S> {
        QuizzesApi { core: self }
    }

    pub fn progress(&self) -> ProgressApi<'_, S> {
        ProgressApi { core: self }
    }

    pub fn achievements(&self) -> AchievementsApi<'_, S> {
        AchievementsApi { core: self }
    }

    pub fn events(&self) -> EventsApi<'_, S> {
        EventsApi { core: self }
    }

    /// Runs the mutation transactionally, appends its event records, and
    /// wakes the listeners exactly once, however many events the
    /// mutation produced. A failed mutation logs nothing and wakes
    /// nobody.
    fn with_events<T, F>(&self, ctx: &RequestContext, f: F) -> Result<T, StudyError>
    where
        F: FnOnce(&S) -> Result<(T, Vec<EventBody>), StudyError>,
    {
        let value = self.store.with_tx(|store| {
            let (value, bodies) = f(store)?;
            for body in bodies {
                let record = build_event_record(ctx, body)?;
                store.events().append(record)?;
            }
            Ok(value)
        })?;
        self.bus.notify();
        Ok(value)
    }
}

pub struct SessionsApi<'a, S: Store> {
    core: &'a StudyCore<S>,
}

impl<'a, S: Store> SessionsApi<'a, S> {
    pub fn add(
        &self,
        ctx: &RequestContext,
        input: CreateSessionInput,
    ) -> Result<StudySession, StudyError> {
        self.core.with_events(ctx, |store| {
            validate_session_input(&input)?;
            let now = Utc::now();
            let session = StudySession {
                id: SessionId::generate(),
                title: input.title,
                description: input.description,
                date: input.date,
                start_minute: input.start_minute,
                duration_minutes: input.duration_minutes,
                kind: input.kind,
                certification: input.certification,
                priority: input.priority.unwrap_or(Priority::Medium),
                completed: false,
                reminder: input.reminder,
                created_at: now,
                updated_at: now,
            };
            let session = store.sessions().insert(session)?;
            Ok((
                session.clone(),
                vec![EventBody::SessionAdded { session }],
            ))
        })
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        id: &SessionId,
        input: UpdateSessionInput,
    ) -> Result<StudySession, StudyError> {
        self.core.with_events(ctx, |store| {
            validate_session_patch(&input)?;
            let session = store.sessions().get(id)?;
            let Some(mut session) = session else {
                return Err(StudyError::Session(SessionError::NotFound));
            };
            if let Some(title) = input.title {
                session.title = title;
            }
            if let Some(description) = input.description {
                session.description = Some(description);
            }
            if let Some(date) = input.date {
                session.date = date;
            }
            if let Some(start_minute) = input.start_minute {
                session.start_minute = start_minute;
            }
            if let Some(duration_minutes) = input.duration_minutes {
                session.duration_minutes = duration_minutes;
            }
            if let Some(kind) = input.kind {
                session.kind = kind;
            }
            if let Some(certification) = input.certification {
                session.certification = Some(certification);
            }
            if let Some(priority) = input.priority {
                session.priority = priority;
            }
            if let Some(completed) = input.completed {
                session.completed = completed;
            }
            if let Some(reminder) = input.reminder {
                session.reminder = reminder;
            }
            session.updated_at = Utc::now();
            let session = store.sessions().replace(session)?;
            Ok((
                session.clone(),
                vec![EventBody::SessionUpdated { session }],
            ))
        })
    }

    pub fn delete(&self, ctx: &RequestContext, id: &SessionId) -> Result<(), StudyError> {
        self.core.with_events(ctx, |store| {
            store.sessions().remove(id)?;
            Ok((
                (),
                vec![EventBody::SessionDeleted {
                    session_id: id.clone(),
                }],
            ))
        })
    }

    pub fn get(&self, id: &SessionId) -> Result<Option<StudySession>, StudyError> {
        self.core.store.sessions().get(id).map_err(StudyError::from)
    }

    pub fn list(&self, filter: SessionFilter) -> Result<Vec<StudySession>, StudyError> {
        self.core
            .store
            .sessions()
            .list(filter)
            .map_err(StudyError::from)
    }
}

pub struct GoalsApi<'a, S: Store> {
    core: &'a StudyCore<S>,
}

impl<'a, S: Store> GoalsApi<'a, S> {
    pub fn add(&self, ctx: &RequestContext, input: CreateGoalInput) -> Result<StudyGoal, StudyError> {
        self.core.with_events(ctx, |store| {
            validate_goal_input(&input)?;
            let goal = StudyGoal {
                id: GoalId::generate(),
                title: input.title,
                description: input.description,
                kind: input.kind,
                target_value: input.target_value,
                current_value: 0,
                unit: input.unit,
                deadline: input.deadline,
                priority: input.priority.unwrap_or(Priority::Medium),
                status: GoalStatus::Active,
                created_at: Utc::now(),
                milestones: input
                    .milestones
                    .into_iter()
                    .map(|milestone| GoalMilestone {
                        threshold: milestone.threshold,
                        label: milestone.label,
                        completed: false,
                        completed_at: None,
                    })
                    .collect(),
            };
            let goal = store.goals().insert(goal)?;
            Ok((goal.clone(), vec![EventBody::GoalAdded { goal }]))
        })
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        id: &GoalId,
        input: UpdateGoalInput,
    ) -> Result<StudyGoal, StudyError> {
        self.core.with_events(ctx, |store| {
            let goal = store.goals().get(id)?;
            let Some(mut goal) = goal else {
                return Err(StudyError::Goal(GoalError::NotFound));
            };
            if let Some(status) = input.status {
                validate_goal_transition(goal.status, status)?;
                goal.status = status;
            }
            if let Some(title) = input.title {
                goal.title = title;
            }
            if let Some(description) = input.description {
                goal.description = Some(description);
            }
            if let Some(target_value) = input.target_value {
                if target_value == 0 {
                    return Err(StudyError::Goal(GoalError::InvalidInput {
                        message: "target must be positive".to_string(),
                    }));
                }
                goal.target_value = target_value;
            }
            if let Some(current_value) = input.current_value {
                goal.current_value = current_value;
            }
            if let Some(unit) = input.unit {
                goal.unit = unit;
            }
            if let Some(deadline) = input.deadline {
                goal.deadline = Some(deadline);
            }
            if let Some(priority) = input.priority {
                goal.priority = priority;
            }

            let progress_touched = input.current_value.is_some() || input.target_value.is_some();
            let (stamped, completed_now) = if progress_touched {
                apply_goal_progress(&mut goal, Utc::now())
            } else {
                (Vec::new(), false)
            };

            let goal = store.goals().replace(goal)?;
            let mut events = vec![EventBody::GoalUpdated { goal: goal.clone() }];
            for label in stamped {
                events.push(EventBody::MilestoneReached {
                    goal_id: goal.id.clone(),
                    label,
                });
            }
            if completed_now {
                events.push(EventBody::GoalCompleted { goal: goal.clone() });
            }
            Ok((goal, events))
        })
    }

    /// Sets the goal's current value and applies the completion rule:
    /// crossed milestones are stamped and an active goal whose current
    /// value reaches the target transitions to `Completed`.
    pub fn record_progress(
        &self,
        ctx: &RequestContext,
        id: &GoalId,
        value: u32,
    ) -> Result<StudyGoal, StudyError> {
        self.update(
            ctx,
            id,
            UpdateGoalInput {
                current_value: Some(value),
                ..UpdateGoalInput::default()
            },
        )
    }

    /// Manual milestone completion, independent of the current value.
    pub fn complete_milestone(
        &self,
        ctx: &RequestContext,
        id: &GoalId,
        label: &str,
    ) -> Result<StudyGoal, StudyError> {
        self.core.with_events(ctx, |store| {
            let goal = store.goals().get(id)?;
            let Some(mut goal) = goal else {
                return Err(StudyError::Goal(GoalError::NotFound));
            };
            let Some(milestone) = goal
                .milestones
                .iter_mut()
                .find(|milestone| milestone.label == label)
            else {
                return Err(StudyError::Goal(GoalError::MilestoneNotFound {
                    label: label.to_string(),
                }));
            };
            let mut events = Vec::new();
            if !milestone.completed {
                milestone.completed = true;
                milestone.completed_at = Some(Utc::now());
                events.push(EventBody::MilestoneReached {
                    goal_id: goal.id.clone(),
                    label: label.to_string(),
                });
            }
            let goal = store.goals().replace(goal)?;
            events.insert(0, EventBody::GoalUpdated { goal: goal.clone() });
            Ok((goal, events))
        })
    }

    pub fn delete(&self, ctx: &RequestContext, id: &GoalId) -> Result<(), StudyError> {
        self.core.with_events(ctx, |store| {
            store.goals().remove(id)?;
            Ok((
                (),
                vec![EventBody::GoalDeleted {
                    goal_id: id.clone(),
                }],
            ))
        })
    }

    pub fn get(&self, id: &GoalId) -> Result<Option<StudyGoal>, StudyError> {
        self.core.store.goals().get(id).map_err(StudyError::from)
    }

    pub fn list(&self) -> Result<Vec<StudyGoal>, StudyError> {
        self.core.store.goals().list().map_err(StudyError::from)
    }
}

pub struct PathsApi<'a, S: Store> {
    core: &'a StudyCore<S>,
}

impl<'a, S: Store> PathsApi<'a, S> {
    /// Starts a curriculum instance. The first topic opens as `Current`,
    /// the rest stay `Locked`; the new path is prepended so the most
    /// recently started one lists first.
    pub fn start(
        &self,
        ctx: &RequestContext,
        input: StartPathInput,
    ) -> Result<ActiveStudyPath, StudyError> {
        self.core.with_events(ctx, |store| {
            validate_path_input(&input)?;
            let now = Utc::now();
            let topics: Vec<Topic> = input
                .topics
                .iter()
                .enumerate()
                .map(|(index, title)| Topic {
                    id: u32::try_from(index).unwrap_or(u32::MAX) + 1,
                    title: title.clone(),
                    status: if index == 0 {
                        TopicStatus::Current
                    } else {
                        TopicStatus::Locked
                    },
                })
                .collect();
            let path = ActiveStudyPath {
                id: PathId::generate(),
                title: input.title,
                certification: input.certification,
                started_at: now,
                last_accessed_at: now,
                topics_total: u32::try_from(topics.len()).unwrap_or(u32::MAX),
                topics_completed: 0,
                current_topic: topics.first().map(|topic| topic.title.clone()),
                estimated_minutes_remaining: input.estimated_minutes_remaining,
                status: PathStatus::Active,
                progress_percent: 0,
                topics,
            };
            let path = store.paths().insert_front(path)?;
            sync_cert_progress(store)?;
            Ok((path.clone(), vec![EventBody::PathStarted { path }]))
        })
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        id: &PathId,
        input: UpdatePathInput,
    ) -> Result<ActiveStudyPath, StudyError> {
        self.core.with_events(ctx, |store| {
            let path = store.paths().get(id)?;
            let Some(mut path) = path else {
                return Err(StudyError::Path(PathError::NotFound));
            };
            let previous_status = path.status;
            if let Some(status) = input.status {
                validate_path_transition(path.status, status)?;
                path.status = status;
            }
            if let Some(estimated) = input.estimated_minutes_remaining {
                path.estimated_minutes_remaining = estimated;
            }
            path.last_accessed_at = Utc::now();
            let path = store.paths().replace(path)?;
            let mut events = vec![EventBody::PathUpdated { path: path.clone() }];
            if path.status == PathStatus::Completed && previous_status != PathStatus::Completed {
                events.push(EventBody::PathCompleted { path: path.clone() });
            }
            Ok((path, events))
        })
    }

    /// Completes the current topic, unlocks the next, and recomputes the
    /// path's counters. Finishing the last topic completes the path.
    pub fn advance_topic(
        &self,
        ctx: &RequestContext,
        id: &PathId,
    ) -> Result<ActiveStudyPath, StudyError> {
        self.core.with_events(ctx, |store| {
            let path = store.paths().get(id)?;
            let Some(mut path) = path else {
                return Err(StudyError::Path(PathError::NotFound));
            };
            if path.status != PathStatus::Active {
                return Err(StudyError::Path(PathError::InvalidInput {
                    message: "path is not active".to_string(),
                }));
            }
            let Some(current_index) = path
                .topics
                .iter()
                .position(|topic| topic.status == TopicStatus::Current)
            else {
                return Err(StudyError::Path(PathError::NoCurrentTopic));
            };

            path.topics[current_index].status = TopicStatus::Completed;
            let advanced_over = path.topics[current_index].title.clone();
            path.topics_completed += 1;

            let mut completed_path = false;
            match path.topics.get_mut(current_index + 1) {
                Some(next) => {
                    next.status = TopicStatus::Current;
                    path.current_topic = Some(next.title.clone());
                }
                None => {
                    path.current_topic = None;
                    path.status = PathStatus::Completed;
                    path.estimated_minutes_remaining = 0;
                    completed_path = true;
                }
            }
            path.progress_percent = if path.topics_total == 0 {
                0
            } else {
                u8::try_from(path.topics_completed * 100 / path.topics_total).unwrap_or(100)
            };
            path.last_accessed_at = Utc::now();

            let path = store.paths().replace(path)?;
            sync_cert_progress(store)?;

            let mut events = vec![EventBody::TopicAdvanced {
                path: path.clone(),
                topic: advanced_over,
            }];
            if completed_path {
                events.push(EventBody::PathCompleted { path: path.clone() });
            }
            events.extend(stamp_new_achievements(store, Utc::now())?);
            Ok((path, events))
        })
    }

    pub fn get(&self, id: &PathId) -> Result<Option<ActiveStudyPath>, StudyError> {
        self.core.store.paths().get(id).map_err(StudyError::from)
    }

    pub fn list(&self) -> Result<Vec<ActiveStudyPath>, StudyError> {
        self.core.store.paths().list().map_err(StudyError::from)
    }
}

pub struct QuizzesApi<'a, S: Store> {
    core: &'a StudyCore<S>,
}

impl<'a, S: Store> QuizzesApi<'a, S> {
    /// Records a finished quiz and folds it into the snapshot: quiz
    /// count, integer-mean average, today's trend score, and the streak.
    /// Newly crossed achievements land in the earned ledger.
    pub fn complete(
        &self,
        ctx: &RequestContext,
        input: CompleteQuizInput,
    ) -> Result<QuizRecord, StudyError> {
        self.core.with_events(ctx, |store| {
            validate_quiz_input(&input)?;
            let now = Utc::now();
            let record = QuizRecord {
                id: QuizId::generate(),
                certification: input.certification,
                difficulty: input.difficulty,
                score: input.score,
                question_count: input.question_count,
                completed_at: now,
                seconds_taken: input.seconds_taken,
            };
            let record = store.quizzes().append(record)?;
            tracing::debug!(score = record.score, cert = %record.certification, "quiz recorded");

            let records = store.quizzes().list()?;
            let scores: Vec<u32> = records.iter().map(|record| record.score).collect();
            let today = now.date_naive();

            let mut snapshot = store.progress().get()?;
            snapshot.quizzes_completed = u32::try_from(records.len()).unwrap_or(u32::MAX);
            snapshot.average_score = analytics::integer_mean(&scores);
            if let Some(day_mean) = analytics::day_score(&records, today) {
                analytics::record_quiz_score(&mut snapshot.trend, today, day_mean);
            }
            snapshot.streak_days = analytics::streak_days(&snapshot.trend, today);
            store.progress().put(snapshot)?;

            let mut events = vec![EventBody::QuizCompleted {
                quiz: record.clone(),
            }];
            events.extend(stamp_new_achievements(store, now)?);
            Ok((record, events))
        })
    }

    pub fn list(&self) -> Result<Vec<QuizRecord>, StudyError> {
        self.core.store.quizzes().list().map_err(StudyError::from)
    }

    pub fn stats(&self) -> Result<QuizStats, StudyError> {
        let records = self.core.store.quizzes().list()?;
        Ok(analytics::quiz_stats(&records))
    }

    pub fn stats_by_certification(&self) -> Result<BTreeMap<String, QuizStats>, StudyError> {
        let records = self.core.store.quizzes().list()?;
        Ok(analytics::stats_by_certification(&records))
    }
}

pub struct ProgressApi<'a, S: Store> {
    core: &'a StudyCore<S>,
}

impl<'a, S: Store> ProgressApi<'a, S> {
    pub fn snapshot(&self) -> Result<ProgressSnapshot, StudyError> {
        self.core.store.progress().get()
    }

    /// Adds flushed stopwatch minutes to the running total and today's
    /// trend bucket.
    pub fn add_study_time(&self, ctx: &RequestContext, minutes: u32) -> Result<(), StudyError> {
        self.add_study_time_on(ctx, minutes, Utc::now().date_naive())
    }

    pub fn add_study_time_on(
        &self,
        ctx: &RequestContext,
        minutes: u32,
        date: NaiveDate,
    ) -> Result<(), StudyError> {
        self.core.with_events(ctx, |store| {
            if minutes == 0 {
                return Err(StudyError::Progress(ProgressError::InvalidInput {
                    message: "minutes must be positive".to_string(),
                }));
            }
            let mut snapshot = store.progress().get()?;
            snapshot.total_study_minutes += minutes;
            analytics::record_study_minutes(&mut snapshot.trend, date, minutes);
            snapshot.streak_days = analytics::streak_days(&snapshot.trend, date);
            let total_minutes = snapshot.total_study_minutes;
            store.progress().put(snapshot)?;
            tracing::debug!(minutes, total_minutes, "study time added");

            let mut events = vec![EventBody::StudyTimeAdded {
                minutes,
                total_minutes,
            }];
            events.extend(stamp_new_achievements(store, Utc::now())?);
            Ok(((), events))
        })
    }

    pub fn recommendations(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<StudyRecommendation>, StudyError> {
        let snapshot = self.core.store.progress().get()?;
        let paths = self.core.store.paths().list()?;
        Ok(recommend::recommend(&snapshot, &paths, today))
    }
}

pub struct AchievementsApi<'a, S: Store> {
    core: &'a StudyCore<S>,
}

impl<'a, S: Store> AchievementsApi<'a, S> {
    /// Live engine output merged with the earned ledger: a ledger stamp
    /// forces `earned` and supplies `earned_at`, so badges never regress
    /// when a metric drops.
    pub fn list(&self) -> Result<Vec<Achievement>, StudyError> {
        let snapshot = self.core.store.progress().get()?;
        let ledger = self.core.store.earned().list()?;
        let mut achievements = engine::evaluate(&snapshot, &snapshot.certifications);
        for achievement in &mut achievements {
            if let Some(entry) = ledger
                .iter()
                .find(|entry| entry.achievement_id == achievement.id)
            {
                achievement.earned = true;
                achievement.earned_at = Some(entry.earned_at);
            }
        }
        Ok(achievements)
    }

    pub fn earned(&self) -> Result<Vec<EarnedAchievement>, StudyError> {
        self.core.store.earned().list()
    }
}

pub struct EventsApi<'a, S: Store> {
    core: &'a StudyCore<S>,
}

impl<'a, S: Store> EventsApi<'a, S> {
    pub fn list(
        &self,
        after: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<EventRecord>, StudyError> {
        self.core.store.events().list(after, limit)
    }

    pub fn replay(
        &self,
        after: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<EventRecord>, StudyError> {
        self.core.store.events().replay(after, limit)
    }
}

fn build_event_record(ctx: &RequestContext, body: EventBody) -> Result<EventRecord, StudyError> {
    let value = serde_json::to_value(body).map_err(|err| StudyError::Internal {
        message: err.to_string(),
    })?;
    Ok(EventRecord {
        id: String::new(),
        seq: 0,
        at: Utc::now(),
        correlation_id: ctx.correlation_id.clone(),
        source: ctx.source,
        body: value,
    })
}

/// Stamps crossed milestones and applies the active-goal completion
/// rule. Returns the newly stamped labels and whether the goal
/// completed on this update.
fn apply_goal_progress(goal: &mut StudyGoal, now: DateTime<Utc>) -> (Vec<String>, bool) {
    let mut stamped = Vec::new();
    for milestone in &mut goal.milestones {
        if !milestone.completed && goal.current_value >= milestone.threshold {
            milestone.completed = true;
            milestone.completed_at = Some(now);
            stamped.push(milestone.label.clone());
        }
    }
    let completed_now =
        goal.status == GoalStatus::Active && goal.current_value >= goal.target_value;
    if completed_now {
        goal.status = GoalStatus::Completed;
    }
    (stamped, completed_now)
}

/// Rebuilds the per-certification progress map from the current paths.
fn sync_cert_progress<S: Store>(store: &S) -> Result<(), StudyError> {
    let paths = store.paths().list()?;
    let mut snapshot = store.progress().get()?;
    snapshot.certifications = analytics::cert_progress_from_paths(&paths);
    store.progress().put(snapshot)
}

/// Re-evaluates the engine against the fresh snapshot and appends first
/// crossings to the earned ledger. Already-stamped achievements are
/// skipped, which is what makes earning one-way.
fn stamp_new_achievements<S: Store>(
    store: &S,
    now: DateTime<Utc>,
) -> Result<Vec<EventBody>, StudyError> {
    let snapshot = store.progress().get()?;
    let achievements = engine::evaluate(&snapshot, &snapshot.certifications);
    let mut events = Vec::new();
    for achievement in achievements.into_iter().filter(|a| a.earned) {
        let appended = store.earned().append(EarnedAchievement {
            achievement_id: achievement.id.clone(),
            earned_at: now,
        })?;
        if appended {
            tracing::info!(achievement = %achievement.id, "achievement unlocked");
            events.push(EventBody::AchievementUnlocked {
                achievement_id: achievement.id,
                earned_at: now,
            });
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::enums::GoalKind;

    fn goal_with(current: u32, target: u32, milestones: Vec<GoalMilestone>) -> StudyGoal {
        StudyGoal {
            id: GoalId::generate(),
            title: "goal".to_string(),
            description: None,
            kind: GoalKind::Time,
            target_value: target,
            current_value: current,
            unit: "minutes".to_string(),
            deadline: None,
            priority: Priority::Medium,
            status: GoalStatus::Active,
            created_at: Utc::now(),
            milestones,
        }
    }

    fn milestone(threshold: u32) -> GoalMilestone {
        GoalMilestone {
            threshold,
            label: format!("at-{threshold}"),
            completed: false,
            completed_at: None,
        }
    }

    #[test]
    fn reaching_target_completes_active_goal() {
        let mut goal = goal_with(100, 100, Vec::new());
        let (_, completed) = apply_goal_progress(&mut goal, Utc::now());
        assert!(completed);
        assert_eq!(goal.status, GoalStatus::Completed);
    }

    #[test]
    fn crossed_milestones_are_stamped_once() {
        let mut goal = goal_with(60, 100, vec![milestone(25), milestone(50), milestone(75)]);
        let (stamped, completed) = apply_goal_progress(&mut goal, Utc::now());
        assert_eq!(stamped, vec!["at-25".to_string(), "at-50".to_string()]);
        assert!(!completed);

        let (stamped_again, _) = apply_goal_progress(&mut goal, Utc::now());
        assert!(stamped_again.is_empty());
    }

    #[test]
    fn paused_goal_does_not_auto_complete() {
        let mut goal = goal_with(100, 100, Vec::new());
        goal.status = GoalStatus::Paused;
        let (_, completed) = apply_goal_progress(&mut goal, Utc::now());
        assert!(!completed);
        assert_eq!(goal.status, GoalStatus::Paused);
    }
}
