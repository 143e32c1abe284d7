use crate::types::enums::PathStatus;
use crate::types::{ActiveStudyPath, ProgressSnapshot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecommendation {
    pub title: String,
    pub certification: Option<String>,
    pub reason: String,
}

/// Ranked suggestions derived from the current snapshot and paths.
/// Stateless: the same inputs always produce the same list.
pub fn recommend(
    progress: &ProgressSnapshot,
    paths: &[ActiveStudyPath],
    today: NaiveDate,
) -> Vec<StudyRecommendation> {
    let mut recommendations = Vec::new();

    if let Some(stale) = paths
        .iter()
        .filter(|path| path.status == PathStatus::Active)
        .min_by_key(|path| path.last_accessed_at)
    {
        if let Some(topic) = &stale.current_topic {
            recommendations.push(StudyRecommendation {
                title: format!("Resume {}", stale.title),
                certification: Some(stale.certification.clone()),
                reason: format!("Pick up where you left off: {topic}"),
            });
        }
    }

    if let Some((code, cert)) = progress
        .certifications
        .iter()
        .filter(|(_, cert)| cert.percent < 100)
        .min_by_key(|(_, cert)| cert.percent)
    {
        recommendations.push(StudyRecommendation {
            title: format!("Shore up {code}"),
            certification: Some(code.clone()),
            reason: format!(
                "{} of {} topics done; a practice quiz would firm up the weak spots",
                cert.topics_completed, cert.topics_total
            ),
        });
    }

    let today_active = progress
        .trend
        .iter()
        .any(|point| point.date == today && (point.study_minutes > 0 || point.score.is_some()));
    if !today_active && progress.streak_days > 0 {
        recommendations.push(StudyRecommendation {
            title: "Keep the streak alive".to_string(),
            certification: None,
            reason: format!(
                "A short session today extends your {}-day streak",
                progress.streak_days
            ),
        });
    }

    recommendations
}
