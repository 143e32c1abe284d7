use crate::types::enums::{AchievementCategory, Rarity};
use crate::types::progress::{CertProgress, ProgressSnapshot};
use crate::types::Achievement;
use std::collections::BTreeMap;

/// Which snapshot counter a definition is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    StudyMinutes,
    QuizzesCompleted,
    AverageScore,
    StreakDays,
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    pub points: u32,
    pub metric: Metric,
    pub threshold: u32,
}

/// The static catalog. Output order of [`evaluate`] follows this table,
/// so entries are grouped by category and ascend by threshold within a
/// group.
pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "getting-started",
        title: "Getting Started",
        description: "Log your first 30 minutes of study time",
        category: AchievementCategory::Study,
        rarity: Rarity::Common,
        points: 10,
        metric: Metric::StudyMinutes,
        threshold: 30,
    },
    AchievementDef {
        id: "dedicated-learner",
        title: "Dedicated Learner",
        description: "Reach 10 hours of total study time",
        category: AchievementCategory::Study,
        rarity: Rarity::Rare,
        points: 50,
        metric: Metric::StudyMinutes,
        threshold: 600,
    },
    AchievementDef {
        id: "study-machine",
        title: "Study Machine",
        description: "Reach 50 hours of total study time",
        category: AchievementCategory::Study,
        rarity: Rarity::Epic,
        points: 150,
        metric: Metric::StudyMinutes,
        threshold: 3000,
    },
    AchievementDef {
        id: "quiz-rookie",
        title: "Quiz Rookie",
        description: "Complete your first practice quiz",
        category: AchievementCategory::Quiz,
        rarity: Rarity::Common,
        points: 10,
        metric: Metric::QuizzesCompleted,
        threshold: 1,
    },
    AchievementDef {
        id: "quiz-adept",
        title: "Quiz Adept",
        description: "Complete 10 practice quizzes",
        category: AchievementCategory::Quiz,
        rarity: Rarity::Rare,
        points: 40,
        metric: Metric::QuizzesCompleted,
        threshold: 10,
    },
    AchievementDef {
        id: "quiz-master",
        title: "Quiz Master",
        description: "Complete 50 practice quizzes",
        category: AchievementCategory::Quiz,
        rarity: Rarity::Epic,
        points: 150,
        metric: Metric::QuizzesCompleted,
        threshold: 50,
    },
    AchievementDef {
        id: "sharp-shooter",
        title: "Sharp Shooter",
        description: "Hold an average score of 90 or better",
        category: AchievementCategory::Quiz,
        rarity: Rarity::Legendary,
        points: 200,
        metric: Metric::AverageScore,
        threshold: 90,
    },
    AchievementDef {
        id: "streak-starter",
        title: "Streak Starter",
        description: "Study three days in a row",
        category: AchievementCategory::Streak,
        rarity: Rarity::Common,
        points: 15,
        metric: Metric::StreakDays,
        threshold: 3,
    },
    AchievementDef {
        id: "week-streak",
        title: "Week Streak",
        description: "Study seven days in a row",
        category: AchievementCategory::Streak,
        rarity: Rarity::Rare,
        points: 50,
        metric: Metric::StreakDays,
        threshold: 7,
    },
    AchievementDef {
        id: "month-streak",
        title: "Unstoppable",
        description: "Study thirty days in a row",
        category: AchievementCategory::Streak,
        rarity: Rarity::Legendary,
        points: 250,
        metric: Metric::StreakDays,
        threshold: 30,
    },
    AchievementDef {
        id: "marathoner",
        title: "Marathoner",
        description: "Reach 100 hours of total study time",
        category: AchievementCategory::Special,
        rarity: Rarity::Legendary,
        points: 300,
        metric: Metric::StudyMinutes,
        threshold: 6000,
    },
];

const CERT_MASTERY_THRESHOLD: u32 = 100;

/// Pure derivation of the achievement view. Static catalog entries come
/// first in table order, then one dynamic mastery entry per
/// certification in the progress map (the map is ordered, so output is
/// deterministic). A metric exactly at its threshold counts as earned.
/// `earned_at` is always `None` here; the ledger supplies stamps.
pub fn evaluate(
    progress: &ProgressSnapshot,
    certifications: &BTreeMap<String, CertProgress>,
) -> Vec<Achievement> {
    let mut achievements: Vec<Achievement> = CATALOG
        .iter()
        .map(|def| {
            let value = metric_value(progress, def.metric);
            Achievement {
                id: def.id.to_string(),
                title: def.title.to_string(),
                description: def.description.to_string(),
                category: def.category,
                rarity: def.rarity,
                points: def.points,
                earned: value >= def.threshold,
                progress: value.min(def.threshold),
                max_progress: def.threshold,
                earned_at: None,
            }
        })
        .collect();

    for (code, cert) in certifications {
        let value = u32::from(cert.percent);
        achievements.push(Achievement {
            id: format!("cert-{code}"),
            title: format!("{code} Mastery"),
            description: format!("Complete every topic in the {code} study path"),
            category: AchievementCategory::Milestone,
            rarity: Rarity::Epic,
            points: 100,
            earned: value >= CERT_MASTERY_THRESHOLD,
            progress: value.min(CERT_MASTERY_THRESHOLD),
            max_progress: CERT_MASTERY_THRESHOLD,
            earned_at: None,
        });
    }

    achievements
}

fn metric_value(progress: &ProgressSnapshot, metric: Metric) -> u32 {
    match metric {
        Metric::StudyMinutes => progress.total_study_minutes,
        Metric::QuizzesCompleted => progress.quizzes_completed,
        Metric::AverageScore => progress.average_score,
        Metric::StreakDays => progress.streak_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(minutes: u32) -> ProgressSnapshot {
        ProgressSnapshot {
            total_study_minutes: minutes,
            ..ProgressSnapshot::default()
        }
    }

    fn by_id<'a>(achievements: &'a [Achievement], id: &str) -> &'a Achievement {
        achievements
            .iter()
            .find(|achievement| achievement.id == id)
            .unwrap()
    }

    #[test]
    fn evaluation_is_idempotent() {
        let progress = snapshot(750);
        let first = evaluate(&progress, &progress.certifications);
        let second = evaluate(&progress, &progress.certifications);
        assert_eq!(first, second);
    }

    #[test]
    fn threshold_is_inclusive() {
        let earned = evaluate(&snapshot(600), &BTreeMap::new());
        let dedicated = by_id(&earned, "dedicated-learner");
        assert!(dedicated.earned);
        assert_eq!(dedicated.progress, dedicated.max_progress);

        let not_yet = evaluate(&snapshot(599), &BTreeMap::new());
        let dedicated = by_id(&not_yet, "dedicated-learner");
        assert!(!dedicated.earned);
        assert_eq!(dedicated.progress, 599);
    }

    #[test]
    fn growing_a_metric_never_unearns() {
        for minutes in [600, 601, 5000, 100_000] {
            let achievements = evaluate(&snapshot(minutes), &BTreeMap::new());
            assert!(by_id(&achievements, "dedicated-learner").earned);
        }
    }

    #[test]
    fn output_follows_catalog_order() {
        let achievements = evaluate(&snapshot(0), &BTreeMap::new());
        let ids: Vec<&str> = achievements
            .iter()
            .map(|achievement| achievement.id.as_str())
            .collect();
        let expected: Vec<&str> = CATALOG.iter().map(|def| def.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn one_dynamic_entry_per_certification() {
        let mut certifications = BTreeMap::new();
        certifications.insert(
            "aws-saa".to_string(),
            CertProgress {
                percent: 100,
                topics_completed: 12,
                topics_total: 12,
            },
        );
        certifications.insert(
            "az-104".to_string(),
            CertProgress {
                percent: 40,
                topics_completed: 4,
                topics_total: 10,
            },
        );

        let achievements = evaluate(&ProgressSnapshot::default(), &certifications);
        assert_eq!(achievements.len(), CATALOG.len() + 2);

        let aws = by_id(&achievements, "cert-aws-saa");
        assert!(aws.earned);
        let az = by_id(&achievements, "cert-az-104");
        assert!(!az.earned);
        assert_eq!(az.progress, 40);
    }
}
