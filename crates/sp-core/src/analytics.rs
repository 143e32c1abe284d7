use crate::types::{ActiveStudyPath, CertProgress, QuizRecord, QuizStats, TrendPoint};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Floor of the arithmetic mean; zero for an empty slice.
pub fn integer_mean(values: &[u32]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let sum: u64 = values.iter().map(|value| u64::from(*value)).sum();
    u32::try_from(sum / values.len() as u64).unwrap_or(u32::MAX)
}

pub fn quiz_stats(records: &[QuizRecord]) -> QuizStats {
    let scores: Vec<u32> = records.iter().map(|record| record.score).collect();
    QuizStats {
        attempts: u32::try_from(records.len()).unwrap_or(u32::MAX),
        average_score: integer_mean(&scores),
        best_score: scores.iter().copied().max().unwrap_or(0),
    }
}

pub fn stats_by_certification(records: &[QuizRecord]) -> BTreeMap<String, QuizStats> {
    let mut grouped: BTreeMap<String, Vec<QuizRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.certification.clone())
            .or_default()
            .push(record.clone());
    }
    grouped
        .into_iter()
        .map(|(certification, records)| (certification, quiz_stats(&records)))
        .collect()
}

/// Integer mean of the scores recorded on `date`, if any.
pub fn day_score(records: &[QuizRecord], date: NaiveDate) -> Option<u32> {
    let scores: Vec<u32> = records
        .iter()
        .filter(|record| record.completed_at.date_naive() == date)
        .map(|record| record.score)
        .collect();
    if scores.is_empty() {
        None
    } else {
        Some(integer_mean(&scores))
    }
}

/// Adds `minutes` to the bucket for `date`, creating it if absent. The
/// series stays sorted by date.
pub fn record_study_minutes(trend: &mut Vec<TrendPoint>, date: NaiveDate, minutes: u32) {
    match trend.iter_mut().find(|point| point.date == date) {
        Some(point) => point.study_minutes += minutes,
        None => {
            let point = TrendPoint {
                date,
                score: None,
                study_minutes: minutes,
            };
            let at = trend.partition_point(|existing| existing.date < date);
            trend.insert(at, point);
        }
    }
}

/// Sets the day's score to the supplied mean, creating the bucket if
/// absent.
pub fn record_quiz_score(trend: &mut Vec<TrendPoint>, date: NaiveDate, score: u32) {
    match trend.iter_mut().find(|point| point.date == date) {
        Some(point) => point.score = Some(score),
        None => {
            let point = TrendPoint {
                date,
                score: Some(score),
                study_minutes: 0,
            };
            let at = trend.partition_point(|existing| existing.date < date);
            trend.insert(at, point);
        }
    }
}

/// Consecutive active days ending today, or ending yesterday when today
/// has no activity yet (an empty today does not break the streak until
/// the day is over). A day is active when it logged study minutes or a
/// quiz score.
pub fn streak_days(trend: &[TrendPoint], today: NaiveDate) -> u32 {
    let active: BTreeSet<NaiveDate> = trend
        .iter()
        .filter(|point| point.study_minutes > 0 || point.score.is_some())
        .map(|point| point.date)
        .collect();

    let mut cursor = if active.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(day) = cursor {
        if !active.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Per-certification completion derived from the study paths: topic
/// counts summed across paths, percent floored.
pub fn cert_progress_from_paths(paths: &[ActiveStudyPath]) -> BTreeMap<String, CertProgress> {
    let mut certifications: BTreeMap<String, CertProgress> = BTreeMap::new();
    for path in paths {
        let entry = certifications.entry(path.certification.clone()).or_default();
        entry.topics_completed += path.topics_completed;
        entry.topics_total += path.topics_total;
    }
    for progress in certifications.values_mut() {
        progress.percent = if progress.topics_total == 0 {
            0
        } else {
            u8::try_from(progress.topics_completed * 100 / progress.topics_total).unwrap_or(100)
        };
    }
    certifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::enums::Difficulty;
    use crate::types::ids::QuizId;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quiz(cert: &str, score: u32, day: NaiveDate) -> QuizRecord {
        QuizRecord {
            id: QuizId::generate(),
            certification: cert.to_string(),
            difficulty: Difficulty::Intermediate,
            score,
            question_count: 10,
            completed_at: Utc
                .from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap()),
            seconds_taken: None,
        }
    }

    #[test]
    fn integer_mean_is_exact_for_even_split() {
        assert_eq!(integer_mean(&[80, 90, 70]), 80);
    }

    #[test]
    fn integer_mean_floors() {
        assert_eq!(integer_mean(&[80, 85]), 82);
        assert_eq!(integer_mean(&[]), 0);
    }

    #[test]
    fn stats_group_by_certification() {
        let day = date(2025, 3, 10);
        let records = vec![quiz("aws", 80, day), quiz("aws", 90, day), quiz("az", 60, day)];
        let grouped = stats_by_certification(&records);
        assert_eq!(grouped["aws"].attempts, 2);
        assert_eq!(grouped["aws"].average_score, 85);
        assert_eq!(grouped["aws"].best_score, 90);
        assert_eq!(grouped["az"].attempts, 1);
    }

    #[test]
    fn study_minutes_accumulate_into_sorted_buckets() {
        let mut trend = Vec::new();
        record_study_minutes(&mut trend, date(2025, 3, 12), 30);
        record_study_minutes(&mut trend, date(2025, 3, 10), 15);
        record_study_minutes(&mut trend, date(2025, 3, 12), 10);

        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, date(2025, 3, 10));
        assert_eq!(trend[1].study_minutes, 40);
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let mut trend = Vec::new();
        for day in [date(2025, 3, 10), date(2025, 3, 11), date(2025, 3, 12)] {
            record_study_minutes(&mut trend, day, 20);
        }
        assert_eq!(streak_days(&trend, date(2025, 3, 12)), 3);
    }

    #[test]
    fn empty_today_does_not_break_the_streak() {
        let mut trend = Vec::new();
        record_study_minutes(&mut trend, date(2025, 3, 10), 20);
        record_study_minutes(&mut trend, date(2025, 3, 11), 20);
        assert_eq!(streak_days(&trend, date(2025, 3, 12)), 2);
    }

    #[test]
    fn gap_resets_the_streak() {
        let mut trend = Vec::new();
        record_study_minutes(&mut trend, date(2025, 3, 8), 20);
        record_study_minutes(&mut trend, date(2025, 3, 12), 20);
        assert_eq!(streak_days(&trend, date(2025, 3, 12)), 1);
    }
}
