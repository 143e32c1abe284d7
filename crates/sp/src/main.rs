use chrono::Utc;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use sp_client::backend::{QuizRequest, UnavailableBackend};
use sp_client::gateway::Gateway;
use sp_core::StudyError;
use sp_core::profile::load_profile;
use sp_core::study::{RequestContext, StudyCore};
use sp_core::types::enums::Difficulty;
use sp_core::types::io::SessionFilter;
use sp_events::types::EventSource;
use sp_mem::MemStore;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEMO_USER: &str = "demo-user";

#[derive(Parser)]
#[command(name = "sp", about = "Certification study companion (demo data)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Progress overview, upcoming sessions, and recommendations
    Dashboard,
    /// Earned badges and the next ones within reach
    Achievements,
    /// Take a practice quiz
    Quiz {
        certification: String,
        #[arg(long, default_value_t = 5)]
        questions: u32,
    },
    /// Log study minutes
    LogTime { minutes: u32 },
    /// Tail the mutation log
    Events {
        #[arg(long)]
        after: Option<i64>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), StudyError> {
    // No persistence by design: every run re-seeds the demo state, the
    // same way the original re-initializes per browser load.
    let profile = load_profile(Path::new("."))?;
    let core = StudyCore::new(sp_mem::seed::demo_store(&profile));
    let gateway = Gateway::new(core, UnavailableBackend);
    let ctx = RequestContext::new(EventSource::Cli, None);

    match cli.command {
        Command::Dashboard => dashboard(&gateway, &profile.display_name),
        Command::Achievements => achievements(&gateway),
        Command::Quiz {
            certification,
            questions,
        } => quiz(&gateway, &certification, questions),
        Command::LogTime { minutes } => log_time(&gateway, &ctx, minutes),
        Command::Events { after, limit } => events(&gateway, after, limit),
    }
}

fn banner<B: sp_client::Backend>(gateway: &Gateway<MemStore, B>) -> Result<(), StudyError> {
    if gateway.demo_banner()? {
        println!("{}", "demo mode - data is simulated".yellow());
    }
    Ok(())
}

fn dashboard<B: sp_client::Backend>(
    gateway: &Gateway<MemStore, B>,
    display_name: &str,
) -> Result<(), StudyError> {
    let snapshot = gateway.progress(DEMO_USER)?;
    banner(gateway)?;
    let core = gateway.core();

    println!("{}", format!("{display_name}'s progress").bold());
    println!(
        "  study time: {}h {:02}m   quizzes: {} (avg {})   streak: {} days",
        snapshot.total_study_minutes / 60,
        snapshot.total_study_minutes % 60,
        snapshot.quizzes_completed,
        snapshot.average_score,
        snapshot.streak_days,
    );
    for (code, cert) in &snapshot.certifications {
        println!(
            "  {code}: {}% ({}/{} topics)",
            cert.percent, cert.topics_completed, cert.topics_total
        );
    }

    println!("{}", "study paths".bold());
    for path in core.paths().list()? {
        let topic = path.current_topic.as_deref().unwrap_or("done");
        println!(
            "  {} - {}% ({:?}), next: {topic}",
            path.title, path.progress_percent, path.status
        );
    }

    println!("{}", "upcoming sessions".bold());
    let upcoming = core.sessions().list(SessionFilter {
        completed: Some(false),
        ..SessionFilter::default()
    })?;
    for session in upcoming {
        println!(
            "  {} {:02}:{:02}  {} ({} min)",
            session.date,
            session.start_minute / 60,
            session.start_minute % 60,
            session.title,
            session.duration_minutes,
        );
    }

    println!("{}", "recommended next".bold());
    for recommendation in core.progress().recommendations(Utc::now().date_naive())? {
        println!(
            "  {} - {}",
            recommendation.title.green(),
            recommendation.reason
        );
    }
    Ok(())
}

fn achievements<B: sp_client::Backend>(gateway: &Gateway<MemStore, B>) -> Result<(), StudyError> {
    banner(gateway)?;
    let achievements = gateway.core().achievements().list()?;
    let (earned, locked): (Vec<_>, Vec<_>) =
        achievements.into_iter().partition(|badge| badge.earned);

    println!("{}", "earned".bold());
    for badge in &earned {
        let date = badge
            .earned_at
            .map(|at| at.date_naive().to_string())
            .unwrap_or_default();
        println!(
            "  {} {} ({:?}, {} pts) {date}",
            "✓".green(),
            badge.title,
            badge.rarity,
            badge.points
        );
    }

    // The dashboard convention: the three closest locked badges.
    let mut next = locked;
    next.sort_by(|a, b| {
        let a_frac = f64::from(a.progress) / f64::from(a.max_progress.max(1));
        let b_frac = f64::from(b.progress) / f64::from(b.max_progress.max(1));
        b_frac.total_cmp(&a_frac)
    });
    println!("{}", "in progress".bold());
    for badge in next.iter().take(3) {
        println!(
            "  {} - {}/{} ({})",
            badge.title, badge.progress, badge.max_progress, badge.description
        );
    }
    Ok(())
}

fn quiz<B: sp_client::Backend>(
    gateway: &Gateway<MemStore, B>,
    certification: &str,
    questions: u32,
) -> Result<(), StudyError> {
    let quiz = gateway.generate_quiz(&QuizRequest {
        certification: certification.to_string(),
        difficulty: Difficulty::Intermediate,
        question_count: questions,
    })?;
    banner(gateway)?;

    // Scripted demo run: every other answer is correct, so the score
    // lands mid-range and the progress charts move believably.
    let answers: Vec<usize> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            if index % 2 == 0 {
                question.answer_index
            } else {
                (question.answer_index + 1) % question.choices.len().max(1)
            }
        })
        .collect();

    for (index, question) in quiz.questions.iter().enumerate() {
        println!("{} {}", format!("Q{}:", index + 1).bold(), question.prompt);
        println!("   → {}", question.choices[answers[index]]);
    }

    let scored = gateway.submit_quiz(&quiz, &answers)?;
    println!(
        "scored {} over {} questions",
        scored.score.to_string().bold(),
        scored.question_count
    );

    let stats = gateway.core().quizzes().stats()?;
    println!(
        "history: {} attempts, avg {}, best {}",
        stats.attempts, stats.average_score, stats.best_score
    );
    Ok(())
}

fn log_time<B: sp_client::Backend>(
    gateway: &Gateway<MemStore, B>,
    ctx: &RequestContext,
    minutes: u32,
) -> Result<(), StudyError> {
    let core = gateway.core();
    let before = core.events().list(None, None)?.last().map_or(0, |e| e.seq);
    core.progress().add_study_time(ctx, minutes)?;

    let snapshot = core.progress().snapshot()?;
    println!(
        "logged {minutes} min: total {}h {:02}m, streak {} days",
        snapshot.total_study_minutes / 60,
        snapshot.total_study_minutes % 60,
        snapshot.streak_days,
    );

    for record in core.events().list(Some(before), None)? {
        if record.body.get("type").and_then(|v| v.as_str()) == Some("AchievementUnlocked") {
            if let Some(id) = record
                .body
                .get("payload")
                .and_then(|p| p.get("achievement_id"))
                .and_then(|v| v.as_str())
            {
                println!("{} unlocked {id}", "★".yellow());
            }
        }
    }
    Ok(())
}

fn events<B: sp_client::Backend>(
    gateway: &Gateway<MemStore, B>,
    after: Option<i64>,
    limit: Option<u32>,
) -> Result<(), StudyError> {
    for record in gateway.core().events().list(after, limit)? {
        let kind = record
            .body
            .get("type")
            .and_then(|value| value.as_str())
            .unwrap_or("?");
        println!("{:>4}  {:?}  {kind}", record.seq, record.source);
    }
    Ok(())
}
