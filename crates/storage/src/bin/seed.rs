use std::fmt;

use chrono::{DateTime, Duration, Utc};
use prep_core::model::{
    InterviewDraft, InterviewId, InterviewQuestion, MockInterview, NewAnswer, Rating,
};
use storage::DEFAULT_DB_URL;
use storage::repository::Storage;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    interviews: u32,
    answers: u32,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidInterviews { raw: String },
    InvalidAnswers { raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidInterviews { raw } => {
                write!(f, "invalid --interviews value: {raw}")
            }
            ArgsError::InvalidAnswers { raw } => write!(f, "invalid --answers value: {raw}"),
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("PREP_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URL.into());
        let mut interviews = std::env::var("PREP_SEED_INTERVIEWS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(1);
        let mut answers = std::env::var("PREP_SEED_ANSWERS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(3);
        let mut now: Option<DateTime<Utc>> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--interviews" => {
                    let value = require_value(args, "--interviews")?;
                    interviews = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidInterviews { raw: value.clone() })?;
                }
                "--answers" => {
                    let value = require_value(args, "--answers")?;
                    answers = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidAnswers { raw: value.clone() })?;
                }
                "--now" => {
                    let value = require_value(args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            interviews,
            answers,
            now,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: {DEFAULT_DB_URL})");
    eprintln!("  --interviews <n>          Number of demo interviews to insert (default: 1)");
    eprintln!("  --answers <n>             Answers recorded per interview (default: 3)");
    eprintln!("  --now <rfc3339>           Fixed current time for deterministic seeding");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  PREP_DB_URL, PREP_SEED_INTERVIEWS, PREP_SEED_ANSWERS");
}

const SAMPLE_QUESTIONS: [(&str, &str); 5] = [
    (
        "How does ownership prevent data races in Rust?",
        "Aliasing XOR mutability: shared references are read-only, a mutable reference is exclusive, and Send/Sync gate cross-thread use.",
    ),
    (
        "When would you pick a trait object over generics?",
        "When the concrete type is chosen at runtime or code size matters more than static dispatch.",
    ),
    (
        "Explain how you would design an idempotent HTTP endpoint.",
        "Use a client-supplied idempotency key stored with the result so retries return the first outcome.",
    ),
    (
        "How do you find a slow query in production?",
        "Enable slow query logging, inspect the plan with EXPLAIN, then add or fix indexes.",
    ),
    (
        "Describe a time you disagreed with a design decision.",
        "Situation, the disagreement, how it was resolved with data, and what was learned.",
    ),
];

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(&mut std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::sqlite(&args.db_url).await?;
    let now = args.now.unwrap_or_else(Utc::now);

    let questions: Vec<InterviewQuestion> = SAMPLE_QUESTIONS
        .iter()
        .map(|(question, answer)| InterviewQuestion::new(*question, *answer))
        .collect();

    for i in 0..args.interviews {
        let created_at = now - Duration::days(i64::from(i));
        let details = InterviewDraft {
            job_position: "Backend Engineer".into(),
            job_description: "Rust, PostgreSQL, distributed systems".into(),
            years_experience: 3 + i,
        }
        .validate()?;
        let interview =
            MockInterview::new(InterviewId::generate(), details, questions.clone(), created_at)?;
        storage.interviews.insert_interview(&interview).await?;

        for (offset, question) in interview
            .questions()
            .iter()
            .take(usize::try_from(args.answers)?)
            .enumerate()
        {
            let rating = Rating::new(u8::try_from(5 + offset % 5)?)?;
            let answer = NewAnswer {
                interview_id: interview.id(),
                question: question.question.clone(),
                user_answer: "A seeded answer long enough to be accepted.".into(),
                correct_answer: question.answer.clone(),
                feedback: "Good structure; mention trade-offs explicitly.".into(),
                rating,
                created_at: created_at + Duration::minutes(i64::try_from(offset)?),
            };
            storage.answers.append_answer(&answer).await?;
        }

        println!("Seeded interview {}", interview.id());
    }

    println!(
        "Seeded {} interviews with {} answers each into {}",
        args.interviews, args.answers, args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
