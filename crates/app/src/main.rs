use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, InMemoryQuestionRepository, QuestionBankError, QuizService};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "EnglishLearn • Quiz";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Anything that stops the window from opening.
#[derive(Debug)]
enum StartupError {
    Args(ArgsError),
    Bank(QuestionBankError),
}

impl StartupError {
    fn shows_usage(&self) -> bool {
        matches!(self, StartupError::Args(_))
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Args(err) => write!(f, "{err}"),
            StartupError::Bank(err) => write!(f, "failed to load question bank: {err}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<ArgsError> for StartupError {
    fn from(err: ArgsError) -> Self {
        StartupError::Args(err)
    }
}

impl From<QuestionBankError> for StartupError {
    fn from(err: QuestionBankError) -> Self {
        StartupError::Bank(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path.json>] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank  built-in sample questions");
    eprintln!("  --title {DEFAULT_TITLE}");
    eprintln!();
    eprintln!("Environment (also read from .env):");
    eprintln!("  QUIZ_BANK_PATH, QUIZ_TITLE, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    bank_path: Option<PathBuf>,
    title: String,
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut bank_path = env("QUIZ_BANK_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut title = env("QUIZ_TITLE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => bank_path = Some(PathBuf::from(require_value(args, "--bank")?)),
                "--title" => title = require_value(args, "--title")?,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self { bank_path, title }))
    }
}

struct DesktopApp {
    title: String,
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(log_fmt::layer())
        .with(filter)
        .init();
}

/// A missing `.env` is fine; any other failure is handed back for logging.
fn dotenv_failure<T>(loaded: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    match loaded {
        Ok(_) => None,
        Err(err) if err.not_found() => None,
        Err(err) => Some(err),
    }
}

fn run() -> Result<(), StartupError> {
    let dotenv_err = dotenv_failure(dotenvy::dotenv());
    init_tracing();
    if let Some(err) = dotenv_err {
        tracing::warn!(error = %err, "ignoring unreadable .env file");
    }

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok())?;
    let args = match parsed {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    // Content is validated here, before any quiz can start.
    let repo = match &args.bank_path {
        Some(path) => InMemoryQuestionRepository::from_path(path)?,
        None => InMemoryQuestionRepository::sample()?,
    };
    let quiz_service = Arc::new(QuizService::new(Clock::default_clock(), Arc::new(repo)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title.clone(),
        quiz_service,
    });
    let context = build_app_context(&app);

    tracing::info!(title = %args.title, "launching quiz window");
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        if err.shows_usage() {
            print_usage();
        }
        std::process::exit(2);
    }
}
