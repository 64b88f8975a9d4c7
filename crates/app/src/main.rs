mod args;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ChoiceJitter, QuizLoopService, RosterEntry};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

use crate::args::{Args, ArgsError, Command, EnvDefaults, print_usage};

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("failed to initialize tracing subscriber: {err}"))?;

    Ok(())
}

fn print_status(entries: &[RosterEntry], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    let done = entries.iter().filter(|entry| entry.completed).count();
    for entry in entries {
        let state = if entry.completed { "done" } else { "pending" };
        println!("{:>2}  {state}", entry.participant.value());
    }
    println!("{done}/{} completed", entries.len());
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1), &EnvDefaults::from_process()).map_err(
        |e: ArgsError| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;
    if args.command == Command::Help {
        print_usage();
        return Ok(());
    }

    init_tracing()?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;
    let jitter = if args.reproducible_choices {
        ChoiceJitter::Seeded
    } else {
        ChoiceJitter::Independent
    };
    let quiz_loop = QuizLoopService::new(Arc::clone(&storage.completions)).with_choice_jitter(jitter);

    match args.command {
        Command::Ui => {
            tracing::info!(db = %args.db_url, ?jitter, "launching quiz window");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_loop: Arc::new(quiz_loop),
            });
            let context = build_app_context(&app);

            // Some window managers default Dioxus/tao windows to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("جدول الضرب")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            let entries = quiz_loop.roster().await?;
            print_status(&entries, args.json)
        }
        Command::Reset => {
            let removed = quiz_loop.reset(args.participant).await?;
            match args.participant {
                Some(participant) if removed == 0 => {
                    println!("participant {participant} had not completed the quiz");
                }
                Some(participant) => println!("cleared participant {participant}"),
                None => println!("cleared {removed} completion flag(s)"),
            }
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
