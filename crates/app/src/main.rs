use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, TutorConfig, TutorService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tutor_core::category::group_by_bucket;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    tutor: Arc<TutorService>,
}

impl UiApp for DesktopApp {
    fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--problems <path>] [--images <dir>]");
    eprintln!("  cargo run -p app -- check [--problems <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --problems problems.json");
    eprintln!("  --images   images");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TUTOR_AI_API_KEY, TUTOR_AI_BASE_URL, TUTOR_AI_MODEL");
    eprintln!("  TUTOR_SMTP_HOST, TUTOR_SMTP_PORT, TUTOR_EMAIL_SENDER, TUTOR_EMAIL_PASSWORD,");
    eprintln!("  TUTOR_REPORT_RECIPIENT, TUTOR_PROBLEMS_PATH, TUTOR_IMAGES_DIR, TUTOR_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

/// Path overrides from the command line; unset values keep the environment's.
#[derive(Debug, Default)]
struct Args {
    problems: Option<PathBuf>,
    images: Option<PathBuf>,
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--problems" => parsed.problems = Some(require_value(args, "--problems")?.into()),
                "--images" if cmd == Command::Ui => {
                    parsed.images = Some(require_value(args, "--images")?.into());
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }

    fn apply(self, config: &mut TutorConfig) {
        if let Some(problems) = self.problems {
            config.problems_path = problems;
        }
        if let Some(images) = self.images {
            config.images_dir = images;
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TUTOR_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn parse_command(argv: &mut Vec<String>) -> Result<Command, ArgsError> {
    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?
        }
    };
    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }
    Ok(cmd)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    if matches!(argv.first().map(String::as_str), Some("--help" | "-h")) {
        print_usage();
        return Ok(());
    }

    let parsed = parse_command(&mut argv).and_then(|cmd| {
        let mut iter = argv.into_iter();
        Args::parse(cmd, &mut iter).map(|args| (cmd, args))
    });
    let (cmd, args) = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    init_tracing();
    let mut config = TutorConfig::from_env()?;
    args.apply(&mut config);
    let services = AppServices::from_config(&config, Clock::system());

    match cmd {
        Command::Ui => {
            info!(problems = %config.problems_path.display(), "launching tutor");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                tutor: services.tutor(),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Engineering Tutor")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            let problems = runtime.block_on(services.tutor().catalog())?;
            for (bucket, members) in group_by_bucket(&problems) {
                println!("{}", bucket.display_name());
                for problem in members {
                    println!(
                        "  {:<12} {} target(s)  {}",
                        problem.id().as_str(),
                        problem.targets().len(),
                        problem.footer_label()
                    );
                }
            }
            println!("{} problem(s)", problems.len());
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(1);
    }
}
