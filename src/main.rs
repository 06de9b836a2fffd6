use anyhow::Result;
use clap::Parser;

use tagver::config::{self, VersionSource};
use tagver::facade::VersionFacade;
use tagver::ui;

#[derive(clap::Parser)]
#[command(
    name = "tagver",
    about = "Show the current project version from git tags, a remote repository, or a VERSION file"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Base directory of the project")]
    path: String,

    #[arg(
        short,
        long,
        help = "Format name (full, compact, version-only, ...) or a custom {token} template"
    )]
    format: Option<String>,

    #[arg(short, long, help = "Version source: git-local, git-remote or file")]
    source: Option<String>,

    #[arg(long, help = "Print the full version report")]
    info: bool,

    #[arg(long, help = "Print the raw resolved version; exits non-zero on failure")]
    raw: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(source) = args.source.as_deref() {
        config.source = match source.parse::<VersionSource>() {
            Ok(source) => source,
            Err(e) => {
                ui::display_error(&e);
                std::process::exit(1);
            }
        };
    }

    let mut facade = VersionFacade::new(&args.path, config);

    if args.info {
        let report = facade.version_info();
        ui::display_report(&report);
        if report.error.is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    if args.raw {
        match facade.current_version() {
            Ok(version) => println!("{}", version),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // show() never fails; resolution problems come back as a fallback string
    println!("{}", facade.show(args.format.as_deref()));
    Ok(())
}
