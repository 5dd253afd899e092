use clap::Parser;
use playground::core::config::{ResolvedConfig, load_config, resolve};
use playground::error::AppError;
use playground::scaffold::FsProjectCreator;
use playground::tui::{self, Outcome};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "playground", about = "Scaffold a new playground project")]
struct Args {
    /// Config file to use instead of ~/.playground/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the project is created in
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    match run(&args) {
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Ok(Outcome::Created(path)) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("playground: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Outcome, AppError> {
    let config = resolve(&load_config(args.config.as_deref())?, args.output_dir.as_deref());
    init_logging(&config);

    log::info!(
        "Playground starting up (output dir: {}, dry run: {})",
        config.output_dir.display(),
        args.dry_run
    );

    let creator = FsProjectCreator::new(&config.output_dir).dry_run(args.dry_run);
    tui::run(&config, &creator)
}

/// File logger: the terminal belongs to the UI.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
