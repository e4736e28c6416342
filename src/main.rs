use clap::Parser;
use mathquiz::core::category::Category;
use mathquiz::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mathquiz", about = "Arithmetic quiz for the terminal")]
struct Args {
    /// Category to start on
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Seed for a repeatable sequence of questions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mathquiz.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };

    if let Ok(log_file) = File::create("mathquiz.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::QuizConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            category: args.category,
            seed: args.seed,
        },
    );

    log::info!("Math quiz starting up: {:?}", resolved);

    mathquiz::tui::run(resolved)
}
