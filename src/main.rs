use clap::Parser;
use helmdeck::core::config;
use helmdeck::core::context::Context;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helmdeck", about = "Context-sensitive hardware deck simulator")]
struct Args {
    /// Context to start in
    #[arg(short, long, value_enum)]
    context: Option<Context>,

    /// Path to a config file (default: ~/.helmdeck/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fire random button presses and pot samples on a timer
    #[arg(long)]
    demo: bool,

    /// Log at debug level instead of info
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to helmdeck.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create("helmdeck.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = match config::load_config(args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("helmdeck: {}", e);
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.context);

    log::info!(
        "Helmdeck starting in {:?} ({} buttons, pot step {})",
        resolved.start_context,
        resolved.buttons,
        resolved.pot_step
    );

    helmdeck::tui::run(resolved, args.demo)
}
