use clap::Parser;

use ascii_view::app::{self, RunOptions};
use ascii_view::cli::{self, Args, Command};
use ascii_view::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(Command::Config { action }) = &args.command {
        cli::handle_config_action(action.clone(), args.config.as_deref());
        return;
    }

    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if the default config is broken
    let cfg = match args.config.as_deref() {
        Some(path) => match Config::load_from(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => match Config::load() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        },
    };

    let opts = match RunOptions::resolve(&args, &cfg) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app::run(&opts) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
