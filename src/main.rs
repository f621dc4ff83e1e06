use dotenv::dotenv;
use std::process;
use tracing_subscriber::EnvFilter;
use worklog::commands::Cli;
use worklog::libs::messages::macros::is_debug_mode;

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("worklog=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    let _ = dotenv();
    init_tracing();

    if let Err(error) = Cli::menu() {
        if is_debug_mode() {
            tracing::error!("{:#}", error);
        } else {
            eprintln!("{}", error);
        }
        process::exit(1);
    }
}
