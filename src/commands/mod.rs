pub mod init;
pub mod log;

use anyhow::Result;
use clap::{Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  worklog 622 3h30m 623 4h30m      two tasks, explicit time
  worklog 622 3h30m 623            LP-623 gets the rest of the day
  worklog 622                      the whole day on LP-622
  worklog 622 623                  split the day evenly
  worklog 622 8h --date 2025-05-05 any other day
  worklog 622 623 --write          log the time to Jira";

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Log time in Jira, paste stuff to Google Sheets, get on with your day.", long_about = None)]
#[command(arg_required_else_help(true), args_conflicts_with_subcommands(true), after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    log: log::LogArgs,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            None => log::cmd(cli.log),
        }
    }
}
