use crate::config::default_refresh_secs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "command-center")]
#[command(about = "Operations dashboard for the command-center API", long_about = None)]
pub struct Args {
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Log requests and storage activity to stderr"
    )]
    pub verbose: bool,

    #[arg(
        long = "base",
        global = true,
        help = "API base URL for this run only (not saved)"
    )]
    pub base: Option<String>,

    #[arg(long = "timeout", global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Queue, outbox and run counts with recent runs and costs
    Dashboard(PageArgs),
    /// Pipeline leads
    Pipeline(PageArgs),
    /// Agent runs
    Agents(PageArgs),
    /// Approval queue
    Approvals(PageArgs),
    /// Revenue and cost analytics
    Analytics(PageArgs),
    /// Show or change the saved API base, API key and client ID
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    #[arg(short = 'w', long = "watch", help = "Keep refreshing until interrupted")]
    pub watch: bool,

    #[arg(
        long = "interval",
        default_value_t = default_refresh_secs(),
        help = "Seconds between refreshes in watch mode"
    )]
    pub interval: u64,

    #[arg(long = "raw", help = "Plain JSON output without colours")]
    pub raw: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the saved values and the base that will be used
    Show,
    /// Save one or more values; fields not given keep their current value
    Set {
        #[arg(long = "api-base", help = "API base URL, e.g. http://localhost:8000")]
        api_base: Option<String>,

        #[arg(long = "api-key", help = "Value sent as X-API-Key")]
        api_key: Option<String>,

        #[arg(long = "client-id", help = "Value sent as X-Client-Id")]
        client_id: Option<String>,
    },
    /// Reset all saved values to empty
    Clear,
    /// Write an example settings file
    Init {
        #[arg(long = "path", help = "Where to write the file")]
        path: Option<PathBuf>,

        #[arg(long = "force", help = "Overwrite an existing file")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_a_global_flag() {
        let args = Args::try_parse_from(["command-center", "dashboard", "--base", "http://h:1"])
            .unwrap();
        assert_eq!(args.base.as_deref(), Some("http://h:1"));
        assert!(matches!(args.command, Command::Dashboard(_)));
    }

    #[test]
    fn test_api_base_belongs_to_config_set() {
        let global =
            Args::try_parse_from(["command-center", "--api-base", "http://h:1", "dashboard"]);
        assert!(global.is_err());

        let args =
            Args::try_parse_from(["command-center", "config", "set", "--api-base", "http://h:1"])
                .unwrap();
        match args.command {
            Command::Config(ConfigCommand::Set { api_base, .. }) => {
                assert_eq!(api_base.as_deref(), Some("http://h:1"))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
