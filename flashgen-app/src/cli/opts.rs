use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "flashgen", version, about = "Check request bodies against the flashgen API contract")]
pub struct Cli {
    /// Request id to put in `meta` (random UUID when omitted)
    #[arg(long, global = true)]
    pub request_id: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Parse and validate a JSON body as the given command model
    Check(CheckCmd),
    /// Print the error-code catalogue
    Codes {
        /// CSV instead of an aligned table
        #[arg(long)]
        csv: bool,
    },
}

#[derive(Debug, Args, Clone)]
pub struct CheckCmd {
    #[arg(value_enum)]
    pub model: Model,
    /// JSON file, or `-` for stdin
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Model {
    SignUp,
    SignIn,
    ResendVerification,
    ChangePassword,
    DeleteAccount,
    CreateDeck,
    UpdateDeck,
    CreateCard,
    UpdateCard,
    CreateGeneration,
    CommitGeneration,
}
