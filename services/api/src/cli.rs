use crate::demo::{run_demo, run_score, run_search, DemoArgs, ScoreArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rent_screen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rent Screen",
    about = "Score rental applicants and search screening records from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single applicant from the given inputs
    Score(ScoreArgs),
    /// Search the bundled screening records
    Search(SearchArgs),
    /// Print screening reports for every bundled applicant
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Search(args) => run_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
