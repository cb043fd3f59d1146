use clap::{Parser, Subcommand};
use log::debug;
use mealfinder::{
    CatalogConfig, FailurePolicy, JsonPresenter, MealFinder, Presenter, Session,
    TerminalPresenter, UiEvent,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

const INTERACTIVE_HELP: &str = "\
Type one or more ingredients separated by commas to search (e.g. chicken, garlic).
  :r <n|id>   show the recipe at position n in the list, or by meal id
  :close      close the recipe
  :help       show this help
  :q          quit";

#[derive(Parser, Debug)]
#[command(name = "mealfinder", version, about = "Find recipes by the ingredients you have")]
struct Cli {
    /// Catalog API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// What to do when some ingredient lookups fail: partial or all_or_nothing
    #[arg(long, global = true)]
    failure_policy: Option<FailurePolicy>,

    /// Print one JSON object per line instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search meals by comma separated ingredients
    Search {
        /// e.g. "chicken, garlic"
        query: Vec<String>,
    },
    /// Show the full recipe for a meal id
    Recipe { id: String },
    /// Read searches and commands from standard input (default)
    Interactive,
}

/// One line of interactive input
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Search(String),
    Recipe(String),
    Close,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return ReplCommand::Search(line.to_string());
    };

    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (command, ""),
    };

    match name {
        "q" | "quit" | "exit" => ReplCommand::Quit,
        "h" | "help" | "?" => ReplCommand::Help,
        "c" | "close" => ReplCommand::Close,
        "r" | "recipe" if !argument.is_empty() => ReplCommand::Recipe(argument.to_string()),
        _ => ReplCommand::Unknown(trimmed.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = CatalogConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let mut builder = MealFinder::builder().config(config);
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(policy) = cli.failure_policy {
        builder = builder.failure_policy(policy);
    }
    let finder = builder.build()?;

    let presenter: Arc<dyn Presenter> = if cli.json {
        Arc::new(JsonPresenter::new())
    } else {
        Arc::new(TerminalPresenter::new())
    };
    let session = Arc::new(finder.session(presenter));

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Search { query } => {
            session.search(&query.join(" ")).await;
        }
        Command::Recipe { id } => {
            session.recipe(&id).await;
        }
        Command::Interactive => run_interactive(session, cli.json).await?,
    }

    Ok(())
}

/// Read commands line by line. Each search and recipe request runs as its
/// own task, so typing a new search does not wait for the previous one.
async fn run_interactive(session: Arc<Session>, quiet: bool) -> std::io::Result<()> {
    if !quiet {
        println!("{}", INTERACTIVE_HELP);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let event = match parse_command(&line) {
            ReplCommand::Quit => return Ok(()),
            ReplCommand::Help => {
                println!("{}", INTERACTIVE_HELP);
                continue;
            }
            ReplCommand::Unknown(command) => {
                eprintln!("Unknown command '{}'. Type :help for help.", command);
                continue;
            }
            ReplCommand::Close => UiEvent::CloseDetail,
            ReplCommand::Search(query) => UiEvent::SearchRequested(query),
            ReplCommand::Recipe(selector) => {
                UiEvent::RecipeRequested(session.resolve_selection(&selector))
            }
        };

        let session = session.clone();
        in_flight.spawn(async move { session.handle(event).await });

        // Reap finished tasks so the set does not grow without bound
        while in_flight.try_join_next().is_some() {}
    }

    // End of input: let pending requests finish so their output is shown
    while in_flight.join_next().await.is_some() {}
    Ok(())
}
