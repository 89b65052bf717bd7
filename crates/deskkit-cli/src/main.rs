use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use deskkit_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "deskkit", version, about = "deskkit productivity toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pomodoro timer control
    Pomodoro {
        #[command(subcommand)]
        action: commands::pomodoro::PomodoroAction,
    },
    /// Lap stopwatch
    Stopwatch {
        #[command(subcommand)]
        action: commands::stopwatch::StopwatchAction,
    },
    /// Raw key-value store access
    Store {
        #[command(subcommand)]
        action: commands::store::StoreAction,
    },
    /// Counts across all widgets
    Overview {
        /// Print the recent-activity feed instead of counts
        #[arg(long)]
        recent: bool,
    },
    /// Todo list
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Notes
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Bookmarks
    Bookmark {
        #[command(subcommand)]
        action: commands::bookmark::BookmarkAction,
    },
    /// Contacts
    Contact {
        #[command(subcommand)]
        action: commands::contact::ContactAction,
    },
    /// Shopping list
    Shop {
        #[command(subcommand)]
        action: commands::shop::ShopAction,
    },
    /// Daily planner
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Text editor draft and saved documents
    Doc {
        #[command(subcommand)]
        action: commands::doc::DocAction,
    },
    /// URL shortener
    Url {
        #[command(subcommand)]
        action: commands::url::UrlAction,
    },
    /// Case conversion and text statistics
    Text {
        #[command(subcommand)]
        action: commands::text::TextAction,
    },
    /// Convert a value between units
    Convert(commands::convert::ConvertArgs),
    /// Pocket calculator
    Calc(commands::calc::CalcArgs),
    /// Browse writing ideas
    Ideas {
        #[command(subcommand)]
        action: commands::ideas::IdeasAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    deskkit_core::init_logging(&config.logging.level);

    let result = match cli.command {
        Commands::Pomodoro { action } => commands::pomodoro::run(action, &config),
        Commands::Stopwatch { action } => commands::stopwatch::run(action, &config),
        Commands::Store { action } => commands::store::run(action, &config),
        Commands::Overview { recent } => commands::overview::run(recent, &config),
        Commands::Todo { action } => commands::todo::run(action, &config),
        Commands::Notes { action } => commands::notes::run(action, &config),
        Commands::Bookmark { action } => commands::bookmark::run(action, &config),
        Commands::Contact { action } => commands::contact::run(action, &config),
        Commands::Shop { action } => commands::shop::run(action, &config),
        Commands::Plan { action } => commands::plan::run(action, &config),
        Commands::Doc { action } => commands::doc::run(action, &config),
        Commands::Url { action } => commands::url::run(action, &config),
        Commands::Text { action } => commands::text::run(action),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Calc(args) => commands::calc::run(args),
        Commands::Ideas { action } => commands::ideas::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "deskkit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
