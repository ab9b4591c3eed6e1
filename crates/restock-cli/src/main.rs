use clap::{Parser, Subcommand};

mod commands;
mod config;
mod store;

#[derive(Parser)]
#[command(name = "restock-cli", version, about = "Restock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Item management
    Item {
        #[command(subcommand)]
        action: commands::item::ItemAction,
    },
    /// Show the list ordered by urgency, most urgent first
    List {
        /// Output the ranked records and tier counts as JSON
        #[arg(long)]
        json: bool,
        /// Only show one tier (overdue, soon, kind-of-soon, not-soon, inactive)
        #[arg(long)]
        tier: Option<String>,
        /// Include inactive items even when the config hides them
        #[arg(long)]
        all: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Item { action } => commands::item::run(action),
        Commands::List { json, tier, all } => commands::list::run(json, tier, all),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
