mod cli;
mod error;
mod filter;
mod fmt;
mod generator;
mod insights;
mod models;
mod session;

use clap::Parser;

use cli::{Cli, Commands, InsightsCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transactions {
            search,
            category,
            source,
            min,
            max,
            count,
            seed,
        } => cli::transactions::run(search, category, source, min, max, count, seed),
        Commands::Insights { command } => match command {
            InsightsCommands::Overview(args) => cli::insights::overview(args.range, args.seed),
            InsightsCommands::Categories(args) => cli::insights::categories(args.range, args.seed),
            InsightsCommands::Recurring(args) => cli::insights::recurring(args.range, args.seed),
            InsightsCommands::Largest(args) => cli::insights::largest(args.range, args.seed),
            InsightsCommands::Smart(args) => cli::insights::smart(args.range, args.seed),
        },
        Commands::Login {
            email,
            password,
            remember,
        } => cli::session::login(&email, &password, remember),
        Commands::Logout => cli::session::logout(),
        Commands::Whoami => cli::session::whoami(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
