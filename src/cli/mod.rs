pub mod insights;
pub mod session;
pub mod transactions;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{Category, Source, TimeRange};

/// Seeded rng for reproducible listings, entropy otherwise.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[derive(Parser)]
#[command(name = "finsight", about = "Personal-finance dashboard demo backed by synthetic data.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List synthetic transactions, filtered and grouped by month.
    Transactions {
        /// Case-insensitive search over merchant name and description
        #[arg(long)]
        search: Option<String>,
        /// Category, e.g. 'Food & Dining' (or a slug like food, bills, income)
        #[arg(long)]
        category: Option<Category>,
        /// Source channel: bank, email, sms, manual
        #[arg(long)]
        source: Option<Source>,
        /// Lower signed-amount bound; expenses are negative, so pass a
        /// negative value (e.g. -10000) to include them
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        min: f64,
        /// Upper signed-amount bound
        #[arg(long, default_value_t = 10_000.0, allow_hyphen_values = true)]
        max: f64,
        /// Generate a flat batch of N transactions over the last 60 days
        /// instead of the default three month cohorts
        #[arg(long)]
        count: Option<usize>,
        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Spending insights derived for a time range.
    Insights {
        #[command(subcommand)]
        command: InsightsCommands,
    },
    /// Sign in with the demo credentials.
    Login {
        /// Email address (try demo@finsight.com)
        email: String,
        /// Password
        #[arg(long)]
        password: String,
        /// Remember the session across invocations
        #[arg(long)]
        remember: bool,
    },
    /// Clear the remembered session.
    Logout,
    /// Show who is signed in.
    Whoami,
}

#[derive(Subcommand)]
pub enum InsightsCommands {
    /// Income, expenses and predicted balance.
    Overview(InsightsArgs),
    /// Expense breakdown by category.
    Categories(InsightsArgs),
    /// Recurring expense rollup.
    Recurring(InsightsArgs),
    /// The five largest expenses.
    Largest(InsightsArgs),
    /// Narrative smart insights.
    Smart(InsightsArgs),
}

#[derive(Args)]
pub struct InsightsArgs {
    /// Time range: week, month, quarter or year
    #[arg(long, default_value = "month")]
    pub range: TimeRange,
    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}
