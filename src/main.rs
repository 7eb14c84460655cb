use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_add, handle_config, handle_list};
use expense_tracker::config::ExpensePaths;
use expense_tracker::models::Category;
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record and review personal expenses",
    long_about = "A simple personal expense tracker. Expenses carry a \
                  description, amount, date, and category, and are persisted \
                  to a single data file between sessions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// What the money was spent on (may be empty)
        description: String,
        /// Amount as a non-negative decimal number (e.g. "3.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date in dd/MM/yyyy form
        date: String,
        /// Category: food, transport, utilities, entertainment, or health
        category: Category,
    },
    /// List all recorded expenses
    #[command(alias = "ls")]
    List,
    /// Show the resolved data file path
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new();
    let mut store = ExpenseStore::new(paths.expenses_file());

    // A missing data file loads as empty; anything else is reported but the
    // session continues with an empty store.
    if let Err(err) = store.load() {
        eprintln!("Warning: {err}");
    }

    match cli.command {
        Commands::Add {
            description,
            amount,
            date,
            category,
        } => {
            if let Err(err) = handle_add(&mut store, &description, &amount, &date, category) {
                // Bad input gets a plain message; only I/O failures surface
                // as process errors.
                if err.is_validation() {
                    eprintln!("{err}");
                    std::process::exit(2);
                }
                return Err(err.into());
            }
        }
        Commands::List => handle_list(&store),
        Commands::Config => handle_config(&paths),
    }

    Ok(())
}
