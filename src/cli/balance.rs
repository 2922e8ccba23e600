//! Balance CLI commands

use clap::Subcommand;

use crate::display::report::colored_amount;
use crate::error::{ZenithError, ZenithResult};
use crate::models::Money;
use crate::services::BalanceService;
use crate::storage::Store;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the current balance and totals
    Show,
    /// Set the initial balance
    Set {
        /// New initial balance (e.g., "1000" or "1000.00")
        amount: String,
    },
}

/// Handle a balance command
pub fn handle_balance_command(store: &Store, cmd: BalanceCommands) -> ZenithResult<()> {
    let service = BalanceService::new(store);

    match cmd {
        BalanceCommands::Show => {
            let totals = service.totals()?;
            println!(
                "Current balance: {}",
                colored_amount(service.current_balance()?)
            );
            println!("  Initial:       {}", service.initial_balance()?);
            println!("  Income:        {}", totals.income);
            println!("  Expense:       {}", totals.expense);
        }

        BalanceCommands::Set { amount } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ZenithError::InvalidInput(format!("Invalid amount: {}", e)))?;
            service.set_initial_balance(amount)?;
            println!("Initial balance set to {}", amount);
            println!(
                "Current balance: {}",
                colored_amount(service.current_balance()?)
            );
        }
    }

    Ok(())
}
