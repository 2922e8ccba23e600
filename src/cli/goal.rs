//! Goal CLI commands
//!
//! Implements CLI commands for savings goals, including the confirmation
//! step for deposits that exceed the current balance.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::goal::{format_goal_details, format_goal_list};
use crate::error::{ZenithError, ZenithResult};
use crate::models::Money;
use crate::notify::{ConsoleNotifier, Notifier};
use crate::services::{DepositOutcome, GoalService};
use crate::storage::Store;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// What you are saving for
        title: String,
        /// Target amount (e.g., "1000" or "1000.00")
        target: String,
        /// Optional deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// List goals with their progress
    List,
    /// Show one goal with its full coverage breakdown
    Show {
        /// Goal ID (full or short form)
        id: String,
    },
    /// Add money to a goal's saved total
    Deposit {
        /// Goal ID (full or short form)
        id: String,
        /// Amount to deposit
        amount: String,
        /// Apply even when the deposit exceeds the current balance
        #[arg(short, long)]
        force: bool,
    },
    /// Remove a goal
    Remove {
        /// Goal ID (full or short form)
        id: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(store: &Store, cmd: GoalCommands) -> ZenithResult<()> {
    let service = GoalService::new(store);

    match cmd {
        GoalCommands::Add {
            title,
            target,
            deadline,
        } => {
            let target = Money::parse(&target)
                .map_err(|e| ZenithError::InvalidInput(format!("Invalid target: {}", e)))?;
            let deadline = deadline
                .map(|s| {
                    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                        ZenithError::InvalidInput(format!(
                            "Invalid deadline '{}', expected YYYY-MM-DD",
                            s
                        ))
                    })
                })
                .transpose()?;

            let goal = service.create(title, target, deadline)?;
            println!("Created goal '{}' targeting {}", goal.title, goal.target_amount);
            println!("  Id: {}", goal.id);
        }

        GoalCommands::List => {
            let goals = service.coverage_all()?;
            print!("{}", format_goal_list(&goals));
        }

        GoalCommands::Show { id } => {
            let (goal, coverage) = service.coverage(&id)?;
            print!("{}", format_goal_details(&goal, &coverage));
        }

        GoalCommands::Deposit { id, amount, force } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ZenithError::InvalidInput(format!("Invalid amount: {}", e)))?;

            match service.deposit(&id, amount, force)? {
                DepositOutcome::Applied { goal, milestone } => {
                    println!(
                        "Deposited {} into '{}' ({} of {} saved)",
                        amount, goal.title, goal.current_amount, goal.target_amount
                    );
                    if let Some(milestone) = milestone {
                        ConsoleNotifier.notify(&milestone);
                    }
                }
                DepositOutcome::RequiresConfirmation {
                    balance, shortfall, ..
                } => {
                    println!(
                        "This deposit exceeds your current balance ({} available, {} short).",
                        balance, shortfall
                    );
                    println!("To apply it anyway, run again with --force flag:");
                    // Suffix-free amount so the printed command can be pasted
                    println!(
                        "  zenith goal deposit {} {}.{:02} --force",
                        id,
                        amount.units(),
                        amount.cents_part()
                    );
                }
            }
        }

        GoalCommands::Remove { id } => {
            if service.delete(&id)? {
                println!("Removed goal {}", id);
            } else {
                println!("No goal matches '{}'; nothing removed.", id);
            }
        }
    }

    Ok(())
}
