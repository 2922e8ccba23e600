use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};

use zenith_fin::cli::{
    handle_balance_command, handle_export_command, handle_goal_command,
    handle_notification_command, handle_transaction_command, BalanceCommands, ExportCommands,
    GoalCommands, NotificationCommands, TransactionCommands,
};
use zenith_fin::config::{ZenithPaths, DAILY_SERIES_DAYS, DEFAULT_REMINDER_TICK};
use zenith_fin::display::{format_category_breakdown, format_daily_series, format_overview};
use zenith_fin::notify::ConsoleNotifier;
use zenith_fin::services::{run_daily_reminder_check, BalanceService, ReminderScheduler};
use zenith_fin::storage::Store;

#[derive(Parser)]
#[command(
    name = "zenith",
    author,
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "ZenithFin is a terminal-based personal finance tracker. It keeps a \
                  transaction log, derives your balance from it, tracks savings goals \
                  against that balance and reminds you to record your day."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Balance commands
    #[command(subcommand)]
    Balance(BalanceCommands),

    /// Overview of balance, spending and recent days
    Summary,

    /// Notification settings
    #[command(subcommand, alias = "notify")]
    Notifications(NotificationCommands),

    /// Run the daily reminder scheduler in the foreground
    Watch {
        /// Seconds between reminder checks
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Delete all stored data
    Reset {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = ZenithPaths::new()?;
    let store = Store::open(paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&store, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&store, cmd)?,
        Some(Commands::Balance(cmd)) => handle_balance_command(&store, cmd)?,
        Some(Commands::Summary) => print_summary(&store)?,
        Some(Commands::Notifications(cmd)) => handle_notification_command(&store, cmd)?,
        Some(Commands::Watch { interval }) => run_watch(store, interval)?,
        Some(Commands::Export(cmd)) => handle_export_command(&store, cmd)?,
        Some(Commands::Reset { force }) => run_reset(&store, force)?,
        Some(Commands::Config) => print_config(&store)?,
        None => {
            println!("ZenithFin - Terminal-based personal finance tracker");
            println!();
            println!("Run 'zenith --help' for usage information.");
            println!("Run 'zenith summary' for an overview of your money.");
        }
    }

    Ok(())
}

fn print_summary(store: &Store) -> Result<()> {
    let service = BalanceService::new(store);
    let today = Local::now().date_naive();

    let totals = service.totals()?;
    let monthly = service.monthly_expense(today.year(), today.month())?;
    let month_label = today.format("%Y-%m").to_string();

    print!(
        "{}",
        format_overview(service.current_balance()?, &totals, monthly, &month_label)
    );
    println!();
    print!(
        "{}",
        format_category_breakdown(&service.expense_by_category()?)
    );
    println!();
    print!(
        "{}",
        format_daily_series(&service.daily_series(today, DAILY_SERIES_DAYS)?)
    );

    Ok(())
}

fn run_watch(store: Store, interval: Option<u64>) -> Result<()> {
    let tick = interval
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_REMINDER_TICK);
    let store = Arc::new(store);
    let notifier = Arc::new(ConsoleNotifier);

    println!(
        "Watching for reminders every {}s. Press Ctrl-C to stop.",
        tick.as_secs()
    );

    // Check right away so a matching minute is not missed at startup
    run_daily_reminder_check(&store, notifier.as_ref(), Local::now().naive_local())?;

    let _scheduler = ReminderScheduler::start(store, notifier, tick);
    loop {
        std::thread::park();
    }
}

fn run_reset(store: &Store, force: bool) -> Result<()> {
    if !force {
        println!("This deletes all transactions, goals, balance, settings and reminder state.");
        println!("To proceed, run again with --force flag:");
        println!("  zenith reset --force");
        return Ok(());
    }

    store.reset()?;
    println!(
        "All data wiped. Starting fresh at: {}",
        store.paths().data_dir().display()
    );
    Ok(())
}

fn print_config(store: &Store) -> Result<()> {
    let settings = store.settings.get()?;

    println!("ZenithFin Configuration");
    println!("=======================");
    println!("Data directory: {}", store.paths().data_dir().display());
    println!();
    println!(
        "Notifications:  {}",
        if settings.enabled { "enabled" } else { "disabled" }
    );
    println!("Reminder time:  {}", settings.reminder_time);
    Ok(())
}
