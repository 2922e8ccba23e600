//! Notification settings CLI commands
//!
//! Shows and edits the notification preferences, and handles the
//! permission request that turns notifications on.

use clap::Subcommand;
use log::warn;

use crate::error::ZenithResult;
use crate::models::NotificationSettings;
use crate::notify::{ConsoleNotifier, Notifier, Permission};
use crate::storage::Store;

/// Notification subcommands
#[derive(Subcommand)]
pub enum NotificationCommands {
    /// Show notification preferences
    Show,
    /// Turn notifications on
    Enable,
    /// Turn notifications off
    Disable,
    /// Set the daily reminder time
    #[command(name = "set-time")]
    SetTime {
        /// 24-hour HH:MM, e.g. 20:00
        time: String,
    },
    /// Ask for permission to show notifications; enables them when granted
    Request,
}

/// Handle a notification settings command
pub fn handle_notification_command(store: &Store, cmd: NotificationCommands) -> ZenithResult<()> {
    match cmd {
        NotificationCommands::Show => {
            let settings = store.settings.get()?;
            println!("Notifications:   {}", on_off(settings.enabled));
            println!(
                "Daily reminders: {} at {}",
                on_off(settings.reminders),
                settings.reminder_time
            );
            println!("Goal milestones: {}", on_off(settings.goal_milestones));
            println!("Budget alerts:   {}", on_off(settings.budget_alerts));
        }

        NotificationCommands::Enable => {
            update(store, |s| s.enabled = true)?;
            println!("Notifications enabled.");
        }

        NotificationCommands::Disable => {
            update(store, |s| s.enabled = false)?;
            println!("Notifications disabled.");
        }

        NotificationCommands::SetTime { time } => {
            NotificationSettings::validate_time(&time)?;
            update(store, |s| s.reminder_time = time.clone())?;
            println!("Daily reminder time set to {}", time);
        }

        NotificationCommands::Request => match ConsoleNotifier.request_permission() {
            Permission::Granted => {
                update(store, |s| s.enabled = true)?;
                println!("Permission granted; notifications enabled.");
            }
            Permission::Denied => {
                println!("Permission denied; notifications stay off.");
            }
        },
    }

    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn update(store: &Store, mutate: impl FnOnce(&mut NotificationSettings)) -> ZenithResult<()> {
    let mut settings = store.settings.get()?;
    mutate(&mut settings);
    store.settings.set(settings)?;
    if let Err(e) = store.settings.save() {
        warn!("could not persist settings, keeping in-memory values: {}", e);
    }
    Ok(())
}
