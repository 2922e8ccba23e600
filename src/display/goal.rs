//! Goal display formatting
//!
//! List and detail views for savings goals, always paired with the
//! coverage computed against the live balance.

use crate::models::{Coverage, Goal};

use super::report::{bar, percent, truncate};

/// Format a single goal for the list view
pub fn format_goal_row(goal: &Goal, coverage: &Coverage) -> String {
    format!(
        "{} {} {:>14} {:>14} {:>5} {}",
        goal.id,
        truncate(&goal.title, 20),
        goal.current_amount.to_string(),
        goal.target_amount.to_string(),
        percent(coverage.saved_progress),
        bar(coverage.saved_progress / 100.0, 12)
    )
}

/// Format all goals with their coverage as a table
pub fn format_goal_list(goals: &[(Goal, Coverage)]) -> String {
    if goals.is_empty() {
        return "No savings goals.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:13} {:20} {:>14} {:>14} {:>5}\n",
        "Id", "Title", "Saved", "Target", "Prog"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for (goal, coverage) in goals {
        output.push_str(&format_goal_row(goal, coverage));
        output.push('\n');
    }

    output.push_str(&"-".repeat(84));
    output.push('\n');
    output.push_str(&format!("{} goal(s)\n", goals.len()));

    output
}

/// Format goal details with the full coverage breakdown
pub fn format_goal_details(goal: &Goal, coverage: &Coverage) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal:            {}\n", goal.title));
    output.push_str(&format!("Id:              {}\n", goal.id));
    output.push_str(&format!("Target:          {}\n", goal.target_amount));
    output.push_str(&format!(
        "Saved:           {} ({})\n",
        goal.current_amount,
        percent(coverage.saved_progress)
    ));
    output.push_str(&format!("Missing:         {}\n", coverage.missing_from_target));

    if let Some(deadline) = goal.deadline {
        output.push_str(&format!("Deadline:        {}\n", deadline.format("%Y-%m-%d")));
    }

    output.push('\n');
    output.push_str(&format!(
        "Balance covers:  {} of the target\n",
        percent(coverage.balance_contribution)
    ));
    output.push_str(&format!(
        "Total coverage:  {}\n",
        percent(coverage.total_coverage)
    ));

    if coverage.can_cover_now {
        output.push_str("Your current balance can finish this goal today.\n");
    } else {
        output.push_str(&format!(
            "Still {} short even using the whole balance.\n",
            coverage.deficit
        ));
    }

    output
}
