//! Plain-text presentation of a day's tree, kept apart from forest
//! construction so both stay testable on their own.

use chrono::{DateTime, Utc};

use gt_core::{
    entities::{DayKey, Timestamp, TreeNode},
    usecases::{lock_instant, ReplyOption, REFERENCE_TZ},
};

/// Header line of a day view.
pub fn day_banner(day: &DayKey, open: bool) -> String {
    if open {
        format!(
            "{day} • Accepting entries until midnight Mountain ({} UTC)",
            DateTime::<Utc>::from(lock_instant(day)).format("%Y-%m-%d %H:%M")
        )
    } else {
        format!("{day} • Locked (read-only)")
    }
}

/// Day-picker label: `Today`, or something like `Sat, Mar 9`.
pub fn day_label(day: &DayKey, is_today: bool) -> String {
    if is_today {
        "Today".into()
    } else {
        day.date().format("%a, %b %-d").to_string()
    }
}

/// One line per entry, indented two spaces per reply level.
pub fn forest_lines(forest: &[TreeNode]) -> Vec<String> {
    let mut lines = Vec::new();
    for node in forest {
        node_lines(node, 0, &mut lines);
    }
    lines
}

fn node_lines(node: &TreeNode, depth: usize, into: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    into.push(format!(
        "{indent}• {}  — {}, {}",
        node.entry.text,
        node.entry.display_label(),
        time_label(node.entry.created_at),
    ));
    for child in &node.children {
        node_lines(child, depth + 1, into);
    }
}

/// Lines for the reply-target selector.
pub fn reply_option_lines(options: &[ReplyOption]) -> Vec<String> {
    options
        .iter()
        .map(|option| format!("  {}  {}", option.target, option.label))
        .collect()
}

// Wall-clock time in the reference timezone; the pending sentinel while
// the server timestamp has not resolved yet.
fn time_label(created_at: Option<Timestamp>) -> String {
    match created_at {
        Some(at) => DateTime::<Utc>::from(at)
            .with_timezone(&REFERENCE_TZ)
            .format("%H:%M")
            .to_string(),
        None => "pending…".into(),
    }
}
