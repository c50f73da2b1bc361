//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print a tree-ordered row: id and parent dimmed, name plain
pub fn row(id: i64, parent_id: i64, name: &str) {
    println!(
        "{:>6} {:>6}  {}",
        id.to_string().dimmed(),
        parent_id.to_string().dimmed(),
        name
    );
}

/// Print an orphan row (yellow name)
pub fn orphan_row(id: i64, parent_id: i64, name: &str) {
    println!(
        "{:>6} {:>6}  {}",
        id.to_string().dimmed(),
        parent_id.to_string().dimmed(),
        name.yellow()
    );
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
