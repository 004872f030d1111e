//! Output formatting for the command line.
//!
//! Errors go to stderr so that path listings on stdout stay pipeable.

use crate::core::category::FileCategory;
use colored::*;
use std::path::PathBuf;

/// Formats and prints an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Renders one category as a header followed by indented, colored paths.
///
/// Empty categories render as an empty string.
pub fn format_category_section(category: FileCategory, paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return String::new();
    }

    let mut section = format!(
        "{} {}\n",
        category.paint(category.section_title()).bold(),
        format!("({})", paths.len()).bright_black()
    );
    for path in paths {
        section.push_str(&format!(
            "    {}\n",
            category.paint(&path.display().to_string())
        ));
    }

    section
}

/// Prints one category section followed by a blank line
pub fn print_category_section(category: FileCategory, paths: &[PathBuf]) {
    let section = format_category_section(category, paths);
    if !section.is_empty() {
        println!("{section}");
    }
}
