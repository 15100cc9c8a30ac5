//! Console formatting shared by the provisioning steps

use colored::Colorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

pub fn banner() {
    let border = "═".repeat(RULE_WIDTH);
    println!();
    println!("    ╔{}╗", border);
    println!("    ║{:60}║", "");
    println!("    ║       {:53}║", "TWENTY CRM SETUP AUTOMATION");
    println!("    ║       {:53}║", "Anclora Private Estates");
    println!("    ║{:60}║", "");
    println!("    ╚{}╝", border);
    println!();
}

/// Ruled section heading
pub fn section(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule);
    println!("{}", title.bold());
    println!("{}", rule);
}

/// Print the start of a progress line, to be finished by [`ok`] or [`failed`]
pub fn progress(message: &str) {
    print!("\n{}... ", message);
    let _ = io::stdout().flush();
}

pub fn ok() {
    println!("{}", "✓".green());
}

pub fn failed(error: &str) {
    println!("{} {}", "✗ Error:".red(), error);
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn error(message: &str) {
    println!("{} {}", "✗".red(), message);
}
