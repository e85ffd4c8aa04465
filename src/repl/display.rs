//! Terminal output for the interactive session
//!
//! Formatted, color-coded rendering of predictions, warnings, and the
//! welcome banner.

use colored::*;

use crate::pipeline::Prediction;

/// Show welcome banner
pub fn show_banner(version: &str, n_symptoms: usize, n_diseases: usize) {
    let width = 64;
    let top = "=".repeat(width).cyan();
    let title = format!("  medassist {} - Smart Medical Assistant", version);
    let info = format!(
        "  Symptoms known: {} | Diseases: {} | Mode: interactive",
        n_symptoms, n_diseases
    );

    println!("\n{}", top);
    println!("{}", title.bold().cyan());
    println!("{}", info.dimmed());
    println!("{}\n", "=".repeat(width).cyan());
    println!(
        "Enter symptoms separated by commas (or {} for commands, {} to quit)",
        "/help".green(),
        "/exit".green()
    );
    println!(
        "{}\n",
        "Educational use only. Consult a licensed physician for medical advice.".dimmed()
    );
}

/// Show a completed prediction
pub fn show_prediction(prediction: &Prediction) {
    println!(
        "\n{} {}",
        "Predicted Disease:".bold().green(),
        prediction.disease.green()
    );
    println!(
        "{} {}\n",
        "Recommended Doctor:".bold().cyan(),
        prediction.specialist.cyan()
    );
}

/// Show a warning (recoverable user-input problem)
pub fn show_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message.yellow());
}

/// Show an error (failed request)
pub fn show_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message.red());
}

/// Show a dimmed informational note
pub fn show_note(message: &str) {
    println!("{}", message.dimmed());
}
