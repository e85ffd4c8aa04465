//! Command handler for interactive-session built-in commands
//!
//! Slash commands for introspection of the loaded bundle and the
//! current session; anything that does not start with `/` is treated as
//! a symptom selection by the caller.

use anyhow::Result;
use colored::*;

use crate::pipeline::Predictor;
use crate::repl::session::SessionManager;
use crate::report::EvaluationReport;

/// Interactive command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Symptoms { filter: Option<String> },
    Report,
    History { limit: Option<usize> },
    Reset,
    Clear,
    Exit,
    Unknown { input: String },
}

/// Command handler for parsing and executing interactive commands
pub struct CommandHandler {
    top_k: usize,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new(top_k: usize) -> Self {
        CommandHandler { top_k }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        // Not a command if doesn't start with /
        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "symptoms" | "sym" => Command::Symptoms {
                filter: parts.get(1).map(|s| s.to_string()),
            },
            "report" => Command::Report,
            "history" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok());
                Command::History { limit }
            }
            "reset" => Command::Reset,
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the session should continue, false if it should exit
    pub fn execute(
        &mut self,
        command: Command,
        session: &mut SessionManager,
        predictor: &Predictor,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(false)
            }
            Command::Symptoms { filter } => {
                self.show_symptoms(predictor, filter.as_deref());
                Ok(true)
            }
            Command::Report => {
                self.show_report(predictor);
                Ok(true)
            }
            Command::History { limit } => {
                self.show_history(session, limit.unwrap_or(10));
                Ok(true)
            }
            Command::Reset => {
                session.reset();
                println!("{}", "Session reset. History cleared.".yellow());
                Ok(true)
            }
            Command::Clear => {
                print!("\x1B[2J\x1B[1;1H"); // ANSI escape codes to clear screen
                Ok(true)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(true)
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/help, /h", "Show this help message"),
            ("/symptoms [text]", "List known symptoms (optionally filtered)"),
            ("/report", "Show model evaluation report"),
            ("/history [n]", "Show last n predictions (default: 10)"),
            ("/reset", "Clear session history"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit session"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Enter symptoms separated by commas, e.g. {}", "headache,nausea".cyan());
        println!("  - Use {} for input history", "UP/DOWN arrows".cyan());
        println!("  - Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Display the symptom vocabulary, optionally filtered
    fn show_symptoms(&self, predictor: &Predictor, filter: Option<&str>) {
        let names: Vec<&String> = predictor
            .feature_names()
            .iter()
            .filter(|name| filter.map_or(true, |f| name.contains(f)))
            .collect();

        if names.is_empty() {
            println!("{}", "No symptoms match that filter.".yellow());
            return;
        }

        println!(
            "\n{}",
            format!("Known Symptoms ({}):", names.len()).bold().cyan()
        );
        println!("{}", "=".repeat(60).cyan());

        for chunk in names.chunks(3) {
            let row: Vec<String> = chunk.iter().map(|n| format!("{:<28}", n)).collect();
            println!("  {}", row.join(""));
        }
        println!();
    }

    /// Display the evaluation report
    fn show_report(&self, predictor: &Predictor) {
        let report = EvaluationReport::build(predictor.bundle(), self.top_k);

        println!("\n{}", "Model Evaluation".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        println!(
            "\n{}",
            format!("Top {} Important Symptoms:", report.top_features.len()).bold()
        );
        for (i, feature) in report.top_features.iter().enumerate() {
            println!(
                "  {:>2}. {:<28} {:.4}",
                (i + 1).to_string().cyan(),
                feature.name,
                feature.score
            );
        }

        match &report.metrics {
            Some(metrics) => {
                println!("\n{}", "Held-out Metrics:".bold());
                println!("  Samples:    {}", metrics.samples.to_string().green());
                println!("  Accuracy:   {}", format!("{:.4}", metrics.accuracy).green());
                println!("  Precision:  {}", format!("{:.4}", metrics.precision).green());
                println!("  Recall:     {}", format!("{:.4}", metrics.recall).green());
                println!("  F1-score:   {}", format!("{:.4}", metrics.f1).green());

                // Full matrix only when it fits on a screen
                if metrics.confusion.len() <= 10 {
                    println!("\n{}", "Confusion Matrix (true x predicted):".bold());
                    for row in &metrics.confusion {
                        let cells: Vec<String> = row.iter().map(|c| format!("{:>5}", c)).collect();
                        println!("  {}", cells.join(" "));
                    }
                } else {
                    println!(
                        "\n  {}",
                        format!(
                            "Confusion matrix omitted ({} classes); see bundle holdout data.",
                            metrics.confusion.len()
                        )
                        .dimmed()
                    );
                }
            }
            None => {
                println!(
                    "\n{}",
                    "Held-out metrics unavailable: the bundle does not carry test labels."
                        .yellow()
                );
                println!(
                    "  {}",
                    "Store y_true and y_pred in the bundle during training for a full report."
                        .dimmed()
                );
            }
        }
        println!();
    }

    /// Display prediction history
    fn show_history(&self, session: &SessionManager, limit: usize) {
        let history = session.get_history(limit);

        if history.is_empty() {
            println!("{}", "No predictions in this session yet.".yellow());
            return;
        }

        println!(
            "\n{}",
            format!("Prediction History (last {}):", history.len())
                .bold()
                .cyan()
        );
        println!("{}", "=".repeat(60).cyan());

        for (i, record) in history.iter().enumerate() {
            let index = history.len() - i;
            println!(
                "  {}. {} -> {} ({})",
                index.to_string().cyan(),
                record.symptoms.join(", "),
                record.disease.green(),
                record.specialist.dimmed()
            );
        }
        println!();
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}
