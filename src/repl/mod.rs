//! Interactive session module for the terminal assistant
//!
//! Provides the read-eval-print loop: symptom selections in, predictions
//! out, with built-in slash commands for bundle and session
//! introspection.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use chrono::Utc;

use crate::pipeline::Predictor;
use crate::repl::commands::{is_command, CommandHandler};
use crate::repl::input::InputHandler;
pub use crate::repl::session::{PredictionRecord, SessionManager};

/// Interactive session coordinator
///
/// Owns input handling (rustyline), command processing, session history,
/// and the predictor handle for the loaded bundle.
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session_manager: SessionManager,
    predictor: Predictor,
    verbose: bool,
}

impl ReplSession {
    /// Create new interactive session over a loaded predictor
    pub fn new(predictor: Predictor, top_k: usize, verbose: bool) -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::new()?,
            command_handler: CommandHandler::new(top_k),
            session_manager: SessionManager::new(),
            predictor,
            verbose,
        })
    }

    /// Run the interactive loop until exit
    pub fn run(&mut self, version: &str) -> Result<()> {
        display::show_banner(
            version,
            self.predictor.feature_names().len(),
            self.predictor.bundle().encoder.n_classes(),
        );

        loop {
            match self.input_handler.read_line() {
                Ok(Some(input)) => {
                    if input.is_empty() {
                        continue;
                    }
                    if !self.handle_input(&input)? {
                        break;
                    }
                }
                Ok(None) => {
                    // EOF (Ctrl-D) - exit gracefully
                    break;
                }
                Err(e) => {
                    if e.to_string().contains("Interrupted") {
                        println!("\nUse /exit to quit gracefully");
                        continue;
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one line of input: slash command or symptom selection
    ///
    /// Returns true if the session should continue
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        if is_command(input) {
            let command = self.command_handler.parse(input);
            return self.command_handler.execute(
                command,
                &mut self.session_manager,
                &self.predictor,
            );
        }

        self.predict_selection(input);
        Ok(true)
    }

    /// Parse a comma-separated selection and run a prediction
    fn predict_selection(&mut self, input: &str) {
        let selected = parse_selection(input);

        if self.verbose {
            let (_, unknown) = self.predictor.partition_known(&selected);
            if !unknown.is_empty() {
                display::show_note(&format!("Ignoring unknown symptoms: {}", unknown.join(", ")));
            }
        }

        match self.predictor.predict(&selected) {
            Ok(prediction) => {
                display::show_prediction(&prediction);
                self.session_manager.record_prediction(PredictionRecord {
                    symptoms: selected,
                    disease: prediction.disease,
                    specialist: prediction.specialist,
                    timestamp: Utc::now(),
                });
            }
            Err(e) if e.is_input_error() => {
                display::show_warning("Please select at least one symptom.");
            }
            Err(e) => {
                display::show_error(&format!("Prediction failed: {}", e));
            }
        }
    }

    /// Number of predictions made so far this session
    pub fn prediction_count(&self) -> usize {
        self.session_manager.prediction_count()
    }
}

/// Split a comma-separated input line into trimmed, non-empty symptom names
pub fn parse_selection(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_trims_and_drops_empty() {
        assert_eq!(
            parse_selection(" headache , nausea ,,"),
            vec!["headache".to_string(), "nausea".to_string()]
        );
    }

    #[test]
    fn test_parse_selection_empty_input() {
        assert!(parse_selection("").is_empty());
        assert!(parse_selection(" , , ").is_empty());
    }

    #[test]
    fn test_parse_selection_single() {
        assert_eq!(parse_selection("headache"), vec!["headache".to_string()]);
    }

    #[test]
    fn test_parse_selection_preserves_inner_spaces() {
        // Symptom vocabularies may contain multi-word names
        assert_eq!(
            parse_selection("joint pain, chills"),
            vec!["joint pain".to_string(), "chills".to_string()]
        );
    }
}
