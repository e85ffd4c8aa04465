//! Input handler for the interactive session using rustyline
//!
//! Provides readline functionality with line editing and in-memory
//! history. Prediction inputs are deliberately not persisted to disk.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Input handler managing the readline interface
pub struct InputHandler {
    editor: DefaultEditor,
    prompt: String,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            prompt: ">medassist: ".to_string(),
        })
    }

    /// Set custom prompt
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Read a line of input from user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF (Ctrl-D)
    /// - Err on interrupt (Ctrl-C) or other errors
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    return Ok(Some(String::new()));
                }

                let _ = self.editor.add_history_entry(trimmed);

                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("Interrupted")),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}
