//! Session manager for the interactive prediction loop
//!
//! Keeps an in-memory record of the predictions made this session for
//! the /history command. Nothing here is written to disk; the history
//! dies with the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of predictions to keep in history
const MAX_HISTORY_SIZE: usize = 200;

/// Record of one completed prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub symptoms: Vec<String>,
    pub disease: String,
    pub specialist: String,
    pub timestamp: DateTime<Utc>,
}

/// Session manager maintaining interactive-session state
pub struct SessionManager {
    /// Prediction history (FIFO queue, bounded)
    history: VecDeque<PredictionRecord>,

    /// Total predictions made this session
    prediction_count: usize,

    /// Session start time
    session_start: DateTime<Utc>,
}

impl SessionManager {
    /// Create new session manager
    pub fn new() -> Self {
        SessionManager {
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
            prediction_count: 0,
            session_start: Utc::now(),
        }
    }

    /// Record a completed prediction
    pub fn record_prediction(&mut self, record: PredictionRecord) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(record);
        self.prediction_count += 1;
    }

    /// Get prediction history (newest first), up to `limit` entries
    pub fn get_history(&self, limit: usize) -> Vec<&PredictionRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    /// Clear session state
    pub fn reset(&mut self) {
        self.history.clear();
        self.prediction_count = 0;
        self.session_start = Utc::now();
    }

    /// Total predictions made this session
    pub fn prediction_count(&self) -> usize {
        self.prediction_count
    }

    /// Number of records currently held
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Session duration in seconds
    pub fn session_duration(&self) -> i64 {
        (Utc::now() - self.session_start).num_seconds()
    }

    /// Check if anything has been predicted yet
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
