use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::Event;

#[derive(Debug, Error)]
pub enum EventsFileError {
    #[error("Failed to read events file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse events file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Event fixture as supplied by the embedding application: `{"events": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsFile {
    pub events: Vec<Event>,
}

impl EventsFile {
    pub fn from_json(content: &str) -> Result<Self, EventsFileError> {
        serde_json::from_str(content).map_err(EventsFileError::from)
    }

    pub fn load(path: &Path) -> Result<Self, EventsFileError> {
        let content = std::fs::read_to_string(path)?;
        let file = Self::from_json(&content)?;
        tracing::debug!("Loaded {} events from {}", file.events.len(), path.display());
        Ok(file)
    }
}
