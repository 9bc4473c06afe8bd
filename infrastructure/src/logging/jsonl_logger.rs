//! Append-only JSONL journal of hybrid mode transitions.
//!
//! One line per [`TransitionEvent`]:
//!
//! ```text
//! {"type":"state_committed","timestamp":"2026-10-18T09:12:44.301Z","state":"auto"}
//! ```
//!
//! A restart may follow any event, so every line is flushed as soon as it is
//! written.

use hybridctl_application::{TransitionEvent, TransitionLogger};
use serde::Serialize;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// One journal line. Payload fields sit next to `type` and `timestamp`.
#[derive(Serialize)]
struct JournalRecord<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    timestamp: String,
    #[serde(flatten)]
    payload: &'a Value,
}

impl<'a> JournalRecord<'a> {
    fn new(event: &'a TransitionEvent) -> Self {
        Self {
            event_type: event.event_type,
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            payload: &event.payload,
        }
    }
}

/// Transition journal backed by a file opened in append mode.
pub struct JsonlTransitionLogger {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlTransitionLogger {
    /// Open the journal, creating it and its parent directories if needed.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, event: &TransitionEvent) -> io::Result<()> {
        // Object payloads only; anything else fails to flatten
        let mut line = serde_json::to_vec(&JournalRecord::new(event))?;
        line.push(b'\n');

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("journal lock poisoned"))?;
        file.write_all(&line)?;
        file.flush()
    }
}

impl TransitionLogger for JsonlTransitionLogger {
    fn log(&self, event: TransitionEvent) {
        if let Err(e) = self.append(&event) {
            warn!(
                "Could not journal {} to {}: {}",
                event.event_type,
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_events_become_flat_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transitions.jsonl");
        let logger = JsonlTransitionLogger::new(&path).unwrap();

        logger.log(TransitionEvent::new(
            "transition_requested",
            json!({ "control": "multi-state", "old": "off", "new": "auto" }),
        ));
        logger.log(TransitionEvent::new(
            "state_committed",
            json!({ "state": "auto" }),
        ));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "transition_requested");
        assert_eq!(lines[0]["new"], "auto");
        assert_eq!(lines[1]["type"], "state_committed");
        assert_eq!(lines[1]["state"], "auto");
        for line in &lines {
            let timestamp = line["timestamp"].as_str().unwrap();
            assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        }
    }

    #[test]
    fn test_lines_are_visible_without_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transitions.jsonl");
        let logger = JsonlTransitionLogger::new(&path).unwrap();

        logger.log(TransitionEvent::new(
            "restart_confirmed",
            json!({ "control": "binary" }),
        ));

        assert_eq!(read_lines(&path).len(), 1);
        drop(logger);
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transitions.jsonl");

        for _ in 0..2 {
            let logger = JsonlTransitionLogger::new(&path).unwrap();
            logger.log(TransitionEvent::new(
                "restart_declined",
                json!({ "control": "binary" }),
            ));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_non_object_payload_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transitions.jsonl");
        let logger = JsonlTransitionLogger::new(&path).unwrap();

        logger.log(TransitionEvent::new("refreshed", json!("auto")));
        logger.log(TransitionEvent::new("refreshed", json!({ "state": "auto" })));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["state"], "auto");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(JsonlTransitionLogger::new(blocker.join("transitions.jsonl")).is_err());
    }
}
