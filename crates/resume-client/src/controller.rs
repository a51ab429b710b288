//! Upload controller: drives one upload attempt end-to-end
//!
//! Separates the network call from its presentation. The controller
//! pushes state transitions (in-flight status, result text, error text,
//! pre-flight alert) through a [`Presenter`], so the same attempt logic
//! serves a terminal frontend and the test suite alike.

use std::path::Path;

use crate::client::ParserClient;
use crate::error::{Result, UploadError};

/// In-flight status text shown while the service parses the resume
const STATUS_PARSING: &str = "Parsing resume...";

/// UI seam for one upload attempt
///
/// Implementations own the output region. Each call overwrites the
/// previously displayed content; the controller is the only writer
/// during an attempt.
pub trait Presenter {
    /// Blocking notice shown when no file is selected. Does not touch
    /// the output region.
    fn alert(&mut self, message: &str);

    /// Make the output region visible and show an in-flight status.
    fn show_status(&mut self, status: &str);

    /// Show the final parsed result. `pretty` is the result serialized
    /// with 2-space indentation; presenters that want a different
    /// rendering can re-serialize `parsed`.
    fn show_result(&mut self, parsed: &serde_json::Value, pretty: &str);

    /// Show a terminal error for this attempt.
    fn show_error(&mut self, message: &str);
}

/// Run one upload attempt
///
/// State flow: Idle → In-Flight (status shown before the request is
/// issued) → Done or Failed. With no selected file the attempt is
/// rejected before any network I/O, via [`Presenter::alert`].
///
/// Overlapping attempts are ruled out by construction: the presenter is
/// borrowed mutably for the whole attempt, so a second call on the same
/// presenter cannot start until this one resolves.
///
/// Errors are terminal for the attempt and are rendered as
/// `Error: <message>` in the output region; they are never retried.
pub async fn run_upload(
    client: &ParserClient,
    selected: Option<&Path>,
    ui: &mut dyn Presenter,
) -> Result<serde_json::Value> {
    let Some(path) = selected else {
        let err = UploadError::NoFileSelected;
        ui.alert(&err.to_string());
        return Err(err);
    };

    ui.show_status(STATUS_PARSING);

    match client.upload_path(path).await {
        Ok(parsed) => {
            let pretty = serde_json::to_string_pretty(&parsed)
                .map_err(|e| UploadError::Decode(e.to_string()))?;
            ui.show_result(&parsed, &pretty);
            Ok(parsed)
        }
        Err(err) => {
            ui.show_error(&format!("Error: {}", err));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        alerts: Vec<String>,
        statuses: Vec<String>,
    }

    impl Presenter for Recorder {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn show_status(&mut self, status: &str) {
            self.statuses.push(status.to_string());
        }

        fn show_result(&mut self, _parsed: &serde_json::Value, _pretty: &str) {}

        fn show_error(&mut self, _message: &str) {}
    }

    #[tokio::test]
    async fn test_no_file_alerts_without_touching_output() {
        let client = ParserClient::new("http://127.0.0.1:9/api/v1").unwrap();
        let mut ui = Recorder::default();

        let result = run_upload(&client, None, &mut ui).await;

        assert!(matches!(result, Err(UploadError::NoFileSelected)));
        assert_eq!(ui.alerts, vec!["Please select a resume (PDF or DOCX)"]);
        assert!(ui.statuses.is_empty());
    }
}
