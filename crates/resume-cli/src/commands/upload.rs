//! Upload command - submit a resume to the parse service

use std::path::Path;
use std::process::ExitCode;

use resume_client::{run_upload, ParserClient};
use tracing::debug;

use crate::output::OutputContext;

/// Upload a resume and render the parsed result
///
/// With no file argument the attempt is rejected before any network
/// I/O, with the "please select a resume" notice on stderr. Attempt
/// failures are already rendered by the presenter, so they map to a
/// bare failure exit code rather than a second error print.
pub async fn upload(
    client: &ParserClient,
    file: Option<&Path>,
    ctx: &mut OutputContext,
) -> ExitCode {
    if let Some(path) = file {
        debug!("Uploading resume from {}", path.display());
    }

    match run_upload(client, file, ctx).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
