//! Terminal feedback shared by the command handlers.

use super::TargetingArgs;
use socialseo::{
    FormController, FormState, GenerativeDriver, GroundingSource, Phase, Progress, SourceList,
};
use std::process::ExitCode;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

/// Print each new phase of the progress indicator to stderr.
///
/// Runs until aborted or the controller is dropped.
pub fn report_phases(mut progress: watch::Receiver<Progress>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last = Phase::Idle;
        while progress.changed().await.is_ok() {
            let reading = *progress.borrow_and_update();
            if reading.phase != last && reading.phase.is_active() {
                eprintln!("[{:>3}%] {}", reading.percent(), reading.phase);
            }
            last = reading.phase;
        }
    })
}

/// Copy the targeting flags into the form.
pub fn apply_targeting<D: GenerativeDriver>(form: &FormController<D>, args: &TargetingArgs) {
    form.update_filters(|filters| {
        if let Some(niche) = &args.niche {
            filters.set_niche(niche.as_str());
        }
        if let Some(geo) = &args.geo {
            filters.set_geography(geo.as_str());
        }
        if let Some(audience) = &args.audience {
            filters.set_target_audience(audience.as_str());
        }
        if let Some(language) = &args.language {
            filters.set_target_language(language.as_str());
        }
        if let Some(demographics) = &args.demographics {
            filters.set_target_demographics(demographics.as_str());
        }
    });
}

/// Print the controller's message for a failed submission.
pub fn report_failure(state: &FormState) -> ExitCode {
    match state.error() {
        Some(message) => eprintln!("Error: {}", message),
        None => eprintln!("Error: the request did not complete"),
    }
    ExitCode::FAILURE
}

/// Log and print grounding sources, if any.
///
/// `to_stdout` keeps machine-readable output clean when false.
pub fn report_sources(sources: &[GroundingSource], to_stdout: bool) {
    if sources.is_empty() {
        return;
    }
    for source in sources {
        info!(uri = %source.uri, title = ?source.title, "Grounding source");
    }
    if to_stdout {
        println!("\n{}", SourceList(sources));
    } else {
        eprint!("{}", SourceList(sources));
    }
}
