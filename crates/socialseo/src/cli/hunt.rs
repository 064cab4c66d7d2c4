//! `socialseo hunt` handler.

use super::generate::{await_strategy, submit_generate};
use super::report::{report_failure, report_phases, report_sources};
use super::{HuntArgs, OutputFormat};
use socialseo::{
    FormController, Mode, SocialSeoConfig, SocialSeoResult, SubmissionOutcome, TrendCards,
    hunt_json,
};
use std::process::ExitCode;
use tracing::instrument;

/// Hunt trends for a niche, optionally turning one idea into a strategy.
#[instrument(skip_all, fields(niche = %args.niche, use_idea = ?args.use_idea))]
pub async fn run_hunt(args: HuntArgs, config: &SocialSeoConfig) -> SocialSeoResult<ExitCode> {
    let form =
        FormController::with_progress_config(config.strategy_client()?, config.progress.clone());
    form.set_mode(Mode::TrendHunter);
    form.set_platform(args.platform);
    form.update_filters(|filters| filters.set_niche(args.niche.as_str()));

    let reporter = report_phases(form.progress());
    let outcome = form.hunt_trends().await;
    reporter.abort();

    let state = form.snapshot();
    let ideas = match (outcome, state.trend_ideas()) {
        (SubmissionOutcome::Succeeded, Some(ideas)) => ideas.clone(),
        _ => return Ok(report_failure(&state)),
    };

    let chosen = args
        .use_idea
        .map(|n| (n, n.checked_sub(1).and_then(|index| ideas.get(index))));
    // A JSON hunt that goes on to a strategy prints both as one document.
    let combined = args.format == OutputFormat::Json && matches!(chosen, Some((_, Some(_))));

    if !combined {
        match args.format {
            OutputFormat::Human => print!("{}", TrendCards(&ideas)),
            OutputFormat::Json => println!("{}", hunt_json(&ideas, None)?),
        }
    }
    report_sources(state.sources(), args.format == OutputFormat::Human);

    let idea = match chosen {
        None => return Ok(ExitCode::SUCCESS),
        Some((n, None)) => {
            eprintln!("Error: no idea #{} (found {})", n, ideas.len());
            return Ok(ExitCode::FAILURE);
        }
        Some((_, Some(idea))) => idea,
    };

    eprintln!("\nGenerating a strategy for \"{}\"", idea.idea_title);
    form.use_trend_idea(idea);
    if !combined {
        return submit_generate(&form, args.format, None).await;
    }

    let (result, sources) = match await_strategy(&form).await {
        Ok(done) => done,
        Err(code) => return Ok(code),
    };
    println!("{}", hunt_json(&ideas, Some(&result))?);
    report_sources(&sources, false);
    Ok(ExitCode::SUCCESS)
}
