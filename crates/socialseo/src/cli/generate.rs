//! `socialseo generate` handler.

use super::report::{apply_targeting, report_failure, report_phases, report_sources};
use super::{GenerateArgs, OutputFormat};
use socialseo::{
    Attachment, FormController, GenerativeDriver, GroundingSource, JsonError, RequestPart,
    SocialSeoConfig, SocialSeoResult, StrategyCard, StrategyResult, SubmissionOutcome,
    export_json,
};
use std::path::Path;
use std::process::ExitCode;
use tracing::instrument;

/// Generate a strategy from the command-line fields.
#[instrument(skip_all, fields(mode = %args.mode, platform = %args.platform, files = args.files.len()))]
pub async fn run_generate(args: GenerateArgs, config: &SocialSeoConfig) -> SocialSeoResult<ExitCode> {
    let form =
        FormController::with_progress_config(config.strategy_client()?, config.progress.clone());

    form.set_mode(args.mode);
    form.set_platform(args.platform);
    form.set_attachments(args.files.iter().map(Attachment::from_path_guessed).collect());
    form.set_brand_guidelines(args.brand_guidelines.as_ref().map(Attachment::from_path_guessed));
    apply_targeting(&form, &args.targeting);
    form.set_live_trends(args.live_trends);

    if args.dry_run {
        return dry_run(&form, args.format).await;
    }

    submit_generate(&form, args.format, args.export.as_deref()).await
}

/// Run `generate` on a prepared form and return the result with its
/// grounding sources. A failure is reported and its exit code returned.
pub async fn await_strategy<D: GenerativeDriver>(
    form: &FormController<D>,
) -> Result<(StrategyResult, Vec<GroundingSource>), ExitCode> {
    let reporter = report_phases(form.progress());
    let outcome = form.generate().await;
    reporter.abort();

    let state = form.snapshot();
    match (outcome, state.result()) {
        (SubmissionOutcome::Succeeded, Some(result)) => {
            Ok((result.clone(), state.sources().clone()))
        }
        _ => Err(report_failure(&state)),
    }
}

/// Run `generate` on a prepared form and print the result.
pub async fn submit_generate<D: GenerativeDriver>(
    form: &FormController<D>,
    format: OutputFormat,
    export: Option<&Path>,
) -> SocialSeoResult<ExitCode> {
    let (result, sources) = match await_strategy(form).await {
        Ok(done) => done,
        Err(code) => return Ok(code),
    };

    match format {
        OutputFormat::Human => println!("{}", StrategyCard(&result)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| JsonError::new(format!("Failed to serialize strategy: {}", e)))?;
            println!("{}", json);
        }
    }
    report_sources(&sources, format == OutputFormat::Human);

    if let Some(path) = export {
        export_json(&result, path)?;
        eprintln!("Exported to {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the request that would be sent, without sending it.
async fn dry_run<D: GenerativeDriver>(
    form: &FormController<D>,
    format: OutputFormat,
) -> SocialSeoResult<ExitCode> {
    let request = form.snapshot().to_request();
    let built = form.client().build_request(&request).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&built)
                .map_err(|e| JsonError::new(format!("Failed to serialize request: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            let model = built
                .model
                .clone()
                .unwrap_or_else(|| form.client().driver().model_name().to_string());
            println!("Model: {}", model);
            println!("Search: {}", built.config.search());
            println!("Strict JSON: {}", built.config.strict_json());
            println!("\nSystem instruction:\n{}", built.system_instruction);
            for (index, part) in built.parts.iter().enumerate() {
                match part {
                    RequestPart::Text(text) => println!("\nPart {} (text):\n{}", index + 1, text),
                    RequestPart::InlineData { mime_type, data } => println!(
                        "\nPart {} ({}, {} base64 chars)",
                        index + 1,
                        mime_type,
                        data.len()
                    ),
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
