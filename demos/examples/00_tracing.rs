use ctmerge_demos::common::default_merger;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,ctmerge=trace,ctmerge_http=debug,ctmerge_core=warn
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Sources are mocks in CI when CTMERGE_DEMOS_USE_MOCK is set
    let merger = default_merger()?;

    // Fetch spans, data-issue warnings and the final summary all go through tracing
    let report = merger.merge().await?;
    tracing::info!(
        logs = report.collection.len(),
        issues = report.issues.len(),
        "demo finished"
    );

    Ok(())
}
