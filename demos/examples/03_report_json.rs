use std::time::Duration;

use ctmerge::CtMerge;
use ctmerge_demos::common::get_sources;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (apple, google) = get_sources()?;
    let merger = CtMerge::builder()
        .source_a(apple)
        .source_b(google)
        .include_tiled_logs(true)
        .fetch_timeout(Duration::from_secs(20))
        .request_timeout(Duration::from_secs(45))
        .build()?;

    let report = merger.merge().await?;
    for issue in &report.issues {
        eprintln!("data issue: {issue}");
    }
    // Ordered [url, record] pairs, ready for a renderer
    println!("{}", serde_json::to_string_pretty(&report.collection)?);
    Ok(())
}
