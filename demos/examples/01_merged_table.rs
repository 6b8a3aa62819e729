use ctmerge::{LogRecord, SourceTags, field, resolved_status};
use ctmerge_demos::common::{cell, default_merger};

fn row(url: &str, record: &LogRecord, tags: SourceTags) -> String {
    let primary = |name: &str| cell(record.view(name, tags).primary());
    format!(
        "{:<16} {:<22} {:<10} {:<22} {:<22} {}",
        primary(field::OPERATOR),
        primary(field::DESCRIPTION),
        resolved_status(record, tags).unwrap_or("-"),
        primary(field::START),
        primary(field::END),
        url,
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let merger = default_merger()?;
    let tags = merger.tags();
    let report = merger.merge().await?;

    println!(
        "{:<16} {:<22} {:<10} {:<22} {:<22} url",
        "operator", "description", "status", "start", "end"
    );
    for (url, record) in report.collection.iter() {
        println!("{}", row(url, record, tags));
    }
    println!("\n{} logs, {} data issues", report.collection.len(), report.issues.len());
    Ok(())
}
