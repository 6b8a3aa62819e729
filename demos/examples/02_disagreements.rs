use ctmerge::{FieldView, current_logs, field};
use ctmerge_demos::common::{cell, default_merger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let merger = default_merger()?;
    let tags = merger.tags();
    let report = merger.merge().await?;

    println!("Current logs (usable or qualified in either list):");
    for (url, record) in current_logs(&report.collection, tags) {
        println!("  {} {url}", cell(record.view(field::DESCRIPTION, tags).primary()));
    }

    println!("\nFields the two lists disagree on:");
    let fields = [
        field::OPERATOR,
        field::DESCRIPTION,
        field::STATUS,
        field::TIMESTAMP,
        field::START,
        field::END,
    ];
    for (url, record) in report.collection.iter() {
        for name in fields {
            if let FieldView::Split { a, b } = record.view(name, tags) {
                println!(
                    "  {url} {name}: {}={} {}={}",
                    tags.a,
                    cell(Some(a)),
                    tags.b,
                    cell(Some(b))
                );
            }
        }
    }
    Ok(())
}
