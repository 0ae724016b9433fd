use anyhow::{Context, Result};
use std::path::Path;
use tripsim_analysis::records::{read_records_file, write_records_file, ClassificationRecord};
use tripsim_analysis::{summarize, summary_path};

/// Recompute the summary of an existing classification file.
pub fn run_summarize(input: &Path) -> Result<()> {
    println!("📊 tripsim - Summarizing Classifications");
    println!("============================================\n");

    let records: Vec<ClassificationRecord> = read_records_file(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    if records.is_empty() {
        anyhow::bail!("{} holds no classified trees.", input.display());
    }
    println!("✓ Read {} classified trees", records.len());

    let summary = summarize(&records);
    let output = summary_path(input);
    write_records_file(&output, &summary)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ {} summary rows written to {}", summary.len(), output.display());
    Ok(())
}
