use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tripsim_analysis::grid::DEFAULT_PARTITION_COUNT;
use tripsim_analysis::records::write_records_file;
use tripsim_analysis::{classify_file, summary_path, ClassifierGrid};
use tripsim_sim::io::read_manifest;
use tripsim_sim::simulation::{Configuration, TreeKey};

use crate::args::ClassifyArgs;
use crate::defaults::PROGRESS_TEMPLATE;
use crate::printing::print_outcome;
use crate::prompt::prompt_value;

/// Manifest written beside `simdump_N.mrp` by `tripsim simulate`.
pub fn sibling_manifest(input: &Path) -> Option<PathBuf> {
    let stem = input.file_stem()?.to_str()?;
    let replicate = stem.strip_prefix("simdump_")?;
    Some(input.with_file_name(format!("bigboy_sims_{replicate}.manifest.csv")))
}

/// Expected tree keys: from a manifest when one is available, else from the grid.
fn expected_keys(args: &ClassifyArgs, input: &Path) -> Result<Vec<TreeKey>> {
    let manifest = args
        .manifest
        .clone()
        .or_else(|| sibling_manifest(input).filter(|p| p.exists()));
    if let Some(path) = manifest {
        println!("📋 Using manifest {}", path.display());
        return read_manifest(&path)
            .with_context(|| format!("Failed to read manifest {}", path.display()));
    }

    let grid = classifier_grid(args)?;
    println!(
        "📋 No manifest; assuming grid order with {} partitions",
        grid.partitions.len()
    );
    Ok(grid.keys())
}

/// Grid from `--config` (default grid otherwise) with the partitions from
/// `--partitions` or `--partition-count`.
fn classifier_grid(args: &ClassifyArgs) -> Result<ClassifierGrid> {
    let grid = match &args.config {
        Some(path) => {
            Configuration::load(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
                .grid
        }
        None => Default::default(),
    };
    match &args.partitions {
        Some(path) => ClassifierGrid::with_partition_file(grid, path)
            .with_context(|| format!("Failed to read partition file {}", path.display())),
        None => {
            let count = args.partition_count.unwrap_or(DEFAULT_PARTITION_COUNT);
            Ok(ClassifierGrid::new(grid, ClassifierGrid::numbered_partitions(count)))
        }
    }
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let input = match &args.input {
        Some(path) => path.clone(),
        None => prompt_value::<PathBuf>("Enter input file")?,
    };

    println!("🌳 tripsim - Classifying Trees");
    println!("============================================\n");

    let keys = expected_keys(args, &input)?;
    println!("✓ Expecting {} trees", keys.len());

    let pb = if args.progress {
        let pb = ProgressBar::new(keys.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let result = classify_file(&input, &keys, |_| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let (output, outcome) =
        result.with_context(|| format!("Failed to classify {}", input.display()))?;
    println!("✓ Results written to {}", output.display());

    let summary_file = summary_path(&output);
    write_records_file(&summary_file, &outcome.summary)
        .with_context(|| format!("Failed to write {}", summary_file.display()))?;
    println!("✓ Summary results written to {}", summary_file.display());

    print_outcome(&outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args() -> ClassifyArgs {
        ClassifyArgs {
            input: None,
            manifest: None,
            config: None,
            partitions: None,
            partition_count: None,
            progress: false,
        }
    }

    #[test]
    fn test_classifier_grid_defaults_to_numbered_partitions() {
        let grid = classifier_grid(&args()).unwrap();
        assert_eq!(grid, ClassifierGrid::default());

        let grid = classifier_grid(&ClassifyArgs {
            partition_count: Some(3),
            ..args()
        })
        .unwrap();
        assert_eq!(grid.partitions, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_classifier_grid_reads_partition_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parts.txt");
        fs::write(&path, "charset alpha = 1-10;\ncharset beta = 11-20;\n").unwrap();
        let grid = classifier_grid(&ClassifyArgs {
            partitions: Some(path),
            ..args()
        })
        .unwrap();
        assert_eq!(grid.partitions, vec!["alpha", "beta"]);

        let missing = ClassifyArgs {
            partitions: Some(dir.path().join("missing.txt")),
            ..args()
        };
        assert!(classifier_grid(&missing).is_err());
    }

    #[test]
    fn test_sibling_manifest() {
        assert_eq!(
            sibling_manifest(Path::new("runs/simdump_12.mrp")),
            Some(PathBuf::from("runs/bigboy_sims_12.manifest.csv"))
        );
        assert_eq!(sibling_manifest(Path::new("trees.mrp")), None);
    }
}
