use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::ops::Range;
use tripsim_sim::io::{read_partitions, read_reference};
use tripsim_sim::simulation::{replicate_rng, Configuration, ReplicateFiles, ReplicateRunner};

use crate::args::SimulateArgs;
use crate::defaults::PROGRESS_TEMPLATE;
use crate::printing::print_parameters;
use crate::prompt::prompt_value;

/// Load the configuration file (or defaults) and apply flag overrides.
pub fn load_config(args: &SimulateArgs) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => Configuration::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Configuration::default(),
    };
    if let Some(genome) = &args.genome {
        config.inputs.genome = genome.clone();
    }
    if let Some(partitions) = &args.partitions {
        config.inputs.partitions = partitions.clone();
    }
    if let Some(max_length) = args.max_length {
        config.inputs.max_length = max_length;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

pub fn run_simulate(args: &SimulateArgs) -> Result<()> {
    println!("🧬 tripsim - Running Simulation");
    println!("============================================\n");

    let config = load_config(args)?;
    config.grid.validate().context("Invalid parameter grid")?;

    // (replicates, run in parallel)
    let (replicates, parallel): (Range<usize>, bool) = match (args.replicate, args.replicates) {
        (Some(r), _) => (r..r + 1, false),
        (None, Some(n)) => (args.first..args.first + n, true),
        (None, None) => (0..prompt_value::<usize>("Number of simulations")?, false),
    };
    if replicates.is_empty() {
        anyhow::bail!("No replicates to run.");
    }

    println!("📂 Loading inputs...");
    let reference = read_reference(&config.inputs.genome, config.inputs.max_length)
        .context("Failed to read reference genome")?;
    let partitions =
        read_partitions(&config.inputs.partitions).context("Failed to read partition file")?;
    println!("✓ Reference: {} residues", reference.len());
    println!("✓ Partitions: {}", partitions.len());
    if partitions.is_empty() {
        println!("⚠️  Warning: no partitions found; batch files will build no trees.");
    }

    println!("\nConfiguration:");
    print_parameters(&config);

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    let partition_file = config.inputs.partitions.display().to_string();
    let runner = ReplicateRunner::new(&reference, &config.grid, &partitions, partition_file);
    let total_points = (config.grid.len() * replicates.len()) as u64;
    println!(
        "Running {} replicate(s) of {} points...",
        replicates.len(),
        config.grid.len()
    );

    let pb = if args.progress {
        let pb = ProgressBar::new(total_points);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let run_one = |replicate: usize| -> Result<ReplicateFiles> {
        let mut rng = replicate_rng(config.replicate_seed(replicate));
        let (files, summary) = runner
            .run_in_dir(&args.output_dir, replicate, &mut rng, |_| {
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            })
            .with_context(|| format!("Replicate {replicate} failed"))?;
        log::info!("replicate {replicate} expects {} trees", summary.trees);
        Ok(files)
    };

    let written: Vec<(usize, ReplicateFiles)> = if parallel {
        replicates
            .into_par_iter()
            .map(|r| run_one(r).map(|files| (r, files)))
            .collect::<Result<_>>()?
    } else {
        replicates
            .map(|r| run_one(r).map(|files| (r, files)))
            .collect::<Result<_>>()?
    };

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    println!("\n✓ Simulation complete!");
    for (replicate, files) in &written {
        println!(
            "  Replicate {replicate}: {} (trees -> {}, manifest {})",
            files.batch.display(),
            files.tree_file,
            files.manifest.display()
        );
    }
    println!(
        "\n💡 Run each batch file in PAUP*, then 'tripsim classify {}'",
        written
            .first()
            .map(|(_, f)| f.tree_file.as_str())
            .unwrap_or("simdump_0.mrp")
    );
    Ok(())
}
