use anyhow::{Context, Result};
use tripsim_sim::simulation::Configuration;

use crate::args::InitArgs;
use crate::printing::print_parameters;

/// Build a configuration from defaults plus flags.
pub fn build_config(args: &InitArgs) -> Configuration {
    let mut config = Configuration::default();
    config.inputs.genome = args.genome.clone();
    config.inputs.partitions = args.partitions.clone();
    config.inputs.max_length = args.max_length;
    config.seed = args.seed;
    config
}

pub fn init_config(args: &InitArgs) -> Result<()> {
    println!("🧬 tripsim - Introgression Simulator");
    println!("============================================\n");

    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            args.output.display()
        );
    }

    let config = build_config(args);
    println!("Configuration:");
    print_parameters(&config);

    config
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("✓ Configuration written to {}", args.output.display());
    println!(
        "\n💡 Edit the grid in the file, then run 'tripsim simulate --config {}'",
        args.output.display()
    );
    Ok(())
}
