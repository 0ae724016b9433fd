use tripsim_analysis::{ClassifyOutcome, TreeType};
use tripsim_sim::simulation::{Configuration, ParameterGrid};

fn list<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_grid(grid: &ParameterGrid) {
    println!("\n📐 Parameter Grid");
    println!("  • Mutation rates (mu): {}", list(&grid.mu_values));
    println!("  • Split times (mya): {}", list(&grid.mya_values));
    println!("  • Introgression depths: {}", list(&grid.depth_values));
    println!(
        "  • Introgression proportions: {}",
        list(&grid.introgression_proportions)
    );
    println!("  • Outgroup times: {}", list(&grid.og_times));
    println!("  • Points per replicate: {}", grid.len());
}

pub fn print_parameters(config: &Configuration) {
    print_grid(&config.grid);

    println!("\n📂 Inputs");
    println!("  • Genome: {} [--genome]", config.inputs.genome.display());
    println!(
        "  • Partitions: {} [--partitions]",
        config.inputs.partitions.display()
    );
    println!(
        "  • Max Length: {} residues [--max-length]",
        config.inputs.max_length
    );
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
    println!();
}

pub fn print_outcome(outcome: &ClassifyOutcome) {
    let total = outcome.classified.max(1) as f64;
    println!("\n🌳 Tree Types");
    for t in TreeType::ALL {
        let n = outcome.counts[t.index()];
        println!(
            "  • {:<6} ({}): {n:>8} ({:.1}%)",
            t.name(),
            t.code(),
            100.0 * n as f64 / total
        );
    }
    if outcome.extra_blocks > 0 {
        println!(
            "⚠️  Warning: {} extra tree blocks were ignored.",
            outcome.extra_blocks
        );
    }
}
