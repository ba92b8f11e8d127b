use anyhow::Result;
use evosearch::{ConsoleProgress, Evolvable, EvolutionEngine, GeneMap, GenePool, RunConfig};
use std::env;

/// A review panel: each role slot staffed by a distinct expert.
#[derive(Debug, Clone)]
struct Panel {
    genes: GeneMap<String>,
}

fn expert_score(name: &str) -> f64 {
    match name {
        "ada" => 9.0,
        "grace" => 8.0,
        "alan" => 7.5,
        "edsger" => 7.0,
        "barbara" => 8.5,
        "donald" => 9.5,
        _ => 1.0,
    }
}

impl Evolvable for Panel {
    type Allele = String;
    type Key = String;

    fn from_genes(genes: GeneMap<String>) -> Self {
        Self { genes }
    }

    fn genes(&self) -> &GeneMap<String> {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut GeneMap<String> {
        &mut self.genes
    }

    fn fitness_level(&self) -> f64 {
        self.genes.values().map(|expert| expert_score(expert)).sum()
    }

    fn can_survive(&self) -> bool {
        if self.genes.len() != 3 {
            return false;
        }
        let mut experts: Vec<&String> = self.genes.values().collect();
        experts.sort_unstable();
        experts.windows(2).all(|pair| pair[0] != pair[1])
    }

    fn unique(&self) -> String {
        let mut experts: Vec<&str> = self.genes.values().map(String::as_str).collect();
        experts.sort_unstable();
        experts.join("|")
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let generations = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(200);
    let n_children = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(6);
    let seed: Option<u64> = args.get(3).and_then(|s| s.parse().ok());

    println!("Configuration:");
    println!("  Generations: {}", generations);
    println!("  Children per generation: {}", n_children);
    println!("  Seed: {:?}", seed);
    println!();

    let experts = ["ada", "grace", "alan", "edsger", "barbara", "donald"];
    let mut pool = GenePool::new();
    for role in ["security", "performance", "api"] {
        pool.insert(role, experts.iter().map(|e| e.to_string()).collect());
    }

    let mut engine: EvolutionEngine<Panel> = match seed {
        Some(seed) => EvolutionEngine::with_seed(pool, seed)?,
        None => EvolutionEngine::new(pool)?,
    };

    let config = RunConfig {
        generations,
        n_best: 5,
        n_children,
        progress_every: Some(20),
        ..RunConfig::default()
    };

    let mut progress = ConsoleProgress;
    engine.run(&config, Some(&mut progress))?;

    println!("\nBest panels of all time:");
    for (i, panel) in engine.archive().iter().enumerate() {
        println!("  #{} (fitness {:.1})", i + 1, panel.fitness_level());
        for (role, expert) in panel.genes() {
            println!("      {:<12} {}", role, expert);
        }
    }
    Ok(())
}
