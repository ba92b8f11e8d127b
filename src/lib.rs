//! Generic evolutionary search over named genes and candidate alleles.
//!
//! Given a [`GenePool`] (gene name to allowed alleles) and a caller-supplied
//! candidate type implementing [`Evolvable`], the engine evolves a
//! population toward higher fitness via selection, position-sliced
//! recombination, and mutation, with no gradient information. Crossover cuts
//! through a continuous allele-position axis rather than gene identity, so a
//! single cut can straddle different genes in each parent.
//!
//! # Example
//!
//! ```
//! use evosearch::{Evolvable, EvolutionEngine, GeneMap, GenePool, RunConfig};
//!
//! #[derive(Debug, Clone)]
//! struct Outfit {
//!     genes: GeneMap<String>,
//! }
//!
//! impl Evolvable for Outfit {
//!     type Allele = String;
//!     type Key = String;
//!
//!     fn from_genes(genes: GeneMap<String>) -> Self {
//!         Self { genes }
//!     }
//!     fn genes(&self) -> &GeneMap<String> {
//!         &self.genes
//!     }
//!     fn genes_mut(&mut self) -> &mut GeneMap<String> {
//!         &mut self.genes
//!     }
//!     fn fitness_level(&self) -> f64 {
//!         self.genes.values().map(|v| v.len() as f64).sum()
//!     }
//!     fn can_survive(&self) -> bool {
//!         !self.genes.is_empty()
//!     }
//!     fn unique(&self) -> String {
//!         self.genes.values().cloned().collect::<Vec<_>>().join("|")
//!     }
//! }
//!
//! # fn main() -> evosearch::Result<()> {
//! let mut pool = GenePool::new();
//! pool.insert("color", vec!["red".to_string(), "blue".to_string()]);
//! pool.insert("size", vec!["small".to_string(), "large".to_string()]);
//!
//! let mut engine: EvolutionEngine<Outfit> = EvolutionEngine::with_seed(pool, 42)?;
//! let config = RunConfig {
//!     generations: 3,
//!     ..RunConfig::default()
//! };
//! engine.run(&config, None)?;
//!
//! assert!(engine.best().is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::RunConfig;
pub use engine::{
    AlleleIndex, ChannelProgress, ConsoleProgress, Evolvable, EvolutionEngine, GeneMap,
    GenePool, ProgressCallback, ProgressUpdate,
};
pub use error::{EvoError, Result};
