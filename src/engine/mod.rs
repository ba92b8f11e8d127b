pub mod allele_index;
pub mod evolvable;
pub mod evolution_engine;
pub mod pool;
pub mod progress;

pub use allele_index::AlleleIndex;
pub use evolvable::{Evolvable, GeneMap};
pub use evolution_engine::EvolutionEngine;
pub use pool::GenePool;
pub use progress::{ChannelProgress, ConsoleProgress, ProgressCallback, ProgressUpdate};
