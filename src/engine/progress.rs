use super::evolution_engine::EvolutionEngine;
use super::evolvable::Evolvable;
use std::sync::mpsc;

/// Per-generation observer. Invoked for observability only; the engine
/// ignores anything it returns or records.
pub trait ProgressCallback<E: Evolvable, R> {
    fn on_generation(&mut self, engine: &EvolutionEngine<E, R>, generation: usize);
}

/// Prints progress to stdout.
pub struct ConsoleProgress;

impl<E: Evolvable, R> ProgressCallback<E, R> for ConsoleProgress {
    fn on_generation(&mut self, engine: &EvolutionEngine<E, R>, generation: usize) {
        match engine.best_fitness() {
            Some(best) => println!(
                "Generation {}: best fitness {:.4}, archive size {}",
                generation,
                best,
                engine.archive().len()
            ),
            None => println!("Generation {}: archive empty", generation),
        }
    }
}

/// Snapshot sent over a channel, for observers on another thread.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub generation: usize,
    pub best_fitness: Option<f64>,
    pub archive_size: usize,
}

pub struct ChannelProgress {
    sender: mpsc::Sender<ProgressUpdate>,
}

impl ChannelProgress {
    pub fn new(sender: mpsc::Sender<ProgressUpdate>) -> Self {
        Self { sender }
    }
}

impl<E: Evolvable, R> ProgressCallback<E, R> for ChannelProgress {
    fn on_generation(&mut self, engine: &EvolutionEngine<E, R>, generation: usize) {
        let _ = self.sender.send(ProgressUpdate {
            generation,
            best_fitness: engine.best_fitness(),
            archive_size: engine.archive().len(),
        });
    }
}
