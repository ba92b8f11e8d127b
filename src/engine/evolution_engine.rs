use crate::config::RunConfig;
use crate::error::{EvoError, Result};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::mem;

use super::allele_index::AlleleIndex;
use super::evolvable::{Evolvable, GeneMap};
use super::pool::GenePool;
use super::progress::ProgressCallback;

/// Attempt count at which a still-spinning rejection loop starts logging.
const STALL_WARN_INTERVAL: u64 = 100_000;

/// Drives selection, recombination, and mutation over a caller-supplied
/// candidate type.
///
/// The engine owns the gene pool, the current population (fully replaced
/// each generation), the all-time best archive, and its RNG. Nothing is
/// shared or global: independent concurrent runs each construct their own
/// engine.
///
/// Acceptance of new candidates is rejection sampling against
/// [`Evolvable::can_survive`]. Those loops are unbounded by default: a
/// survivability predicate that is too strict relative to the pool's alleles
/// can spin indefinitely. Set [`RunConfig::max_attempts`] to trade that
/// faithfulness for a distinguishable [`EvoError::Infeasible`].
pub struct EvolutionEngine<E: Evolvable, R = StdRng> {
    pool: GenePool<E::Allele>,
    population: Vec<E>,
    archive: Vec<E>,
    rng: R,
}

impl<E: Evolvable> EvolutionEngine<E, StdRng> {
    /// Engine with an entropy-seeded RNG.
    pub fn new(pool: GenePool<E::Allele>) -> Result<Self> {
        Self::with_rng(pool, StdRng::from_entropy())
    }

    /// Engine with a reproducible RNG stream.
    pub fn with_seed(pool: GenePool<E::Allele>, seed: u64) -> Result<Self> {
        Self::with_rng(pool, StdRng::seed_from_u64(seed))
    }
}

impl<E: Evolvable, R> EvolutionEngine<E, R> {
    pub fn pool(&self) -> &GenePool<E::Allele> {
        &self.pool
    }

    /// Current generation. Fully replaced by each pass of the loop; a
    /// candidate only persists by being re-selected as a parent or archived.
    pub fn population(&self) -> &[E] {
        &self.population
    }

    /// Replace the current population wholesale, e.g. to seed a run with
    /// hand-built candidates.
    pub fn set_population(&mut self, population: Vec<E>) {
        self.population = population;
    }

    /// All-time best candidates: bounded, deduplicated by
    /// [`Evolvable::unique`], fitness-descending.
    pub fn archive(&self) -> &[E] {
        &self.archive
    }

    pub fn best(&self) -> Option<&E> {
        self.archive.first()
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.best().map(|candidate| candidate.fitness_level())
    }

    /// The `n` fittest members of the current population, fitness
    /// descending. Ties keep population order (stable sort), so repeated
    /// calls on an unchanged population return the same candidates. Returns
    /// fewer than `n` only when the population is smaller.
    pub fn select_parents(&self, n: usize) -> Vec<E> {
        let mut ranked: Vec<&E> = self.population.iter().collect();
        ranked.sort_by(|a, b| {
            b.fitness_level()
                .partial_cmp(&a.fitness_level())
                .unwrap_or(Ordering::Equal)
        });
        ranked.into_iter().take(n).cloned().collect()
    }

    /// Fold the current population into the archive: deduplicate by
    /// [`Evolvable::unique`] (existing archive entries win), sort fitness
    /// descending, keep the best `n_best`.
    pub fn update_archive(&mut self, n_best: usize) {
        let mut seen: HashSet<E::Key> = HashSet::new();
        let mut merged: Vec<E> =
            Vec::with_capacity(self.archive.len() + self.population.len());
        for candidate in self.archive.iter().chain(self.population.iter()) {
            if seen.insert(candidate.unique()) {
                merged.push(candidate.clone());
            }
        }
        merged.sort_by(|a, b| {
            b.fitness_level()
                .partial_cmp(&a.fitness_level())
                .unwrap_or(Ordering::Equal)
        });
        merged.truncate(n_best);
        self.archive = merged;
    }
}

impl<E: Evolvable, R: Rng> EvolutionEngine<E, R> {
    /// Engine with a caller-supplied RNG. Fails fast when the pool has no
    /// genes or a gene has no alleles.
    pub fn with_rng(pool: GenePool<E::Allele>, rng: R) -> Result<Self> {
        if pool.is_empty() {
            return Err(EvoError::Configuration(
                "gene pool has no genes".to_string(),
            ));
        }
        if let Some((name, _)) = pool.iter().find(|(_, alleles)| alleles.is_empty()) {
            return Err(EvoError::Configuration(format!(
                "gene {:?} has no alleles",
                name
            )));
        }
        Ok(Self {
            pool,
            population: Vec::new(),
            archive: Vec::new(),
            rng,
        })
    }

    /// Build a candidate by drawing one allele per pool gene, then accept it
    /// only if it survives.
    ///
    /// Both draws are rejection loops: the per-gene draw repeats until the
    /// allele value appears nowhere else in the candidate's mapping, and the
    /// whole construction repeats until [`Evolvable::can_survive`] holds.
    pub fn generate_random_candidate(&mut self, max_attempts: Option<u64>) -> Result<E> {
        let mut attempts: u64 = 0;
        loop {
            let mut genes: GeneMap<E::Allele> = GeneMap::new();
            for (name, alleles) in self.pool.iter() {
                let mut draw_attempts: u64 = 0;
                let allele = loop {
                    let pick = &alleles[self.rng.gen_range(0..alleles.len())];
                    if !genes.values().any(|taken| taken == pick) {
                        break pick.clone();
                    }
                    draw_attempts =
                        bump_attempts("allele draw", draw_attempts, max_attempts)?;
                };
                genes.insert(name.to_string(), allele);
            }

            let mut candidate = E::from_genes(genes);
            if candidate.can_survive() {
                candidate.enable_attribute_cache();
                return Ok(candidate);
            }
            attempts = bump_attempts("random generation", attempts, max_attempts)?;
        }
    }

    /// Breed one child from two parents via position-sliced crossover.
    ///
    /// A cut range is drawn in allele-position space, not over gene
    /// identity, so the same physical range can straddle different genes in
    /// each parent. One uniformly chosen parent donates everything inside
    /// the range, the other everything outside it; when both slices carry
    /// the same gene, the first binding wins. The child is always mutated
    /// once before the survivability gate, and the whole draw is repeated
    /// until the gate passes.
    pub fn recombine(
        &mut self,
        first: &E,
        second: &E,
        max_attempts: Option<u64>,
    ) -> Result<E> {
        let mut attempts: u64 = 0;
        loop {
            let (mut start, mut stop) = (self.rng.gen::<f64>(), self.rng.gen::<f64>());
            if start > stop {
                mem::swap(&mut start, &mut stop);
            }

            let first_index = self.materialize_index(first);
            let second_index = self.materialize_index(second);
            let (donor, other) = if self.rng.gen_range(0..2) == 0 {
                (&first_index, &second_index)
            } else {
                (&second_index, &first_index)
            };

            let mut bindings = donor.range(start, stop);
            bindings.extend(other.complement(start, stop));

            let mut genes: GeneMap<E::Allele> = GeneMap::new();
            for ((gene, allele), _) in bindings.iter() {
                genes
                    .entry(gene.clone())
                    .or_insert_with(|| allele.clone());
            }

            let mut child = E::from_genes(genes);
            self.mutate(&mut child, 1, 2, max_attempts)?;

            if child.can_survive() {
                child.enable_attribute_cache();
                return Ok(child);
            }
            attempts = bump_attempts("recombination", attempts, max_attempts)?;
        }
    }

    /// Replace between `min_swaps` and `max_swaps` of the candidate's genes
    /// with random pool draws, in place.
    ///
    /// Each replacement allele must not already appear anywhere in the
    /// candidate's mapping; a gene absent from the candidate is inserted.
    /// Survivability is not re-checked here; callers revalidate afterward.
    pub fn mutate(
        &mut self,
        candidate: &mut E,
        min_swaps: usize,
        max_swaps: usize,
        max_attempts: Option<u64>,
    ) -> Result<()> {
        let swaps = self.rng.gen_range(min_swaps..=max_swaps);
        for _ in 0..swaps {
            let mut attempts: u64 = 0;
            loop {
                let Some((gene, allele)) = self.pool.random_pair(&mut self.rng) else {
                    return Ok(()); // empty pools are rejected at construction
                };
                if !candidate.genes().values().any(|taken| taken == allele) {
                    let gene = gene.to_string();
                    let allele = allele.clone();
                    candidate.genes_mut().insert(gene, allele);
                    break;
                }
                attempts = bump_attempts("mutation draw", attempts, max_attempts)?;
            }
        }
        Ok(())
    }

    /// Run the generation loop.
    ///
    /// Seeds the population with `n_children` random candidates only when it
    /// is empty, so successive calls continue from the existing population.
    /// Fails fast on an invalid config and when `progress_every` and the
    /// callback are not supplied together. Each generation: fire the
    /// callback on the configured cadence, select the two best parents,
    /// breed `n_children` children, replace the population, fold it into the
    /// archive.
    pub fn run(
        &mut self,
        config: &RunConfig,
        mut progress: Option<&mut dyn ProgressCallback<E, R>>,
    ) -> Result<()> {
        config.validate()?;
        match (config.progress_every, progress.is_some()) {
            (Some(_), false) | (None, true) => {
                return Err(EvoError::Configuration(
                    "progress_every and a progress callback must be supplied together"
                        .to_string(),
                ));
            }
            _ => {}
        }

        if self.population.is_empty() {
            let mut seeded = Vec::with_capacity(config.n_children);
            for _ in 0..config.n_children {
                seeded.push(self.generate_random_candidate(config.max_attempts)?);
            }
            self.population = seeded;
            self.update_archive(config.n_best);
        }

        for generation in 0..config.generations {
            if let (Some(every), Some(callback)) =
                (config.progress_every, progress.as_deref_mut())
            {
                if generation % every == 0 {
                    callback.on_generation(self, generation);
                }
            }

            let parents = self.select_parents(2);
            let Some(first) = parents.first() else {
                break; // unreachable: the population is seeded above
            };
            let second = parents.get(1).unwrap_or(first);

            let mut next = Vec::with_capacity(config.n_children);
            for _ in 0..config.n_children {
                next.push(self.recombine(first, second, config.max_attempts)?);
            }
            self.population = next;
            self.update_archive(config.n_best);
            debug!(
                "generation {} complete, best fitness {:?}",
                generation,
                self.best_fitness()
            );
        }
        Ok(())
    }

    /// Allele index over a candidate's realized gene set: each gene/allele
    /// binding pinned to a fresh uniform position.
    fn materialize_index(&mut self, candidate: &E) -> AlleleIndex<(String, E::Allele)> {
        let mut index = AlleleIndex::new();
        for (gene, allele) in candidate.genes() {
            index.add_uniform((gene.clone(), allele.clone()), &mut self.rng);
        }
        index
    }
}

/// Count one failed attempt of `operation`, logging periodically and
/// enforcing the optional cap.
fn bump_attempts(
    operation: &'static str,
    attempts: u64,
    max_attempts: Option<u64>,
) -> Result<u64> {
    let attempts = attempts + 1;
    if let Some(cap) = max_attempts {
        if attempts >= cap {
            return Err(EvoError::Infeasible {
                operation,
                attempts,
            });
        }
    }
    if attempts % STALL_WARN_INTERVAL == 0 {
        warn!(
            "{} still unaccepted after {} attempts; the survivability \
             constraint may be infeasible for this pool",
            operation, attempts
        );
    }
    Ok(attempts)
}
