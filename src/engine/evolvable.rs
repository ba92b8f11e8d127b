use std::collections::BTreeMap;
use std::hash::Hash;

/// One allele per gene, keyed by gene name. Deterministic iteration order.
pub type GeneMap<A> = BTreeMap<String, A>;

/// Capability set the engine requires of a candidate solution.
///
/// The engine never looks inside fitness or survivability; it only calls
/// these methods. Anything that can hold a gene map and answer them can be
/// evolved. `Clone` is required because the archive keeps copies of
/// candidates after the population that produced them is replaced.
pub trait Evolvable: Clone {
    /// Concrete allele value. Compared with `PartialEq` to enforce the
    /// no-duplicate-alleles rule across a candidate's genes.
    type Allele: Clone + PartialEq;

    /// Deduplication key for the archive. Two candidates with equal keys
    /// are the same logical solution.
    type Key: Eq + Hash;

    /// Build a candidate from a prebuilt mapping. Both random initialization
    /// and recombination deliver candidates through here.
    fn from_genes(genes: GeneMap<Self::Allele>) -> Self;

    fn genes(&self) -> &GeneMap<Self::Allele>;

    fn genes_mut(&mut self) -> &mut GeneMap<Self::Allele>;

    /// Totally ordered score, higher is better.
    fn fitness_level(&self) -> f64;

    /// Hard constraint gate. Candidates failing this never enter a
    /// population or the archive.
    fn can_survive(&self) -> bool;

    fn unique(&self) -> Self::Key;

    /// Called once after the engine has confirmed survivability. The engine
    /// never mutates the candidate afterward, so implementors may start
    /// caching derived attributes. Default is a no-op.
    fn enable_attribute_cache(&mut self) {}
}
