use rand::seq::SliceRandom;
use rand::Rng;

/// Pool-level mapping from gene name to that gene's candidate alleles.
///
/// Alleles within one gene are mutually exclusive choices. Entries keep
/// insertion order so seeded runs draw genes deterministically.
#[derive(Debug, Clone)]
pub struct GenePool<A> {
    genes: Vec<(String, Vec<A>)>,
}

impl<A> Default for GenePool<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> GenePool<A> {
    pub fn new() -> Self {
        Self { genes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Register a gene and its allowed alleles. Re-inserting a gene name
    /// replaces its allele set.
    pub fn insert(&mut self, name: impl Into<String>, alleles: Vec<A>) {
        let name = name.into();
        match self.genes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = alleles,
            None => self.genes.push((name, alleles)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.genes.iter().any(|(n, _)| n == name)
    }

    pub fn alleles(&self, name: &str) -> Option<&[A]> {
        self.genes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a.as_slice())
    }

    pub fn gene_names(&self) -> impl Iterator<Item = &str> {
        self.genes.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[A])> {
        self.genes.iter().map(|(n, a)| (n.as_str(), a.as_slice()))
    }

    /// Uniform draw of a gene, then a uniform draw of one of its alleles.
    /// `None` when the pool (or the drawn gene's allele set) is empty.
    pub fn random_pair<R: Rng>(&self, rng: &mut R) -> Option<(&str, &A)> {
        if self.genes.is_empty() {
            return None;
        }
        let (name, alleles) = &self.genes[rng.gen_range(0..self.genes.len())];
        alleles.choose(rng).map(|allele| (name.as_str(), allele))
    }
}

impl<A> FromIterator<(String, Vec<A>)> for GenePool<A> {
    fn from_iter<I: IntoIterator<Item = (String, Vec<A>)>>(iter: I) -> Self {
        let mut pool = Self::new();
        for (name, alleles) in iter {
            pool.insert(name, alleles);
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn insert_replaces_existing_gene() {
        let mut pool = GenePool::new();
        pool.insert("color", vec!["red"]);
        pool.insert("color", vec!["blue", "green"]);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.alleles("color"), Some(&["blue", "green"][..]));
    }

    #[test]
    fn random_pair_only_draws_registered_alleles() {
        let mut pool = GenePool::new();
        pool.insert("color", vec!["red", "blue"]);
        pool.insert("size", vec!["small"]);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (gene, allele) = pool.random_pair(&mut rng).unwrap();
            assert!(pool.alleles(gene).unwrap().contains(allele));
        }
    }

    #[test]
    fn random_pair_on_empty_pool_is_none() {
        let pool: GenePool<&str> = GenePool::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pool.random_pair(&mut rng).is_none());
    }
}
