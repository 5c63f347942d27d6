use crate::config::GeneticsConfig;
use crate::engines::combination::{
    allele_pair::AllelePair,
    genome::Genome,
    offspring::Offspring,
    registry::{MutationRegistry, MutationRule},
};
use crate::error::{GeneticsError, Result};
use crate::types::{Allele, Locus, Parent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Breeds genomes of a fixed size, applying registered override mutations.
///
/// Register rules first, then call [`CombinationEngine::combine`]. Each call
/// seeds a fresh stream from the engine's generator, so engines built with the
/// same seed and driven by the same calls produce identical offspring.
///
/// One owner at a time: the engine is not meant to be shared across threads,
/// and rules registered after a stream was created do not reach that stream.
#[derive(Debug)]
pub struct CombinationEngine<R = StdRng> {
    locus_count: usize,
    registry: MutationRegistry,
    rng: R,
}

impl CombinationEngine<StdRng> {
    pub fn new(locus_count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(locus_count, rng)
    }

    /// Builds an engine from configuration and registers every configured rule.
    pub fn from_config(config: &GeneticsConfig) -> Result<Self> {
        config.validate()?;
        if config.engine.seed.is_none() {
            log::warn!("no seed configured; offspring will not be reproducible");
        }

        let mut engine = Self::new(config.engine.locus_count, config.engine.seed);
        for entry in &config.mutations {
            let [allele0, allele1] = entry.alleles;
            engine.register_mutation(
                entry.locus,
                allele0,
                allele1,
                entry.override_genome.clone(),
                entry.chance,
            )?;
        }
        Ok(engine)
    }
}

impl<R: Rng + SeedableRng> CombinationEngine<R> {
    pub fn with_rng(locus_count: usize, rng: R) -> Self {
        Self {
            locus_count,
            registry: MutationRegistry::new(locus_count),
            rng,
        }
    }

    pub fn locus_count(&self) -> usize {
        self.locus_count
    }

    pub fn registry(&self) -> &MutationRegistry {
        &self.registry
    }

    /// Registers a whole-genome override for the unordered pair
    /// `(allele0, allele1)` at `locus`.
    ///
    /// Repeated registrations accumulate as independent rules. Fails on an
    /// out-of-range locus, a chance outside `[0, 1]`, or an override that is
    /// invalid or not sized to this engine.
    pub fn register_mutation(
        &mut self,
        locus: Locus,
        allele0: Allele,
        allele1: Allele,
        override_genome: Genome,
        chance: f32,
    ) -> Result<()> {
        let pair = AllelePair::new(allele0, allele1);
        let rule = MutationRule::new(chance, override_genome)?;
        self.registry.register(locus, pair, rule)?;

        log::debug!(
            "registered mutation at locus {} for ({}, {}) with chance {}",
            locus,
            pair.low(),
            pair.high(),
            chance
        );
        Ok(())
    }

    /// Starts an infinite stream of offspring of `parent_a` and `parent_b`.
    ///
    /// Offspring take active alleles from (possibly mutated) parent A and
    /// inactive alleles from (possibly mutated) parent B. Triggers are read
    /// from the parents' active alleles once, here.
    pub fn combine(&mut self, parent_a: &Genome, parent_b: &Genome) -> Result<Offspring<R>> {
        self.check_parent(Parent::A, parent_a)?;
        self.check_parent(Parent::B, parent_b)?;

        let candidates = self.registry.collect_candidates(parent_a, parent_b);
        log::debug!(
            "combining {}-locus genomes with {} candidate mutations",
            self.locus_count,
            candidates.len()
        );

        let stream_rng = R::seed_from_u64(self.rng.gen::<u64>());
        Ok(Offspring::new(
            parent_a.clone(),
            parent_b.clone(),
            candidates,
            stream_rng,
        ))
    }

    /// First offspring of a fresh stream
    pub fn combine_once(&mut self, parent_a: &Genome, parent_b: &Genome) -> Result<Genome> {
        Ok(self.combine(parent_a, parent_b)?.draw())
    }

    fn check_parent(&self, parent: Parent, genome: &Genome) -> Result<()> {
        if !genome.is_valid() {
            return Err(GeneticsError::MalformedGenome {
                parent,
                locus_count: genome.locus_count,
                active: genome.active_alleles.len(),
                inactive: genome.inactive_alleles.len(),
            });
        }
        if genome.locus_count != self.locus_count {
            return Err(GeneticsError::SizeMismatch {
                parent,
                expected: self.locus_count,
                actual: genome.locus_count,
            });
        }
        Ok(())
    }
}
