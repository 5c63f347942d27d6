use crate::engines::combination::{allele_pair::AllelePair, genome::Genome};
use crate::error::{GeneticsError, Result};
use crate::types::Locus;
use std::collections::HashMap;

/// Whole-genome override applied to a parent when its trigger fires
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRule {
    chance: f32,
    override_genome: Genome,
}

impl MutationRule {
    /// Creates a rule, rejecting chances outside `[0, 1]` (NaN included).
    pub fn new(chance: f32, override_genome: Genome) -> Result<Self> {
        check_chance(chance)?;
        Ok(Self {
            chance,
            override_genome,
        })
    }

    pub fn chance(&self) -> f32 {
        self.chance
    }

    pub fn override_genome(&self) -> &Genome {
        &self.override_genome
    }
}

fn check_chance(chance: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(GeneticsError::InvalidChance(chance));
    }
    Ok(())
}

/// Mutation rules indexed by locus, then by the trigger pair at that locus.
///
/// Sized once at construction. Rules registered repeatedly under the same key
/// accumulate; each one is evaluated on its own.
#[derive(Debug, Clone, Default)]
pub struct MutationRegistry {
    loci: Vec<HashMap<AllelePair, Vec<MutationRule>>>,
}

impl MutationRegistry {
    pub fn new(locus_count: usize) -> Self {
        Self {
            loci: (0..locus_count).map(|_| HashMap::new()).collect(),
        }
    }

    pub fn locus_count(&self) -> usize {
        self.loci.len()
    }

    /// Appends `rule` under `(locus, pair)`.
    ///
    /// The chance must lie in `[0, 1]` and the override must be a valid
    /// genome sized to this registry.
    pub fn register(&mut self, locus: Locus, pair: AllelePair, rule: MutationRule) -> Result<()> {
        let locus_count = self.loci.len();
        if locus >= locus_count {
            return Err(GeneticsError::LocusOutOfRange { locus, locus_count });
        }
        check_chance(rule.chance)?;

        let overrides = &rule.override_genome;
        if !overrides.is_valid() || overrides.locus_count != locus_count {
            return Err(GeneticsError::InvalidOverride {
                expected: locus_count,
                actual: overrides.locus_count,
                valid: overrides.is_valid(),
            });
        }

        self.loci[locus].entry(pair).or_default().push(rule);
        Ok(())
    }

    /// Rules registered under `(locus, pair)`; empty on a miss.
    pub fn rules_for(&self, locus: Locus, pair: &AllelePair) -> &[MutationRule] {
        self.loci
            .get(locus)
            .and_then(|rules| rules.get(pair))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Flat list of every rule triggered by the parents' active alleles.
    ///
    /// Callers must pass genomes with at least `locus_count` loci.
    pub fn collect_candidates(&self, parent_a: &Genome, parent_b: &Genome) -> Vec<MutationRule> {
        parent_a
            .active_alleles
            .iter()
            .zip(&parent_b.active_alleles)
            .enumerate()
            .flat_map(|(locus, (&a, &b))| self.rules_for(locus, &AllelePair::new(a, b)))
            .cloned()
            .collect()
    }

    /// Total number of registered rules across all loci
    pub fn len(&self) -> usize {
        self.loci
            .iter()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
