use crate::engines::combination::{
    genome::Genome,
    operators::{sample_offspring, select_override},
    registry::MutationRule,
};
use rand::Rng;
use std::iter::FusedIterator;

/// Lazy, unbounded stream of offspring from one `combine` call.
///
/// Owns its parents, its candidate rules and its own generator, so streams
/// never share draw state with each other or borrow the engine. `next` always
/// returns `Some`; stop pulling to stop generating.
#[derive(Debug, Clone)]
pub struct Offspring<R> {
    parent_a: Genome,
    parent_b: Genome,
    candidates: Vec<MutationRule>,
    order: Vec<usize>,
    rng: R,
    draws: u64,
}

impl<R: Rng> Offspring<R> {
    pub(crate) fn new(parent_a: Genome, parent_b: Genome, candidates: Vec<MutationRule>, rng: R) -> Self {
        let order = Vec::with_capacity(candidates.len());
        Self {
            parent_a,
            parent_b,
            candidates,
            order,
            rng,
            draws: 0,
        }
    }

    /// Number of mutation rules triggered by the parents
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Number of offspring drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Draws one offspring genome.
    pub fn draw(&mut self) -> Genome {
        let mother = select_override(&self.parent_a, &self.candidates, &mut self.order, &mut self.rng);
        let father = select_override(&self.parent_b, &self.candidates, &mut self.order, &mut self.rng);
        let child = sample_offspring(mother, father, &mut self.rng);

        self.draws += 1;
        child
    }
}

impl<R: Rng> Iterator for Offspring<R> {
    type Item = Genome;

    fn next(&mut self) -> Option<Genome> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: Rng> FusedIterator for Offspring<R> {}
