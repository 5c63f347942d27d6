use crate::engines::combination::{genome::Genome, registry::MutationRule};
use rand::seq::SliceRandom;
use rand::Rng;

/// Override selection: shuffle the candidates, then take the first rule whose
/// chance beats a fresh uniform draw.
///
/// `order` is scratch space for the shuffled indices and is overwritten.
/// Returns `parent` when no rule fires.
pub fn select_override<'a, R: Rng>(
    parent: &'a Genome,
    candidates: &'a [MutationRule],
    order: &mut Vec<usize>,
    rng: &mut R,
) -> &'a Genome {
    order.clear();
    order.extend(0..candidates.len());
    order.shuffle(rng);

    for &idx in order.iter() {
        let rule = &candidates[idx];
        if rule.chance() > rng.gen::<f32>() {
            log::trace!("mutation fired (chance {})", rule.chance());
            return rule.override_genome();
        }
    }

    parent
}

/// Mendelian sampling: at every locus the offspring's active allele comes
/// from `mother`, its inactive allele from `father`, each picked by a coin flip
/// between the parent's active and inactive allele.
///
/// Both parents must be valid and share the same locus count.
pub fn sample_offspring<R: Rng>(mother: &Genome, father: &Genome, rng: &mut R) -> Genome {
    let mut child = Genome::with_locus_count(mother.locus_count);

    for locus in 0..mother.locus_count {
        let active = if rng.gen::<bool>() {
            mother.active_alleles[locus]
        } else {
            mother.inactive_alleles[locus]
        };
        let inactive = if rng.gen::<bool>() {
            father.active_alleles[locus]
        } else {
            father.inactive_alleles[locus]
        };
        child.push_locus(active, inactive);
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rule(chance: f32, allele: i32) -> MutationRule {
        MutationRule::new(chance, Genome::from_alleles(vec![allele; 3], vec![allele; 3])).unwrap()
    }

    #[test]
    fn test_select_override_without_candidates_keeps_parent() {
        let parent = Genome::from_alleles(vec![1, 2, 3], vec![4, 5, 6]);
        let mut order = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);

        let selected = select_override(&parent, &[], &mut order, &mut rng);
        assert_eq!(selected, &parent);
    }

    #[test]
    fn test_select_override_certain_rule_always_fires() {
        let parent = Genome::from_alleles(vec![1, 2, 3], vec![4, 5, 6]);
        let candidates = vec![rule(0.0, 8), rule(1.0, 9)];
        let mut order = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let selected = select_override(&parent, &candidates, &mut order, &mut rng);
            assert_eq!(selected.active_alleles, vec![9, 9, 9]);
        }
    }

    #[test]
    fn test_select_override_competing_rules_both_win_sometimes() {
        let parent = Genome::from_alleles(vec![1, 2, 3], vec![4, 5, 6]);
        let candidates = vec![rule(1.0, 8), rule(1.0, 9)];
        let mut order = Vec::new();
        let mut rng = StdRng::seed_from_u64(11);

        let mut eights = 0;
        let mut nines = 0;
        for _ in 0..500 {
            match select_override(&parent, &candidates, &mut order, &mut rng).active_alleles[0] {
                8 => eights += 1,
                9 => nines += 1,
                other => panic!("unexpected allele {}", other),
            }
        }

        // Shuffled scan, so registration order must not decide the winner
        assert!(eights > 100, "first rule won only {} times", eights);
        assert!(nines > 100, "second rule won only {} times", nines);
    }

    #[test]
    fn test_sample_offspring_picks_from_each_parent() {
        let mother = Genome::from_alleles(vec![1, 2, 3, 4], vec![11, 12, 13, 14]);
        let father = Genome::from_alleles(vec![21, 22, 23, 24], vec![31, 32, 33, 34]);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let child = sample_offspring(&mother, &father, &mut rng);
            assert!(child.is_valid());
            assert_eq!(child.locus_count, 4);
            for locus in 0..4 {
                let (active, inactive) = child.locus(locus).unwrap();
                assert!(active == mother.active_alleles[locus] || active == mother.inactive_alleles[locus]);
                assert!(inactive == father.active_alleles[locus] || inactive == father.inactive_alleles[locus]);
            }
        }
    }

    #[test]
    fn test_sample_offspring_empty_genome() {
        let empty = Genome::with_locus_count(0);
        let mut rng = StdRng::seed_from_u64(3);

        let child = sample_offspring(&empty, &empty, &mut rng);
        assert!(child.is_valid());
        assert_eq!(child.locus_count, 0);
    }
}
