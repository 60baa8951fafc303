use rand::seq::SliceRandom;
use rand::Rng;

/// Draw up to `n` elements without replacement.
///
/// Shuffles a copy of `items` uniformly (Fisher-Yates) and keeps the first `n`, so every
/// permutation is equally likely to be the basis of the selection. `n >= items.len()` yields a
/// full random permutation. The input is never mutated.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut pool = items.to_vec();
    pool.shuffle(rng);
    pool.truncate(n);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn oversized_request_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..10).collect();
        let mut picked = sample(&items, 25, &mut rng);
        assert_eq!(picked.len(), items.len());
        picked.sort_unstable();
        assert_eq!(picked, items);
    }

    #[test]
    fn draws_without_replacement() {
        let mut rng = StdRng::seed_from_u64(11);
        let items: Vec<u32> = (0..20).collect();
        for _ in 0..50 {
            let picked = sample(&items, 4, &mut rng);
            assert_eq!(picked.len(), 4);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn input_is_untouched_and_empty_cases_are_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = vec!["a", "b", "c"];
        let _ = sample(&items, 2, &mut rng);
        assert_eq!(items, vec!["a", "b", "c"]);
        assert!(sample(&items, 0, &mut rng).is_empty());
        assert!(sample::<u8, _>(&[], 4, &mut rng).is_empty());
    }

    #[test]
    fn first_position_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c", "d"];
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let rounds = 8_000;
        for _ in 0..rounds {
            *counts.entry(sample(&items, 1, &mut rng)[0]).or_default() += 1;
        }
        for item in items {
            let share = counts[item] as f64 / rounds as f64;
            assert!(
                (share - 0.25).abs() < 0.03,
                "item {item} picked with share {share}"
            );
        }
    }
}
