use std::collections::HashSet;
use std::hash::Hash;

/// Merge hardcoded rows with fetched ones.
///
/// Seed rows come first, remote rows follow in their own order. A row
/// whose key was already emitted is dropped, so on a collision the seed
/// row wins.
pub fn merge_seeded<T, K>(
    seed: impl IntoIterator<Item = T>,
    remote: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Vec<T>
where
    K: Eq + Hash,
{
    let mut seen = HashSet::new();
    seed.into_iter()
        .chain(remote)
        .filter(|row| seen.insert(key(row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_first_then_remote() {
        let merged = merge_seeded([(1, "s1"), (2, "s2")], [(3, "r3")], |r| r.0);
        assert_eq!(merged, [(1, "s1"), (2, "s2"), (3, "r3")]);
    }

    #[test]
    fn seed_wins_on_collision() {
        let merged = merge_seeded([(1, "seed")], [(1, "remote"), (2, "r2"), (2, "dup")], |r| r.0);
        assert_eq!(merged, [(1, "seed"), (2, "r2")]);
    }

    #[test]
    fn empty_inputs() {
        let merged: Vec<(u8, &str)> = merge_seeded([], [], |r: &(u8, &str)| r.0);
        assert!(merged.is_empty());
    }
}
