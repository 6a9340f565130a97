//! Pure list operations over the ordered pair sequence.
//!
//! Every operation takes the current sequence by reference and returns a
//! brand-new `Vec`, never mutating in place. The owning system can therefore
//! detect change cheaply by comparing sequences. Invalid inputs (unknown
//! identifiers, self-moves) return `None` and the caller treats that as a
//! no-op.

use pairkit_types::{Pair, PairId};

/// Position of the pair with identifier `id`, if present.
pub fn index_of(pairs: &[Pair], id: &PairId) -> Option<usize> {
    pairs.iter().position(|p| &p.id == id)
}

/// Inserts `pair` at `position`, clamped to the list bounds; `None` appends.
pub fn insert_at(pairs: &[Pair], position: Option<usize>, pair: Pair) -> Vec<Pair> {
    let position = position.unwrap_or(pairs.len()).min(pairs.len());
    let mut next = Vec::with_capacity(pairs.len() + 1);
    next.extend_from_slice(&pairs[..position]);
    next.push(pair);
    next.extend_from_slice(&pairs[position..]);
    next
}

/// Removes the pair at `position`, returning the new sequence and the removed
/// pair. `None` when the position is out of bounds.
pub fn remove_at(pairs: &[Pair], position: usize) -> Option<(Vec<Pair>, Pair)> {
    if position >= pairs.len() {
        return None;
    }
    let removed = pairs[position].clone();
    let next = pairs
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != position)
        .map(|(_, p)| p.clone())
        .collect();
    Some((next, removed))
}

/// Removes `moved` from the sequence and reinserts it adjacent to `target`.
///
/// A negative `offset` places the moved pair after the target (drop below),
/// otherwise before it. Self-moves and unknown identifiers yield `None`.
pub fn move_relative(pairs: &[Pair], moved: &PairId, target: &PairId, offset: i32) -> Option<Vec<Pair>> {
    if moved == target {
        return None;
    }
    let moved_pair = pairs.iter().find(|p| &p.id == moved)?.clone();
    let without: Vec<Pair> = pairs.iter().filter(|p| &p.id != moved).cloned().collect();
    let mut to_index = without.iter().position(|p| &p.id == target)?;
    if offset < 0 {
        to_index += 1;
    }
    Some(insert_at(&without, Some(to_index), moved_pair))
}

/// Replaces the pair whose identifier matches `pair`, preserving position.
/// `None` when no pair carries that identifier.
pub fn replace(pairs: &[Pair], pair: Pair) -> Option<Vec<Pair>> {
    let position = index_of(pairs, &pair.id)?;
    let mut next = pairs.to_vec();
    next[position] = pair;
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: &str, name: &str, value: &str) -> Pair {
        Pair {
            id: PairId::from(id),
            name: name.to_string(),
            value: value.to_string(),
            file_name: None,
            kind: None,
        }
    }

    fn ids(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn insert_clamps_out_of_bounds_position() {
        let pairs = vec![pair("a", "A", "1")];

        let next = insert_at(&pairs, Some(99), pair("b", "B", "2"));

        assert_eq!(ids(&next), vec!["a", "b"]);
    }

    #[test]
    fn insert_none_appends() {
        let pairs = vec![pair("a", "A", "1"), pair("b", "B", "2")];

        let next = insert_at(&pairs, None, pair("c", "C", "3"));

        assert_eq!(ids(&next), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_does_not_touch_the_previous_sequence() {
        let pairs = vec![pair("a", "A", "1")];

        let next = insert_at(&pairs, Some(0), pair("b", "B", "2"));

        assert_eq!(ids(&pairs), vec!["a"]);
        assert_eq!(ids(&next), vec!["b", "a"]);
    }

    #[test]
    fn remove_returns_the_removed_pair() {
        let pairs = vec![pair("a", "A", "1"), pair("b", "B", "2")];

        let (next, removed) = remove_at(&pairs, 0).unwrap();

        assert_eq!(removed.id.as_str(), "a");
        assert_eq!(ids(&next), vec!["b"]);
    }

    #[test]
    fn remove_out_of_bounds_is_rejected() {
        let pairs = vec![pair("a", "A", "1")];

        assert!(remove_at(&pairs, 1).is_none());
    }

    #[test]
    fn move_before_target() {
        let pairs = vec![pair("a", "A", "1"), pair("b", "B", "2"), pair("c", "C", "3")];

        let next = move_relative(&pairs, &PairId::from("c"), &PairId::from("a"), 1).unwrap();

        assert_eq!(ids(&next), vec!["c", "a", "b"]);
    }

    #[test]
    fn move_after_target_with_negative_offset() {
        let pairs = vec![pair("a", "A", "1"), pair("b", "B", "2"), pair("c", "C", "3")];

        let next = move_relative(&pairs, &PairId::from("a"), &PairId::from("c"), -1).unwrap();

        assert_eq!(ids(&next), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_preserves_the_identifier_multiset() {
        let pairs = vec![pair("a", "A", "1"), pair("b", "B", "2"), pair("c", "C", "3")];

        let next = move_relative(&pairs, &PairId::from("b"), &PairId::from("a"), 1).unwrap();

        let mut before = ids(&pairs);
        let mut after = ids(&next);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn move_onto_itself_is_rejected() {
        let pairs = vec![pair("a", "A", "1"), pair("b", "B", "2")];

        assert!(move_relative(&pairs, &PairId::from("a"), &PairId::from("a"), 1).is_none());
    }

    #[test]
    fn move_with_unknown_identifier_is_rejected() {
        let pairs = vec![pair("a", "A", "1")];

        assert!(move_relative(&pairs, &PairId::from("zz"), &PairId::from("a"), 1).is_none());
        assert!(move_relative(&pairs, &PairId::from("a"), &PairId::from("zz"), 1).is_none());
    }

    #[test]
    fn replace_keeps_position_and_identity() {
        let pairs = vec![pair("a", "A", "1"), pair("b", "B", "2")];

        let next = replace(&pairs, pair("a", "Accept", "text/html")).unwrap();

        assert_eq!(ids(&next), vec!["a", "b"]);
        assert_eq!(next[0].name, "Accept");
    }

    #[test]
    fn replace_with_unknown_identifier_is_rejected() {
        let pairs = vec![pair("a", "A", "1")];

        assert!(replace(&pairs, pair("zz", "X", "Y")).is_none());
    }
}
