//! Order-preserving group-by over arbitrary sequences.
//!
//! Groups come out in the order their key was first seen, and items keep their relative order
//! inside a group. The validation driver relies on both properties for its deterministic
//! dispatch order.

use std::{collections::HashMap, hash::Hash};

use crate::Result;

/// Groups `items` by `key`, in first-appearance order
///
/// # Example
///
/// ```rust
/// use attrscope::utils::grouping::group_by;
///
/// let groups = group_by(["apple", "bean", "avocado", "beet", "cherry"], |word| {
///     word.chars().next()
/// });
///
/// assert_eq!(
///     groups,
///     vec![
///         (Some('a'), vec!["apple", "avocado"]),
///         (Some('b'), vec!["bean", "beet"]),
///         (Some('c'), vec!["cherry"]),
///     ]
/// );
/// ```
pub fn group_by<T, K, I, F>(items: I, mut key: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let item_key = key(&item);
        match index.get(&item_key) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                index.insert(item_key.clone(), groups.len());
                groups.push((item_key, vec![item]));
            }
        }
    }

    groups
}

/// Groups `items` by a fallible `key`, in first-appearance order
///
/// # Errors
/// Returns the first error produced by `key`; no further items are looked at.
pub fn try_group_by<T, K, I, F>(items: I, mut key: F) -> Result<Vec<(K, Vec<T>)>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> Result<K>,
{
    let mut keyed = Vec::new();
    for item in items {
        keyed.push((key(&item)?, item));
    }

    Ok(group_by(keyed, |(item_key, _)| item_key.clone())
        .into_iter()
        .map(|(group_key, entries)| {
            (
                group_key,
                entries.into_iter().map(|(_, item)| item).collect(),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_group_by_empty() {
        let groups = group_by(Vec::<u32>::new(), |value| *value);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_by_first_appearance_order() {
        let groups = group_by([3, 1, 3, 2, 1, 3], |value| *value);
        assert_eq!(groups, vec![(3, vec![3, 3, 3]), (1, vec![1, 1]), (2, vec![2])]);
    }

    #[test]
    fn test_group_by_keeps_item_order() {
        let items = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd'), (1, 'e')];
        let groups = group_by(items, |(key, _)| *key);
        assert_eq!(groups[0].1, vec![(1, 'a'), (1, 'c'), (1, 'e')]);
        assert_eq!(groups[1].1, vec![(2, 'b'), (2, 'd')]);
    }

    #[test]
    fn test_try_group_by_ok() {
        let groups = try_group_by(["x1", "y1", "x2"], |item| Ok(item.as_bytes()[0])).unwrap();
        assert_eq!(groups, vec![(b'x', vec!["x1", "x2"]), (b'y', vec!["y1"])]);
    }

    #[test]
    fn test_try_group_by_stops_on_error() {
        let mut seen = Vec::new();
        let result = try_group_by([1, 2, 3], |item| {
            seen.push(*item);
            if *item == 2 {
                Err(Error::HashEmpty)
            } else {
                Ok(*item)
            }
        });
        assert!(matches!(result, Err(Error::HashEmpty)));
        assert_eq!(seen, vec![1, 2]);
    }
}
