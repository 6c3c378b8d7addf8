use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Returns true if `value` occurs anywhere in `values`.
pub fn contains<T: PartialEq>(values: &[T], value: &T) -> bool {
    values.iter().any(|v| v == value)
}

/// Values present in at least two of the given lists.
/// Each list is deduplicated first, so repeats inside one list never count.
pub fn intersect<T>(lists: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen_in: HashMap<&T, usize> = HashMap::new();

    for list in lists {
        let unique: HashSet<&T> = list.iter().collect();
        for value in unique {
            *seen_in.entry(value).or_insert(0) += 1;
        }
    }

    seen_in
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(value, _)| value.clone())
        .collect()
}
