//! Non-mutating helpers for collections of keyed records.
//!
//! Records are matched by the value a key extractor returns, in the way
//! `slice::sort_by_key` takes one. Every helper leaves its input untouched and
//! returns a new `Vec`.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// No record shares the key of the given element.
    #[error("No element with a matching key")]
    ElementNotFound,
}

/// Returns `items` with `element` appended.
pub fn add_element<T: Clone>(items: &[T], element: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(element);
    out
}

/// Returns `items` with the first record sharing `element`'s key replaced by `element`.
///
/// # Errors
/// Returns `ArrayError::ElementNotFound` if no record has that key.
pub fn update_element<T, K, F>(items: &[T], element: T, key: F) -> Result<Vec<T>, ArrayError>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let index = position_of(items, &element, &key)?;
    let mut out = items.to_vec();
    out[index] = element;
    Ok(out)
}

/// Returns `items` with every record whose key appears in `updates` replaced
/// by the matching update. Updates with no matching record are ignored; if
/// several updates share a key, the last one wins.
pub fn update_elements<T, K, F>(items: &[T], updates: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let by_key = map_by_key(updates, &key);
    items
        .iter()
        .map(|item| by_key.get(&key(item)).unwrap_or(item).clone())
        .collect()
}

/// Returns `items` without the first record sharing `element`'s key.
///
/// # Errors
/// Returns `ArrayError::ElementNotFound` if no record has that key.
pub fn remove_element<T, K, F>(items: &[T], element: &T, key: F) -> Result<Vec<T>, ArrayError>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let index = position_of(items, element, &key)?;
    let mut out = items.to_vec();
    out.remove(index);
    Ok(out)
}

/// Indexes `items` by key. Later records overwrite earlier ones with the same key.
pub fn map_by_key<T, K, F>(items: &[T], key: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.iter().map(|item| (key(item), item.clone())).collect()
}

fn position_of<T, K, F>(items: &[T], element: &T, key: &F) -> Result<usize, ArrayError>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let wanted = key(element);
    items
        .iter()
        .position(|item| key(item) == wanted)
        .ok_or(ArrayError::ElementNotFound)
}
