//! Display ordering.
//!
//! Inventories are entered by hand and stay small, so a stable insertion sort is
//! plenty. Storage order is never touched: callers sort a copy of references.

use crate::product::Product;

/// Stable in-place insertion sort, ascending by `key`.
///
/// Each element is shifted left past every preceding element with a strictly
/// greater key, so equal keys keep their relative order.
pub fn insertion_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && key(&items[j - 1]) > key(&items[j]) {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Products ordered ascending by quantity, ties kept in input order.
pub fn sorted_by_quantity<'a, I>(products: I) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut sorted: Vec<&Product> = products.into_iter().collect();
    insertion_sort_by_key(&mut sorted, |p| p.quantity());
    sorted
}
