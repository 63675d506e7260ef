//! Authoritative product collection: insertion order + id index.

use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// Ordered collection of products with O(1) lookup by id.
///
/// `order` and `by_id` always hold exactly the same set of ids; every mutation
/// touches both or neither.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    order: Vec<ProductId>,
    by_id: HashMap<ProductId, Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product at the end of store order.
    ///
    /// Fails with `DuplicateId` if the id is already present; the store is left untouched.
    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id().clone();
        if self.by_id.contains_key(&id) {
            return Err(DomainError::duplicate_id(id.as_str()));
        }
        self.order.push(id.clone());
        self.by_id.insert(id, product);
        Ok(())
    }

    /// Remove a product by id, returning it.
    pub fn remove(&mut self, id: &str) -> DomainResult<Product> {
        let product = self
            .by_id
            .remove(id)
            .ok_or_else(|| DomainError::not_found(id))?;
        self.order.retain(|existing| existing.as_str() != id);
        Ok(product)
    }

    pub fn get(&self, id: &str) -> DomainResult<&Product> {
        self.by_id.get(id).ok_or_else(|| DomainError::not_found(id))
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> DomainResult<&mut Product> {
        self.by_id
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// First product in store order whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.iter().find(|p| p.name() == name)
    }

    /// All products in store (insertion) order.
    ///
    /// Borrowing the store means the sequence is stable until the next mutation;
    /// call again to restart it.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.by_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: &str, name: &str, quantity: i64) -> Product {
        Product::new(ProductId::parse(id).unwrap(), name, quantity, None).unwrap()
    }

    #[test]
    fn insert_then_get_returns_product() {
        let mut store = InventoryStore::new();
        store.insert(product("001", "TestProduct", 20)).unwrap();

        let found = store.get("001").unwrap();
        assert_eq!(found.name(), "TestProduct");
        assert_eq!(found.quantity(), 20);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_rejected_and_store_unchanged() {
        let mut store = InventoryStore::new();
        store.insert(product("001", "First", 20)).unwrap();

        let err = store.insert(product("001", "Second", 3)).unwrap_err();
        assert_eq!(err, DomainError::DuplicateId("001".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("001").unwrap().name(), "First");
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut store = InventoryStore::new();
        assert!(store.remove("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut store = InventoryStore::new();
        store.insert(product("a", "A", 1)).unwrap();
        store.insert(product("b", "B", 2)).unwrap();
        store.insert(product("c", "C", 3)).unwrap();

        let removed = store.remove("b").unwrap();
        assert_eq!(removed.name(), "B");

        let names: Vec<_> = store.iter().map(Product::name).collect();
        assert_eq!(names, ["A", "C"]);
        assert!(store.get("b").unwrap_err().is_not_found());
    }

    #[test]
    fn find_by_name_returns_first_match_in_store_order() {
        let mut store = InventoryStore::new();
        store.insert(product("a", "Milk", 1)).unwrap();
        store.insert(product("b", "Milk", 2)).unwrap();

        assert_eq!(store.find_by_name("Milk").unwrap().quantity(), 1);
        assert!(store.find_by_name("Bread").is_none());
    }

    #[test]
    fn iter_is_restartable() {
        let mut store = InventoryStore::new();
        store.insert(product("a", "A", 1)).unwrap();
        store.insert(product("b", "B", 2)).unwrap();

        let first: Vec<_> = store.iter().collect();
        let second: Vec<_> = store.iter().collect();
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: inserting n unique ids yields n products, each retrievable by id.
        #[test]
        fn unique_inserts_are_all_retrievable(
            ids in prop::collection::hash_set("[a-z0-9]{1,8}", 0..32)
        ) {
            let mut store = InventoryStore::new();
            for (n, id) in ids.iter().enumerate() {
                store.insert(product(id, "Item", n as i64)).unwrap();
            }

            prop_assert_eq!(store.len(), ids.len());
            prop_assert_eq!(store.iter().count(), ids.len());
            for id in &ids {
                prop_assert_eq!(store.get(id).unwrap().id().as_str(), id.as_str());
            }
        }
    }
}
