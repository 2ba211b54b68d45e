//! # Join Engine
//!
//! Flattens the reference collections into one [`JoinedItem`] per product:
//!
//! ```text
//! Product ──category_id──▶ Category ──owner_id──▶ User
//! ```
//!
//! Both hops are left-outer joins. A product whose `category_id` resolves to
//! nothing gets `category: None` and `user: None`; a category whose `owner_id`
//! resolves to nothing gets `user: None`. Neither case is an error.
//!
//! The output keeps the products' order and depends only on the inputs, so it
//! is computed once and cached by the caller (see [`crate::api`]).

use crate::model::{Category, JoinedItem, Product, User};
use crate::store::DataStore;

/// Counts of references that did not resolve during a join.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JoinReport {
    /// Products whose `category_id` matched no category.
    pub dangling_categories: Vec<Product>,
    /// Categories (reached through a product) whose `owner_id` matched no user.
    pub dangling_owners: Vec<Category>,
}

impl JoinReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_categories.is_empty() && self.dangling_owners.is_empty()
    }
}

pub fn find_category(categories: &[Category], id: u32) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

pub fn find_user(users: &[User], id: u32) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

fn join_product(users: &[User], categories: &[Category], product: &Product) -> JoinedItem {
    let category = find_category(categories, product.category_id);
    let user = category.and_then(|c| find_user(users, c.owner_id));

    JoinedItem {
        product: product.clone(),
        category: category.cloned(),
        user: user.cloned(),
    }
}

/// Joins products to their category and owner, one item per product.
pub fn join(users: &[User], categories: &[Category], products: &[Product]) -> Vec<JoinedItem> {
    products
        .iter()
        .map(|p| join_product(users, categories, p))
        .collect()
}

/// Same as [`join`], reading the collections from a store and reporting misses.
pub fn join_store<S: DataStore>(store: &S) -> (Vec<JoinedItem>, JoinReport) {
    let items = join(store.users(), store.categories(), store.products());
    let report = report(&items);

    if !report.is_clean() {
        tracing::debug!(
            dangling_categories = report.dangling_categories.len(),
            dangling_owners = report.dangling_owners.len(),
            "join left some references unresolved"
        );
    }
    tracing::debug!(items = items.len(), "joined catalog");

    (items, report)
}

fn report(items: &[JoinedItem]) -> JoinReport {
    let mut report = JoinReport::default();
    for item in items {
        match (&item.category, &item.user) {
            (None, _) => report.dangling_categories.push(item.product.clone()),
            (Some(category), None) => {
                if !report.dangling_owners.iter().any(|c| c.id == category.id) {
                    report.dangling_owners.push(category.clone());
                }
            }
            (Some(_), Some(_)) => {}
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::store::memory::fixtures;

    #[test]
    fn joins_product_to_category_and_owner() {
        let (items, report) = join_store(&fixtures::banana());

        assert!(report.is_clean());
        assert_eq!(
            items,
            vec![JoinedItem {
                product: Product::new(100, "Banana", 10),
                category: Some(Category::new(10, "Fruits", "🍎", 1)),
                user: Some(User::new(1, "Max", Sex::Male)),
            }]
        );
    }

    #[test]
    fn unknown_category_leaves_both_relations_empty() {
        let users = [User::new(1, "Max", Sex::Male)];
        let categories = [Category::new(10, "Fruits", "🍎", 1)];
        let products = [Product::new(1, "Mystery", 77)];

        let items = join(&users, &categories, &products);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, None);
        assert_eq!(items[0].user, None);
    }

    #[test]
    fn unknown_owner_keeps_category() {
        let users = [User::new(1, "Max", Sex::Male)];
        let categories = [Category::new(10, "Fruits", "🍎", 5)];
        let products = [Product::new(1, "Banana", 10)];

        let items = join(&users, &categories, &products);
        assert_eq!(items[0].category_id(), Some(10));
        assert_eq!(items[0].user, None);
    }

    #[test]
    fn preserves_product_order() {
        let (items, _) = join_store(&fixtures::market());
        let ids: Vec<_> = items.iter().map(|i| i.product.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn is_deterministic() {
        let store = fixtures::market();
        assert_eq!(join_store(&store).0, join_store(&store).0);
    }

    #[test]
    fn first_match_wins_on_duplicate_ids() {
        let users = [
            User::new(1, "Max", Sex::Male),
            User::new(1, "Impostor", Sex::Male),
        ];
        let categories = [Category::new(10, "Fruits", "🍎", 1)];
        let products = [Product::new(1, "Banana", 10)];

        let items = join(&users, &categories, &products);
        assert_eq!(items[0].user_name(), Some("Max"));
    }

    #[test]
    fn report_lists_each_dangling_reference() {
        let (_, report) = join_store(&fixtures::market());

        let products: Vec<_> = report
            .dangling_categories
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(products, ["Ghost Pepper"]);

        let owners: Vec<_> = report
            .dangling_owners
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(owners, ["Orphans"]);
    }

    #[test]
    fn empty_products_join_to_empty() {
        let users = [User::new(1, "Max", Sex::Male)];
        assert!(join(&users, &[], &[]).is_empty());
    }
}
