use super::memory::InMemoryStore;
use crate::model::{Category, Product, Sex, User};
use once_cell::sync::Lazy;

static SAMPLE: Lazy<InMemoryStore> = Lazy::new(|| {
    InMemoryStore::from_parts(
        vec![
            User::new(1, "Roma", Sex::Male),
            User::new(2, "Anna", Sex::Female),
            User::new(3, "Max", Sex::Male),
            User::new(4, "John", Sex::Male),
        ],
        vec![
            Category::new(1, "Grocery", "🍞", 2),
            Category::new(2, "Drinks", "🍺", 1),
            Category::new(3, "Fruits", "🍏", 2),
            Category::new(4, "Electronics", "💻", 1),
            Category::new(5, "Clothes", "👚", 3),
        ],
        vec![
            Product::new(1, "Milk", 2),
            Product::new(2, "Bread", 1),
            Product::new(3, "Eggs", 1),
            Product::new(4, "Jacket", 5),
            Product::new(5, "Sugar", 1),
            Product::new(6, "Banana", 3),
            Product::new(7, "Beer", 2),
            Product::new(8, "Laptop", 4),
            Product::new(9, "T-shirt", 5),
            Product::new(10, "Apple", 3),
        ],
    )
});

/// The built-in demo catalog.
pub fn store() -> &'static InMemoryStore {
    &SAMPLE
}
