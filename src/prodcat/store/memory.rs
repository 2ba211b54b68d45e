use super::DataStore;
use crate::model::{Category, Product, User};

/// Reference data held in memory. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }
}

impl DataStore for InMemoryStore {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Sex;

    /// One user, one category, one product, all resolvable.
    pub fn banana() -> InMemoryStore {
        InMemoryStore::new()
            .with_user(User::new(1, "Max", Sex::Male))
            .with_category(Category::new(10, "Fruits", "🍎", 1))
            .with_product(Product::new(100, "Banana", 10))
    }

    /// Two owners, three categories and a couple of broken references:
    ///
    /// - `Ghost Pepper` points at category 99, which does not exist
    /// - category `Orphans` is owned by user 42, who does not exist
    pub fn market() -> InMemoryStore {
        InMemoryStore::new()
            .with_user(User::new(1, "Max", Sex::Male))
            .with_user(User::new(2, "Anna", Sex::Female))
            .with_category(Category::new(10, "Fruits", "🍎", 1))
            .with_category(Category::new(20, "Drinks", "🍺", 2))
            .with_category(Category::new(30, "Orphans", "❓", 42))
            .with_product(Product::new(1, "Milk", 20))
            .with_product(Product::new(2, "Banana", 10))
            .with_product(Product::new(3, "Ghost Pepper", 99))
            .with_product(Product::new(4, "Apple Juice", 20))
            .with_product(Product::new(5, "Pineapple", 10))
            .with_product(Product::new(6, "Lost Sock", 30))
    }
}
