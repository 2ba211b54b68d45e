use super::DataStore;
use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const USERS_FILENAME: &str = "users.json";
pub const CATEGORIES_FILENAME: &str = "categories.json";
pub const PRODUCTS_FILENAME: &str = "products.json";

/// Reference data read from a directory of JSON arrays.
///
/// ```text
/// data/
/// ├── users.json        # [{"id":1,"name":"Max","sex":"m"}, ...]
/// ├── categories.json   # [{"id":1,"title":"Fruits","icon":"🍎","ownerId":1}, ...]
/// └── products.json     # [{"id":1,"name":"Banana","categoryId":1}, ...]
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(CatalogError::Store(format!(
                "Data directory not found: {}",
                root.display()
            )));
        }

        let users: Vec<User> = read_collection(&root, USERS_FILENAME)?;
        let categories: Vec<Category> = read_collection(&root, CATEGORIES_FILENAME)?;
        let products: Vec<Product> = read_collection(&root, PRODUCTS_FILENAME)?;

        tracing::debug!(
            root = %root.display(),
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "loaded reference data"
        );

        Ok(Self {
            root,
            users,
            categories,
            products,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn read_collection<T: DeserializeOwned>(root: &Path, filename: &str) -> Result<Vec<T>> {
    let path = root.join(filename);
    if !path.exists() {
        return Err(CatalogError::Store(format!(
            "Missing reference file: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path).map_err(CatalogError::Io)?;
    let items = serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
    Ok(items)
}

impl DataStore for FileStore {
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
