//! Catalog format v0
//!
//! ```yaml
//! schema_version: 0
//! categories:
//!   - code: 4
//!     name: Korean
//! menus:
//!   - code: 1
//!     name: Kimchi stew
//!     price: 5000
//!     category: 4
//!     orderable: true   # optional, defaults to true
//! ```

use ordertx_core::model::{Category, MenuItem};
use serde::{Deserialize, Serialize};

/// Top-level catalog file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogV0 {
    /// Must be 0 for this format
    pub schema_version: u32,

    #[serde(default)]
    pub categories: Vec<CatalogCategory>,

    #[serde(default)]
    pub menus: Vec<CatalogMenu>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub code: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMenu {
    pub code: i64,
    pub name: String,

    /// Unit price in integer currency units
    pub price: i64,

    /// Category code; must exist in the file or in the database
    pub category: i64,

    #[serde(default = "default_orderable")]
    pub orderable: bool,
}

fn default_orderable() -> bool {
    true
}

impl From<&CatalogCategory> for Category {
    fn from(category: &CatalogCategory) -> Self {
        Category {
            code: category.code,
            name: category.name.clone(),
        }
    }
}

impl From<&CatalogMenu> for MenuItem {
    fn from(menu: &CatalogMenu) -> Self {
        MenuItem {
            code: menu.code,
            name: menu.name.clone(),
            price: menu.price,
            category_code: menu.category,
            orderable: menu.orderable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orderable_defaults_to_true() {
        let yaml = r#"
schema_version: 0
menus:
  - code: 1
    name: Kimchi stew
    price: 5000
    category: 4
"#;
        let catalog: CatalogV0 = serde_yaml::from_str(yaml).unwrap();
        assert!(catalog.categories.is_empty());
        assert!(catalog.menus[0].orderable);

        let menu = MenuItem::from(&catalog.menus[0]);
        assert_eq!(menu.category_code, 4);
    }
}
