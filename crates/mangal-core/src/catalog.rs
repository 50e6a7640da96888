//! # Catalog
//!
//! The fixed, ordered menu. Built once at startup and never mutated.

use std::collections::HashSet;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Product, ProductId};
use crate::validation::{validate_price, validate_product_name};

/// Immutable, ordered sequence of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from `products`, keeping their order.
    ///
    /// ## Errors
    /// - `Empty` if there are no products
    /// - `Duplicate` if two products share an id
    /// - `Required` / `OutOfRange` for blank names or prices outside `0..=MAX_PRICE`
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        if products.is_empty() {
            return Err(ValidationError::Empty {
                field: "catalog".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
            validate_product_name(&product.name)?;
            validate_price(product.price)?;
        }

        Ok(Catalog { products })
    }

    /// The grill-house menu.
    pub fn standard() -> Self {
        Catalog {
            products: vec![
                Product::new(1, "Шашлык из свинины", 450, "🥩", "200г сочного мяса"),
                Product::new(2, "Шашлык из курицы", 350, "🍗", "200г куриного филе"),
                Product::new(3, "Шашлык из баранины", 550, "🍖", "200г баранины"),
                Product::new(4, "Люля-кебаб", 400, "🌭", "2 шт, 180г"),
                Product::new(5, "Овощи на мангале", 250, "🍅", "Перец, помидор, баклажан"),
                Product::new(6, "Лаваш", 100, "🫓", "Свежий армянский лаваш"),
                Product::new(7, "Соус ткемали", 80, "🥫", "100мл"),
                Product::new(8, "Аджика", 80, "🌶️", "100мл"),
            ],
        }
    }

    /// All products in menu order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 8);

        let ids: Vec<ProductId> = catalog.list_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(catalog.get(1).map(|p| p.price.units()), Some(450));
        assert_eq!(catalog.get(5).map(|p| p.price.units()), Some(250));
        assert!(catalog.get(9).is_none());
    }

    #[test]
    fn test_standard_catalog_passes_validation() {
        let products = Catalog::standard().list_products().to_vec();
        assert!(Catalog::new(products).is_ok());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1, "Лаваш", 100, "🫓", ""),
            Product::new(1, "Аджика", 80, "🌶️", ""),
        ];
        let err = Catalog::new(products).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: product id '1' already exists");
    }

    #[test]
    fn test_rejects_negative_price_and_blank_name() {
        assert!(Catalog::new(vec![Product::new(1, "Лаваш", -5, "🫓", "")]).is_err());
        assert!(Catalog::new(vec![Product::new(1, "  ", 100, "🫓", "")]).is_err());
        assert!(Catalog::new(vec![Product::new(1, "Лаваш", crate::MAX_PRICE + 1, "🫓", "")]).is_err());
    }
}
