//! The in-memory product catalog.
//!
//! Backed by a `Vec` so `list()` walks products in registration order
//! without a separate index. Lookups are linear, which is fine at
//! storefront scale (tens of products, one operator).

use crate::error::{Result, ShopError};
use crate::model::{has_reserved_char, name_has_letter, Product, ProductId};

fn validate_name(name: &str) -> Result<()> {
    if !name_has_letter(name) {
        return Err(ShopError::InvalidName(name.to_string()));
    }
    if has_reserved_char(name) {
        return Err(ShopError::ReservedCharacter {
            field: "Product name",
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a loaded snapshot, keeping file order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    fn find_mut(&mut self, id: &ProductId) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ShopError::ProductNotFound(id.clone()))
    }

    /// Register a new product under a freshly generated id.
    pub fn register(&mut self, name: &str, price: u64, stock: u64) -> Result<&Product> {
        validate_name(name)?;
        let mut product = Product::new(name.to_string(), price, stock);
        // 8 hex digits make collisions vanishingly rare, but ids must be
        // unique within a catalog, so regenerate on the off chance.
        while self.get(&product.id).is_some() {
            product.id = ProductId::generate();
        }
        self.products.push(product);
        Ok(self.products.last().expect("push cannot leave the vec empty"))
    }

    pub fn rename(&mut self, id: &ProductId, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        self.find_mut(id)?.name = new_name.to_string();
        Ok(())
    }

    pub fn reprice(&mut self, id: &ProductId, new_price: u64) -> Result<()> {
        self.find_mut(id)?.price = new_price;
        Ok(())
    }

    /// Set (not add to) the stock level.
    pub fn restock(&mut self, id: &ProductId, new_stock: u64) -> Result<()> {
        self.find_mut(id)?.stock = new_stock;
        Ok(())
    }

    /// Remove the product entirely. Hard delete; existing orders keep
    /// their own copy of the name and price.
    pub fn discontinue(&mut self, id: &ProductId) -> Result<Product> {
        let pos = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ShopError::ProductNotFound(id.clone()))?;
        Ok(self.products.remove(pos))
    }

    /// Case-insensitive substring match on the product name. An empty (or
    /// all-whitespace) query matches nothing: browsing is `list()`, search
    /// requires explicit input.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Deduct stock for an accepted order. The placement workflow has
    /// already verified the quantity; refuse to underflow regardless.
    pub(crate) fn deduct(&mut self, id: &ProductId, quantity: u64) -> Result<()> {
        let product = self.find_mut(id)?;
        product.stock = product
            .stock
            .checked_sub(quantity)
            .ok_or(ShopError::InsufficientStock {
                requested: quantity,
                available: product.stock,
            })?;
        Ok(())
    }
}
