use serde::{Deserialize, Serialize};

/// Catalog-side item descriptor, before a quantity is attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }
}

/// A single cart line: a product plus the quantity currently in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// First add of a product always starts at quantity 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }

    /// The descriptor of this line with the quantity dropped.
    pub fn product(&self) -> Product {
        Product {
            id: self.id.clone(),
            title: self.title.clone(),
            image_url: self.image_url.clone(),
            price: self.price,
        }
    }

    pub fn incremented(&self) -> Self {
        Self {
            quantity: self.quantity + 1,
            ..self.clone()
        }
    }

    /// Quantity floors at zero; lines are never removed from the cart.
    pub fn decremented(&self) -> Self {
        Self {
            quantity: self.quantity.saturating_sub(1),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_starts_at_one() {
        let item = CartItem::from_product(Product::new("p1", "Shirt", "u", 10.0));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, "p1");
    }

    #[test]
    fn test_product_drops_quantity() {
        let original = Product::new("p1", "Shirt", "u", 10.0);
        let item = CartItem::from_product(original.clone()).incremented();
        assert_eq!(item.product(), original);
    }

    #[test]
    fn test_decremented_floors_at_zero() {
        let item = CartItem::from_product(Product::new("p1", "Shirt", "u", 10.0))
            .decremented()
            .decremented();
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_json_field_names() {
        let item = CartItem::from_product(Product::new("p1", "Shirt", "u", 10.0));
        let encoded = serde_json::to_value(&item).unwrap();
        assert_eq!(encoded["id"], "p1");
        assert_eq!(encoded["image_url"], "u");
        assert_eq!(encoded["quantity"], 1);
    }
}
