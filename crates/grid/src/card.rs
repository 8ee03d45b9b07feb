//! Card presentation: stateless projection of a product record.

use towelshop_catalog::Product;

/// Presentational card for one product. No business logic; fields are
/// already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub badges: Vec<&'static str>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let mut badges = Vec::new();
        if product.promo.is_new() {
            badges.push("New");
        }
        if product.promo.is_bestseller() {
            badges.push("Bestseller");
        }

        Self {
            name: product.name.clone(),
            price: format!("${}", product.price),
            image: product.image.clone(),
            category: product.category.clone(),
            badges,
        }
    }
}

impl core::fmt::Display for ProductCard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {} [{}]", self.name, self.price, self.category)?;
        for badge in &self.badges {
            write!(f, " ({badge})")?;
        }
        Ok(())
    }
}
