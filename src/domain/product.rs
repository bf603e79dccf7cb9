/// Catalog identifier of a product.
pub type ProductId = u32;

/// Represents a product on sale. Catalog entries are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Whole rupees.
    pub price: u64,
    pub category: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: u64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// The static list of purchasable products and the categories they are grouped in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<String>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(categories: Vec<String>, products: Vec<Product>) -> Self {
        Self { categories, products }
    }

    /// The grocery assortment the storefront ships with.
    pub fn grocery() -> Self {
        let categories = [
            "Fruits & Veg",
            "Dairy",
            "Beverages",
            "Snacks",
            "Bakery",
            "Household",
            "Personal Care",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let products = vec![
            Product::new(1, "Banana (1 Dozen)", 59, "Fruits & Veg"),
            Product::new(2, "Whole Milk (1L)", 59, "Dairy"),
            Product::new(3, "Orange Juice (1L)", 129, "Beverages"),
            Product::new(4, "Potato Chips (150g)", 49, "Snacks"),
            Product::new(5, "Brown Bread", 39, "Bakery"),
        ];

        Self::new(categories, products)
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Products whose category is exactly `category`.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grocery_catalog_lookup() {
        let catalog = Catalog::grocery();

        assert_eq!(catalog.products().len(), 5);
        assert_eq!(catalog.categories().len(), 7);

        let juice = catalog.find(3).expect("product 3 is seeded");
        assert_eq!(juice.name, "Orange Juice (1L)");
        assert_eq!(juice.price, 129);

        assert!(catalog.contains(5));
        assert!(!catalog.contains(42));
    }

    #[test]
    fn test_in_category_is_exact_match() {
        let catalog = Catalog::grocery();

        let dairy: Vec<_> = catalog.in_category("Dairy").map(|p| p.id).collect();
        assert_eq!(dairy, vec![2]);

        // Categories without stock yield nothing, and matching is not fuzzy.
        assert_eq!(catalog.in_category("Household").count(), 0);
        assert_eq!(catalog.in_category("dairy").count(), 0);
    }
}
