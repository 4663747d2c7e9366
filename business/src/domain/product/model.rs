use std::cmp::Ordering;

use crate::domain::repository::Entity;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub stock: i32,
}

pub struct NewProductProps {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub stock: i32,
}

impl Product {
    /// Builds an unsaved product. The store assigns the identifier on first save.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < 0 {
            return Err(ProductError::NegativePrice);
        }

        if props.stock < 0 {
            return Err(ProductError::NegativeStock);
        }

        Ok(Self {
            id: None,
            name: props.name,
            price: props.price,
            description: props.description,
            stock: props.stock,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        price: i64,
        description: String,
        stock: i32,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            price,
            description,
            stock,
        }
    }
}

impl Entity for Product {
    type Id = i64;

    const SORTABLE_FIELDS: &'static [&'static str] = &["id", "name", "price", "stock"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "id" => Some(self.id.cmp(&other.id)),
            "name" => Some(self.name.cmp(&other.name)),
            "price" => Some(self.price.cmp(&other.price)),
            "stock" => Some(self.stock.cmp(&other.stock)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::paging::Sort;

    fn props(name: &str, price: i64, stock: i32) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            price,
            description: String::new(),
            stock,
        }
    }

    #[test]
    fn should_create_unsaved_product_when_valid() {
        let product = Product::new(props("Widget", 1200, 3)).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::new(props("   ", 1200, 3));
        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Product::new(props("Widget", -1, 3));
        assert!(matches!(result, Err(ProductError::NegativePrice)));
    }

    #[test]
    fn should_reject_negative_stock() {
        let result = Product::new(props("Widget", 0, -3));
        assert!(matches!(result, Err(ProductError::NegativeStock)));
    }

    #[test]
    fn should_sort_by_price_descending_then_id() {
        let mut products = vec![
            Product::from_repository(1, "A".into(), 100, String::new(), 0),
            Product::from_repository(2, "B".into(), 300, String::new(), 0),
            Product::from_repository(3, "C".into(), 100, String::new(), 0),
        ];

        Sort::desc("price").apply(&mut products).unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id.unwrap()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn should_refuse_sort_on_unknown_field() {
        let mut products = vec![Product::from_repository(1, "A".into(), 1, String::new(), 0)];
        assert!(Sort::asc("description").apply(&mut products).is_err());
    }
}
