use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

const MAX_NAME_LEN: usize = 255;

/// A catalog product as stored by a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub shop_id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
    pub stock: i32,
}

/// Create input; `user_id` is the acting user and must own `shop_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub user_id: String,
    pub shop_id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
    pub stock: i32,
}

/// Update input; `user_id` must own the product `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    pub user_id: String,
    pub id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
    pub stock: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProductRequest {
    pub user_id: String,
    pub product_id: String,
}

/// One line of a bulk stock adjustment: take `quantity` units out of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStock {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductStockRequest {
    #[serde(default)]
    pub items: Vec<UpdateStock>,
}

/// Listing filter. `page` is 1-based; missing paging falls back to configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProductsRequest {
    pub shop_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Pagination metadata returned alongside a page of products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub total_data: u64,
    pub total_page: u64,
    pub page: u32,
    pub limit: u32,
}

impl Meta {
    /// Build metadata for `total` records split into pages of `limit`.
    /// An empty result still reports a single page.
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let per = u64::from(limit.max(1));
        let total_page = total.div_ceil(per).max(1);
        Self { total_data: total, total_page, page, limit }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProductsResponse {
    pub items: Vec<Product>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertProductResponse {
    pub id: String,
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ModelError::Validation(format!("name longer than {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

pub fn validate_stock(stock: i32) -> Result<(), ModelError> {
    if stock < 0 {
        return Err(ModelError::Validation("stock must be >= 0".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_rounds_total_pages_up() {
        let m = Meta::new(21, 1, 10);
        assert_eq!(m.total_page, 3);
        assert_eq!(m.total_data, 21);
    }

    #[test]
    fn meta_for_empty_listing_reports_one_page() {
        let m = Meta::new(0, 1, 10);
        assert_eq!(m.total_page, 1);
    }

    #[test]
    fn meta_tolerates_zero_limit() {
        let m = Meta::new(5, 1, 0);
        assert_eq!(m.total_page, 5);
    }

    #[test]
    fn validation_rejects_bad_fields() {
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"x".repeat(256)).is_err());
        assert!(validate_name("Product 1").is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_stock(-3).is_err());
        assert!(validate_stock(0).is_ok());
    }

    #[test]
    fn optional_fields_are_omitted_and_defaulted() {
        let req: GetProductsRequest = serde_json::from_str(r#"{"shop_id":"1"}"#).unwrap();
        assert_eq!(req.shop_id, "1");
        assert!(req.page.is_none() && req.limit.is_none());

        let p = Product {
            id: "1".into(),
            shop_id: "1".into(),
            category_id: "1".into(),
            name: "Product 1".into(),
            description: None,
            image_url: None,
            price: 1000.0,
            stock: 10,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["stock"], 10);
    }
}
