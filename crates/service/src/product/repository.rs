use async_trait::async_trait;
use models::product::{
    CreateProductRequest, DeleteProductRequest, GetProductsRequest, GetProductsResponse,
    UpdateProductRequest, UpdateProductStockRequest, UpsertProductResponse,
};

use crate::errors::ServiceError;

/// Persistence abstraction for the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<UpsertProductResponse, ServiceError>;
    async fn get_products(&self, req: &GetProductsRequest) -> Result<GetProductsResponse, ServiceError>;
    async fn update_product(&self, req: &UpdateProductRequest) -> Result<UpsertProductResponse, ServiceError>;
    async fn update_product_stock(&self, req: &UpdateProductStockRequest) -> Result<(), ServiceError>;
    async fn delete_product(&self, req: &DeleteProductRequest) -> Result<(), ServiceError>;

    async fn is_shop_owner(&self, user_id: &str, shop_id: &str) -> Result<bool, ServiceError>;
    async fn is_product_owner(&self, user_id: &str, product_id: &str) -> Result<bool, ServiceError>;
}

/// In-memory repository for tests, doc examples and local runs
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    use configs::CatalogConfig;
    use models::product::{validate_name, validate_price, validate_stock, Meta, Product};
    use uuid::Uuid;

    use crate::pagination::Pagination;

    #[derive(Default)]
    struct State {
        shops: HashMap<String, String>, // key: shop_id, value: owner user_id
        products: Vec<Product>,         // insertion order
    }

    #[derive(Default)]
    pub struct InMemoryProductRepository {
        catalog: CatalogConfig,
        state: Mutex<State>,
    }

    impl InMemoryProductRepository {
        pub fn new(catalog: CatalogConfig) -> Self {
            Self { catalog, state: Mutex::new(State::default()) }
        }

        /// Register `shop_id` as owned by `owner_id`, replacing any previous owner.
        pub fn register_shop(&self, shop_id: &str, owner_id: &str) -> Result<(), ServiceError> {
            self.state()?.shops.insert(shop_id.to_string(), owner_id.to_string());
            Ok(())
        }

        /// Snapshot of a stored product.
        pub fn product(&self, id: &str) -> Result<Option<Product>, ServiceError> {
            Ok(self.state()?.products.iter().find(|p| p.id == id).cloned())
        }

        fn state(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|e| ServiceError::Db(format!("state lock poisoned: {e}")))
        }
    }

    fn validate_fields(name: &str, price: f64, stock: i32) -> Result<(), ServiceError> {
        validate_name(name)?;
        validate_price(price)?;
        validate_stock(stock)?;
        Ok(())
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn create_product(&self, req: &CreateProductRequest) -> Result<UpsertProductResponse, ServiceError> {
            validate_fields(&req.name, req.price, req.stock)?;
            let mut state = self.state()?;
            if !state.shops.contains_key(&req.shop_id) {
                return Err(ServiceError::not_found("shop"));
            }
            let id = Uuid::new_v4().to_string();
            state.products.push(Product {
                id: id.clone(),
                shop_id: req.shop_id.clone(),
                category_id: req.category_id.clone(),
                name: req.name.clone(),
                description: req.description.clone(),
                image_url: req.image_url.clone(),
                price: req.price,
                stock: req.stock,
            });
            Ok(UpsertProductResponse { id })
        }

        async fn get_products(&self, req: &GetProductsRequest) -> Result<GetProductsResponse, ServiceError> {
            let paging = Pagination::resolve(req.page, req.limit, &self.catalog);
            let needle = req.name.as_deref().map(str::to_lowercase);

            let state = self.state()?;
            let matching: Vec<&Product> = state
                .products
                .iter()
                .filter(|p| p.shop_id == req.shop_id)
                .filter(|p| req.category_id.as_ref().map_or(true, |c| &p.category_id == c))
                .filter(|p| needle.as_ref().map_or(true, |n| p.name.to_lowercase().contains(n)))
                .collect();

            let total = matching.len() as u64;
            let items = matching
                .into_iter()
                .skip(paging.offset() as usize)
                .take(paging.per_page as usize)
                .cloned()
                .collect();
            Ok(GetProductsResponse { items, meta: Meta::new(total, paging.page, paging.per_page) })
        }

        async fn update_product(&self, req: &UpdateProductRequest) -> Result<UpsertProductResponse, ServiceError> {
            validate_fields(&req.name, req.price, req.stock)?;
            let mut state = self.state()?;
            let product = state
                .products
                .iter_mut()
                .find(|p| p.id == req.id)
                .ok_or_else(|| ServiceError::not_found("product"))?;
            product.category_id = req.category_id.clone();
            product.name = req.name.clone();
            product.description = req.description.clone();
            product.image_url = req.image_url.clone();
            product.price = req.price;
            product.stock = req.stock;
            Ok(UpsertProductResponse { id: product.id.clone() })
        }

        async fn update_product_stock(&self, req: &UpdateProductStockRequest) -> Result<(), ServiceError> {
            let mut state = self.state()?;
            // Check every line before touching anything so a bad line leaves stock as it was.
            let mut positions = Vec::with_capacity(req.items.len());
            let mut pending: HashMap<usize, i32> = HashMap::new();
            for item in &req.items {
                if item.quantity <= 0 {
                    return Err(ServiceError::Validation(format!(
                        "quantity for product {} must be > 0",
                        item.product_id
                    )));
                }
                let idx = state
                    .products
                    .iter()
                    .position(|p| p.id == item.product_id)
                    .ok_or_else(|| ServiceError::not_found("product"))?;
                let taken = pending.entry(idx).or_insert(0);
                *taken = taken.saturating_add(item.quantity);
                if *taken > state.products[idx].stock {
                    return Err(ServiceError::Validation(format!(
                        "insufficient stock for product {}",
                        item.product_id
                    )));
                }
                positions.push((idx, item.quantity));
            }
            for (idx, quantity) in positions {
                state.products[idx].stock -= quantity;
            }
            Ok(())
        }

        async fn delete_product(&self, req: &DeleteProductRequest) -> Result<(), ServiceError> {
            let mut state = self.state()?;
            let idx = state
                .products
                .iter()
                .position(|p| p.id == req.product_id)
                .ok_or_else(|| ServiceError::not_found("product"))?;
            state.products.remove(idx);
            Ok(())
        }

        async fn is_shop_owner(&self, user_id: &str, shop_id: &str) -> Result<bool, ServiceError> {
            let state = self.state()?;
            Ok(state.shops.get(shop_id).is_some_and(|owner| owner == user_id))
        }

        async fn is_product_owner(&self, user_id: &str, product_id: &str) -> Result<bool, ServiceError> {
            let state = self.state()?;
            let owned = state
                .products
                .iter()
                .find(|p| p.id == product_id)
                .and_then(|p| state.shops.get(&p.shop_id))
                .is_some_and(|owner| owner == user_id);
            Ok(owned)
        }
    }

}
