use std::sync::Arc;

use models::product::{
    CreateProductRequest, DeleteProductRequest, GetProductsRequest, GetProductsResponse,
    UpdateProductRequest, UpdateProductStockRequest, UpsertProductResponse,
};
use tracing::{debug, info, instrument, warn};

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

pub const NOT_SHOP_OWNER: &str = "User is not shop owner";
pub const NOT_PRODUCT_OWNER: &str = "User is not product owner";
pub const PRODUCTS_NOT_FOUND: &str = "Products not found";

/// Product business service independent of transport.
///
/// Mutations are gated on shop or product ownership; repository errors are
/// returned as they come. Dropping a returned future cancels the repository
/// call in flight.
pub struct ProductService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> Clone for ProductService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    /// # Examples
    /// ```
    /// use service::product::{ProductService, repository::memory::InMemoryProductRepository};
    /// use std::sync::Arc;
    /// let path = std::env::temp_dir().join(format!("catalog-{}.toml", std::process::id()));
    /// std::fs::write(&path, "[catalog]\ndefault_page_size = 20\nmax_page_size = 40\n").unwrap();
    /// std::env::set_var("CONFIG_PATH", &path);
    /// let cfg = configs::AppConfig::load_and_validate().unwrap();
    /// common::init_logging(&cfg.logging);
    /// let svc = ProductService::new(Arc::new(InMemoryProductRepository::new(cfg.catalog)));
    /// # let _ = svc;
    /// assert_eq!(cfg.catalog.max_page_size, 40);
    /// ```
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a product in a shop owned by `req.user_id`.
    ///
    /// # Examples
    /// ```
    /// use service::product::{ProductService, repository::memory::InMemoryProductRepository};
    /// use models::product::CreateProductRequest;
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryProductRepository::default());
    /// repo.register_shop("shop-1", "user-1").unwrap();
    /// let svc = ProductService::new(repo);
    /// let req = CreateProductRequest {
    ///     user_id: "user-1".into(), shop_id: "shop-1".into(), category_id: "cat-1".into(),
    ///     name: "Kettle".into(), description: None, image_url: None, price: 1000.0, stock: 10,
    /// };
    /// let created = tokio_test::block_on(svc.create_product(&req)).unwrap();
    /// assert!(!created.id.is_empty());
    /// ```
    #[instrument(skip(self, req), fields(user_id = %req.user_id, shop_id = %req.shop_id))]
    pub async fn create_product(&self, req: &CreateProductRequest) -> Result<UpsertProductResponse, ServiceError> {
        let is_owner = self.repo.is_shop_owner(&req.user_id, &req.shop_id).await?;
        if !is_owner {
            warn!("create_product_denied");
            return Err(ServiceError::forbidden(NOT_SHOP_OWNER));
        }
        let created = self.repo.create_product(req).await?;
        info!(product_id = %created.id, "product_created");
        Ok(created)
    }

    /// List a shop's products; an empty page is reported as not found.
    ///
    /// # Examples
    /// ```
    /// use service::product::{ProductService, repository::memory::InMemoryProductRepository};
    /// use models::product::GetProductsRequest;
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(InMemoryProductRepository::default()));
    /// let req = GetProductsRequest { shop_id: "shop-1".into(), ..Default::default() };
    /// let err = tokio_test::block_on(svc.get_products(&req)).unwrap_err();
    /// assert_eq!(err.code(), 404);
    /// ```
    #[instrument(skip(self, req), fields(shop_id = %req.shop_id))]
    pub async fn get_products(&self, req: &GetProductsRequest) -> Result<GetProductsResponse, ServiceError> {
        let page = self.repo.get_products(req).await?;
        if page.items.is_empty() {
            debug!("products_empty");
            return Err(ServiceError::NotFound(PRODUCTS_NOT_FOUND.into()));
        }
        Ok(page)
    }

    #[instrument(skip(self, req), fields(user_id = %req.user_id, product_id = %req.id))]
    pub async fn update_product(&self, req: &UpdateProductRequest) -> Result<UpsertProductResponse, ServiceError> {
        let is_owner = self.repo.is_product_owner(&req.user_id, &req.id).await?;
        if !is_owner {
            warn!("update_product_denied");
            return Err(ServiceError::forbidden(NOT_PRODUCT_OWNER));
        }
        let updated = self.repo.update_product(req).await?;
        info!("product_updated");
        Ok(updated)
    }

    /// Bulk stock adjustment, e.g. after an order is placed. Not ownership gated.
    #[instrument(skip(self, req), fields(items = req.items.len()))]
    pub async fn update_product_stock(&self, req: &UpdateProductStockRequest) -> Result<(), ServiceError> {
        self.repo.update_product_stock(req).await?;
        info!("product_stock_updated");
        Ok(())
    }

    #[instrument(skip(self, req), fields(user_id = %req.user_id, product_id = %req.product_id))]
    pub async fn delete_product(&self, req: &DeleteProductRequest) -> Result<(), ServiceError> {
        let is_owner = self.repo.is_product_owner(&req.user_id, &req.product_id).await?;
        if !is_owner {
            warn!("delete_product_denied");
            return Err(ServiceError::forbidden(NOT_PRODUCT_OWNER));
        }
        self.repo.delete_product(req).await?;
        info!("product_deleted");
        Ok(())
    }
}
