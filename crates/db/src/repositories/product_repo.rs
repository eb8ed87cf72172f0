//! Repository for the `products` table.

use storefront_core::types::DbId;

use crate::error::{store_failure, StoreError};
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, image_url, created_at";

/// Provides CRUD operations for products.
///
/// Holds its own handle to the pool; each call checks a connection out for
/// the duration of a single statement.
#[derive(Debug, Clone)]
pub struct ProductRepo {
    pool: DbPool,
}

impl ProductRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new product, returning the created row with its generated
    /// `id` and `created_at`.
    pub async fn create(&self, input: &CreateProduct) -> Result<Product, StoreError> {
        let query = format!(
            "INSERT INTO products (name, description, price, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .fetch_one(&self.pool)
            .await
            .map_err(store_failure("create"))
    }

    /// List every product in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(store_failure("find_all"))
    }

    /// Find a product by its ID.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_failure("find_by_id"))
    }

    /// Overwrite `name`, `description` and `price` of a product.
    ///
    /// Returns `true` if exactly one row was updated, `false` if no product
    /// has the given `id`.
    pub async fn update(&self, id: DbId, input: &UpdateProduct) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE products SET name = $2, description = $3, price = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .execute(&self.pool)
        .await
        .map_err(store_failure("update"))?;
        Ok(result.rows_affected() == 1)
    }

    /// Permanently delete a product. Returns `true` if a row was removed.
    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_failure("delete"))?;
        Ok(result.rows_affected() == 1)
    }
}
