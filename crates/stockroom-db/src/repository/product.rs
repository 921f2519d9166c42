//! # Product Repository
//!
//! Database operations for products: CRUD plus the filtered search backing
//! report generation.
//!
//! ## Case Folding in Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    list / get_by_id                                     │
//! │  SELECT manufacturer, sku, productName        → original case           │
//! │                                                                         │
//! │                    search                                               │
//! │  SELECT LOWER(manufacturer), LOWER(sku),                                │
//! │         LOWER(productName)                    → folded to lower case    │
//! │                                                                         │
//! │  The report renders search results case-insensitively, so the search   │
//! │  SELECT folds those three columns. The asymmetry is deliberate and     │
//! │  must be preserved.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;
use crate::query::SearchQuery;
use stockroom_core::{Product, ReportFilter};

/// Repository for product database operations.
///
/// Stateless façade over the storage gateway: it owns no data, and every
/// statement inherits the gateway's per-call deadline.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let all = repo.list().await?;
/// let one = repo.get_by_id(5).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Gets a product by its identifier.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No such row (a first-class outcome, not an error)
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = self
            .db
            .fetch_optional(
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT
                        productId AS product_id,
                        manufacturer,
                        sku,
                        upc,
                        pricePerUnit AS price_per_unit,
                        quantityOnHand AS quantity_on_hand,
                        productName AS product_name
                    FROM products
                    WHERE productId = ?1
                    "#,
                )
                .bind(id),
            )
            .await?;

        Ok(product)
    }

    /// Lists all products.
    ///
    /// An empty table yields an empty vector, never an error or absence.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = self
            .db
            .fetch_all(sqlx::query_as::<_, Product>(
                r#"
                SELECT
                    productId AS product_id,
                    manufacturer,
                    sku,
                    upc,
                    pricePerUnit AS price_per_unit,
                    quantityOnHand AS quantity_on_hand,
                    productName AS product_name
                FROM products
                "#,
            ))
            .await?;

        Ok(products)
    }

    /// Searches products with the report filter.
    ///
    /// Present filters combine with AND as case-insensitive substring
    /// matches (see [`SearchQuery`]); an all-empty filter matches every
    /// row. Name, manufacturer, and SKU come back lower-cased for the
    /// report's case-insensitive rendering.
    pub async fn search(&self, filter: &ReportFilter) -> DbResult<Vec<Product>> {
        let search = SearchQuery::from_filter(filter);

        debug!(predicate = %search.predicate(), "Searching products");

        let sql = format!(
            r#"
            SELECT
                productId AS product_id,
                LOWER(manufacturer) AS manufacturer,
                LOWER(sku) AS sku,
                upc,
                pricePerUnit AS price_per_unit,
                quantityOnHand AS quantity_on_hand,
                LOWER(productName) AS product_name
            FROM products
            WHERE {}
            "#,
            search.predicate()
        );

        let mut query = sqlx::query_as::<_, Product>(&sql);
        for param in search.params() {
            query = query.bind(param.as_str());
        }

        let products = self.db.fetch_all(query).await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Inserts a new product and returns the assigned identifier.
    ///
    /// The payload's own identifier is ignored here; the handler layer has
    /// already rejected non-zero ids before this point.
    pub async fn insert(&self, product: &Product) -> DbResult<i64> {
        debug!(sku = %product.sku, "Inserting product");

        let result = self
            .db
            .execute(
                sqlx::query(
                    r#"
                    INSERT INTO products (
                        manufacturer, sku, upc,
                        pricePerUnit, quantityOnHand, productName
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    "#,
                )
                .bind(&product.manufacturer)
                .bind(&product.sku)
                .bind(&product.upc)
                .bind(product.price_per_unit)
                .bind(product.quantity_on_hand)
                .bind(&product.product_name),
            )
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces every column of the row identified by the payload's id.
    ///
    /// Full replace, last write wins: there is no optimistic-concurrency
    /// check, and replacing an absent id is a no-op success.
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.product_id, "Updating product");

        self.db
            .execute(
                sqlx::query(
                    r#"
                    UPDATE products SET
                        manufacturer = ?2,
                        sku = ?3,
                        upc = ?4,
                        pricePerUnit = ?5,
                        quantityOnHand = ?6,
                        productName = ?7
                    WHERE productId = ?1
                    "#,
                )
                .bind(product.product_id)
                .bind(&product.manufacturer)
                .bind(&product.sku)
                .bind(&product.upc)
                .bind(product.price_per_unit)
                .bind(product.quantity_on_hand)
                .bind(&product.product_name),
            )
            .await?;

        Ok(())
    }

    /// Deletes the row with the given identifier.
    ///
    /// Idempotent: deleting an id that never existed (or was already
    /// deleted) succeeds the same way.
    pub async fn remove(&self, id: i64) -> DbResult<()> {
        debug!(id, "Removing product");

        self.db
            .execute(sqlx::query("DELETE FROM products WHERE productId = ?1").bind(id))
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    async fn test_repo() -> ProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    fn anvil() -> Product {
        Product {
            product_id: 0,
            manufacturer: "Acme".to_string(),
            sku: "ACM-001".to_string(),
            upc: "012345678905".to_string(),
            price_per_unit: 9.99,
            quantity_on_hand: 42,
            product_name: "Anvil".to_string(),
        }
    }

    fn rocket_skates() -> Product {
        Product {
            product_id: 0,
            manufacturer: "Acme".to_string(),
            sku: "ACM-002".to_string(),
            upc: "012345678912".to_string(),
            price_per_unit: 149.5,
            quantity_on_hand: 3,
            product_name: "Rocket Skates".to_string(),
        }
    }

    fn sprocket() -> Product {
        Product {
            product_id: 0,
            manufacturer: "Globex".to_string(),
            sku: "GLX-100".to_string(),
            upc: "044000012345".to_string(),
            price_per_unit: 1.25,
            quantity_on_hand: 900,
            product_name: "Sprocket".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_empty_table_returns_empty_vec() {
        let repo = test_repo().await;
        let products = repo.list().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_insert_then_get_roundtrip() {
        let repo = test_repo().await;

        let new_id = repo.insert(&anvil()).await.unwrap();
        assert!(new_id > 0);

        let stored = repo.get_by_id(new_id).await.unwrap().unwrap();
        let mut expected = anvil();
        expected.product_id = new_id;
        assert_eq!(stored, expected);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = test_repo().await;
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let repo = test_repo().await;
        let id = repo.insert(&anvil()).await.unwrap();

        let replacement = Product {
            product_id: id,
            manufacturer: "Globex".to_string(),
            sku: "GLX-777".to_string(),
            upc: "000000000000".to_string(),
            price_per_unit: 0.5,
            quantity_on_hand: -4,
            product_name: "Left-Handed Anvil".to_string(),
        };
        repo.update(&replacement).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored, replacement);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let repo = test_repo().await;
        let id = repo.insert(&anvil()).await.unwrap();

        repo.remove(id).await.unwrap();
        assert!(repo.get_by_id(id).await.unwrap().is_none());

        // Second delete of the same id succeeds identically
        repo.remove(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_insensitive() {
        let repo = test_repo().await;
        repo.insert(&anvil()).await.unwrap();
        repo.insert(&rocket_skates()).await.unwrap();
        repo.insert(&sprocket()).await.unwrap();

        let filter = ReportFilter {
            name: "ANVIL".to_string(),
            ..Default::default()
        };
        let results = repo.search(&filter).await.unwrap();

        assert_eq!(results.len(), 1);
        // Search folds name/manufacturer/sku to lower case
        assert_eq!(results[0].product_name, "anvil");
        assert_eq!(results[0].manufacturer, "acme");
        assert_eq!(results[0].sku, "acm-001");
        // UPC is not folded
        assert_eq!(results[0].upc, "012345678905");
    }

    #[tokio::test]
    async fn test_search_filters_combine_with_and() {
        let repo = test_repo().await;
        repo.insert(&anvil()).await.unwrap();
        repo.insert(&rocket_skates()).await.unwrap();
        repo.insert(&sprocket()).await.unwrap();

        // "acme" matches two rows; adding the sku filter narrows to one
        let filter = ReportFilter {
            manufacturer: "acme".to_string(),
            sku: "002".to_string(),
            ..Default::default()
        };
        let results = repo.search(&filter).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product_name, "rocket skates");
    }

    #[tokio::test]
    async fn test_search_empty_filter_matches_everything() {
        let repo = test_repo().await;
        repo.insert(&anvil()).await.unwrap();
        repo.insert(&rocket_skates()).await.unwrap();
        repo.insert(&sprocket()).await.unwrap();

        let results = repo.search(&ReportFilter::default()).await.unwrap();
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_search_no_match_returns_empty() {
        let repo = test_repo().await;
        repo.insert(&anvil()).await.unwrap();

        let filter = ReportFilter {
            name: "widget".to_string(),
            ..Default::default()
        };
        let results = repo.search(&filter).await.unwrap();
        assert!(results.is_empty());
    }
}
