//! Classification and inventory browsing/management.
//!
//! Same two-shape surface as the account store: plain methods collapse
//! failures into sentinels (`None` / empty `Vec`) after reporting them to
//! the diagnostics sink, `try_*` methods keep the failure. Sequence reads
//! always return a `Vec`, empty on failure as well as on zero matches.

use std::sync::Arc;

use sqlx::PgPool;

use crate::diag::{Diagnostics, TracingDiagnostics};
use crate::error::StoreResult;
use crate::models::{ClassificationModel, InventoryDetail, InventoryModel, NewInventory};

// Joined projection shared by the inventory reads. inv_price is numeric in
// the schema and has to come back as float8 for FromRow.
const INVENTORY_DETAIL_COLUMNS: &str = "i.inv_id, i.inv_make, i.inv_model, i.inv_description, \
     i.inv_image, i.inv_thumbnail, i.inv_price::float8 AS inv_price, \
     i.inv_year, i.inv_miles, i.inv_color, i.classification_id, \
     c.classification_name";

const INVENTORY_RETURNING_COLUMNS: &str = "inv_id, inv_make, inv_model, inv_description, \
     inv_image, inv_thumbnail, inv_price::float8 AS inv_price, \
     inv_year, inv_miles, inv_color, classification_id";

pub struct InventoryStore {
    pool: PgPool,
    diag: Arc<dyn Diagnostics>,
}

impl InventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_diagnostics(pool, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(pool: PgPool, diag: Arc<dyn Diagnostics>) -> Self {
        Self { pool, diag }
    }

    /// All classifications, ordered by name ascending. Empty on failure.
    pub async fn get_classifications(&self) -> Vec<ClassificationModel> {
        match self.try_get_classifications().await {
            Ok(classifications) => classifications,
            Err(e) => {
                self.diag.store_error("get_classifications", &e);
                Vec::new()
            }
        }
    }

    pub async fn try_get_classifications(&self) -> StoreResult<Vec<ClassificationModel>> {
        let classifications = sqlx::query_as(
            "SELECT classification_id, classification_name \
             FROM classification ORDER BY classification_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(classifications)
    }

    /// Every inventory item under `classification_id`, joined with its
    /// classification. Empty when the classification has no items, does not
    /// exist, or on failure.
    pub async fn get_inventory_by_classification_id(
        &self,
        classification_id: i32,
    ) -> Vec<InventoryDetail> {
        match self
            .try_get_inventory_by_classification_id(classification_id)
            .await
        {
            Ok(items) => items,
            Err(e) => {
                self.diag.store_error("get_inventory_by_classification_id", &e);
                Vec::new()
            }
        }
    }

    pub async fn try_get_inventory_by_classification_id(
        &self,
        classification_id: i32,
    ) -> StoreResult<Vec<InventoryDetail>> {
        let items = sqlx::query_as(&format!(
            "SELECT {INVENTORY_DETAIL_COLUMNS} \
             FROM inventory AS i \
             JOIN classification AS c ON i.classification_id = c.classification_id \
             WHERE i.classification_id = $1",
        ))
        .bind(classification_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Single joined inventory item, or `None` when absent or on failure.
    pub async fn get_inventory_by_id(&self, inv_id: i32) -> Option<InventoryDetail> {
        match self.try_get_inventory_by_id(inv_id).await {
            Ok(found) => found,
            Err(e) => {
                self.diag.store_error("get_inventory_by_id", &e);
                None
            }
        }
    }

    pub async fn try_get_inventory_by_id(
        &self,
        inv_id: i32,
    ) -> StoreResult<Option<InventoryDetail>> {
        let item = sqlx::query_as(&format!(
            "SELECT {INVENTORY_DETAIL_COLUMNS} \
             FROM inventory AS i \
             JOIN classification AS c ON i.classification_id = c.classification_id \
             WHERE i.inv_id = $1",
        ))
        .bind(inv_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    /// Inserts a classification and returns the new row. `None` on failure.
    pub async fn add_classification(&self, name: &str) -> Option<ClassificationModel> {
        match self.try_add_classification(name).await {
            Ok(classification) => Some(classification),
            Err(e) => {
                self.diag.store_error("add_classification", &e);
                None
            }
        }
    }

    pub async fn try_add_classification(&self, name: &str) -> StoreResult<ClassificationModel> {
        let classification = sqlx::query_as(
            "INSERT INTO classification (classification_name) VALUES ($1) \
             RETURNING classification_id, classification_name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(classification)
    }

    /// Inserts an inventory item and returns the created row. `None` on
    /// failure, including a classification_id the schema rejects.
    pub async fn add_inventory(&self, new: &NewInventory) -> Option<InventoryModel> {
        match self.try_add_inventory(new).await {
            Ok(item) => Some(item),
            Err(e) => {
                self.diag.store_error("add_inventory", &e);
                None
            }
        }
    }

    pub async fn try_add_inventory(&self, new: &NewInventory) -> StoreResult<InventoryModel> {
        let item = sqlx::query_as(&format!(
            "INSERT INTO inventory (\
             inv_make, inv_model, inv_description, inv_image, inv_thumbnail, \
             inv_price, inv_year, inv_miles, inv_color, classification_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {INVENTORY_RETURNING_COLUMNS}",
        ))
        .bind(&new.make)
        .bind(&new.model)
        .bind(&new.description)
        .bind(&new.image)
        .bind(&new.thumbnail)
        .bind(new.price)
        .bind(new.year)
        .bind(new.miles)
        .bind(&new.color)
        .bind(new.classification_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    /// Replaces every mutable column of the item at `inv_id` and returns the
    /// updated row. `None` when the id does not exist or on failure.
    pub async fn update_inventory(
        &self,
        inv_id: i32,
        changes: &NewInventory,
    ) -> Option<InventoryModel> {
        match self.try_update_inventory(inv_id, changes).await {
            Ok(updated) => updated,
            Err(e) => {
                self.diag.store_error("update_inventory", &e);
                None
            }
        }
    }

    pub async fn try_update_inventory(
        &self,
        inv_id: i32,
        changes: &NewInventory,
    ) -> StoreResult<Option<InventoryModel>> {
        let item = sqlx::query_as(&format!(
            "UPDATE inventory SET \
             inv_make = $1, inv_model = $2, inv_description = $3, \
             inv_image = $4, inv_thumbnail = $5, inv_price = $6, \
             inv_year = $7, inv_miles = $8, inv_color = $9, \
             classification_id = $10 \
             WHERE inv_id = $11 \
             RETURNING {INVENTORY_RETURNING_COLUMNS}",
        ))
        .bind(&changes.make)
        .bind(&changes.model)
        .bind(&changes.description)
        .bind(&changes.image)
        .bind(&changes.thumbnail)
        .bind(changes.price)
        .bind(changes.year)
        .bind(changes.miles)
        .bind(&changes.color)
        .bind(changes.classification_id)
        .bind(inv_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::RecordingDiagnostics;
    use crate::test_support::unreachable_pool;

    fn sample_inventory(classification_id: i32) -> NewInventory {
        NewInventory {
            make: "GM".to_string(),
            model: "Hummer".to_string(),
            description: "Do you have 6 kids and like to go offroading?".to_string(),
            image: "/images/vehicles/hummer.jpg".to_string(),
            thumbnail: "/images/vehicles/hummer-tn.jpg".to_string(),
            price: 58800.0,
            year: 2016,
            miles: 56564,
            color: "Yellow".to_string(),
            classification_id,
        }
    }

    #[tokio::test]
    async fn sequence_reads_collapse_failure_to_empty() {
        let diag = Arc::new(RecordingDiagnostics::default());
        let store = InventoryStore::with_diagnostics(unreachable_pool(), diag.clone());

        assert!(store.get_classifications().await.is_empty());
        assert!(store.get_inventory_by_classification_id(1).await.is_empty());
        assert_eq!(
            diag.operations(),
            vec!["get_classifications", "get_inventory_by_classification_id"]
        );
    }

    #[tokio::test]
    async fn single_reads_collapse_failure_to_none() {
        let diag = Arc::new(RecordingDiagnostics::default());
        let store = InventoryStore::with_diagnostics(unreachable_pool(), diag.clone());

        assert!(store.get_inventory_by_id(1).await.is_none());
        assert_eq!(diag.operations(), vec!["get_inventory_by_id"]);
    }

    #[tokio::test]
    async fn writes_collapse_failure_to_none() {
        let diag = Arc::new(RecordingDiagnostics::default());
        let store = InventoryStore::with_diagnostics(unreachable_pool(), diag.clone());

        assert!(store.add_classification("SUV").await.is_none());
        assert!(store.add_inventory(&sample_inventory(1)).await.is_none());
        assert!(store.update_inventory(1, &sample_inventory(1)).await.is_none());
        assert_eq!(
            diag.operations(),
            vec!["add_classification", "add_inventory", "update_inventory"]
        );
    }

    #[tokio::test]
    async fn try_surface_keeps_the_failure() {
        let store = InventoryStore::new(unreachable_pool());

        let err = store.try_get_classifications().await.unwrap_err();
        assert!(!err.is_foreign_key_violation());
    }
}
