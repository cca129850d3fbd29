use crate::errors::internal::ItemStoreError;
use crate::errors::InternalError;
use crate::types::db::item::{self, Entity as Item};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};

/// ItemStore is the only gateway to the items table
///
/// Each method runs a single statement against the shared connection pool;
/// there is deliberately no enclosing transaction across the handlers'
/// check-then-act sequences (the accepted race). The primary-key constraint
/// backstops id uniqueness: a lost race surfaces as
/// `ItemStoreError::DuplicateId` instead of a duplicate row.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List items, optionally ordered and truncated
    ///
    /// `sort_by` accepts `id`, `name` or `stock`; anything else is silently
    /// ignored and the insertion order is returned. A `count` of zero means
    /// no truncation, matching the behavior callers already depend on.
    pub async fn list(
        &self,
        sort_by: Option<&str>,
        count: Option<u64>,
    ) -> Result<Vec<item::Model>, InternalError> {
        let mut query = Item::find();

        match sort_by {
            Some("id") => query = query.order_by_asc(item::Column::Id),
            Some("name") => query = query.order_by_asc(item::Column::Name),
            Some("stock") => query = query.order_by_asc(item::Column::Stock),
            _ => {}
        }

        if let Some(count) = count.filter(|c| *c > 0) {
            query = query.limit(count);
        }

        query
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Fetch a single item by id
    pub async fn find(&self, id: i32) -> Result<Option<item::Model>, InternalError> {
        Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item", e))
    }

    /// Check whether an id is taken
    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        Ok(self.find(id).await?.is_some())
    }

    /// Persist a new item
    ///
    /// When `id` is absent the store assigns the next value. A unique
    /// violation on a client-supplied id is mapped to a typed duplicate
    /// error so the caller never sees a partial write.
    pub async fn insert(
        &self,
        id: Option<i32>,
        name: String,
        stock: i32,
    ) -> Result<item::Model, InternalError> {
        let new_item = item::ActiveModel {
            id: match id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(name),
            stock: Set(stock),
        };

        new_item.insert(&self.db).await.map_err(|e| {
            match (e.sql_err(), id) {
                (Some(SqlErr::UniqueConstraintViolation(_)), Some(id)) => {
                    ItemStoreError::DuplicateId(id).into()
                }
                _ => InternalError::database("insert_item", e),
            }
        })
    }

    /// Apply a partial update to the row currently holding `current_id`
    ///
    /// Absent fields stay untouched. `new_id` moves the row to a different
    /// id; the unique violation raised when that id is concurrently taken
    /// comes back as `DuplicateId`. Returns the row as persisted.
    pub async fn update(
        &self,
        current_id: i32,
        new_id: Option<i32>,
        name: Option<String>,
        stock: Option<i32>,
    ) -> Result<item::Model, InternalError> {
        let target_id = new_id.unwrap_or(current_id);

        if new_id.is_none() && name.is_none() && stock.is_none() {
            // Nothing to write; hand back the current row
            return self
                .find(current_id)
                .await?
                .ok_or_else(|| ItemStoreError::Vanished(current_id).into());
        }

        let mut query = Item::update_many().filter(item::Column::Id.eq(current_id));
        if let Some(id) = new_id {
            query = query.col_expr(item::Column::Id, Expr::value(id));
        }
        if let Some(name) = name {
            query = query.col_expr(item::Column::Name, Expr::value(name));
        }
        if let Some(stock) = stock {
            query = query.col_expr(item::Column::Stock, Expr::value(stock));
        }

        let result = query.exec(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                InternalError::from(ItemStoreError::DuplicateId(target_id))
            }
            _ => InternalError::database("update_item", e),
        })?;

        if result.rows_affected == 0 {
            return Err(ItemStoreError::Vanished(current_id).into());
        }

        self.find(target_id)
            .await?
            .ok_or_else(|| ItemStoreError::Vanished(target_id).into())
    }

    /// Remove an item, reporting whether a row was actually deleted
    pub async fn delete(&self, id: i32) -> Result<bool, InternalError> {
        let result = Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(result.rows_affected > 0)
    }
}
