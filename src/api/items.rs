use crate::errors::ItemError;
use crate::stores::ItemStore;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::items::{
    CreateItemApiResponse, CreateItemRequest, CreateItemSuccess, ItemResponse, UpdateItemRequest,
    ValidationFailure,
};
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

/// Item management API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given ItemStore
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List items, optionally sorted by one attribute and truncated
    ///
    /// Unrecognized `sortBy` values are ignored rather than rejected.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_items(
        &self,
        #[oai(name = "sortBy")] sort_by: Query<Option<String>>,
        count: Query<Option<u64>>,
    ) -> Result<Json<Vec<ItemResponse>>, ItemError> {
        let items = self
            .item_store
            .list(sort_by.0.as_deref(), count.0)
            .await
            .map_err(ItemError::from_internal_error)?;

        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }

    /// Fetch a single item
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i32>) -> Result<Json<ItemResponse>, ItemError> {
        let item = self
            .item_store
            .find(id.0)
            .await
            .map_err(ItemError::from_internal_error)?
            .ok_or_else(ItemError::not_found)?;

        Ok(Json(item.into()))
    }

    /// Create a new item
    ///
    /// All validation problems are collected and returned together in a
    /// 200 body; a 201 with the persisted record is returned on success.
    /// The id pre-check and the insert are separate statements - a
    /// concurrent create that wins the window is caught by the store's
    /// primary-key constraint and reported as a 400 conflict.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemApiResponse, ItemError> {
        let mut errors = Vec::new();

        let name = body.0.name.clone();
        if name.is_none() {
            errors.push("Name field is required.".to_string());
        }

        match body.0.stock {
            None => errors.push("Stock field is required.".to_string()),
            Some(stock) if stock < 0 => {
                errors.push("Stock must be a non-negative integer.".to_string())
            }
            _ => {}
        }

        if let Some(id) = body.0.id {
            let taken = self
                .item_store
                .exists(id)
                .await
                .map_err(ItemError::from_internal_error)?;
            if taken {
                errors.push(format!("Item with ID {} already exists.", id));
            }
        }

        if let (true, Some(name), Some(stock)) = (errors.is_empty(), name, body.0.stock) {
            let created = self
                .item_store
                .insert(body.0.id, name, stock)
                .await
                .map_err(ItemError::from_internal_error)?;

            return Ok(CreateItemApiResponse::Created(Json(CreateItemSuccess {
                status: "success".to_string(),
                message: "Item created successfully".to_string(),
                data: created.into(),
            })));
        }

        Ok(CreateItemApiResponse::ValidationFailed(Json(
            ValidationFailure::new(errors),
        )))
    }

    /// Partially update an item
    ///
    /// Unlike creation this endpoint fails hard on the first problem:
    /// 404 when the target is missing, 400 when a requested id is taken.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<i32>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemError> {
        let existing = self
            .item_store
            .find(id.0)
            .await
            .map_err(ItemError::from_internal_error)?
            .ok_or_else(ItemError::not_found)?;

        // Reassigning the id requires the new one to be free
        let new_id = body.0.id.filter(|&candidate| candidate != existing.id);
        if let Some(new_id) = new_id {
            let taken = self
                .item_store
                .exists(new_id)
                .await
                .map_err(ItemError::from_internal_error)?;
            if taken {
                return Err(ItemError::id_conflict());
            }
        }

        // Empty names do not overwrite; stock overwrites whenever present,
        // with no negativity re-check
        let name = body.0.name.clone().filter(|n| !n.is_empty());
        let updated = self
            .item_store
            .update(existing.id, new_id, name, body.0.stock)
            .await
            .map_err(ItemError::from_internal_error)?;

        Ok(Json(updated.into()))
    }

    /// Delete an item
    ///
    /// Never fails: deleting an absent item is a 200 with an explanatory
    /// message, so repeated deletes converge on the same response.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<i32>) -> Result<Json<MessageResponse>, ItemError> {
        let removed = self
            .item_store
            .delete(id.0)
            .await
            .map_err(ItemError::from_internal_error)?;

        let message = if removed {
            format!("Item with ID {} has been successfully deleted.", id.0)
        } else {
            format!("Item with ID {} not found. No deletion performed.", id.0)
        };

        Ok(Json(MessageResponse { message }))
    }
}
