use crate::errors::ItemError;
use crate::stores::ItemStore;
use crate::types::dto::common::MessageResponse;
use poem_openapi::auth::ApiKey;
use poem_openapi::param::Path;
use poem_openapi::{payload::Json, OpenApi, SecurityScheme, Tags};
use std::sync::Arc;

/// Shared-secret header gating the admin delete
///
/// A request without the header never reaches the handler - the scheme
/// itself rejects it with a 401.
#[derive(SecurityScheme)]
#[oai(ty = "api_key", key_name = "X-Admin-Password", key_in = "header")]
pub struct AdminPasswordAuth(pub ApiKey);

/// Admin API endpoints
pub struct AdminApi {
    item_store: Arc<ItemStore>,
    admin_password: String,
}

impl AdminApi {
    /// Create a new AdminApi with the given ItemStore and configured secret
    pub fn new(item_store: Arc<ItemStore>, admin_password: String) -> Self {
        Self {
            item_store,
            admin_password,
        }
    }
}

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// Password-gated destructive operations
    Admin,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// Delete an item, gated by the admin password header
    ///
    /// The gate runs before any deletion logic; past it, behavior is
    /// identical to the ungated delete, including the soft "not found"
    /// outcome.
    #[oai(path = "/items/:id", method = "delete", tag = "AdminTags::Admin")]
    async fn admin_delete_item(
        &self,
        auth: AdminPasswordAuth,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, ItemError> {
        if auth.0.key != self.admin_password {
            return Err(ItemError::unauthorized());
        }

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
