use crate::types::dto::common::{HealthResponse, ServiceInfoResponse};
use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

/// Service banner and health API
pub struct RootApi;

/// API tags for service-level endpoints
#[derive(Tags)]
enum RootTags {
    /// Service information endpoints
    Service,
}

#[OpenApi]
impl RootApi {
    /// Service banner
    #[oai(path = "/", method = "get", tag = "RootTags::Service")]
    async fn index(&self) -> Json<ServiceInfoResponse> {
        Json(ServiceInfoResponse {
            message: "Welcome! You can use this API to check clothing stock.".to_string(),
            docs: "/swagger".to_string(),
        })
    }

    /// Health check endpoint
    #[oai(path = "/health", method = "get", tag = "RootTags::Service")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
