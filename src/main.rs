use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use stockcheck_backend::api::{AdminApi, ItemsApi, RootApi, UploadApi};
use stockcheck_backend::config::{self, BootstrapSettings};
use stockcheck_backend::services::FileService;
use stockcheck_backend::stores::ItemStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = config::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Configuration is read exactly once; a missing DATABASE_URL is fatal
    let settings = BootstrapSettings::from_env().expect("Failed to load configuration");

    let db: DatabaseConnection = Database::connect(settings.database_url())
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url());

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    let item_store = Arc::new(ItemStore::new(db));
    let file_service = Arc::new(FileService::new(settings.upload_dir()));

    let items_api = ItemsApi::new(item_store.clone());
    let admin_api = AdminApi::new(item_store, settings.admin_password().to_string());
    let upload_api = UploadApi::new(file_service);

    // Create OpenAPI service with API implementation
    let api_service = OpenApiService::new(
        (RootApi, items_api, upload_api, admin_api),
        "Stockcheck API",
        "1.0.0",
    )
    .server(format!("http://{}", settings.server_address()));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/swagger", ui).nest("/", api_service);

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!(
        "Swagger UI available at http://{}/swagger",
        settings.server_address()
    );

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await
}
