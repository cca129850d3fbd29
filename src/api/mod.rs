// API layer - HTTP endpoints
pub mod admin;
pub mod items;
pub mod root;
pub mod upload;

pub use admin::AdminApi;
pub use items::ItemsApi;
pub use root::RootApi;
pub use upload::UploadApi;
