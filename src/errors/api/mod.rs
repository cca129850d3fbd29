// API-facing error enums, one per endpoint group
pub mod items;
pub mod upload;

pub use items::ItemError;
pub use upload::UploadError;
