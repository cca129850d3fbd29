// Services layer - Domain logic outside the store
pub mod file_service;

pub use file_service::FileService;
