pub mod error;

pub use error::{ApiError, ErrorResponse};

// Re-export HTTP traits from barista_core for convenience
pub use barista_core::{ApiResponseBuilder, ApiResponseHelpers, AuthRequest};
