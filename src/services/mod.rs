pub mod error;
pub mod transport;
pub mod api_client;

#[cfg(test)]
pub mod testing;

pub use error::ApiError;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use api_client::{ApiClient, ApiResponse, RequestOptions};

#[cfg(target_arch = "wasm32")]
pub use transport::GlooTransport;
