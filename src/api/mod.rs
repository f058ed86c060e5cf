pub mod client;
pub mod error;
pub mod http_common;
pub mod normalizer;
pub mod ports;
pub mod transport;
pub mod wire;

pub use client::ParliamentClient;
pub use error::{ApiError, ApiErrorKind, NormalizeError};
pub use normalizer::Normalizer;
pub use ports::{MotionFilter, ParliamentApi};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
