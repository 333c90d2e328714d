pub mod client;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod provider;

pub use client::ResortApiClient;
pub use error::{ErrorKind, ResortsError};
pub use fallback::{fallback_resorts, merge_datasets};
pub use normalize::{normalize_payload, normalize_resort};
pub use provider::{ProviderSnapshot, ProviderStatus, ResortProvider, FALLBACK_ERROR_MESSAGE};
