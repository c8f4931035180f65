//! Jobhub engine: remote listing retrieval and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_records, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ListingFetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, MountId};
