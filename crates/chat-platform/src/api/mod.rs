pub mod rag_client;

pub use rag_client::{timed_roundtrip, with_timeout, RagApiClient};
