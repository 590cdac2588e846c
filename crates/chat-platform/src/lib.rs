//! Chat platform: browser adapters for the chat-core ports.

pub mod api;
pub mod selection;
pub mod storage;
