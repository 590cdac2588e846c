//! WASM-target tests for chat-platform (Node.js runtime).
//!
//! Tests MemoryStorage, the storage fallback, SessionStore over a real
//! adapter, and the request timeout under wasm32-unknown-unknown via
//! `wasm-pack test --node`.
//!
//! localStorage and DOM selection need a browser window; in Node they must
//! report themselves unavailable.

use wasm_bindgen_test::*;

use chat_core::controller::ChatController;
use chat_core::event_bus::EventBus;
use chat_core::ports::{SelectionSource, StoragePort};
use chat_core::store::SessionStore;
use chat_platform::api::{timed_roundtrip, with_timeout};
use chat_platform::selection::{DomSelection, SelectionListener};
use chat_platform::storage::{auto_detect_storage, LocalStorage, MemoryStorage};
use chat_types::config::{ChatConfig, SESSION_STORAGE_KEY};
use chat_types::message::Message;
use chat_types::session::Session;
use chat_types::ChatError;
use std::rc::Rc;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.get("nonexistent").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_storage_set_get_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", "v1").unwrap();
    storage.set("key", "v2").unwrap();
    assert_eq!(storage.get("key").unwrap().as_deref(), Some("v2"));
}

#[wasm_bindgen_test]
fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", "val").unwrap();
    storage.delete("key").unwrap();
    storage.delete("nonexistent").unwrap();
    assert!(storage.get("key").unwrap().is_none());
}

// ─── Fallbacks outside a browser window ──────────────────

#[wasm_bindgen_test]
fn local_storage_unavailable_in_node() {
    assert!(matches!(LocalStorage::open(), Err(ChatError::Storage(_))));
}

#[wasm_bindgen_test]
fn auto_detect_falls_back_to_memory() {
    let storage = auto_detect_storage();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn dom_selection_absent_in_node() {
    assert!(DomSelection.current_selection().is_none());
    assert!(matches!(
        SelectionListener::attach(|_| {}),
        Err(ChatError::JsInterop(_))
    ));
}

// ─── SessionStore over MemoryStorage ─────────────────────

#[wasm_bindgen_test]
fn session_store_roundtrip() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone(), SESSION_STORAGE_KEY);
    let session = Session {
        session_id: Some("abc".to_string()),
        messages: vec![Message::user("m1"), Message::assistant("m2", vec![])],
    };
    store.save(&session).unwrap();
    assert_eq!(store.load(), Some(session));

    store.clear().unwrap();
    assert!(storage.get(SESSION_STORAGE_KEY).unwrap().is_none());
}

#[wasm_bindgen_test]
fn controller_hydrates_from_memory_storage() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"sessionId":"abc","messages":[{"role":"user","content":"m1"}]}"#,
        )
        .unwrap();

    let store = SessionStore::new(storage, SESSION_STORAGE_KEY);
    let ctrl = ChatController::new(ChatConfig::default(), store, EventBus::new());
    assert_eq!(ctrl.session().session_id.as_deref(), Some("abc"));
    assert_eq!(ctrl.session().messages, vec![Message::user("m1")]);
}

// ─── API client ──────────────────────────────────────────

#[wasm_bindgen_test]
async fn timeout_passes_through_ready_result() {
    let result = with_timeout(async { Ok::<_, ChatError>(7) }, 1_000).await;
    assert_eq!(result, Ok(7));
}

#[wasm_bindgen_test]
async fn timeout_fires_on_stalled_future() {
    let result = with_timeout(futures::future::pending::<chat_types::Result<()>>(), 10).await;
    assert_eq!(result, Err(ChatError::Timeout(10)));
}

#[wasm_bindgen_test]
async fn roundtrip_reads_response_within_deadline() {
    let result = timed_roundtrip(
        async { Ok::<_, ChatError>("headers") },
        |headers| async move { Ok(format!("{} + body", headers)) },
        1_000,
    )
    .await;
    assert_eq!(result.as_deref(), Ok("headers + body"));
}

#[wasm_bindgen_test]
async fn roundtrip_times_out_on_stalled_body() {
    // Headers arrive at once, the body never does
    let result = timed_roundtrip(
        async { Ok::<_, ChatError>(()) },
        |()| futures::future::pending::<chat_types::Result<String>>(),
        10,
    )
    .await;
    assert_eq!(result, Err(ChatError::Timeout(10)));
}

#[wasm_bindgen_test]
async fn roundtrip_skips_read_when_send_fails() {
    let result = timed_roundtrip(
        async { Err::<(), _>(ChatError::Network("offline".to_string())) },
        |()| async { Ok::<_, ChatError>(1) },
        1_000,
    )
    .await;
    assert_eq!(result, Err(ChatError::Network("offline".to_string())));
}
