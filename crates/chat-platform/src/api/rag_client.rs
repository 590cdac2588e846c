//! RAG backend adapter.
//!
//! Speaks the backend's small JSON API over browser `fetch()` via gloo-net.
//! Each call (request, headers and body) races one timer; on expiry the
//! fetch is aborted and the call fails with `ChatError::Timeout`.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use web_sys::{AbortController, AbortSignal};

use chat_core::ports::ChatApiPort;
use chat_types::{
    ChatError, Result,
    api::{ChatRequest, ChatResponse, ErrorBody, HealthResponse},
    config::ChatConfig,
};

pub struct RagApiClient {
    config: ChatConfig,
}

impl RagApiClient {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Send `build`'s request and hand the response to `read`, all under
    /// the configured timeout. The fetch is aborted when the timer wins.
    async fn fetch<T, B, R, Fut>(&self, build: B, read: R) -> Result<T>
    where
        B: FnOnce(Option<&AbortSignal>) -> Result<Request>,
        R: FnOnce(Response) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let abort = AbortController::new().ok();
        let request = build(abort.as_ref().map(|a| a.signal()).as_ref())?;

        let sent = async {
            request
                .send()
                .await
                .map_err(|e| ChatError::Network(e.to_string()))
        };

        let outcome = timed_roundtrip(sent, read, self.config.request_timeout_ms).await;
        if let (Err(ChatError::Timeout(_)), Some(abort)) = (&outcome, &abort) {
            abort.abort();
        }
        outcome
    }
}

#[async_trait(?Send)]
impl ChatApiPort for RagApiClient {
    async fn send_message(&self, req: ChatRequest) -> Result<ChatResponse> {
        let url = self.config.endpoint("/api/chat");

        self.fetch(
            |signal| {
                Request::post(&url)
                    .header("Content-Type", "application/json")
                    .abort_signal(signal)
                    .json(&req)
                    .map_err(|e| ChatError::Serialization(e.to_string()))
            },
            |response| async move {
                if !response.ok() {
                    return Err(backend_error(response).await);
                }
                response
                    .json::<ChatResponse>()
                    .await
                    .map_err(|e| ChatError::Serialization(e.to_string()))
            },
        )
        .await
    }

    async fn health(&self) -> Result<HealthResponse> {
        let url = self.config.endpoint("/api/health");

        self.fetch(
            |signal| {
                Request::get(&url)
                    .abort_signal(signal)
                    .build()
                    .map_err(|e| ChatError::Network(e.to_string()))
            },
            |response| async move {
                if !response.ok() {
                    return Err(ChatError::Backend {
                        status: response.status(),
                        detail: Some("Health check failed".to_string()),
                    });
                }
                response
                    .json::<HealthResponse>()
                    .await
                    .map_err(|e| ChatError::Serialization(e.to_string()))
            },
        )
        .await
    }

    async fn session_history(&self, session_id: &str) -> Result<Value> {
        let url = self
            .config
            .endpoint(&format!("/api/sessions/{}/history", session_id));

        self.fetch(
            |signal| {
                Request::get(&url)
                    .abort_signal(signal)
                    .build()
                    .map_err(|e| ChatError::Network(e.to_string()))
            },
            |response| async move {
                if !response.ok() {
                    return Err(ChatError::Backend {
                        status: response.status(),
                        detail: Some("Failed to get session history".to_string()),
                    });
                }
                response
                    .json::<Value>()
                    .await
                    .map_err(|e| ChatError::Serialization(e.to_string()))
            },
        )
        .await
    }
}

/// Turn a non-2xx response into `ChatError::Backend`, keeping the
/// backend's `detail` when the body carries one.
async fn backend_error(response: Response) -> ChatError {
    let status = response.status();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail_text(),
        Err(e) => {
            log::debug!("Error body for HTTP {} unreadable: {}", status, e);
            None
        }
    };
    log::error!("API error: HTTP {} ({})", status, detail.as_deref().unwrap_or("no detail"));
    ChatError::Backend { status, detail }
}

/// Await `send`, then `read` its response, failing with
/// `ChatError::Timeout` if both together take longer than `timeout_ms`.
pub async fn timed_roundtrip<Resp, T, S, R, Fut>(send: S, read: R, timeout_ms: u64) -> Result<T>
where
    S: Future<Output = Result<Resp>>,
    R: FnOnce(Resp) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    with_timeout(
        async move {
            let response = send.await?;
            read(response).await
        },
        timeout_ms,
    )
    .await
}

/// Resolve `fut`, or fail with `ChatError::Timeout` after `timeout_ms`.
pub async fn with_timeout<T, F>(fut: F, timeout_ms: u64) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let millis = u32::try_from(timeout_ms).unwrap_or(u32::MAX);
    let fut = Box::pin(fut);
    let timer = TimeoutFuture::new(millis);

    match future::select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ChatError::Timeout(timeout_ms)),
    }
}
