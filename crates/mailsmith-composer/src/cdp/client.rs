//! CDP WebSocket client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, trace, warn};

use super::error::CdpError;
use super::page::PageSession;
use super::protocol::{BrowserVersion, CdpCommand, CdpEvent, CdpMessage, PageInfo};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
pub(crate) type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

pub(crate) type PendingMap = Arc<Mutex<HashMap<u64, oneshot::Sender<Result<Value, CdpError>>>>>;
type EventRoutes = Arc<Mutex<HashMap<String, mpsc::UnboundedSender<CdpEvent>>>>;

/// How long a single CDP command may stay unanswered.
pub(crate) const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Client connected to a browser's debugging endpoint.
pub struct CdpClient {
    http_endpoint: String,
    http: reqwest::Client,
    ws_tx: Arc<tokio::sync::Mutex<WsSink>>,
    request_id: Arc<AtomicU64>,
    pending: PendingMap,
    event_routes: EventRoutes,
    _recv_task: tokio::task::JoinHandle<()>,
}

impl CdpClient {
    /// Connect to a browser at the given debugging endpoint
    /// (e.g. `http://localhost:9222`).
    pub async fn connect(endpoint: &str) -> Result<Self, CdpError> {
        let http_endpoint = endpoint.trim_end_matches('/').to_string();
        let http = reqwest::Client::new();

        let version: BrowserVersion = http
            .get(format!("{http_endpoint}/json/version"))
            .send()
            .await
            .map_err(|e| CdpError::BrowserUnavailable(format!("{endpoint}: {e}")))?
            .json()
            .await
            .map_err(|e| CdpError::BrowserUnavailable(format!("{endpoint}: {e}")))?;

        debug!(browser = %version.browser, "discovered browser");

        let (ws_stream, _) = tokio_tungstenite::connect_async(&version.web_socket_debugger_url)
            .await
            .map_err(|e| CdpError::ConnectionFailed(e.to_string()))?;
        let (ws_sink, ws_source) = ws_stream.split();

        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let event_routes: EventRoutes = Arc::new(Mutex::new(HashMap::new()));

        let recv_task = {
            let pending = pending.clone();
            let event_routes = event_routes.clone();
            tokio::spawn(async move {
                Self::receive_loop(ws_source, pending, event_routes).await;
            })
        };

        Ok(Self {
            http_endpoint,
            http,
            ws_tx: Arc::new(tokio::sync::Mutex::new(ws_sink)),
            request_id: Arc::new(AtomicU64::new(1)),
            pending,
            event_routes,
            _recv_task: recv_task,
        })
    }

    async fn receive_loop(mut ws_source: WsSource, pending: PendingMap, event_routes: EventRoutes) {
        while let Some(message) = ws_source.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    trace!(%text, "cdp recv");
                    let parsed = match serde_json::from_str::<CdpMessage>(&text) {
                        Ok(parsed) => parsed,
                        Err(parse_error) => {
                            warn!(%parse_error, "unparseable CDP frame");
                            continue;
                        }
                    };

                    if let Some(id) = parsed.id {
                        if let Some(reply) = pending.lock().remove(&id) {
                            let result = match parsed.error {
                                Some(payload) => Err(CdpError::Protocol {
                                    code: payload.code,
                                    message: payload.message,
                                }),
                                None => Ok(parsed.result.unwrap_or(Value::Null)),
                            };
                            let _ = reply.send(result);
                        }
                    } else if let Some(method) = parsed.method {
                        let session_id = parsed.session_id.unwrap_or_default();
                        let event = CdpEvent {
                            method,
                            params: parsed.params.unwrap_or(Value::Null),
                        };
                        if let Some(route) = event_routes.lock().get(&session_id) {
                            let _ = route.send(event);
                        }
                    }
                }
                Ok(Message::Close(_)) => {
                    debug!("browser closed the connection");
                    break;
                }
                Err(ws_error) => {
                    error!(%ws_error, "websocket receive failed");
                    break;
                }
                _ => {}
            }
        }
    }

    /// Issue one CDP command and await its response.
    pub async fn call(
        &self,
        method: &str,
        params: Option<Value>,
        session_id: Option<&str>,
    ) -> Result<Value, CdpError> {
        dispatch_call(
            &self.ws_tx,
            &self.pending,
            &self.request_id,
            method,
            params,
            session_id,
        )
        .await
    }

    /// Page targets known to the browser.
    pub async fn list_pages(&self) -> Result<Vec<PageInfo>, CdpError> {
        let pages: Vec<PageInfo> = self
            .http
            .get(format!("{}/json/list", self.http_endpoint))
            .send()
            .await?
            .json()
            .await?;
        Ok(pages)
    }

    /// Open a URL in a new tab without attaching to it.
    pub async fn open_tab(&self, url: &str) -> Result<PageInfo, CdpError> {
        // Browsers require PUT for /json/new.
        let page: PageInfo = self
            .http
            .put(format!("{}/json/new?{url}", self.http_endpoint))
            .send()
            .await?
            .json()
            .await?;
        debug!(id = %page.id, %url, "opened tab");
        Ok(page)
    }

    /// Attach to an existing page target and enable the domains the
    /// composer needs.
    pub async fn attach_page(&self, target_id: &str) -> Result<PageSession, CdpError> {
        let result = self
            .call(
                "Target.attachToTarget",
                Some(json!({"targetId": target_id, "flatten": true})),
                None,
            )
            .await?;

        let session_id = result["sessionId"]
            .as_str()
            .ok_or_else(|| CdpError::InvalidResponse("missing sessionId".to_string()))?
            .to_string();

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        self.event_routes.lock().insert(session_id.clone(), event_tx);

        let session = PageSession::new(
            target_id.to_string(),
            session_id,
            self.ws_tx.clone(),
            self.pending.clone(),
            self.request_id.clone(),
            event_rx,
        );
        session.enable_domains().await?;

        Ok(session)
    }
}

impl Drop for CdpClient {
    fn drop(&mut self) {
        self._recv_task.abort();
    }
}

/// Shared command dispatch used by the client and its page sessions.
pub(crate) async fn dispatch_call(
    ws_tx: &tokio::sync::Mutex<WsSink>,
    pending: &Mutex<HashMap<u64, oneshot::Sender<Result<Value, CdpError>>>>,
    request_id: &AtomicU64,
    method: &str,
    params: Option<Value>,
    session_id: Option<&str>,
) -> Result<Value, CdpError> {
    let id = request_id.fetch_add(1, Ordering::SeqCst);
    let command = CdpCommand {
        id,
        method: method.to_string(),
        params,
        session_id: session_id.map(str::to_string),
    };
    let encoded = serde_json::to_string(&command)?;
    trace!(%encoded, "cdp send");

    let (reply_tx, reply_rx) = oneshot::channel();
    pending.lock().insert(id, reply_tx);

    {
        let mut ws = ws_tx.lock().await;
        ws.send(Message::Text(encoded.into())).await?;
    }

    match tokio::time::timeout(CALL_TIMEOUT, reply_rx).await {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => Err(CdpError::SessionClosed),
        Err(_) => {
            pending.lock().remove(&id);
            Err(CdpError::Timeout(format!("{method} timed out")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_monotonic() {
        let counter = AtomicU64::new(1);
        assert_eq!(counter.fetch_add(1, Ordering::SeqCst), 1);
        assert_eq!(counter.fetch_add(1, Ordering::SeqCst), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }
}
