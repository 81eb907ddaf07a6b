//! HTTP + WebSocket API around conversation sessions
//!
//! Endpoints:
//! - POST /session/new           - Create session
//! - GET  /session/{id}          - Status + history
//! - POST /session/{id}/message  - Submit a user message
//! - POST /session/{id}/language - Switch language
//! - POST /session/{id}/offline  - Mark disconnected
//! - POST /session/{id}/reconnect- Restore connectivity
//! - POST /session/{id}/action   - Dispatch a recommended action
//! - WS   /ws/{id}               - Live triage updates
//! - GET  /health                - Health check

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{ConversationSession, HostEvent, LexiconStore, RecordingHost};
use crate::types::{Action, Message, Severity};
use crate::DEFAULT_LANGUAGE;

/// One live session plus its update channel
pub struct SessionEntry {
    pub session: ConversationSession<'static>,
    pub update_tx: broadcast::Sender<TriageUpdate>,
}

/// Live update pushed to WebSocket subscribers after each change
#[derive(Debug, Clone, Serialize)]
pub struct TriageUpdate {
    pub severity: Option<Severity>,
    pub language: String,
    pub history_len: usize,
    pub queued: usize,
    pub online: bool,
}

impl TriageUpdate {
    fn of(entry: &SessionEntry) -> Self {
        Self {
            severity: entry.session.current_severity(),
            language: entry.session.language().to_string(),
            history_len: entry.session.history().len(),
            queued: entry.session.offline_queue().len(),
            online: entry.session.is_online(),
        }
    }
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, SessionEntry>>,
}

/// Create new session request
#[derive(Debug, Deserialize)]
pub struct NewSessionRequest {
    pub language: Option<String>,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub websocket_url: String,
    pub welcome: Message,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub language: String,
    pub severity: Option<Severity>,
    pub online: bool,
    pub queued: usize,
    pub history: Vec<Message>,
}

/// Submit message request
#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub text: String,
}

/// Submit message response: the assistant message produced
#[derive(Debug, Serialize)]
pub struct SubmitMessageResponse {
    pub reply: Message,
}

/// Switch language request
#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

/// Switch language response
#[derive(Debug, Serialize)]
pub struct SetLanguageResponse {
    pub language: String,
    pub welcome: Message,
}

/// Connectivity change response
#[derive(Debug, Serialize)]
pub struct ConnectivityResponse {
    pub online: bool,
    pub queued: usize,
    pub history_len: usize,
}

/// Dispatch action request
#[derive(Debug, Deserialize)]
pub struct DispatchActionRequest {
    pub action: Action,
}

/// Dispatch action response: the host events produced
#[derive(Debug, Serialize)]
pub struct DispatchActionResponse {
    pub dispatched: Vec<HostEvent>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
    pub languages: usize,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
    });

    Router::new()
        .route("/health", get(health))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session))
        .route("/session/:id/message", post(submit_message))
        .route("/session/:id/language", post(set_language))
        .route("/session/:id/offline", post(go_offline))
        .route("/session/:id/reconnect", post(reconnect))
        .route("/session/:id/action", post(dispatch_action))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
        languages: LexiconStore::global().len(),
    })
}

/// Create new session
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewSessionRequest>,
) -> Result<Json<NewSessionResponse>, StatusCode> {
    let session_id = generate_session_id();
    let language = req.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let session = ConversationSession::new(language, LexiconStore::global());
    let welcome = session.history()[0].clone();
    let (update_tx, _) = broadcast::channel(100);

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), SessionEntry { session, update_tx });

    Ok(Json(NewSessionResponse {
        websocket_url: format!("/ws/{}", session_id),
        session_id,
        welcome,
    }))
}

/// Get session status and history
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let entry = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(SessionStatusResponse {
        session_id: id,
        language: entry.session.language().to_string(),
        severity: entry.session.current_severity(),
        online: entry.session.is_online(),
        queued: entry.session.offline_queue().len(),
        history: entry.session.history().to_vec(),
    }))
}

/// Submit a user message, returning the assistant reply
async fn submit_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SubmitMessageRequest>,
) -> Result<Json<SubmitMessageResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let reply = entry.session.submit_user_message(req.text).clone();
    let _ = entry.update_tx.send(TriageUpdate::of(entry));

    Ok(Json(SubmitMessageResponse { reply }))
}

/// Switch the session language
async fn set_language(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SetLanguageRequest>,
) -> Result<Json<SetLanguageResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    entry.session.set_language(req.language);
    let _ = entry.update_tx.send(TriageUpdate::of(entry));

    Ok(Json(SetLanguageResponse {
        language: entry.session.language().to_string(),
        welcome: entry.session.history()[0].clone(),
    }))
}

/// Mark the session disconnected
async fn go_offline(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ConnectivityResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    entry.session.go_offline();
    let _ = entry.update_tx.send(TriageUpdate::of(entry));

    Ok(Json(connectivity(entry)))
}

/// Restore connectivity, draining the offline queue
async fn reconnect(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ConnectivityResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    entry.session.reconnect();
    let _ = entry.update_tx.send(TriageUpdate::of(entry));

    Ok(Json(connectivity(entry)))
}

fn connectivity(entry: &SessionEntry) -> ConnectivityResponse {
    ConnectivityResponse {
        online: entry.session.is_online(),
        queued: entry.session.offline_queue().len(),
        history_len: entry.session.history().len(),
    }
}

/// Dispatch a recommended action and report the host events produced
async fn dispatch_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<DispatchActionRequest>,
) -> Result<Json<DispatchActionResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let mut host = RecordingHost::default();
    entry.session.dispatch_action(&req.action, &mut host);
    let _ = entry.update_tx.send(TriageUpdate::of(entry));

    Ok(Json(DispatchActionResponse {
        dispatched: host.events,
    }))
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let entry = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = entry.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Forward broadcast updates until either side goes away
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<TriageUpdate>) {
    let (mut sender, mut receiver) = socket.split();
    loop {
        tokio::select! {
            update = rx.recv() => {
                let Ok(update) = update else { break };
                let json = serde_json::to_string(&update).unwrap_or_default();
                if sender.send(WsMessage::Text(json)).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(_)) => {} // client chatter keeps the feed alive
                    _ => break,
                }
            }
        }
    }
}

/// Generate session ID
fn generate_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("session_{:x}", nanos as u64)
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("MindTriage API running on {}", addr);
    println!("  POST /session/new             - Create session");
    println!("  GET  /session/:id             - Status + history");
    println!("  POST /session/:id/message     - Submit message");
    println!("  POST /session/:id/language    - Switch language");
    println!("  POST /session/:id/offline     - Go offline");
    println!("  POST /session/:id/reconnect   - Reconnect");
    println!("  POST /session/:id/action      - Dispatch action");
    println!("  WS   /ws/:id                  - Live updates");
    println!("  GET  /health                  - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
