//! SSE change-notification endpoint.
//!
//! GET /api/streams/:topic
//!
//! Topics are table names. Clients subscribe on mount and re-fetch the
//! section on any event, mirroring the hosted store's push channel. Public:
//! every table here is already world-readable through its list endpoint.

use std::convert::Infallible;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, StreamExt};
use tokio_stream::wrappers::BroadcastStream;

use crate::server::app::AppState;

/// Tables exposed as change streams.
const STREAM_TOPICS: &[&str] = &["members", "meetings", "goals", "messages", "contact"];

pub async fn stream_handler(
    Extension(state): Extension<AppState>,
    Path(topic): Path<String>,
) -> Result<Sse<impl futures::Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    if !STREAM_TOPICS.contains(&topic.as_str()) {
        return Err(StatusCode::NOT_FOUND);
    }

    let rx = state.stream_hub.subscribe(&topic).await;

    // Stream with connected event and lag handling
    let connected =
        stream::once(async { Ok::<_, Infallible>(Event::default().event("connected").data("ok")) });

    let events = BroadcastStream::new(rx).filter_map(|result| async {
        match result {
            Ok(change) => Event::default()
                .event("change")
                .json_data(&change)
                .ok()
                .map(Ok),
            Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
                Event::default()
                    .event("lagged")
                    .json_data(&serde_json::json!({ "missed": n }))
                    .ok()
                    .map(Ok)
            }
        }
    });

    Ok(Sse::new(connected.chain(events)).keep_alive(KeepAlive::default()))
}
