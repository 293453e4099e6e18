use futures::stream::Stream;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use fairway_core::match_play::Match;

use crate::repository::ScorecardChange;

/// Updates to one match, as a stream. Lagged notifications are skipped with
/// a warning; the stream ends when the store is dropped.
pub fn match_updates(
    rx: broadcast::Receiver<Match>,
    match_id: impl Into<String>,
) -> impl Stream<Item = Match> {
    let match_id = match_id.into();
    BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(m) if m.id == match_id => Some(m),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(match_id = %match_id, "Match watcher receive error: {e}");
            None
        },
    })
}

/// Every scorecard change, as a stream.
pub fn scorecard_updates(
    rx: broadcast::Receiver<ScorecardChange>,
) -> impl Stream<Item = ScorecardChange> {
    BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(change) => Some(change),
        Err(e) => {
            tracing::warn!("Scorecard watcher receive error: {e}");
            None
        },
    })
}
