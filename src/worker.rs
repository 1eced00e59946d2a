use std::sync::Arc;

use tokio::sync::mpsc;

use crate::action::Action;
use crate::client::FeedClient;

#[derive(Debug)]
pub enum FeedRequest {
    LoadEvents,
}

#[derive(Clone)]
pub struct FeedHandle {
    tx: mpsc::UnboundedSender<FeedRequest>,
}

impl FeedHandle {
    pub fn send(&self, request: FeedRequest) {
        let _ = self.tx.send(request);
    }
}

/// Owns the client and serves fetch requests off the UI task. Requests are
/// processed one at a time, so responses apply in request order.
pub struct FeedWorker {
    client: Arc<dyn FeedClient>,
    rx: mpsc::UnboundedReceiver<FeedRequest>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl FeedWorker {
    pub fn new(
        client: Arc<dyn FeedClient>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> (Self, FeedHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = FeedHandle { tx };
        let worker = Self {
            client,
            rx,
            action_tx,
        };
        (worker, handle)
    }

    pub async fn run(mut self) {
        while let Some(request) = self.rx.recv().await {
            let action = self.process(request).await;
            if self.action_tx.send(action).is_err() {
                break;
            }
        }
    }

    async fn process(&self, request: FeedRequest) -> Action {
        match request {
            FeedRequest::LoadEvents => match self.client.list_events().await {
                Ok(events) => Action::EventsLoaded(events),
                Err(e) => {
                    tracing::error!("failed to load events: {}", e);
                    Action::Error(format!("failed to load events: {}", e))
                }
            },
        }
    }
}
