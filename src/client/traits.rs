use async_trait::async_trait;
use thiserror::Error;

use crate::domain::FeedEvent;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetch the current event list, newest ordering as delivered by the
    /// server. The caller never re-sorts.
    async fn list_events(&self) -> ClientResult<Vec<FeedEvent>>;
}
