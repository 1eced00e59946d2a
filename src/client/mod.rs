mod http;
mod traits;

pub use http::HttpFeedClient;
pub use traits::{ClientError, ClientResult, FeedClient};
