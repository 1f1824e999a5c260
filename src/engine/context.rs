//! Per-request resources shared by every step of one composite view.

use tokio::sync::OnceCell;
use tracing::warn;

use crate::{
    engine::directory::{build_index, PlayerDirectory},
    sleeper::client::UpstreamClient,
};

/// Scope for one inbound request.
///
/// Holds the player directory so it is fetched at most once no matter how
/// many enrichment passes the view needs. The directory is supplementary:
/// when it cannot be fetched the context serves an empty one and enrichment
/// yields empty lists.
pub struct RequestContext<'a> {
    client: &'a dyn UpstreamClient,
    directory: OnceCell<PlayerDirectory>,
}

impl<'a> RequestContext<'a> {
    pub fn new(client: &'a dyn UpstreamClient) -> Self {
        Self {
            client,
            directory: OnceCell::new(),
        }
    }

    pub fn client(&self) -> &'a dyn UpstreamClient {
        self.client
    }

    /// The request's directory, fetched and indexed on first use.
    pub async fn directory(&self) -> &PlayerDirectory {
        self.directory
            .get_or_init(|| async {
                let Some(raw) = self.client.fetch_player_directory().await else {
                    warn!("player directory unavailable; enrichment will be empty");
                    return PlayerDirectory::empty();
                };
                // Decoding each entry into a record is CPU work; run it on the blocking pool.
                match tokio::task::spawn_blocking(move || build_index(raw)).await {
                    Ok(directory) => directory,
                    Err(e) => {
                        warn!(error = %e, "indexing the player directory failed");
                        PlayerDirectory::empty()
                    }
                }
            })
            .await
    }
}
