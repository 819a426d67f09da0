pub mod media;
pub mod tag;

use mediatag_core::MediaError;
use std::future::Future;
use std::time::Duration;

/// Run `fut` under the optional deadline, reporting expiry as [`MediaError::Timeout`].
pub(crate) async fn with_deadline<T, E, F>(timeout: Option<Duration>, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<MediaError>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| E::from(MediaError::Timeout(limit)))?,
        None => fut.await,
    }
}
