//! Client side of the cafe likes REST endpoints.

pub mod like;
pub mod mutation;
pub mod status;
pub mod unlike;

use super::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Checks the status line and decodes the body as `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await.map_err(Error::from)?;

    if !status.is_success() {
        let message = String::from_utf8_lossy(&body).into_owned();
        tracing::error!("Likes api responded with {}: {}", status, message);
        return Err(Error::Server {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice::<T>(&body).map_err(|err| {
        tracing::error!("Failed to parse likes api response: {}", err);
        Error::Parse(err.to_string())
    })
}
