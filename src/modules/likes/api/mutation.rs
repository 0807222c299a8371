//! Shared request and result shapes of `POST /api/like` and `POST /api/unlike`.

use crate::{
    modules::likes::{
        api::read_json,
        error::{Error, Result},
    },
    types::Context,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub user_id: String,
    pub cafe_id: i64,
}

/// New like state reported by a mutation endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationResult {
    Liked,
    Unliked,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RawMutation(pub Map<String, Value>);

impl TryFrom<RawMutation> for MutationResult {
    type Error = Error;

    // Tagged bodies win. Legacy bodies carry `liked: <id>` or `unliked: <id>`,
    // and anything without `unliked` counts as liked.
    fn try_from(raw: RawMutation) -> std::result::Result<Self, Self::Error> {
        let body = raw.0;

        if let Some(state) = body.get("state") {
            return match state.as_str() {
                Some("liked") => Ok(Self::Liked),
                Some("unliked") => Ok(Self::Unliked),
                _ => Err(Error::ContractViolation(format!(
                    "unknown mutation state {}",
                    state
                ))),
            };
        }

        if let Some(message) = body.get("error") {
            return Err(Error::Server {
                status: 200,
                message: message
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| message.to_string()),
            });
        }

        if body.contains_key("unliked") {
            Ok(Self::Unliked)
        } else {
            Ok(Self::Liked)
        }
    }
}

pub(crate) async fn send(ctx: Arc<Context>, path: &str, payload: Payload) -> Result<MutationResult> {
    tracing::debug!(
        "POST {} for user {} on cafe {}",
        path,
        payload.user_id,
        payload.cafe_id
    );

    let res = ctx
        .api
        .http
        .post(ctx.api.endpoint(path))
        .json(&payload)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to send {} request: {}", path, err);
            Error::from(err)
        })?;

    let raw = read_json::<RawMutation>(res).await?;

    MutationResult::try_from(raw)
}
