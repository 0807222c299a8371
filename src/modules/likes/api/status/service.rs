use super::types::{request, response};
use crate::{
    modules::likes::{
        api::read_json,
        error::{Error, Result},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, query: request::Query) -> Result<response::LikeStatus> {
    tracing::debug!(
        "Checking like status for user {} on cafe {}",
        query.user_id,
        query.cafe_id
    );

    let res = ctx
        .api
        .http
        .get(ctx.api.endpoint("/api/likes"))
        .query(&query)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to check like status: {}", err);
            Error::from(err)
        })?;

    let raw = read_json::<response::RawStatus>(res).await?;

    response::LikeStatus::try_from(raw).map_err(|err| {
        tracing::error!("Unexpected like status payload: {}", err);
        err
    })
}
