use super::types::{request, response};
use crate::{
    modules::likes::{api::mutation, error::Result},
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
) -> Result<response::MutationResult> {
    mutation::send(ctx, "/api/unlike", payload).await
}
