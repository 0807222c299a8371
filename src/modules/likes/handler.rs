use super::{
    api::{self, like, mutation::MutationResult, status, unlike},
    button::{ButtonLabel, LikeButton, Notice},
    error::Result,
};
use crate::types::Context;
use std::sync::Arc;
use tokio::task::JoinHandle;

impl From<MutationResult> for ButtonLabel {
    fn from(result: MutationResult) -> Self {
        match result {
            MutationResult::Liked => ButtonLabel::Liked,
            MutationResult::Unliked => ButtonLabel::Like,
        }
    }
}

/// Flips the like state of the cafe its button belongs to.
///
/// The handler keeps no state between clicks: every click reads the cafe and
/// user from the button's container, asks the backend for the current status
/// and issues the opposite mutation. Concurrent clicks are not coordinated,
/// so the label ends up reflecting whichever mutation response lands last.
pub struct LikeToggleHandler<B> {
    ctx: Arc<Context>,
    button: Arc<B>,
}

impl<B> Clone for LikeToggleHandler<B> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            button: self.button.clone(),
        }
    }
}

impl<B: LikeButton + 'static> LikeToggleHandler<B> {
    pub fn new(ctx: Arc<Context>, button: Arc<B>) -> Self {
        Self { ctx, button }
    }

    pub fn button(&self) -> &B {
        &self.button
    }

    /// Runs one click. On failure the label is left untouched and a notice is
    /// posted to the button.
    pub async fn handle_click(&self) -> Result<MutationResult> {
        let result = self.toggle().await;

        match &result {
            Ok(state) => {
                let label = ButtonLabel::from(*state);
                tracing::info!("Like button now reads {}", label);
                self.button.set_label(label);
            }
            Err(err) => {
                tracing::error!("Like toggle failed: {}", err);
                self.button.notify(Notice::from(err));
            }
        }

        result
    }

    /// Runs a click as its own task, as a UI event loop would.
    pub fn spawn_click(&self) -> JoinHandle<Result<MutationResult>> {
        let handler = self.clone();
        tokio::spawn(async move { handler.handle_click().await })
    }

    /// Sets the label from the current status without changing the like state.
    pub async fn refresh(&self) -> Result<ButtonLabel> {
        let current = match self.query() {
            Ok(query) => status::service(self.ctx.clone(), query).await,
            Err(err) => Err(err),
        };

        match current {
            Ok(current) => {
                let label = if current.likes {
                    ButtonLabel::Liked
                } else {
                    ButtonLabel::Like
                };
                self.button.set_label(label);
                Ok(label)
            }
            Err(err) => {
                tracing::error!("Like status refresh failed: {}", err);
                self.button.notify(Notice::from(&err));
                Err(err)
            }
        }
    }

    async fn toggle(&self) -> Result<MutationResult> {
        let query = self.query()?;
        let payload = api::mutation::Payload {
            user_id: query.user_id.clone(),
            cafe_id: query.cafe_id,
        };

        let current = status::service(self.ctx.clone(), query).await?;

        if current.likes {
            unlike::service(self.ctx.clone(), payload).await
        } else {
            like::service(self.ctx.clone(), payload).await
        }
    }

    fn query(&self) -> Result<status::types::request::Query> {
        let container = self.button.container();

        Ok(status::types::request::Query {
            cafe_id: container.cafe_id()?,
            user_id: container.user_id()?,
        })
    }
}
