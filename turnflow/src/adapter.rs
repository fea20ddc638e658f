//! The seam between the turn context and the channel dispatcher.

use crate::activity::Activity;
use crate::context::ConversationReference;
use async_trait::async_trait;

/// The dispatcher that owns turn contexts and performs outbound delivery.
///
/// The context core never calls the adapter during a turn; it only holds the
/// handle so middleware and handlers can reach the dispatcher that created
/// the context. After the turn the adapter drains the accumulated responses
/// and sends them over its own transport. Transport failures originate in
/// the adapter, not in the context.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Adapter: Send + Sync {
    /// The channel this adapter dispatches for (e.g. "test", "webchat").
    fn channel(&self) -> &str;

    /// Delivers the responses accumulated during a turn.
    async fn send_activities(
        &self,
        reference: &ConversationReference,
        activities: Vec<Activity>,
    ) -> anyhow::Result<()>;
}
