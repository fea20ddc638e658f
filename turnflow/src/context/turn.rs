//! The per-turn conversation context and its capability trait.

use crate::activity::Activity;
use crate::adapter::Adapter;
use crate::context::{ConversationReference, Service, ServiceRegistry};
use crate::errors::InvalidArgumentError;
use std::sync::Arc;

/// The capability set shared by the base turn context and its decorators.
///
/// Accessors and the service registry are usable through
/// `dyn ConversationContext`; the reply operations are `Sized`-gated so they
/// can return the same handle for chaining (`ctx.reply("hi").reply("bye")`)
/// while keeping the rest of the trait object-safe.
pub trait ConversationContext: Send + Sync {
    /// Returns the adapter that created this context.
    fn adapter(&self) -> &Arc<dyn Adapter>;

    /// Returns the inbound activity, absent for proactive contexts.
    fn request(&self) -> Option<&Activity>;

    /// Returns the conversation identity captured at construction.
    fn conversation_reference(&self) -> &ConversationReference;

    /// Returns the responses accumulated so far, in call order.
    fn responses(&self) -> &[Activity];

    /// Replaces the whole response sequence, for pipeline-level rewriting.
    fn replace_responses(&mut self, responses: Vec<Activity>);

    /// Drains the response sequence for the adapter's outbound flush.
    fn take_responses(&mut self) -> Vec<Activity>;

    /// Returns the synchronized service registry for this turn.
    fn services(&self) -> &ServiceRegistry;

    /// Appends an outgoing activity verbatim.
    fn reply_activity(&mut self, activity: Activity) -> &mut Self
    where
        Self: Sized;

    /// Builds a text reply addressed back to the user and appends it.
    fn reply(&mut self, text: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        let activity = self
            .conversation_reference()
            .post_to_user_message()
            .with_text(text);
        self.reply_activity(activity)
    }

    /// Like [`reply`](Self::reply), attaching speech-synthesis markup.
    ///
    /// A blank `speak` leaves the speech field unset.
    fn reply_with_speak(&mut self, text: impl Into<String>, speak: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        let mut activity = self
            .conversation_reference()
            .post_to_user_message()
            .with_text(text);
        let speak = speak.into();
        if !speak.trim().is_empty() {
            activity.speak = Some(speak);
        }
        self.reply_activity(activity)
    }

    /// Looks up a service by ID; a missing key yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `service_id` is empty or blank.
    fn get_service(&self, service_id: &str) -> Result<Option<Service>, InvalidArgumentError> {
        self.services().get(service_id)
    }

    /// Inserts or overwrites a service by ID.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `service_id` is empty or blank.
    fn set_service(&self, service_id: &str, service: Service) -> Result<(), InvalidArgumentError> {
        self.services().set(service_id, service)
    }
}

/// The base context for one turn of conversation.
///
/// Created once per inbound activity (or per proactive send) by the adapter,
/// mutated only within its turn, and discarded after the adapter drains the
/// responses. Cross-turn state belongs in a registered service, never in the
/// context itself. The response sequence is not internally synchronized;
/// appends are assumed to be cooperatively serialized within the turn. Only
/// the service registry tolerates concurrent access.
pub struct TurnContext {
    adapter: Arc<dyn Adapter>,
    request: Option<Activity>,
    conversation_reference: ConversationReference,
    responses: Vec<Activity>,
    services: ServiceRegistry,
}

impl TurnContext {
    /// Creates a context for an inbound activity.
    ///
    /// The conversation reference is derived from the activity's identity
    /// fields exactly once; it is never recomputed.
    #[must_use]
    pub fn new(adapter: Arc<dyn Adapter>, request: Activity) -> Self {
        let conversation_reference = ConversationReference::from_activity(&request);
        Self {
            adapter,
            request: Some(request),
            conversation_reference,
            responses: Vec::new(),
            services: ServiceRegistry::new(),
        }
    }

    /// Creates a context from a stored reference, for proactive sends.
    #[must_use]
    pub fn from_reference(adapter: Arc<dyn Adapter>, reference: ConversationReference) -> Self {
        Self {
            adapter,
            request: None,
            conversation_reference: reference,
            responses: Vec::new(),
            services: ServiceRegistry::new(),
        }
    }
}

impl ConversationContext for TurnContext {
    fn adapter(&self) -> &Arc<dyn Adapter> {
        &self.adapter
    }

    fn request(&self) -> Option<&Activity> {
        self.request.as_ref()
    }

    fn conversation_reference(&self) -> &ConversationReference {
        &self.conversation_reference
    }

    fn responses(&self) -> &[Activity] {
        &self.responses
    }

    fn replace_responses(&mut self, responses: Vec<Activity>) {
        self.responses = responses;
    }

    fn take_responses(&mut self) -> Vec<Activity> {
        std::mem::take(&mut self.responses)
    }

    fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    fn reply_activity(&mut self, activity: Activity) -> &mut Self {
        tracing::debug!(
            kind = ?activity.kind,
            reply_to_id = activity.reply_to_id.as_deref(),
            position = self.responses.len(),
            "appending response"
        );
        self.responses.push(activity);
        self
    }
}
