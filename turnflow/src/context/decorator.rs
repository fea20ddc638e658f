//! Forwarding wrapper for layering middleware behavior over a context.

use crate::activity::Activity;
use crate::adapter::Adapter;
use crate::context::{ConversationContext, ConversationReference, ServiceRegistry};
use std::sync::Arc;

/// A context wrapper that forwards every operation to the context it owns.
///
/// Middleware layers behavior by embedding a decorator (or its own wrapper
/// type implementing [`ConversationContext`]) around the context it was
/// handed, overriding only the operations it intercepts. Reply operations
/// delegate the mutation to the inner context but hand back the decorator
/// itself, so chained calls keep passing through the decoration layer.
pub struct ContextDecorator<C> {
    inner: C,
}

impl<C: ConversationContext> ContextDecorator<C> {
    /// Wraps a context, taking exclusive ownership of it.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped context.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns the wrapped context mutably.
    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Unwraps the decorator, yielding the inner context.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: ConversationContext> ConversationContext for ContextDecorator<C> {
    fn adapter(&self) -> &Arc<dyn Adapter> {
        self.inner.adapter()
    }

    fn request(&self) -> Option<&Activity> {
        self.inner.request()
    }

    fn conversation_reference(&self) -> &ConversationReference {
        self.inner.conversation_reference()
    }

    fn responses(&self) -> &[Activity] {
        self.inner.responses()
    }

    fn replace_responses(&mut self, responses: Vec<Activity>) {
        self.inner.replace_responses(responses);
    }

    fn take_responses(&mut self) -> Vec<Activity> {
        self.inner.take_responses()
    }

    fn services(&self) -> &ServiceRegistry {
        self.inner.services()
    }

    fn reply_activity(&mut self, activity: Activity) -> &mut Self {
        self.inner.reply_activity(activity);
        self
    }
}
