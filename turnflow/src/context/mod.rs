//! Per-turn context management.
//!
//! This module provides:
//! - The conversation identity captured for each turn
//! - The base turn context with its reply sequence and service registry
//! - A forwarding decorator for layering middleware behavior

#[cfg(test)]
mod context_tests;
mod decorator;
mod reference;
mod services;
mod turn;

pub use decorator::ContextDecorator;
pub use reference::ConversationReference;
pub use services::{Service, ServiceRegistry};
pub use turn::{ConversationContext, TurnContext};
