//! # Turnflow
//!
//! The per-turn execution context for a conversational-agent runtime.
//!
//! Turnflow carries one turn of conversation through a middleware pipeline:
//!
//! - **Turn context**: owns the inbound activity, the conversation identity
//!   derived from it, and the ordered sequence of outgoing replies
//! - **Service registry**: a synchronized, string-keyed registry (with typed
//!   slots) that pipeline stages use to share state within the turn
//! - **Decorators**: forwarding wrappers that let middleware layer behavior
//!   over a context without subclassing a concrete implementation
//!
//! Transport, message validation, and pipeline ordering live in the adapter
//! and pipeline layers around this crate; cross-turn persistence belongs in
//! a registered service.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use turnflow::prelude::*;
//!
//! // The adapter constructs one context per inbound activity.
//! let mut ctx = TurnContext::new(adapter, request);
//!
//! // Handlers accumulate replies and share state through services.
//! ctx.reply("Hello!").reply_with_speak("Goodbye", "<speak>Goodbye</speak>");
//! ctx.set_service("session", session_store)?;
//!
//! // After the turn the adapter drains and delivers the responses.
//! let reference = ctx.conversation_reference().clone();
//! let responses = ctx.take_responses();
//! ctx.adapter().send_activities(&reference, responses).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod activity;
pub mod adapter;
pub mod context;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::activity::{
        Activity, ActivityKind, ChannelAccount, ConversationAccount,
    };
    pub use crate::adapter::Adapter;
    pub use crate::context::{
        ContextDecorator, ConversationContext, ConversationReference, Service,
        ServiceRegistry, TurnContext,
    };
    pub use crate::errors::InvalidArgumentError;
}
