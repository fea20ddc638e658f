//! Conversation identity for addressing a turn.

use crate::activity::{Activity, ActivityKind, ChannelAccount, ConversationAccount};
use serde::{Deserialize, Serialize};

/// The identity tuple sufficient to address a conversation.
///
/// A reference is captured once per turn, either copied from the inbound
/// activity or supplied directly for proactive sends, and never recomputed.
/// Stored references stay usable for future proactive messaging after the
/// originating activity is gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConversationReference {
    /// The ID of the activity the reference was captured from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,

    /// The user side of the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ChannelAccount>,

    /// The bot side of the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<ChannelAccount>,

    /// The conversation itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,

    /// The channel the conversation lives on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// The channel service endpoint for outbound delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
}

impl ConversationReference {
    /// Creates an empty reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the reference from an inbound activity.
    ///
    /// Copies `activity_id` from the activity's `id`, `user` from `from`,
    /// `bot` from `recipient`, plus `conversation`, `channel_id`, and
    /// `service_url` field by field.
    #[must_use]
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            activity_id: activity.id.clone(),
            user: activity.from.clone(),
            bot: activity.recipient.clone(),
            conversation: activity.conversation.clone(),
            channel_id: activity.channel_id.clone(),
            service_url: activity.service_url.clone(),
        }
    }

    /// Sets the activity ID.
    #[must_use]
    pub fn with_activity_id(mut self, activity_id: impl Into<String>) -> Self {
        self.activity_id = Some(activity_id.into());
        self
    }

    /// Sets the user account.
    #[must_use]
    pub fn with_user(mut self, user: ChannelAccount) -> Self {
        self.user = Some(user);
        self
    }

    /// Sets the bot account.
    #[must_use]
    pub fn with_bot(mut self, bot: ChannelAccount) -> Self {
        self.bot = Some(bot);
        self
    }

    /// Sets the conversation account.
    #[must_use]
    pub fn with_conversation(mut self, conversation: ConversationAccount) -> Self {
        self.conversation = Some(conversation);
        self
    }

    /// Sets the channel ID.
    #[must_use]
    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Sets the service URL.
    #[must_use]
    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = Some(service_url.into());
        self
    }

    /// Builds an outbound `Message` activity addressed back to the user.
    ///
    /// The bot becomes the sender and the user the recipient; conversation,
    /// channel, and service URL carry over, and `reply_to_id` points at the
    /// activity the reference was captured from.
    #[must_use]
    pub fn post_to_user_message(&self) -> Activity {
        Activity {
            kind: ActivityKind::Message,
            from: self.bot.clone(),
            recipient: self.user.clone(),
            conversation: self.conversation.clone(),
            channel_id: self.channel_id.clone(),
            service_url: self.service_url.clone(),
            reply_to_id: self.activity_id.clone(),
            ..Activity::default()
        }
    }
}
