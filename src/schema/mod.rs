// Host wire schema: activities, cards and messaging extension payloads

pub mod activity;
pub mod card;
pub mod extension;

pub use activity::{Activity, ActivityType, ChannelAccount, ConversationAccount, ResourceResponse};
pub use card::{
    ActionType, Attachment, BasicCard, CardAction, CardImage, HERO_CONTENT_TYPE,
    THUMBNAIL_CONTENT_TYPE,
};
pub use extension::{
    MessagingExtensionAttachment, MessagingExtensionParameter, MessagingExtensionQuery,
    MessagingExtensionResponse, MessagingExtensionResult,
};
