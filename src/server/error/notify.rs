use thiserror::Error;

/// Failure delivering a raid notification.
///
/// Delivery errors are logged per message and never abort the rest of a batch.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The configured channel reference is not a valid channel ID.
    #[error("Invalid notification channel reference: {0:?}")]
    InvalidChannel(String),
    /// The channel could not be resolved (deleted, or the bot lacks access).
    #[error("Notification channel {0} could not be resolved")]
    ChannelNotFound(u64),
    /// Discord rejected or failed the request.
    #[error(transparent)]
    Discord(#[from] serenity::Error),
}
