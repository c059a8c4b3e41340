use crate::domain::validation::ValidationError;
use crate::domain::value::{Recipients, SenderName};

pub const SEND_MESSAGE_MAX_RECIPIENTS: usize = 1000;
pub const DEFAULT_LIST_LIMIT: u32 = 100;
pub const DEFAULT_LIST_PAGE: u32 = 1;

#[derive(Debug, Clone)]
pub struct SendMessage {
    recipients: Recipients,
    message: String,
    sender_name: Option<SenderName>,
}

impl SendMessage {
    pub fn new(
        recipients: impl Into<Recipients>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let recipients = recipients.into();
        let count = recipients.count();
        if count > SEND_MESSAGE_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_MESSAGE_MAX_RECIPIENTS,
                actual: count,
            });
        }
        Ok(Self {
            recipients,
            message: message.into(),
            sender_name: None,
        })
    }

    /// Send under this name instead of the client's configured sender name.
    pub fn sender_name(mut self, sender_name: SenderName) -> Self {
        self.sender_name = Some(sender_name);
        self
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sender_name_override(&self) -> Option<&SenderName> {
        self.sender_name.as_ref()
    }
}

/// Filters and paging for listing sent messages.
///
/// Unset fields are left out of the request; `limit` and `page` fall back to
/// [`DEFAULT_LIST_LIMIT`] and [`DEFAULT_LIST_PAGE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageListOptions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub network: Option<String>,
    pub sender_name: Option<String>,
}
