use reqwest::Method;
use url::Url;

use crate::domain::MessageId;

/// Remote endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Account,
    SendMessage,
    Message { id: &'a MessageId },
    ListMessages,
    Users,
    SenderNames,
    Transactions,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Self::SendMessage => Method::POST,
            Self::Account
            | Self::Message { .. }
            | Self::ListMessages
            | Self::Users
            | Self::SenderNames
            | Self::Transactions => Method::GET,
        }
    }

    fn relative_path(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::SendMessage | Self::ListMessages => "messages",
            Self::Message { .. } => "messages/",
            Self::Users => "account/users",
            Self::SenderNames => "account/sendernames",
            Self::Transactions => "account/transactions",
        }
    }

    /// Resolve against `base` using RFC 3986 reference resolution.
    ///
    /// A message id is appended as one percent-encoded path segment.
    pub fn resolve(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.join(self.relative_path())?;
        if let Self::Message { id } = self {
            url.path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
                .pop_if_empty()
                .push(id.as_str());
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.semaphore.co/api/v4/").unwrap()
    }

    #[test]
    fn account_endpoints_resolve_under_base() {
        assert_eq!(
            Endpoint::Account.resolve(&base()).unwrap().as_str(),
            "https://api.semaphore.co/api/v4/account"
        );
        assert_eq!(
            Endpoint::Users.resolve(&base()).unwrap().as_str(),
            "https://api.semaphore.co/api/v4/account/users"
        );
        assert_eq!(
            Endpoint::SenderNames.resolve(&base()).unwrap().as_str(),
            "https://api.semaphore.co/api/v4/account/sendernames"
        );
        assert_eq!(
            Endpoint::Transactions.resolve(&base()).unwrap().as_str(),
            "https://api.semaphore.co/api/v4/account/transactions"
        );
    }

    #[test]
    fn message_endpoint_appends_encoded_id() {
        let id = MessageId::new("abc123").unwrap();
        let url = Endpoint::Message { id: &id }.resolve(&base()).unwrap();
        assert_eq!(url.as_str(), "https://api.semaphore.co/api/v4/messages/abc123");

        let id = MessageId::new("a/b?c").unwrap();
        let url = Endpoint::Message { id: &id }.resolve(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.semaphore.co/api/v4/messages/a%2Fb%3Fc"
        );
    }

    #[test]
    fn only_send_message_is_a_post() {
        assert_eq!(Endpoint::SendMessage.method(), Method::POST);
        assert_eq!(Endpoint::ListMessages.method(), Method::GET);
        assert_eq!(Endpoint::Account.method(), Method::GET);
        assert_eq!(
            Endpoint::SendMessage.resolve(&base()).unwrap(),
            Endpoint::ListMessages.resolve(&base()).unwrap()
        );
    }

    #[test]
    fn base_without_trailing_slash_replaces_last_segment() {
        let base = Url::parse("https://example.invalid/api/v4").unwrap();
        assert_eq!(
            Endpoint::Account.resolve(&base).unwrap().as_str(),
            "https://example.invalid/api/account"
        );
    }
}
