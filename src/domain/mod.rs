//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    DEFAULT_LIST_LIMIT, DEFAULT_LIST_PAGE, MessageListOptions, SEND_MESSAGE_MAX_RECIPIENTS,
    SendMessage,
};
pub use response::RawBody;
pub use validation::ValidationError;
pub use value::{ApiKey, MessageId, Recipients, SenderName};

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn send_message_accepts_exactly_max_recipients() {
        let recipients = vec!["09171234567"; SEND_MESSAGE_MAX_RECIPIENTS];
        let request = SendMessage::new(recipients, "hi").unwrap();
        assert_eq!(request.recipients().count(), SEND_MESSAGE_MAX_RECIPIENTS);
    }

    #[test]
    fn send_message_recipient_limit_is_enforced() {
        let recipients = vec!["09171234567"; SEND_MESSAGE_MAX_RECIPIENTS + 1];
        let err = SendMessage::new(recipients, "hi").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManyRecipients {
                max: SEND_MESSAGE_MAX_RECIPIENTS,
                actual: SEND_MESSAGE_MAX_RECIPIENTS + 1,
            }
        );
    }

    #[test]
    fn send_message_limit_counts_comma_separated_string() {
        let joined = vec!["09171234567"; SEND_MESSAGE_MAX_RECIPIENTS + 1].join(",");
        let err = SendMessage::new(joined.as_str(), "hi").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooManyRecipients { actual: 1001, .. }
        ));
    }

    #[test]
    fn send_message_keeps_original_recipient_shape() {
        let request = SendMessage::new("a,b,c", "msg").unwrap();
        assert_eq!(request.recipients(), &Recipients::Single("a,b,c".to_owned()));
        assert_eq!(request.recipients().count(), 3);
        assert!(request.sender_name_override().is_none());
    }

    #[test]
    fn list_options_default_is_empty() {
        let options = MessageListOptions::default();
        assert!(options.limit.is_none());
        assert!(options.page.is_none());
        assert!(options.status.is_none());
    }

    #[test]
    fn raw_body_is_passed_through_and_optionally_parsed() {
        #[derive(Debug, Deserialize)]
        struct Account {
            account_name: String,
            credit_balance: u32,
        }

        let body = RawBody::new(r#"{"account_name":"Acme","credit_balance":42}"#.to_owned());
        assert_eq!(
            body.as_str(),
            r#"{"account_name":"Acme","credit_balance":42}"#
        );

        let account: Account = body.json().unwrap();
        assert_eq!(account.account_name, "Acme");
        assert_eq!(account.credit_balance, 42);

        let not_json = RawBody::new("<html>oops</html>".to_owned());
        assert!(not_json.json::<Account>().is_err());
        assert_eq!(not_json.to_string(), "<html>oops</html>");
    }
}
