//! Transport layer: endpoint routing and wire-format details (no I/O).

mod endpoint;
mod messages;

pub use endpoint::Endpoint;
pub use messages::{encode_list_messages_query, encode_message_query, encode_send_message_form};
