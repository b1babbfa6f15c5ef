pub mod rebind;
pub mod response_message;

pub use rebind::{FilteredMessageBuilder, RebindResponseFilter};
pub use response_message::DnsResponseMessage;
