mod dns_response;
mod filtered_response_builder;

pub use dns_response::DnsResponseView;
pub use filtered_response_builder::FilteredResponseBuilder;
