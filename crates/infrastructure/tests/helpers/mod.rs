mod builders;

pub use builders::{shared_config, ResponseBuilder};
