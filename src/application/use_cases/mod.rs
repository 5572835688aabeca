mod autocomplete_client;

pub use autocomplete_client::*;
