mod autocomplete_params;
mod autocomplete_response;
mod client_config;
mod http;
mod query_parameters;

pub use autocomplete_params::*;
pub use autocomplete_response::*;
pub use client_config::*;
pub use http::*;
pub use query_parameters::*;
