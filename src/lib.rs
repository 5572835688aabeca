pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AutocompleteClient, HttpTransport, AUTOCOMPLETE_PATH};

pub use connector::{RecordingTransport, ReqwestTransport};

pub use domain::{
    encode_query_component, serialize_query_params, AuthToken, AutocompleteParams,
    AutocompleteResponse, ClientConfig, DomainError, HttpMethod, HttpRequest, HttpResponse,
    Prediction, QueryParameters, StructuredFormatting, DOMAIN_ENV_VAR,
};
