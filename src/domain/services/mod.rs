mod query_string;

pub use query_string::*;
