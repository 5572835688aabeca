use clap::{Args, Subcommand};
use serde_json::Number;

use crate::domain::{number_from_f64, AutocompleteParams};

#[derive(Subcommand)]
pub enum Commands {
    /// Query the autocomplete endpoint and print the predictions
    Autocomplete {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the raw JSON response instead of a prediction list
        #[arg(long)]
        raw: bool,
    },

    /// Print the request URL without sending anything
    Url {
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Text to complete
    pub input: String,

    /// Pipe-separated component filters, e.g. country:fr|country:be
    #[arg(long)]
    pub components: Option<String>,

    #[arg(short = 'L', long)]
    pub language: Option<String>,

    /// Bias point as lat,lng
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub offset: Option<u32>,

    /// Bias radius in meters
    #[arg(long)]
    pub radius: Option<f64>,

    #[arg(long)]
    pub sessiontoken: Option<String>,

    #[arg(long)]
    pub strictbounds: bool,

    #[arg(long)]
    pub types: Option<String>,

    /// Extra query parameter as name=value; overrides the options above
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

impl QueryArgs {
    pub fn to_params(&self) -> AutocompleteParams {
        let mut params = AutocompleteParams::new(self.input.clone());
        params.components = self.components.clone();
        params.language = self.language.clone();
        params.location = self.location.clone();
        params.offset = self.offset.map(Number::from);
        params.radius = self.radius.and_then(number_from_f64);
        params.sessiontoken = self.sessiontoken.clone();
        params.strictbounds = self.strictbounds.then_some(true);
        params.types = self.types.clone();
        params.extra_query_parameters = self.params.iter().cloned().collect();
        params
    }
}

/// Parses `name=value`; the value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", s)),
    }
}
