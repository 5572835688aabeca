mod recording_transport;
mod reqwest_transport;

pub use recording_transport::*;
pub use reqwest_transport::*;
