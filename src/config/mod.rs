//! Client and endpoint configuration

mod client;
mod endpoint;

pub use client::ClientConfig;
pub use endpoint::{EndpointDescriptor, EndpointParams};
