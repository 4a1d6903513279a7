pub mod config;
pub mod logging;

pub mod artifact;
pub mod batch;
pub mod error;
pub mod http;
pub mod keys;
pub mod source;
