pub mod config;
pub mod error;
pub mod http;
pub mod loaders;
pub mod models;
pub mod page;
pub mod server;

pub use error::{HomepageError, Result};
pub use http::{FetchFailure, FetchOutcome, PageClient};
pub use server::Server;
