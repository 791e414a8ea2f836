mod client;
mod response;

pub use client::{FetchFailure, FetchOutcome, PageClient};
pub use response::HttpResponse;
