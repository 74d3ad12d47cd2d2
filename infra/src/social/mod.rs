//! Social provider integrations over HTTP.

mod http_fetcher;

pub use http_fetcher::HttpProfileFetcher;
