pub mod fetcher;

pub use fetcher::{FetchedPage, Fetcher};
