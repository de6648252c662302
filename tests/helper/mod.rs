pub mod fetcher;
pub mod server;

pub use fetcher::StubFetcher;
pub use server::{create_test_router, get};
