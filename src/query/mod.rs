pub mod client;
pub mod response;
pub mod sparql;

pub use client::QueryClient;
pub use sparql::{MAX_WORKS, timeline_query};
