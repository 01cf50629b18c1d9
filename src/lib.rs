pub mod config;
pub mod db;
pub mod fixture;
pub mod logger;
pub mod summary;

pub use fixture::build_fixture;
pub use summary::Summary;
