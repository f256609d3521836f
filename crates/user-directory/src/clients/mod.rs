//! Type-safe wrappers around the generic `ResourceClient`.

pub mod directory_client;

pub use directory_client::DirectoryClient;
