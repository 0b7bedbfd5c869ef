//! Persistent application state

pub mod profile;

pub use profile::ProfileStore;
