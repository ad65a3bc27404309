//! # client
//!
//! Share factories backed by a real SMB client library

// -- unix client

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "unix")]
pub use unix::*;
