#![crate_name = "smb_latest"]
#![crate_type = "lib"]

//! # smb-latest
//!
//! smb-latest opens sessions on a SMB share with anonymous, basic or kerberos authentication
//! and looks up the latest file of a remote directory.
//! Sessions are [remotefs](https://github.com/remotefs-rs/remotefs-rs) clients.
//!
//! ## Get started
//!
//! ```toml
//! remotefs = "^0.3"
//! smb-latest = "^0.1"
//! ```
//!
//! these features are supported:
//!
//! - `find`: enable `find()` method for RemoteFs. (*enabled by default*)
//! - `no-log`: disable logging. By default, this library will log via the `log` crate.
//!
//! ### Latest file (UNIX)
//!
//! ```rust,no_run
//! use smb_latest::{latest_file_name, PavaoShareFactory, SmbConnector, SmbCredentials};
//!
//! let connector = SmbConnector::new(Some(SmbCredentials::new("test", "test")))
//!     .host("localhost:3445")
//!     .workgroup("pavao");
//! // a new session is opened on each connect
//! let mut session = connector
//!     .connect(&PavaoShareFactory::new("/temp"))
//!     .unwrap()
//!     .expect("no server");
//! // latest `.log` file in /reports, by name
//! let latest = latest_file_name(&mut session, "/reports/", "log").unwrap();
//! println!("{}", latest.unwrap_or_default());
//! ```
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

// -- crates
#[macro_use]
extern crate log;

mod auth;
mod client;
mod config;
mod connector;
mod error;
mod latest;

pub use auth::{AuthMode, SmbAuth};
#[cfg(target_family = "unix")]
pub use client::{PavaoShareFactory, SmbSession};
pub use config::{
    ProtocolRange, SmbCredentials, SmbProtocol, SmbSessionOptions, DEFAULT_TIMEOUT,
    DEFAULT_WORKGROUP,
};
pub use connector::{ShareFactory, SmbConnector};
pub use error::{SmbError, SmbResult};
pub use latest::{latest_file_name, select_latest};

// -- utils
#[cfg(target_family = "unix")]
pub(crate) mod utils;
// -- mock
#[cfg(test)]
pub(crate) mod mock;
