//! # utils
//!
//! Path and SMB helpers for the libsmbclient backend

pub mod path;
pub mod smb;
