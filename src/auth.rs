//! # auth
//!
//! Authentication modes and the credential objects sent to the share factory

use std::fmt;

use crate::config::SmbCredentials;

/// Credential scheme used to authenticate a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMode {
    Anonymous,
    Basic,
    /// Ticket-based authentication; not negotiated by this crate yet
    Kerberos,
}

impl AuthMode {
    /// `Basic` when a complete username/password pair is provided, otherwise `Anonymous`
    pub fn detect(credentials: Option<&SmbCredentials>) -> Self {
        match credentials {
            Some(credentials) if credentials.is_complete() => Self::Basic,
            _ => Self::Anonymous,
        }
    }
}

/// Authentication object passed to the share factory
#[derive(Clone, PartialEq, Eq)]
pub enum SmbAuth {
    Anonymous,
    Basic {
        username: String,
        workgroup: String,
        password: String,
    },
    Kerberos,
}

impl SmbAuth {
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::Anonymous => AuthMode::Anonymous,
            Self::Basic { .. } => AuthMode::Basic,
            Self::Kerberos => AuthMode::Kerberos,
        }
    }
}

impl fmt::Debug for SmbAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Basic {
                username,
                workgroup,
                ..
            } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("workgroup", workgroup)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Kerberos => f.write_str("Kerberos"),
        }
    }
}
