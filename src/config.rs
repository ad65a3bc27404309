//! # config
//!
//! Credentials, protocol bounds and session options

use std::fmt;
use std::time::Duration;

/// Workgroup used when none is provided
pub const DEFAULT_WORKGROUP: &str = "WORKGROUP";
/// Timeout applied when opening a session
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Username and password used to authenticate against a share
#[derive(Default, Clone, PartialEq, Eq)]
pub struct SmbCredentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl SmbCredentials {
    pub fn new<S: AsRef<str>>(username: S, password: S) -> Self {
        Self {
            username: username.as_ref().to_string(),
            password: password.as_ref().to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns whether both username and password are set
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for SmbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmbCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// SMB protocol dialect family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SmbProtocol {
    Nt1,
    Smb2,
    Smb3,
}

impl fmt::Display for SmbProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nt1 => "NT1",
            Self::Smb2 => "SMB2",
            Self::Smb3 => "SMB3",
        };
        f.write_str(name)
    }
}

/// Minimum and maximum protocol negotiated with the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolRange {
    pub min: SmbProtocol,
    pub max: SmbProtocol,
}

impl Default for ProtocolRange {
    fn default() -> Self {
        Self {
            min: SmbProtocol::Nt1,
            max: SmbProtocol::Smb3,
        }
    }
}

impl ProtocolRange {
    pub fn new(min: SmbProtocol, max: SmbProtocol) -> Self {
        Self { min, max }
    }

    /// A range is usable only if `min` does not exceed `max`
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, protocol: SmbProtocol) -> bool {
        self.min <= protocol && protocol <= self.max
    }
}

impl fmt::Display for ProtocolRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Options handed to the share factory each time a session is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmbSessionOptions {
    pub protocols: ProtocolRange,
    pub timeout: Duration,
}

impl SmbSessionOptions {
    pub(crate) fn new(protocols: ProtocolRange) -> Self {
        Self {
            protocols,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
