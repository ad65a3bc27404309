//! # connector
//!
//! Connection configurator: holds credentials, protocol bounds and auth mode and
//! asks a [`ShareFactory`] for a fresh session on each `connect`.

use remotefs::{RemoteFs, RemoteResult};

use crate::auth::{AuthMode, SmbAuth};
use crate::config::{ProtocolRange, SmbCredentials, SmbSessionOptions, DEFAULT_WORKGROUP};
use crate::error::{SmbError, SmbResult};

/// Remote share service able to open sessions
pub trait ShareFactory {
    type Session: RemoteFs;

    /// Whether the client library backing this factory can be used
    fn is_available(&self) -> bool {
        true
    }

    /// Open a new session on `host`.
    /// Returns `Ok(None)` when no server could be reached.
    fn create_session(
        &self,
        host: &str,
        auth: &SmbAuth,
        options: &SmbSessionOptions,
    ) -> RemoteResult<Option<Self::Session>>;
}

/// Share connection configurator
#[derive(Debug, Clone)]
pub struct SmbConnector {
    host: Option<String>,
    credentials: Option<SmbCredentials>,
    workgroup: String,
    auth_mode: AuthMode,
    protocols: ProtocolRange,
}

impl SmbConnector {
    /// Create a connector. The auth mode is `Basic` if complete credentials are given,
    /// `Anonymous` otherwise; use [`SmbConnector::auth_mode`] to override it.
    pub fn new(credentials: Option<SmbCredentials>) -> Self {
        let auth_mode = AuthMode::detect(credentials.as_ref());
        Self {
            host: None,
            credentials,
            workgroup: DEFAULT_WORKGROUP.to_string(),
            auth_mode,
            protocols: ProtocolRange::default(),
        }
    }

    pub fn host<S: AsRef<str>>(mut self, host: S) -> Self {
        self.host = Some(host.as_ref().to_string());
        self
    }

    pub fn workgroup<S: AsRef<str>>(mut self, workgroup: S) -> Self {
        self.workgroup = workgroup.as_ref().to_string();
        self
    }

    /// Override the detected auth mode
    pub fn auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = mode;
        self
    }

    pub fn protocols(mut self, protocols: ProtocolRange) -> Self {
        self.protocols = protocols;
        self
    }

    pub fn get_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn get_credentials(&self) -> Option<&SmbCredentials> {
        self.credentials.as_ref()
    }

    pub fn get_workgroup(&self) -> &str {
        &self.workgroup
    }

    pub fn get_auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn get_protocols(&self) -> ProtocolRange {
        self.protocols
    }

    /// Open a new session through `factory`.
    ///
    /// Host, username, password and workgroup must all be set, whatever the auth mode.
    /// The session is not cached: each call opens a new one, and closing it is up to the caller.
    pub fn connect<F: ShareFactory>(&self, factory: &F) -> SmbResult<Option<F::Session>> {
        let (host, credentials) = self.validate()?;
        let options = SmbSessionOptions::new(self.protocols);
        let auth = match self.auth_mode {
            AuthMode::Basic => SmbAuth::Basic {
                username: credentials.username.clone(),
                workgroup: self.workgroup.clone(),
                password: credentials.password.clone(),
            },
            AuthMode::Kerberos => SmbAuth::Kerberos,
            AuthMode::Anonymous => SmbAuth::Anonymous,
        };
        debug!(
            "requesting session on {} with {:?} auth (protocols {}, timeout {:?})",
            host,
            auth.mode(),
            options.protocols,
            options.timeout
        );
        let session = factory.create_session(host, &auth, &options)?;
        if session.is_none() {
            warn!("no server available at {}", host);
        }
        Ok(session)
    }

    /// Fail with [`SmbError::Dependency`] if the factory backend cannot be used
    pub fn check_connector<F: ShareFactory>(&self, factory: &F) -> SmbResult<()> {
        if factory.is_available() {
            Ok(())
        } else {
            error!("smb client backend is not available");
            Err(SmbError::Dependency("smbclient".to_string()))
        }
    }

    /// Check that a session can be opened with the current configuration.
    /// No further authentication check is performed on the session.
    pub fn check_credential<F: ShareFactory>(&self, factory: &F) -> SmbResult<bool> {
        self.check_connector(factory)?;
        Ok(self.connect(factory)?.is_some())
    }

    // -- private

    fn validate(&self) -> SmbResult<(&str, &SmbCredentials)> {
        let host = self.host.as_deref().filter(|h| !h.is_empty());
        let credentials = self.credentials.as_ref();
        let mut missing = Vec::new();
        if host.is_none() {
            missing.push("host");
        }
        if credentials.map(|c| c.username.is_empty()).unwrap_or(true) {
            missing.push("username");
        }
        if credentials.map(|c| c.password.is_empty()).unwrap_or(true) {
            missing.push("password");
        }
        if self.workgroup.is_empty() {
            missing.push("workgroup");
        }
        if !self.protocols.is_valid() {
            error!("invalid protocol range {}", self.protocols);
            return Err(SmbError::Configuration(format!(
                "invalid protocol range {}",
                self.protocols
            )));
        }
        match (host, credentials) {
            (Some(host), Some(credentials)) if missing.is_empty() => Ok((host, credentials)),
            _ => {
                error!("missing connection parameters: {}", missing.join(", "));
                Err(SmbError::Configuration(missing.join(", ")))
            }
        }
    }
}
