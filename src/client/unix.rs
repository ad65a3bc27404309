//! # UNIX client
//!
//! libsmbclient-backed share factory and session, built on pavao

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use pavao::{SmbClient, SmbDirentType, SmbOpenOptions, SmbOptions};
use remotefs::fs::{File, Metadata, ReadStream, UnixPex, Welcome, WriteStream};
use remotefs::{RemoteError, RemoteErrorType, RemoteFs, RemoteResult};

use crate::auth::SmbAuth;
use crate::config::SmbSessionOptions;
use crate::connector::ShareFactory;
use crate::utils::{path as path_utils, smb as smb_utils};

/// Opens [`SmbSession`]s on a share through libsmbclient
#[derive(Debug, Clone)]
pub struct PavaoShareFactory {
    share: String,
    case_sensitive: bool,
}

impl PavaoShareFactory {
    pub fn new<S: AsRef<str>>(share: S) -> Self {
        Self {
            share: share.as_ref().to_string(),
            case_sensitive: false,
        }
    }

    /// Whether paths on the share are case sensitive
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    fn smb_options(&self) -> SmbOptions {
        SmbOptions::default()
            .case_sensitive(self.case_sensitive)
            .one_share_per_server(true)
    }
}

impl ShareFactory for PavaoShareFactory {
    type Session = SmbSession;

    fn create_session(
        &self,
        host: &str,
        auth: &SmbAuth,
        options: &SmbSessionOptions,
    ) -> RemoteResult<Option<SmbSession>> {
        let server = smb_utils::server_uri(host);
        // libsmbclient reads protocol bounds and timeouts from smb.conf
        debug!(
            "opening session on {}{} (protocols {}, timeout {:?})",
            server, self.share, options.protocols, options.timeout
        );
        let (credentials, smb_options) =
            smb_utils::auth_to_pavao(&server, &self.share, auth, self.smb_options());
        let client = SmbClient::new(credentials, smb_options)
            .map_err(|e| RemoteError::new_ex(RemoteErrorType::BadAddress, e))?;
        let mut session = SmbSession::from(client);
        match session.connect() {
            Ok(_) => {
                info!("connected to {}{}", server, self.share);
                Ok(Some(session))
            }
            Err(err) => {
                warn!("no server at {}: {}", server, err);
                Ok(None)
            }
        }
    }
}

/// Read-only session on a SMB share
pub struct SmbSession {
    client: SmbClient,
    wrkdir: PathBuf,
}

impl From<SmbClient> for SmbSession {
    fn from(client: SmbClient) -> Self {
        Self {
            client,
            wrkdir: PathBuf::from("/"),
        }
    }
}

impl SmbSession {
    /// Return a reference to the inner `pavao::SmbClient`
    pub fn client(&self) -> &SmbClient {
        &self.client
    }

    // -- private

    fn check_connection(&self) -> RemoteResult<()> {
        trace!("checking connection...");
        match self.client.get_user() {
            Err(e) => {
                error!("connection ERROR: {}", e);
                Err(RemoteError::new_ex(RemoteErrorType::ConnectionError, e))
            }
            Ok(_) => {
                trace!("connection OK");
                Ok(())
            }
        }
    }

    fn get_uri<P: AsRef<Path>>(&self, p: P) -> String {
        let p = path_utils::absolutize(self.wrkdir.as_path(), p.as_ref());
        p.to_string_lossy().to_string()
    }

    fn read_only<T>(&self, op: &str) -> RemoteResult<T> {
        debug!("{} is not supported on a read-only session", op);
        Err(RemoteError::new(RemoteErrorType::UnsupportedFeature))
    }
}

impl RemoteFs for SmbSession {
    fn connect(&mut self) -> RemoteResult<Welcome> {
        self.check_connection()?;
        Ok(Welcome::default())
    }

    fn disconnect(&mut self) -> RemoteResult<()> {
        self.check_connection()
    }

    fn is_connected(&mut self) -> bool {
        self.check_connection().is_ok()
    }

    fn pwd(&mut self) -> RemoteResult<PathBuf> {
        self.check_connection().map(|_| self.wrkdir.clone())
    }

    fn change_dir(&mut self, dir: &Path) -> RemoteResult<PathBuf> {
        let dir = path_utils::absolutize(self.wrkdir.as_path(), dir);
        trace!("changing directory to {}", dir.display());
        if self.stat(dir.as_path())?.is_dir() {
            self.wrkdir = dir;
            debug!("new working directory: {}", self.wrkdir.display());
            Ok(self.wrkdir.clone())
        } else {
            error!("cannot enter directory {}. Not a directory", dir.display());
            Err(RemoteError::new_ex(
                RemoteErrorType::BadFile,
                "not a directory",
            ))
        }
    }

    fn list_dir(&mut self, path: &Path) -> RemoteResult<Vec<File>> {
        if !self.stat(path)?.is_dir() {
            return Err(RemoteError::new_ex(
                RemoteErrorType::BadFile,
                "not a directory",
            ));
        }
        let uri = self.get_uri(path);
        trace!("listing files at {}", uri);
        let dirents = self
            .client
            .list_dir(uri.as_str())
            .map_err(|e| RemoteError::new_ex(RemoteErrorType::StatFailed, e))?;
        Ok(dirents
            .into_iter()
            .filter_map(|d| match d.get_type() {
                SmbDirentType::File | SmbDirentType::Dir => Some(smb_utils::dirent_to_file(
                    &uri,
                    d.name(),
                    d.get_type() == SmbDirentType::Dir,
                )),
                _ => None,
            })
            .collect())
    }

    fn stat(&mut self, path: &Path) -> RemoteResult<File> {
        self.check_connection()?;
        let path = self.get_uri(path);
        trace!("get stat for {}", path);
        self.client
            .stat(path.as_str())
            .map_err(smb_utils::stat_error)
            .map(|stat| smb_utils::smbstat_to_file(path, stat))
    }

    fn setstat(&mut self, _path: &Path, _metadata: Metadata) -> RemoteResult<()> {
        self.read_only("setstat")
    }

    fn exists(&mut self, path: &Path) -> RemoteResult<bool> {
        trace!("checking if {} exists...", path.display());
        match self.stat(path) {
            Ok(_) => Ok(true),
            Err(RemoteError {
                kind: RemoteErrorType::NoSuchFileOrDirectory | RemoteErrorType::BadFile,
                ..
            }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn remove_file(&mut self, _path: &Path) -> RemoteResult<()> {
        self.read_only("remove_file")
    }

    fn remove_dir(&mut self, _path: &Path) -> RemoteResult<()> {
        self.read_only("remove_dir")
    }

    fn create_dir(&mut self, _path: &Path, _mode: UnixPex) -> RemoteResult<()> {
        self.read_only("create_dir")
    }

    fn symlink(&mut self, _path: &Path, _target: &Path) -> RemoteResult<()> {
        self.read_only("symlink")
    }

    fn copy(&mut self, _src: &Path, _dest: &Path) -> RemoteResult<()> {
        self.read_only("copy")
    }

    fn mov(&mut self, _src: &Path, _dest: &Path) -> RemoteResult<()> {
        self.read_only("mov")
    }

    fn exec(&mut self, _cmd: &str) -> RemoteResult<(u32, String)> {
        Err(RemoteError::new(RemoteErrorType::UnsupportedFeature))
    }

    fn append_file(
        &mut self,
        _path: &Path,
        _metadata: &Metadata,
        _reader: Box<dyn Read + Send>,
    ) -> RemoteResult<u64> {
        self.read_only("append_file")
    }

    fn create_file(
        &mut self,
        _path: &Path,
        _metadata: &Metadata,
        _reader: Box<dyn Read + Send>,
    ) -> RemoteResult<u64> {
        self.read_only("create_file")
    }

    fn open_file(&mut self, path: &Path, mut dest: Box<dyn Write + Send>) -> RemoteResult<u64> {
        self.check_connection()?;
        let path = self.get_uri(path);
        trace!("opening file at {} for read", path);
        let mut file = self
            .client
            .open_with(path, SmbOpenOptions::default().read(true))
            .map_err(|e| RemoteError::new_ex(RemoteErrorType::CouldNotOpenFile, e))?;
        io::copy(&mut file, &mut dest).map_err(|e| RemoteError::new_ex(RemoteErrorType::IoError, e))
    }

    fn append(&mut self, _path: &Path, _metadata: &Metadata) -> RemoteResult<WriteStream> {
        self.read_only("append")
    }

    fn create(&mut self, _path: &Path, _metadata: &Metadata) -> RemoteResult<WriteStream> {
        self.read_only("create")
    }

    fn open(&mut self, _path: &Path) -> RemoteResult<ReadStream> {
        Err(RemoteError::new(RemoteErrorType::UnsupportedFeature))
    }
}
