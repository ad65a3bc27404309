//! ## Mock
//!
//! Contains mock for test units

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use remotefs::fs::{File, FileType, Metadata, ReadStream, UnixPex, Welcome, WriteStream};
use remotefs::{RemoteError, RemoteErrorType, RemoteFs, RemoteResult};

use crate::auth::SmbAuth;
use crate::config::SmbSessionOptions;
use crate::connector::ShareFactory;

// -- logger

#[allow(dead_code)]
pub fn logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// -- share

/// In-memory share. Names ending with `/` are listed as directories.
#[derive(Debug, Default, Clone)]
pub struct MockShare {
    dirs: HashMap<String, Vec<File>>,
    failure: Option<RemoteErrorType>,
    listings: usize,
    last_listed: Option<PathBuf>,
}

impl MockShare {
    pub fn dir(mut self, path: &str, names: &[&str]) -> Self {
        let key = normalize(Path::new(path));
        let entries = names
            .iter()
            .map(|name| {
                let (name, file_type) = match name.strip_suffix('/') {
                    Some(dir) => (dir, FileType::Directory),
                    None => (*name, FileType::File),
                };
                File {
                    path: PathBuf::from("/").join(&key).join(name),
                    metadata: Metadata::default().file_type(file_type),
                }
            })
            .collect();
        self.dirs.insert(key, entries);
        self
    }

    /// Make every listing fail with `kind`
    pub fn failing(mut self, kind: RemoteErrorType) -> Self {
        self.failure = Some(kind);
        self
    }

    /// Number of `list_dir` calls served
    pub fn listings(&self) -> usize {
        self.listings
    }

    /// Path passed to the last `list_dir` call
    pub fn last_listed(&self) -> Option<&Path> {
        self.last_listed.as_deref()
    }

    fn find(&self, path: &Path) -> Option<&File> {
        let key = normalize(path);
        let parent = normalize(Path::new(&key).parent().unwrap_or_else(|| Path::new("")));
        self.dirs
            .get(&parent)
            .and_then(|entries| entries.iter().find(|f| normalize(f.path()) == key))
    }
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().trim_matches('/').to_string()
}

fn unsupported<T>() -> RemoteResult<T> {
    Err(RemoteError::new(RemoteErrorType::UnsupportedFeature))
}

impl RemoteFs for MockShare {
    fn connect(&mut self) -> RemoteResult<Welcome> {
        Ok(Welcome::default())
    }

    fn disconnect(&mut self) -> RemoteResult<()> {
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        true
    }

    fn pwd(&mut self) -> RemoteResult<PathBuf> {
        Ok(PathBuf::from("/"))
    }

    fn change_dir(&mut self, _dir: &Path) -> RemoteResult<PathBuf> {
        unsupported()
    }

    fn list_dir(&mut self, path: &Path) -> RemoteResult<Vec<File>> {
        self.listings += 1;
        self.last_listed = Some(path.to_path_buf());
        if let Some(kind) = self.failure {
            return Err(RemoteError::new_ex(kind, "mock failure"));
        }
        if let Some(entries) = self.dirs.get(&normalize(path)) {
            return Ok(entries.clone());
        }
        match MockShare::find(self, path) {
            Some(_) => Err(RemoteError::new_ex(
                RemoteErrorType::BadFile,
                "not a directory",
            )),
            None => Err(RemoteError::new(RemoteErrorType::NoSuchFileOrDirectory)),
        }
    }

    fn stat(&mut self, path: &Path) -> RemoteResult<File> {
        MockShare::find(self, path)
            .cloned()
            .ok_or_else(|| RemoteError::new(RemoteErrorType::NoSuchFileOrDirectory))
    }

    fn setstat(&mut self, _path: &Path, _metadata: Metadata) -> RemoteResult<()> {
        unsupported()
    }

    fn exists(&mut self, path: &Path) -> RemoteResult<bool> {
        Ok(self.dirs.contains_key(&normalize(path)) || MockShare::find(self, path).is_some())
    }

    fn remove_file(&mut self, _path: &Path) -> RemoteResult<()> {
        unsupported()
    }

    fn remove_dir(&mut self, _path: &Path) -> RemoteResult<()> {
        unsupported()
    }

    fn create_dir(&mut self, _path: &Path, _mode: UnixPex) -> RemoteResult<()> {
        unsupported()
    }

    fn symlink(&mut self, _path: &Path, _target: &Path) -> RemoteResult<()> {
        unsupported()
    }

    fn copy(&mut self, _src: &Path, _dest: &Path) -> RemoteResult<()> {
        unsupported()
    }

    fn mov(&mut self, _src: &Path, _dest: &Path) -> RemoteResult<()> {
        unsupported()
    }

    fn exec(&mut self, _cmd: &str) -> RemoteResult<(u32, String)> {
        unsupported()
    }

    fn append_file(
        &mut self,
        _path: &Path,
        _metadata: &Metadata,
        _reader: Box<dyn Read + Send>,
    ) -> RemoteResult<u64> {
        unsupported()
    }

    fn create_file(
        &mut self,
        _path: &Path,
        _metadata: &Metadata,
        _reader: Box<dyn Read + Send>,
    ) -> RemoteResult<u64> {
        unsupported()
    }

    fn open_file(&mut self, _path: &Path, _dest: Box<dyn Write + Send>) -> RemoteResult<u64> {
        unsupported()
    }

    fn append(&mut self, _path: &Path, _metadata: &Metadata) -> RemoteResult<WriteStream> {
        unsupported()
    }

    fn create(&mut self, _path: &Path, _metadata: &Metadata) -> RemoteResult<WriteStream> {
        unsupported()
    }

    fn open(&mut self, _path: &Path) -> RemoteResult<ReadStream> {
        unsupported()
    }
}

// -- factory

#[derive(Debug)]
enum FactoryMode {
    Reachable,
    Unreachable,
    Unavailable,
    Failing(RefCell<Option<RemoteError>>),
}

/// Share factory recording every session request
#[derive(Debug)]
pub struct MockFactory {
    share: MockShare,
    mode: FactoryMode,
    calls: RefCell<Vec<(String, SmbAuth, SmbSessionOptions)>>,
}

impl Default for MockFactory {
    fn default() -> Self {
        Self::with_share(MockShare::default())
    }
}

impl MockFactory {
    pub fn with_share(share: MockShare) -> Self {
        Self {
            share,
            mode: FactoryMode::Reachable,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Factory which never finds a server
    pub fn unreachable() -> Self {
        Self {
            mode: FactoryMode::Unreachable,
            ..Self::default()
        }
    }

    /// Factory whose backend is not installed
    pub fn unavailable() -> Self {
        Self {
            mode: FactoryMode::Unavailable,
            ..Self::default()
        }
    }

    /// Factory failing the first request with `err`
    pub fn failing(err: RemoteError) -> Self {
        Self {
            mode: FactoryMode::Failing(RefCell::new(Some(err))),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, SmbAuth, SmbSessionOptions)> {
        self.calls.borrow().clone()
    }
}

impl ShareFactory for MockFactory {
    type Session = MockShare;

    fn is_available(&self) -> bool {
        !matches!(self.mode, FactoryMode::Unavailable)
    }

    fn create_session(
        &self,
        host: &str,
        auth: &SmbAuth,
        options: &SmbSessionOptions,
    ) -> RemoteResult<Option<MockShare>> {
        self.calls
            .borrow_mut()
            .push((host.to_string(), auth.clone(), *options));
        match &self.mode {
            FactoryMode::Reachable | FactoryMode::Unavailable => Ok(Some(self.share.clone())),
            FactoryMode::Unreachable => Ok(None),
            FactoryMode::Failing(err) => match err.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(Some(self.share.clone())),
            },
        }
    }
}
