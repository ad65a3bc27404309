//! # smb utils
//!
//! Conversions between this crate, pavao and remotefs types

use std::io;
use std::path::PathBuf;

use libc::mode_t;
use pavao::{SmbCredentials, SmbError, SmbOptions, SmbStat};
use remotefs::fs::{FileType, Metadata, UnixPex};
use remotefs::{File, RemoteError, RemoteErrorType};

use crate::auth::SmbAuth;

/// Build the `smb://` uri for `host`
pub fn server_uri(host: &str) -> String {
    if host.starts_with("smb://") {
        host.to_string()
    } else {
        format!("smb://{}", host)
    }
}

/// Convert an auth object into pavao credentials and options
pub fn auth_to_pavao(
    server: &str,
    share: &str,
    auth: &SmbAuth,
    options: SmbOptions,
) -> (SmbCredentials, SmbOptions) {
    let credentials = SmbCredentials::default().server(server).share(share);
    match auth {
        SmbAuth::Basic {
            username,
            workgroup,
            password,
        } => (
            credentials
                .username(username)
                .password(password)
                .workgroup(workgroup),
            options,
        ),
        SmbAuth::Kerberos => (credentials, options.use_kerberos(true)),
        SmbAuth::Anonymous => (credentials, options),
    }
}

/// Convert a stat failure into a `RemoteError`.
/// Only a missing path or a non-directory path component get their own kind.
pub fn stat_error(err: SmbError) -> RemoteError {
    let kind = match &err {
        SmbError::Io(e) if e.kind() == io::ErrorKind::NotFound => {
            RemoteErrorType::NoSuchFileOrDirectory
        }
        SmbError::Io(e) if e.raw_os_error() == Some(libc::ENOTDIR) => RemoteErrorType::BadFile,
        _ => RemoteErrorType::StatFailed,
    };
    RemoteError::new_ex(kind, err)
}

/// Convert a directory entry into a `File` without stat-ing it
pub fn dirent_to_file(dir: &str, name: &str, is_dir: bool) -> File {
    let file_type = if is_dir {
        FileType::Directory
    } else {
        FileType::File
    };
    File {
        path: PathBuf::from(format!("{}/{}", dir.trim_end_matches('/'), name)),
        metadata: Metadata::default().file_type(file_type),
    }
}

/// Convert `SmbStat` to `File`
pub fn smbstat_to_file<S: AsRef<str>>(uri: S, stat: SmbStat) -> File {
    let mode = mode_t::from(stat.mode);
    File {
        path: PathBuf::from(uri.as_ref()),
        metadata: Metadata::default()
            .accessed(stat.accessed)
            .created(stat.created)
            .file_type(get_file_type_from_stat(&stat))
            .gid(stat.gid)
            .mode(UnixPex::from(mode as u32))
            .modified(stat.modified)
            .size(stat.size)
            .uid(stat.uid),
    }
}

fn get_file_type_from_stat(stat: &SmbStat) -> FileType {
    match stat.mode {
        mode if mode.is_dir() => FileType::Directory,
        mode if mode.is_symlink() => FileType::Symlink,
        _ => FileType::File,
    }
}
