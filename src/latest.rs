//! # latest
//!
//! Latest-file lookup: the entry whose name sorts last in a remote directory,
//! optionally restricted to an extension.

use std::path::Path;

use remotefs::{RemoteError, RemoteErrorType, RemoteFs, RemoteResult};

/// Return the name of the last entry of `dir`, sorting names in descending order.
///
/// `extension` is compared case-insensitively; an empty extension disables the filter.
/// `dir` is always resolved from the share root, whatever the working directory of `fs`.
/// A missing directory, or a path which is not a directory, is treated as an empty folder
/// and yields `Ok(None)`. Any other remote error is returned unchanged.
pub fn latest_file_name<F>(fs: &mut F, dir: &str, extension: &str) -> RemoteResult<Option<String>>
where
    F: RemoteFs + ?Sized,
{
    let dir = dir.trim_matches('/');
    trace!("looking for latest file in '{}' (extension '{}')", dir, extension);
    let entries = match fs.list_dir(&Path::new("/").join(dir)) {
        Ok(entries) => entries,
        Err(err) if is_missing_dir(&err) => {
            warn!("empty smb folder '{}': {}", dir, err);
            return Ok(None);
        }
        Err(err) => return Err(err),
    };
    let latest = select_latest(entries.iter().map(|f| f.name()), extension);
    match &latest {
        Some(name) => debug!("latest file in '{}' is {}", dir, name),
        None => info!("{} in '{}'", miss_reason(entries.len(), extension), dir),
    }
    Ok(latest)
}

/// Pick the highest name, in descending lexicographic order, whose extension matches.
pub fn select_latest<I, S>(names: I, extension: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let filter = normalize_extension(extension);
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort_unstable_by(|a, b| b.cmp(a));
    names
        .into_iter()
        .find(|name| matches_extension(name, filter.as_deref()))
}

fn is_missing_dir(err: &RemoteError) -> bool {
    matches!(
        err.kind,
        RemoteErrorType::NoSuchFileOrDirectory | RemoteErrorType::BadFile
    )
}

/// Why a listing of `listed` entries produced no file
fn miss_reason(listed: usize, extension: &str) -> String {
    match normalize_extension(extension) {
        _ if listed == 0 => "empty smb folder".to_string(),
        Some(extension) => format!("no file with extension '{}'", extension),
        None => "no file".to_string(),
    }
}

fn normalize_extension(extension: &str) -> Option<String> {
    let extension = extension.trim_start_matches('.');
    (!extension.is_empty()).then(|| extension.to_lowercase())
}

/// Text after the last dot of `name`; a dotfile such as `.log` has extension `log`
fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

fn matches_extension(name: &str, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(filter) => extension_of(name)
            .map(|ext| ext.to_lowercase() == filter)
            .unwrap_or(false),
    }
}
