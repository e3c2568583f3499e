//! Resolution of `file:` URLs into platform-native filesystem paths.
//!
//! Pure string transformation: no existence checks, no I/O. The only
//! platform-sensitive rule is the leading-separator artifact of host-less
//! drive-letter URLs: `file:///c:/app/style.less` percent-decodes to
//! `/c:/app/style.less`, and on a drive-letter platform the first
//! character must be dropped to recover a usable native path.

use std::path::PathBuf;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::ResolveError;

/// Path convention of the platform the host runs on.
///
/// Kept explicit (rather than read from `cfg` at the use site) so both
/// behaviors stay testable on any build host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Native paths start with a drive letter (`c:/...`).
    DriveLetter,
    /// Native paths start at the root separator.
    Posix,
}

impl Platform {
    /// The convention of the current build target.
    pub fn native() -> Self {
        if cfg!(windows) {
            Platform::DriveLetter
        } else {
            Platform::Posix
        }
    }
}

/// Resolves a `file:` URL string to an absolute native path.
///
/// Percent-decodes the URL's path component. On [`Platform::DriveLetter`],
/// if the host segment is empty or whitespace-only, strips exactly the
/// first character of the decoded path; every other combination returns
/// the decoded path unchanged.
pub fn resolve_file_url(url: &str, platform: Platform) -> Result<PathBuf, ResolveError> {
    let parsed = Url::parse(url).map_err(|source| ResolveError::Parse {
        url: url.to_string(),
        source,
    })?;

    let decoded = percent_decode_str(parsed.path())
        .decode_utf8()
        .map_err(|_| ResolveError::Decode {
            url: url.to_string(),
        })?;

    let host_is_empty = parsed.host_str().map_or(true, |h| h.trim().is_empty());

    let path = if platform == Platform::DriveLetter && host_is_empty {
        decoded.chars().skip(1).collect::<String>()
    } else {
        decoded.into_owned()
    };

    Ok(PathBuf::from(path))
}
