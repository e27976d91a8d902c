//! Filesystem loader for validation profiles.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::binding::{error::ProfileError, profile::ValidationProfile};

/// Reads and builds the JSON validation profile at `path`.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] when the file cannot be read, and any error
/// from [`ValidationProfile::from_json_str`] when its contents are invalid.
pub fn load_profile(path: &Utf8Path) -> Result<ValidationProfile, ProfileError> {
    let (dir, file_name) = open_parent_dir(path)?;
    let contents = dir
        .read_to_string(file_name)
        .map_err(|err| ProfileError::io(path, err))?;
    let profile = ValidationProfile::from_json_str(&contents)?;
    tracing::debug!(
        path = %path,
        framework_types = profile.types().framework_types().len(),
        "loaded validation profile"
    );
    Ok(profile)
}

/// Like [`load_profile`], but returns the default profile when the file
/// does not exist.
///
/// # Errors
///
/// Returns any error from [`load_profile`] other than a missing file.
pub fn load_profile_or_default(path: &Utf8Path) -> Result<ValidationProfile, ProfileError> {
    match load_profile(path) {
        Err(ProfileError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "validation profile not found, using defaults");
            Ok(ValidationProfile::default())
        }
        result => result,
    }
}

fn open_parent_dir(path: &Utf8Path) -> Result<(Dir, &str), ProfileError> {
    let file_name = path.file_name().ok_or_else(|| {
        ProfileError::io(path, std::io::Error::other("path must include a file name"))
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| ProfileError::io(path, err))?;
    Ok((dir, file_name))
}
