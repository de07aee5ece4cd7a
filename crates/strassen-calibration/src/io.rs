//! Profile persistence (load/save).

use std::path::{Path, PathBuf};

use crate::profile::CalibrationProfile;

const PROFILE_FILENAME: &str = "strassen_calibration.json";
const CONFIG_DIR_NAME: &str = "strassen";

/// Load a usable calibration profile from the standard location.
/// Tries the XDG config dir first, then the working directory.
#[must_use]
pub fn load_profile() -> Option<CalibrationProfile> {
    xdg_profile_path()
        .into_iter()
        .chain(std::iter::once(cwd_profile_path()))
        .filter(|path| path.exists())
        .find_map(|path| load_validated(&path))
}

/// Load a profile from `path` and reject it if incompatible or invalid.
#[must_use]
pub fn load_validated(path: &Path) -> Option<CalibrationProfile> {
    let p = load_from_path(path)?;

    if !p.is_compatible() {
        tracing::warn!(path = %path.display(), "profile version mismatch, ignoring");
        return None;
    }
    if !p.is_valid() {
        tracing::warn!(path = %path.display(), "profile has invalid thresholds, ignoring");
        return None;
    }

    tracing::info!(
        path = %path.display(),
        strassen_threshold = p.strassen_threshold,
        parallel_threshold = p.parallel_threshold,
        "loaded calibration profile"
    );
    Some(p)
}

/// Save the profile to the XDG config directory.
/// Falls back to the working directory if no config dir is known.
pub fn save_profile(p: &CalibrationProfile) -> std::io::Result<PathBuf> {
    let path = if let Some(xdg_path) = xdg_profile_path() {
        if let Some(parent) = xdg_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        xdg_path
    } else {
        cwd_profile_path()
    };

    save_to_path(p, &path)?;
    Ok(path)
}

/// Save the profile to a specific path.
pub fn save_to_path(p: &CalibrationProfile, path: &Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(p).map_err(std::io::Error::other)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "saved calibration profile");
    Ok(())
}

/// Read a profile from `path`, or `None` if missing or malformed.
#[must_use]
pub fn load_from_path(path: &Path) -> Option<CalibrationProfile> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn xdg_profile_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PROFILE_FILENAME))
}

fn cwd_profile_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{PROFILE_FILENAME}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_to_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let p = CalibrationProfile {
            strassen_threshold: 48,
            ..CalibrationProfile::default()
        };
        save_to_path(&p, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), p);
        assert_eq!(load_validated(&path).unwrap().strassen_threshold, 48);
    }

    #[test]
    fn load_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_from_path(&dir.path().join("absent.json")).is_none());
    }

    #[test]
    fn load_invalid_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"not json").unwrap();
        assert!(load_from_path(&path).is_none());
    }

    #[test]
    fn load_validated_rejects_old_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let p = CalibrationProfile {
            version: 999,
            ..CalibrationProfile::default()
        };
        save_to_path(&p, &path).unwrap();
        assert!(load_from_path(&path).is_some());
        assert!(load_validated(&path).is_none());
    }

    #[test]
    fn load_validated_rejects_bad_thresholds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let p = CalibrationProfile {
            strassen_threshold: 0,
            ..CalibrationProfile::default()
        };
        save_to_path(&p, &path).unwrap();
        assert!(load_validated(&path).is_none());
    }

    #[test]
    fn cwd_profile_path_ends_with_filename() {
        let path = cwd_profile_path();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.contains(PROFILE_FILENAME));
    }
}
