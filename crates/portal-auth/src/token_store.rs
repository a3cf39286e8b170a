use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::token::OAuthToken;

const DEFAULT_KEYRING_SERVICE: &str = "stem-portal";
const KEYRING_USER: &str = "google-oauth";
const CREDENTIALS_DIR: &str = ".stem-portal";
const CREDENTIALS_FILE_NAME: &str = "credentials.json";

/// Where a stored token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::File => "file",
        }
    }
}

/// Keyring service name. `PORTAL_KEYRING_SERVICE` overrides it so tests
/// never touch real credentials.
fn keyring_service() -> String {
    std::env::var("PORTAL_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

fn encode(token: &OAuthToken) -> Result<String, AuthError> {
    serde_json::to_string(token)
        .map_err(|e| AuthError::TokenStoreError(format!("serialize token: {e}")))
}

fn decode(raw: &str) -> Option<OAuthToken> {
    match serde_json::from_str(raw) {
        Ok(token) => Some(token),
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable stored token");
            None
        }
    }
}

/// Store a token in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(token: &OAuthToken) -> Result<(), AuthError> {
    let raw = encode(token)?;
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(&raw) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_at(&credentials_path()?, token)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_at(&credentials_path()?, token)
        }
    }
}

/// Load a token. Priority: keyring → file (`~/.stem-portal/credentials.json`).
#[must_use]
pub fn load() -> Option<OAuthToken> {
    load_with_source().map(|(token, _)| token)
}

/// Load a token together with the tier it came from.
#[must_use]
pub fn load_with_source() -> Option<(OAuthToken, TokenSource)> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(raw) = entry.get_password()
        && !raw.is_empty()
        && let Some(token) = decode(&raw)
    {
        return Some((token, TokenSource::Keyring));
    }

    let path = credentials_path().ok()?;
    load_at(&path).map(|token| (token, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Missing entries are fine.
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }
    delete_at(&credentials_path()?)
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found, cannot store credentials".into())
        })
}

pub(crate) fn store_at(path: &Path, token: &OAuthToken) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, encode(token)?)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

pub(crate) fn load_at(path: &Path) -> Option<OAuthToken> {
    fs::read_to_string(path)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .and_then(|raw| decode(&raw))
}

pub(crate) fn delete_at(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}
