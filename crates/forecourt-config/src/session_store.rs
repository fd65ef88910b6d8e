// ── Durable session storage ──
//
// Production `SessionStore`: the bearer token lives in the system
// keyring, the user profile as JSON next to the config file. The two
// halves are stored and cleared together; a missing half reads as no
// session.

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use forecourt_core::model::User;
use forecourt_core::{Error, SessionStore};

const TOKEN_USER: &str = "session-token";

pub struct FileSessionStore {
    keyring_service: String,
    profile_path: PathBuf,
}

impl FileSessionStore {
    /// Store under the standard platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_paths("forecourt", crate::project_dir().join("session.json"))
    }

    /// Store under explicit locations (tests, alternate installs).
    #[must_use]
    pub fn with_paths(keyring_service: impl Into<String>, profile_path: PathBuf) -> Self {
        Self {
            keyring_service: keyring_service.into(),
            profile_path,
        }
    }

    fn entry(&self) -> Result<keyring::Entry, Error> {
        keyring::Entry::new(&self.keyring_service, TOKEN_USER)
            .map_err(|e| Error::Session(format!("keyring unavailable: {e}")))
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<(SecretString, User)>, Error> {
        let raw = match std::fs::read_to_string(&self.profile_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Session(format!("reading profile: {e}"))),
        };
        let profile: User = serde_json::from_str(&raw)
            .map_err(|e| Error::Session(format!("corrupt profile: {e}")))?;

        let token = match self.entry()?.get_password() {
            Ok(token) => SecretString::from(token),
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(e) => return Err(Error::Session(format!("reading token: {e}"))),
        };

        debug!(path = %self.profile_path.display(), "session loaded");
        Ok(Some((token, profile)))
    }

    fn save(&self, token: &SecretString, profile: &User) -> Result<(), Error> {
        if let Some(parent) = self.profile_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Session(format!("creating config dir: {e}")))?;
        }
        let raw = serde_json::to_string_pretty(profile)
            .map_err(|e| Error::Session(format!("serializing profile: {e}")))?;
        std::fs::write(&self.profile_path, raw)
            .map_err(|e| Error::Session(format!("writing profile: {e}")))?;

        self.entry()?
            .set_password(token.expose_secret())
            .map_err(|e| Error::Session(format!("storing token: {e}")))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        match std::fs::remove_file(&self.profile_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::Session(format!("removing profile: {e}"))),
        }
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(Error::Session(format!("removing token: {e}"))),
        }
    }
}
