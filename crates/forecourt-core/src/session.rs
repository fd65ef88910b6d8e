// ── Session context ──
//
// Single owner of "who is signed in": the bearer token plus the user
// profile, restored from durable storage at startup and published to
// observers over a `watch` channel. Storage is behind a trait so the
// platform layer decides where tokens actually live.

use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::watch;
use tracing::{info, warn};

use forecourt_api::ApiClient;

use crate::error::Error;
use crate::model::{Role, User};

/// Durable storage for the signed-in identity. Token and profile are
/// persisted as a pair; a missing half means no session.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<(SecretString, User)>, Error>;
    fn save(&self, token: &SecretString, profile: &User) -> Result<(), Error>;
    fn clear(&self) -> Result<(), Error>;
}

/// In-memory storage, for tests and ephemeral use.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: std::sync::Mutex<Option<(SecretString, User)>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<(SecretString, User)>, Error> {
        Ok(self
            .inner
            .lock()
            .map_err(|_| Error::Session("poisoned".to_owned()))?
            .clone())
    }

    fn save(&self, token: &SecretString, profile: &User) -> Result<(), Error> {
        *self
            .inner
            .lock()
            .map_err(|_| Error::Session("poisoned".to_owned()))? =
            Some((token.clone(), profile.clone()));
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        *self
            .inner
            .lock()
            .map_err(|_| Error::Session("poisoned".to_owned()))? = None;
        Ok(())
    }
}

/// Where a freshly signed-in user should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingView {
    Dashboard,
    TechnicianTasks,
}

impl LandingView {
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Technician => Self::TechnicianTasks,
            _ => Self::Dashboard,
        }
    }
}

#[derive(Clone)]
pub struct SessionData {
    pub token: SecretString,
    pub profile: Arc<User>,
}

/// The one session context. All sign-in state flows through here;
/// nothing else reads or writes the token store.
pub struct Session {
    storage: Box<dyn SessionStore>,
    current: watch::Sender<Option<SessionData>>,
}

impl Session {
    #[must_use]
    pub fn new(storage: Box<dyn SessionStore>) -> Self {
        let (current, _) = watch::channel(None);
        Self { storage, current }
    }

    /// Restore a persisted session, if any. Returns whether one was
    /// found.
    pub fn restore(&self) -> Result<bool, Error> {
        match self.storage.load()? {
            Some((token, profile)) => {
                info!(user = %profile.email, "session restored");
                // send_replace: a plain send drops the value when no
                // receiver is subscribed yet.
                self.current.send_replace(Some(SessionData {
                    token,
                    profile: Arc::new(profile),
                }));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persist and publish a new session.
    pub fn establish(&self, token: SecretString, profile: User) -> Result<(), Error> {
        self.storage.save(&token, &profile)?;
        self.current.send_replace(Some(SessionData {
            token,
            profile: Arc::new(profile),
        }));
        Ok(())
    }

    /// Drop the session from memory and durable storage.
    pub fn clear(&self) -> Result<(), Error> {
        self.storage.clear()?;
        self.current.send_replace(None);
        Ok(())
    }

    #[must_use]
    pub fn profile(&self) -> Option<Arc<User>> {
        self.current.borrow().as_ref().map(|s| Arc::clone(&s.profile))
    }

    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Landing view for the current user. Requires a session.
    pub fn landing_view(&self) -> Result<LandingView, Error> {
        self.profile()
            .map(|p| LandingView::for_role(p.role))
            .ok_or(Error::NotAuthenticated)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SessionData>> {
        self.current.subscribe()
    }
}

/// Sign in against the API and establish the session.
pub async fn sign_in(
    client: &ApiClient,
    session: &Session,
    email: &str,
    password: &SecretString,
) -> Result<User, Error> {
    let response = client.login(email, password).await?;
    let profile = User::from(response.user);
    session.establish(SecretString::from(response.token), profile.clone())?;
    info!(user = %profile.email, "signed in");
    Ok(profile)
}

/// Sign out: server-side invalidation is best-effort, local state is
/// cleared regardless.
pub async fn sign_out(client: &ApiClient, session: &Session) -> Result<(), Error> {
    if let Err(err) = client.logout().await {
        warn!(error = %err, "server-side logout failed");
    }
    session.clear()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ResourceId, UserStatus};

    fn profile(role: Role) -> User {
        User {
            id: ResourceId::from(1u64),
            first_name: "Dana".to_owned(),
            last_name: "Reyes".to_owned(),
            email: "dana@forecourt.example".to_owned(),
            phone: None,
            role,
            status: UserStatus::Active,
            station: None,
            join_date: None,
            avatar: None,
        }
    }

    #[test]
    fn establish_then_restore_round_trips() {
        let store = MemorySessionStore::default();
        let session = Session::new(Box::new(store));
        session
            .establish(SecretString::from("tok-1"), profile(Role::Manager))
            .unwrap();
        assert!(session.is_authenticated());

        // A second context over the same storage would restore it; here
        // we clear the in-memory half and restore from the store.
        session.current.send_replace(None);
        assert!(!session.is_authenticated());
        assert!(session.restore().unwrap());
        assert_eq!(session.profile().unwrap().email, "dana@forecourt.example");
    }

    #[test]
    fn establish_is_visible_without_subscribers() {
        // Nothing holds a receiver here; the accessors must still see
        // the session immediately after establish.
        let session = Session::new(Box::new(MemorySessionStore::default()));
        session
            .establish(SecretString::from("tok-1"), profile(Role::Technician))
            .unwrap();

        assert!(session.is_authenticated());
        assert!(session.token().is_some());
        assert_eq!(
            session.landing_view().unwrap(),
            LandingView::TechnicianTasks
        );
    }

    #[test]
    fn clear_removes_both_halves() {
        let session = Session::new(Box::new(MemorySessionStore::default()));
        session
            .establish(SecretString::from("tok-1"), profile(Role::Admin))
            .unwrap();
        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.restore().unwrap());
    }

    #[test]
    fn technicians_land_on_their_tasks() {
        assert_eq!(
            LandingView::for_role(Role::Technician),
            LandingView::TechnicianTasks
        );
        assert_eq!(LandingView::for_role(Role::Manager), LandingView::Dashboard);
        assert_eq!(LandingView::for_role(Role::Unknown), LandingView::Dashboard);
    }

    #[test]
    fn landing_view_requires_a_session() {
        let session = Session::new(Box::new(MemorySessionStore::default()));
        assert!(matches!(
            session.landing_view(),
            Err(Error::NotAuthenticated)
        ));
    }
}
