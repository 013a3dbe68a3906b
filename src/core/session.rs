//! Session model and the session gate
//!
//! This module provides:
//! - `Session` / `User` as returned by the identity provider
//! - `ViewState`, the two-variant choice between the marketing page and the dashboard
//! - `SessionGate`, which turns session updates into view changes and navigation
//! - `SessionChannel` / `Subscription` for session-change notifications
//! - the `SessionProvider` seam implemented by the browser auth client

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::core::error::AuthError;

/// Route the page moves to once a session is present
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Extra user profile data stored by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// User record from the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl User {
    /// Full name if the user gave one, otherwise the e-mail, otherwise the id
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) when the access token expires
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Token lifetime in seconds, as sent by the token endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    pub user: User,
}

impl Session {
    /// Fill in `expires_at` from `expires_in` for payloads that only carry
    /// the lifetime. An explicit `expires_at` is kept.
    pub fn stamp_expiry(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self
                .expires_in
                .map(|lifetime| now_secs.saturating_add(lifetime));
        }
        self
    }

    /// Whether the access token expires within `margin_secs` of `now_secs`.
    /// Sessions without an expiry never expire.
    pub fn expires_within(&self, now_secs: i64, margin_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= now_secs + margin_secs)
    }
}

/// Kind of session change reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A session-change notification
#[derive(Debug, Clone, PartialEq)]
pub struct SessionChange {
    pub event: SessionEvent,
    pub session: Option<Session>,
}

impl SessionChange {
    pub fn new(event: SessionEvent, session: Option<Session>) -> Self {
        Self { event, session }
    }
}

/// Which top-level view the landing route shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// No session: the marketing page
    #[default]
    Anonymous,
    /// Session present: the dashboard replaces the whole page
    Authenticated(Session),
}

impl ViewState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => ViewState::Authenticated(session),
            None => ViewState::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            ViewState::Authenticated(session) => Some(session),
            ViewState::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }
}

/// Side effect requested by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Navigate(&'static str),
}

/// Turns session updates into the current [`ViewState`].
///
/// Navigation to the dashboard is requested once per transition from no
/// session to a session; refreshed tokens for the same presence do not
/// navigate again.
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    view: ViewState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a session from the initial lookup or a change event
    pub fn apply(&mut self, session: Option<Session>) -> Option<GateAction> {
        let was_authenticated = self.view.is_authenticated();
        self.view = ViewState::from_session(session);

        (!was_authenticated && self.view.is_authenticated())
            .then_some(GateAction::Navigate(DASHBOARD_ROUTE))
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

type Listener<T> = Rc<dyn Fn(&T)>;

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Single-threaded broadcast of values to subscribed listeners.
///
/// Cloning a channel yields another handle to the same listener list.
pub struct SessionChannel<T> {
    listeners: Rc<RefCell<Listeners<T>>>,
}

impl<T> Clone for SessionChannel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: 'static> Default for SessionChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> SessionChannel<T> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(listener);
        let id = {
            let mut listeners = self.listeners.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, listener));
            id
        };

        let weak: Weak<RefCell<Listeners<T>>> = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Deliver `value` to every listener in subscription order
    pub fn emit(&self, value: &T) {
        // Snapshot first so listeners may subscribe or unsubscribe while running
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Handle for a registered listener; unsubscribes when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unsubscribe explicitly
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// An external identity provider
pub trait SessionProvider {
    /// One-shot lookup of the current session
    fn current_session(&self) -> impl Future<Output = Result<Option<Session>, AuthError>>;

    /// Listen for session changes for as long as the subscription lives
    fn subscribe(&self, listener: impl Fn(&SessionChange) + 'static) -> Subscription;
}

/// Initial lookup for the gate: failures degrade to "no session".
pub async fn lookup_or_anonymous<P: SessionProvider>(provider: &P) -> Option<Session> {
    match provider.current_session().await {
        Ok(session) => session,
        Err(e) => {
            leptos::logging::warn!("Session lookup failed, continuing signed out: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn session_for(email: &str) -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: Some(1_700_000_000),
            expires_in: None,
            user: User {
                id: "3f0c7a52".to_string(),
                email: Some(email.to_string()),
                user_metadata: UserMetadata::default(),
            },
        }
    }

    #[test]
    fn test_gate_starts_anonymous() {
        let gate = SessionGate::new();

        assert_eq!(gate.view(), &ViewState::Anonymous);
    }

    #[test]
    fn test_gate_navigates_on_first_session() {
        let mut gate = SessionGate::new();

        let action = gate.apply(Some(session_for("a@insilico.lk")));

        assert_eq!(action, Some(GateAction::Navigate(DASHBOARD_ROUTE)));
        assert!(gate.view().is_authenticated());
    }

    #[test]
    fn test_gate_does_not_renavigate_while_present() {
        let mut gate = SessionGate::new();
        gate.apply(Some(session_for("a@insilico.lk")));

        let mut refreshed = session_for("a@insilico.lk");
        refreshed.access_token = "rotated".to_string();

        assert_eq!(gate.apply(Some(refreshed.clone())), None);
        assert_eq!(gate.view().session(), Some(&refreshed));
    }

    #[test]
    fn test_gate_navigates_again_after_sign_out() {
        let mut gate = SessionGate::new();

        assert!(gate.apply(Some(session_for("a@insilico.lk"))).is_some());
        assert_eq!(gate.apply(None), None);
        assert_eq!(gate.view(), &ViewState::Anonymous);
        assert!(gate.apply(Some(session_for("b@insilico.lk"))).is_some());
    }

    #[test]
    fn test_empty_session_keeps_marketing_page() {
        let mut gate = SessionGate::new();

        assert_eq!(gate.apply(None), None);
        assert_eq!(gate.view(), &ViewState::Anonymous);
    }

    #[test]
    fn test_display_name_preference() {
        let mut user = session_for("kasuni@insilico.lk").user;
        assert_eq!(user.display_name(), "kasuni@insilico.lk");

        user.user_metadata.full_name = Some("Kasuni Karunarathne".to_string());
        assert_eq!(user.display_name(), "Kasuni Karunarathne");

        user.user_metadata.full_name = Some("  ".to_string());
        user.email = None;
        assert_eq!(user.display_name(), "3f0c7a52");
    }

    #[test]
    fn test_expires_within() {
        let session = session_for("a@insilico.lk");

        assert!(!session.expires_within(1_699_999_000, 60));
        assert!(session.expires_within(1_699_999_950, 60));

        let mut open_ended = session;
        open_ended.expires_at = None;
        assert!(!open_ended.expires_within(i64::MAX - 100, 60));
    }

    #[test]
    fn test_stamp_expiry_from_lifetime() {
        let mut session = session_for("student@insilico.lk");
        session.expires_at = None;
        session.expires_in = Some(3600);

        let stamped = session.stamp_expiry(1_700_000_000);
        assert_eq!(stamped.expires_at, Some(1_700_003_600));
        assert!(stamped.expires_within(1_700_003_590, 60));
    }

    #[test]
    fn test_stamp_expiry_keeps_explicit_timestamp() {
        let mut session = session_for("student@insilico.lk");
        session.expires_in = Some(3600);

        let stamped = session.stamp_expiry(1_800_000_000);
        assert_eq!(stamped.expires_at, Some(1_700_000_000));
    }

    #[test]
    fn test_session_deserializes_provider_payload() {
        let json = r#"{
            "access_token": "eyJ",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1700003600,
            "refresh_token": "r1",
            "user": {
                "id": "u1",
                "aud": "authenticated",
                "email": "saumya@insilico.lk",
                "user_metadata": { "full_name": "Saumya Poorni" }
            }
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();

        assert_eq!(session.expires_at, Some(1_700_003_600));
        assert_eq!(session.user.display_name(), "Saumya Poorni");
    }

    #[test]
    fn test_channel_delivers_in_order() {
        let channel = SessionChannel::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = channel.subscribe(move |v| sink.borrow_mut().push(*v));

        channel.emit(&1);
        channel.emit(&2);
        channel.emit(&3);

        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let channel = SessionChannel::<u32>::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let sub = channel.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(channel.listener_count(), 1);

        channel.emit(&0);
        drop(sub);
        channel.emit(&0);

        assert_eq!(hits.get(), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn test_explicit_unsubscribe_only_removes_own_listener() {
        let channel = SessionChannel::<u32>::new();
        let first = channel.subscribe(|_| {});
        let _second = channel.subscribe(|_| {});

        first.unsubscribe();

        assert_eq!(channel.listener_count(), 1);
    }

    #[test]
    fn test_subscription_outliving_channel_is_harmless() {
        let channel = SessionChannel::<u32>::new();
        let sub = channel.subscribe(|_| {});

        drop(channel);
        drop(sub);
    }
}
