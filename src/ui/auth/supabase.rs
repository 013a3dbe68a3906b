//! Supabase GoTrue client
//!
//! Talks to the provider's REST API with `gloo-net`, persists the session in
//! `localStorage` under the provider's own key and broadcasts session
//! changes to subscribers. Changes made by other tabs arrive through the
//! window `storage` event and are re-broadcast here.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::config::ProviderConfig;
use crate::core::error::AuthError;
use crate::core::session::{
    Session, SessionChange, SessionChannel, SessionEvent, SessionProvider, Subscription, User,
};

/// Refresh tokens this close to expiry (seconds)
pub const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpData<'a> {
    full_name: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpData<'a>,
}

/// Error body returned by the auth API. Different endpoints fill
/// different fields.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Sign-up answers with a full session when e-mail confirmation is off,
/// and with just the new user while confirmation is pending.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    Pending(User),
}

/// Turn a non-success response into an [`AuthError`]
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn rejection(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    AuthError::Rejected { status, message }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))
}

/// Decode a token-endpoint session, stamping its absolute expiry
fn decode_session(body: &str, now_secs: i64) -> Result<Session, AuthError> {
    decode::<Session>(body).map(|session| session.stamp_expiry(now_secs))
}

/// Read the persisted session payload; unreadable payloads count as absent
fn parse_stored(raw: Option<&str>) -> Option<Session> {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
}

/// Event to broadcast when another tab rewrites the session key
fn storage_change(new_value: Option<&str>) -> SessionChange {
    match parse_stored(new_value) {
        Some(session) => SessionChange::new(SessionEvent::SignedIn, Some(session)),
        None => SessionChange::new(SessionEvent::SignedOut, None),
    }
}

struct Inner {
    config: Result<ProviderConfig, AuthError>,
    changes: SessionChannel<SessionChange>,
}

/// Browser-side identity provider client
#[derive(Clone)]
pub struct SupabaseAuth {
    inner: Rc<Inner>,
}

impl SupabaseAuth {
    pub fn new(config: Result<ProviderConfig, AuthError>) -> Self {
        if let Err(e) = &config {
            leptos::logging::warn!("Identity provider unavailable: {}", e);
        }
        Self {
            inner: Rc::new(Inner {
                config,
                changes: SessionChannel::new(),
            }),
        }
    }

    /// Client configured from the values compiled into the bundle
    pub fn from_build_env() -> Self {
        Self::new(ProviderConfig::from_build_env())
    }

    pub fn is_configured(&self) -> bool {
        self.inner.config.is_ok()
    }

    fn config(&self) -> Result<&ProviderConfig, AuthError> {
        self.inner.config.as_ref().map_err(Clone::clone)
    }

    fn emit(&self, event: SessionEvent, session: Option<Session>) {
        self.inner.changes.emit(&SessionChange::new(event, session));
    }

    /// Re-broadcast a session written by another tab
    pub fn apply_storage_event(&self, key: Option<&str>, new_value: Option<&str>) {
        let Ok(config) = self.config() else {
            return;
        };
        if key == Some(config.storage_key().as_str()) {
            self.inner.changes.emit(&storage_change(new_value));
        }
    }

    /// Sign in with e-mail and password
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let config = self.config()?;
        let body = transport::post_json(
            config,
            "/token?grant_type=password",
            &PasswordGrant { email, password },
        )
        .await?;
        let session = decode_session(&body, clock::now_secs())?;

        storage::save(config, &session)?;
        self.emit(SessionEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    /// Create an account.
    ///
    /// Returns `None` when the provider is waiting for e-mail confirmation.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Option<Session>, AuthError> {
        let config = self.config()?;
        let request = SignUpRequest {
            email,
            password,
            data: SignUpData { full_name },
        };
        let body = transport::post_json(config, "/signup", &request).await?;

        match decode::<SignUpResponse>(&body)? {
            SignUpResponse::Session(session) => {
                let session = session.stamp_expiry(clock::now_secs());
                storage::save(config, &session)?;
                self.emit(SessionEvent::SignedIn, Some(session.clone()));
                Ok(Some(session))
            }
            SignUpResponse::Pending(user) => {
                leptos::logging::log!(
                    "Sign-up pending confirmation for {}",
                    user.email.as_deref().unwrap_or("unknown address")
                );
                Ok(None)
            }
        }
    }

    /// Sign out locally and revoke the session upstream.
    ///
    /// Local state is cleared even if the provider cannot be reached.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let config = self.config()?;
        let stored = storage::load(config)?;
        storage::clear(config)?;
        self.emit(SessionEvent::SignedOut, None);

        let Some(session) = stored else {
            return Ok(());
        };
        transport::post_empty(config, "/logout", &session.access_token).await
    }

    async fn refresh(
        &self,
        config: &ProviderConfig,
        refresh_token: &str,
    ) -> Result<Session, AuthError> {
        let body = transport::post_json(
            config,
            "/token?grant_type=refresh_token",
            &RefreshGrant { refresh_token },
        )
        .await?;
        let session = decode_session(&body, clock::now_secs())?;

        storage::save(config, &session)?;
        self.emit(SessionEvent::TokenRefreshed, Some(session.clone()));
        Ok(session)
    }
}

impl SessionProvider for SupabaseAuth {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let config = self.config()?;
        let Some(session) = storage::load(config)? else {
            return Ok(None);
        };
        if !session.expires_within(clock::now_secs(), REFRESH_MARGIN_SECS) {
            return Ok(Some(session));
        }

        match self.refresh(config, &session.refresh_token).await {
            Ok(session) => Ok(Some(session)),
            Err(e) if e.is_rejection() => {
                // The refresh token is dead; forget the session
                leptos::logging::log!("Stored session expired: {}", e);
                storage::clear(config)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn subscribe(&self, listener: impl Fn(&SessionChange) + 'static) -> Subscription {
        self.inner.changes.subscribe(listener)
    }
}

#[cfg(not(feature = "ssr"))]
mod transport {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;

    use super::rejection;
    use crate::core::config::ProviderConfig;
    use crate::core::error::AuthError;

    fn network(e: gloo_net::Error) -> AuthError {
        AuthError::Network(e.to_string())
    }

    async fn body_of(response: Response) -> Result<String, AuthError> {
        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.map_err(network)?;
        if ok { Ok(body) } else { Err(rejection(status, &body)) }
    }

    pub async fn post_json<B: Serialize>(
        config: &ProviderConfig,
        path: &str,
        body: &B,
    ) -> Result<String, AuthError> {
        let response = Request::post(&config.endpoint(path))
            .header("apikey", &config.anon_key)
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        body_of(response).await
    }

    pub async fn post_empty(
        config: &ProviderConfig,
        path: &str,
        bearer: &str,
    ) -> Result<(), AuthError> {
        let response = Request::post(&config.endpoint(path))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", bearer))
            .send()
            .await
            .map_err(network)?;
        body_of(response).await.map(|_| ())
    }
}

#[cfg(feature = "ssr")]
mod transport {
    use serde::Serialize;

    use crate::core::config::ProviderConfig;
    use crate::core::error::AuthError;

    pub async fn post_json<B: Serialize>(
        _config: &ProviderConfig,
        _path: &str,
        _body: &B,
    ) -> Result<String, AuthError> {
        Err(AuthError::Network("auth requests are browser-only".to_string()))
    }

    pub async fn post_empty(
        _config: &ProviderConfig,
        _path: &str,
        _bearer: &str,
    ) -> Result<(), AuthError> {
        Err(AuthError::Network("auth requests are browser-only".to_string()))
    }
}

#[cfg(not(feature = "ssr"))]
mod storage {
    use super::parse_stored;
    use crate::core::config::ProviderConfig;
    use crate::core::error::AuthError;
    use crate::core::session::Session;

    fn local_storage() -> Result<web_sys::Storage, AuthError> {
        web_sys::window()
            .ok_or_else(|| AuthError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AuthError::Storage("localStorage disabled".to_string()))
    }

    pub fn load(config: &ProviderConfig) -> Result<Option<Session>, AuthError> {
        let raw = local_storage()?
            .get_item(&config.storage_key())
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))?;
        Ok(parse_stored(raw.as_deref()))
    }

    pub fn save(config: &ProviderConfig, session: &Session) -> Result<(), AuthError> {
        let raw = serde_json::to_string(session).map_err(|e| AuthError::Decode(e.to_string()))?;
        local_storage()?
            .set_item(&config.storage_key(), &raw)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    pub fn clear(config: &ProviderConfig) -> Result<(), AuthError> {
        local_storage()?
            .remove_item(&config.storage_key())
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }
}

/// The server has no session store; every lookup is anonymous.
#[cfg(feature = "ssr")]
mod storage {
    use crate::core::config::ProviderConfig;
    use crate::core::error::AuthError;
    use crate::core::session::Session;

    pub fn load(_config: &ProviderConfig) -> Result<Option<Session>, AuthError> {
        Ok(None)
    }

    pub fn save(_config: &ProviderConfig, _session: &Session) -> Result<(), AuthError> {
        Ok(())
    }

    pub fn clear(_config: &ProviderConfig) -> Result<(), AuthError> {
        Ok(())
    }
}

mod clock {
    #[cfg(not(feature = "ssr"))]
    pub fn now_secs() -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }

    #[cfg(feature = "ssr")]
    pub fn now_secs() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn stored_payload() -> String {
        r#"{
            "access_token": "eyJhbGciOi",
            "refresh_token": "v1.refresh",
            "expires_at": 1900000000,
            "token_type": "bearer",
            "user": {"id": "6a1f", "email": "student@insilico.lk", "user_metadata": {"full_name": "Dharani Ariyasinghe"}}
        }"#
        .to_string()
    }

    #[test]
    fn test_rejection_prefers_error_description() {
        let err = rejection(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );

        assert_eq!(
            err,
            AuthError::Rejected {
                status: 400,
                message: "Invalid login credentials".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_rejection_reads_msg_field() {
        let err = rejection(422, r#"{"code":422,"msg":"Password should be at least 6 characters"}"#);

        assert_eq!(err.to_string(), "Password should be at least 6 characters");
    }

    #[test]
    fn test_rejection_with_unreadable_body() {
        let err = rejection(502, "<html>Bad Gateway</html>");

        assert_eq!(err.to_string(), "Request failed with status 502");
        assert!(err.is_rejection());
    }

    #[test]
    fn test_lifetime_only_payload_gets_absolute_expiry() {
        let body = r#"{
            "access_token": "eyJhbGciOi",
            "refresh_token": "v1.refresh",
            "expires_in": 3600,
            "token_type": "bearer",
            "user": {"id": "6a1f", "email": "student@insilico.lk"}
        }"#;

        let session = decode_session(body, 1_700_000_000).unwrap();

        assert_eq!(session.expires_at, Some(1_700_003_600));
        assert!(session.expires_within(4_000_000_000, REFRESH_MARGIN_SECS));
        // The stamped value survives the localStorage round trip
        let stored = serde_json::to_string(&session).unwrap();
        assert_eq!(parse_stored(Some(&stored)).unwrap().expires_at, Some(1_700_003_600));
    }

    #[test]
    fn test_sign_up_response_variants() {
        let confirmed: SignUpResponse = decode(&stored_payload()).unwrap();
        assert!(matches!(confirmed, SignUpResponse::Session(_)));

        let pending: SignUpResponse =
            decode(r#"{"id":"6a1f","email":"student@insilico.lk","user_metadata":{}}"#).unwrap();
        assert!(matches!(pending, SignUpResponse::Pending(_)));
    }

    #[test]
    fn test_sign_up_request_carries_full_name() {
        let request = SignUpRequest {
            email: "student@insilico.lk",
            password: "secret1",
            data: SignUpData {
                full_name: "Saumya Poorni",
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["data"]["full_name"], "Saumya Poorni");
    }

    #[test]
    fn test_parse_stored_ignores_garbage() {
        assert!(parse_stored(None).is_none());
        assert!(parse_stored(Some("not json")).is_none());
        assert_eq!(
            parse_stored(Some(&stored_payload())).map(|s| s.user.display_name().to_string()),
            Some("Dharani Ariyasinghe".to_string())
        );
    }

    #[test]
    fn test_storage_change_maps_to_events() {
        assert_eq!(storage_change(None).event, SessionEvent::SignedOut);
        assert_eq!(
            storage_change(Some(&stored_payload())).event,
            SessionEvent::SignedIn
        );
    }

    #[test]
    fn test_storage_event_for_other_keys_is_ignored() {
        let auth = SupabaseAuth::new(Ok(ProviderConfig::new(
            "https://abcdefgh.supabase.co",
            "anon",
        )));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = seen.clone();
            auth.subscribe(move |change| seen.borrow_mut().push(change.event))
        };

        auth.apply_storage_event(Some("theme"), None);
        auth.apply_storage_event(Some("sb-abcdefgh-auth-token"), Some(&stored_payload()));
        auth.apply_storage_event(Some("sb-abcdefgh-auth-token"), None);

        assert_eq!(
            *seen.borrow(),
            vec![SessionEvent::SignedIn, SessionEvent::SignedOut]
        );
    }

    #[test]
    fn test_unconfigured_provider_reports_not_configured() {
        let auth = SupabaseAuth::new(Err(AuthError::NotConfigured));

        assert!(!auth.is_configured());
        assert_eq!(
            block_on(auth.current_session()),
            Err(AuthError::NotConfigured)
        );
        assert_eq!(
            block_on(auth.sign_in("a@b.c", "secret1")),
            Err(AuthError::NotConfigured)
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_lookup_is_anonymous() {
        let auth = SupabaseAuth::new(Ok(ProviderConfig::new(
            "https://abcdefgh.supabase.co",
            "anon",
        )));

        assert_eq!(block_on(auth.current_session()), Ok(None));
    }
}
