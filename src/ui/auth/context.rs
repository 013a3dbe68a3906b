//! Auth context shared by the pages
//!
//! Holds the browser's identity provider client plus the reactive state of
//! the auth forms. The provider itself is `Rc`-based, so it is kept in a
//! local `StoredValue` and handed out by clone.

use std::future::Future;

use leptos::prelude::*;

use crate::core::error::AuthError;
use crate::core::session::Session;

use super::supabase::SupabaseAuth;

/// Auth context providing the provider client and form state
#[derive(Clone, Copy)]
pub struct AuthContext {
    provider: StoredValue<SupabaseAuth, LocalStorage>,
    /// An auth request is in flight
    pub loading: RwSignal<bool>,
    /// Error message from the last operation
    pub error: RwSignal<Option<String>>,
    /// Informational message from the last operation (e.g. "check your inbox")
    pub notice: RwSignal<Option<String>>,
}

impl AuthContext {
    /// The provider client
    pub fn provider(&self) -> SupabaseAuth {
        self.provider.get_value()
    }

    pub fn clear_messages(&self) {
        self.error.set(None);
        self.notice.set(None);
    }

    /// Sign in and report the outcome through `loading` / `error`
    pub async fn sign_in(&self, email: &str, password: &str) -> Option<Session> {
        self.run(self.provider().sign_in(email, password)).await
    }

    /// Sign up; `None` means no session yet (confirmation pending or failure)
    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Option<Session> {
        let provider = self.provider();
        let session = self
            .run(provider.sign_up(email, password, full_name))
            .await
            .flatten();
        if session.is_none() && self.error.get_untracked().is_none() {
            self.notice.set(Some(
                "Check your e-mail to confirm your account, then sign in.".to_string(),
            ));
        }
        session
    }

    pub async fn sign_out(&self) {
        if let Err(e) = self.provider().sign_out().await {
            // Local state is already gone; the provider just was not told
            leptos::logging::warn!("Sign-out request failed: {}", e);
        }
    }

    async fn run<T>(
        &self,
        request: impl Future<Output = Result<T, AuthError>>,
    ) -> Option<T> {
        self.loading.set(true);
        self.clear_messages();

        let result = request.await;

        self.loading.set(false);
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("Auth request failed: {}", e);
                self.error.set(Some(e.to_string()));
                None
            }
        }
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    let provider = SupabaseAuth::from_build_env();

    // Sessions written by other tabs
    #[cfg(not(feature = "ssr"))]
    {
        let listener_provider = provider.clone();
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            listener_provider.apply_storage_event(ev.key().as_deref(), ev.new_value().as_deref());
        });
        on_cleanup(move || handle.remove());
    }

    let ctx = AuthContext {
        provider: StoredValue::new_local(provider),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        notice: RwSignal::new(None),
    };

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
