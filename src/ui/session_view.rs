//! Session-driven view selection
//!
//! Runs one [`SessionGate`] per page: the initial lookup plus the provider's
//! change stream both feed it, and the gate decides whether the page shows
//! the marketing content or the dashboard. Runs only in the browser; the
//! server always renders the anonymous view.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::session::{
    GateAction, Session, SessionChange, SessionGate, SessionProvider, Subscription, User,
    ViewState, lookup_or_anonymous,
};
use crate::ui::auth::use_auth_context;

/// Reactive result of the session gate
#[derive(Clone, Copy)]
pub struct SessionView {
    state: ReadSignal<ViewState>,
    resolved: ReadSignal<bool>,
    user: Memo<Option<User>>,
}

impl SessionView {
    /// Signed-in user, unchanged by token refreshes
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(ViewState::is_authenticated)
    }

    /// Whether the initial lookup has completed
    pub fn is_resolved(&self) -> bool {
        self.resolved.get()
    }
}

/// Start the session gate for the current page.
///
/// Navigation requested by the gate is skipped when the page already sits on
/// the target route.
pub fn use_session_view() -> SessionView {
    let auth = use_auth_context();
    let navigate = use_navigate();
    let location = use_location();

    let (state, set_state) = signal(ViewState::default());
    let (resolved, set_resolved) = signal(false);
    let user = Memo::new(move |_| state.with(|s| s.user().cloned()));

    let gate = StoredValue::new_local(SessionGate::new());
    let subscription = StoredValue::new_local(None::<Subscription>);

    let apply = Rc::new(move |session: Option<Session>| {
        let Some((action, view)) = gate.try_update_value(|gate| {
            let action = gate.apply(session);
            (action, gate.view().clone())
        }) else {
            return;
        };
        let _ = set_state.try_set(view);

        if let Some(GateAction::Navigate(path)) = action {
            let here = location.pathname.try_get_untracked().unwrap_or_default();
            if here != path {
                navigate(path, Default::default());
            }
        }
    });

    // Effects never run on the server, so neither does the lookup
    Effect::new(move |_| {
        let provider = auth.provider();

        let on_change = apply.clone();
        let handle = provider.subscribe(move |change: &SessionChange| {
            on_change(change.session.clone());
        });
        // Replacing an older subscription drops it
        subscription.set_value(Some(handle));

        let apply = apply.clone();
        leptos::task::spawn_local(async move {
            let session = lookup_or_anonymous(&provider).await;
            apply(session);
            let _ = set_resolved.try_set(true);
        });
    });

    on_cleanup(move || {
        subscription.try_update_value(|s| drop(s.take()));
    });

    SessionView {
        state,
        resolved,
        user,
    }
}
