//! Sign-in / sign-up modal
//!
//! A successful sign-in only closes the modal. The session gate on the
//! landing page sees the new session and moves to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Which form the modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

pub fn validate_email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Email is required");
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Please enter a valid email"),
    }
}

pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("Password is required")
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Err("Password must be at least 6 characters")
    } else {
        Ok(())
    }
}

pub fn validate_full_name(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Full name is required")
    } else {
        Ok(())
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg text-gray-800 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent transition-colors";

#[component]
fn FieldError(error: RwSignal<Option<&'static str>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|error| view! { <p class="mt-1 text-sm text-red-500">{error}</p> })
    }
}

/// Auth modal component
#[component]
pub fn AuthModal(
    /// Whether the modal is open
    is_open: Signal<bool>,
    /// Callback to close the modal
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth_context();

    let mode = RwSignal::new(AuthMode::SignIn);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let full_name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        auth.clear_messages();
        full_name_error.set(None);
        email_error.set(None);
        password_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_messages();

        let current = mode.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let full_name_val = full_name.get_untracked();

        email_error.set(validate_email(&email_val).err());
        password_error.set(validate_password(&password_val).err());
        full_name_error.set(match current {
            AuthMode::SignUp => validate_full_name(&full_name_val).err(),
            AuthMode::SignIn => None,
        });
        if email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
            || full_name_error.get_untracked().is_some()
        {
            return;
        }

        spawn_local(async move {
            let email_val = email_val.trim().to_string();
            let signed_in = match current {
                AuthMode::SignIn => auth.sign_in(&email_val, &password_val).await,
                AuthMode::SignUp => {
                    auth.sign_up(&email_val, &password_val, full_name_val.trim())
                        .await
                }
            };
            if signed_in.is_some() {
                password.set(String::new());
                on_close.run(());
            }
        });
    };

    let tab_class = move |tab: AuthMode| {
        if mode.get() == tab {
            "flex-1 py-2 text-sm font-semibold rounded-md bg-white text-purple-700 shadow"
        } else {
            "flex-1 py-2 text-sm font-medium rounded-md text-gray-600 hover:text-gray-800"
        }
    };

    view! {
        <BaseModal
            title="Welcome to Insilico.lk".to_string()
            subtitle="Sign in to access your courses, or create an account to join our academy.".to_string()
            is_open=is_open
            on_close=on_close
        >
            <div class="flex gap-1 p-1 mb-6 bg-gray-100 rounded-lg" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(AuthMode::SignIn)
                    aria-selected=move || (mode.get() == AuthMode::SignIn).to_string()
                    on:click=move |_| switch_mode(AuthMode::SignIn)
                >
                    "Sign In"
                </button>
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(AuthMode::SignUp)
                    aria-selected=move || (mode.get() == AuthMode::SignUp).to_string()
                    on:click=move |_| switch_mode(AuthMode::SignUp)
                >
                    "Sign Up"
                </button>
            </div>

            <form on:submit=on_submit class="space-y-4" novalidate=true>
                // Provider errors
                {move || {
                    auth.error.get().map(|error| {
                        view! {
                            <div class="p-3 bg-red-50 border border-red-200 rounded-lg">
                                <p class="text-sm text-red-700">{error}</p>
                            </div>
                        }
                    })
                }}
                {move || {
                    auth.notice.get().map(|notice| {
                        view! {
                            <div class="p-3 bg-green-50 border border-green-200 rounded-lg">
                                <p class="text-sm text-green-700">{notice}</p>
                            </div>
                        }
                    })
                }}

                <Show when=move || mode.get() == AuthMode::SignUp>
                    <div>
                        <label for="auth-full-name" class="block text-sm font-medium text-gray-700 mb-1">
                            "Full Name"
                        </label>
                        <input
                            type="text"
                            id="auth-full-name"
                            autocomplete="name"
                            placeholder="Your full name"
                            class=INPUT_CLASS
                            class:border-red-500=move || full_name_error.get().is_some()
                            prop:value=move || full_name.get()
                            on:input=move |ev| {
                                full_name.set(event_target_value(&ev));
                                full_name_error.set(None);
                            }
                        />
                        <FieldError error=full_name_error />
                    </div>
                </Show>

                <div>
                    <label for="auth-email" class="block text-sm font-medium text-gray-700 mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="auth-email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        class=INPUT_CLASS
                        class:border-red-500=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                        on:blur=move |_| email_error.set(validate_email(&email.get_untracked()).err())
                    />
                    <FieldError error=email_error />
                </div>

                <div>
                    <label for="auth-password" class="block text-sm font-medium text-gray-700 mb-1">
                        "Password"
                    </label>
                    <input
                        type="password"
                        id="auth-password"
                        autocomplete=move || match mode.get() {
                            AuthMode::SignIn => "current-password",
                            AuthMode::SignUp => "new-password",
                        }
                        placeholder="At least 6 characters"
                        class=INPUT_CLASS
                        class:border-red-500=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                    />
                    <FieldError error=password_error />
                </div>

                <button
                    type="submit"
                    class="btn-gradient w-full py-2.5 px-4 text-white font-semibold rounded-lg disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || auth.loading.get()
                >
                    {move || {
                        if auth.loading.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                    "Please wait..."
                                </span>
                            }.into_any()
                        } else {
                            let label = match mode.get() {
                                AuthMode::SignIn => "Sign In",
                                AuthMode::SignUp => "Create Account",
                            };
                            view! { <span class="block">{label}</span> }.into_any()
                        }
                    }}
                </button>
            </form>
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert_eq!(validate_email(""), Err("Email is required"));
        assert_eq!(validate_email("   "), Err("Email is required"));
        assert_eq!(validate_email("student"), Err("Please enter a valid email"));
        assert_eq!(validate_email("@insilico.lk"), Err("Please enter a valid email"));
        assert_eq!(validate_email("student@localhost"), Err("Please enter a valid email"));
        assert_eq!(validate_email(" student@insilico.lk "), Ok(()));
    }

    #[test]
    fn test_password_needs_six_characters() {
        assert_eq!(validate_password(""), Err("Password is required"));
        assert_eq!(
            validate_password("12345"),
            Err("Password must be at least 6 characters")
        );
        assert_eq!(validate_password("123456"), Ok(()));
    }

    #[test]
    fn test_full_name_required() {
        assert!(validate_full_name("  ").is_err());
        assert!(validate_full_name("Nishan Karassik").is_ok());
    }

    #[test]
    fn test_default_mode_is_sign_in() {
        assert_eq!(AuthMode::default(), AuthMode::SignIn);
    }
}
