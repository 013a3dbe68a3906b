//! Dialog shell shared by the sign-in, contact and notice popups
//!
//! The panel stays mounted so form state inside it survives closing; only
//! its visibility follows `is_open`. While open the page behind it does not
//! scroll, and Escape or a click outside the panel dismisses it.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const OVERLAY_CLASS: &str =
    "fixed inset-0 z-[60] flex items-center justify-center p-4 bg-[#000A33]/70 backdrop-blur-sm transition-opacity duration-300";

fn overlay_class(open: bool) -> String {
    if open {
        OVERLAY_CLASS.to_string()
    } else {
        format!("{} opacity-0 pointer-events-none", OVERLAY_CLASS)
    }
}

/// Sets `overflow` on `<body>`; empty string restores the stylesheet value
#[cfg(not(feature = "ssr"))]
fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}

/// How many dialogs currently hold the page still
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    /// Returns `true` when this call locked the page
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Returns `true` when the last holder let go
    pub fn release(&mut self) -> bool {
        if self.holders == 0 {
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

/// Page-wide scroll lock shared by every dialog
#[derive(Clone, Copy)]
pub struct ScrollLockContext(StoredValue<ScrollLock>);

pub fn provide_scroll_lock() {
    provide_context(ScrollLockContext(StoredValue::new(ScrollLock::default())));
}

/// Hold the shared lock while `is_open` is true
fn use_scroll_lock(is_open: Signal<bool>) {
    #[cfg(not(feature = "ssr"))]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let ScrollLockContext(lock) = use_context::<ScrollLockContext>()
            .unwrap_or_else(|| ScrollLockContext(StoredValue::new(ScrollLock::default())));
        let held = Arc::new(AtomicBool::new(false));

        let hold = move |want: bool| {
            if held.swap(want, Ordering::Relaxed) == want {
                return;
            }
            let changed = lock
                .try_update_value(|lock| if want { lock.acquire() } else { lock.release() })
                .unwrap_or(false);
            if changed {
                set_body_overflow(if want { "hidden" } else { "" });
            }
        };

        let on_change = hold.clone();
        Effect::new(move |_| on_change(is_open.get()));
        on_cleanup(move || hold(false));
    }
    #[cfg(feature = "ssr")]
    let _ = is_open;
}

#[component]
pub fn BaseModal(
    title: String,
    #[prop(optional)] subtitle: Option<String>,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
    /// Tailwind width class for the panel
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    use_scroll_lock(is_open);

    #[cfg(not(feature = "ssr"))]
    {
        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });
        on_cleanup(move || escape.remove());
    }

    let panel_class = format!(
        "w-full {} max-h-[90vh] overflow-y-auto rounded-2xl bg-white shadow-2xl",
        max_width
    );

    view! {
        <div
            class=move || overlay_class(is_open.get())
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |_| on_close.run(())
        >
            // Clicks inside the panel never reach the overlay
            <div class=panel_class on:click=|ev| ev.stop_propagation()>
                <div class="flex items-start justify-between gap-4 border-b border-gray-100 px-6 py-5">
                    <div>
                        <h3 class="text-2xl font-bold text-[#000A33]">{title}</h3>
                        {subtitle.map(|s| view! { <p class="mt-1 text-sm text-gray-600">{s}</p> })}
                    </div>
                    <button
                        type="button"
                        class="rounded-full p-2 text-gray-500 hover:bg-[#EAE3F5] transition-colors"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon name=icons::X class="w-5 h-5" />
                    </button>
                </div>
                <div class="px-6 py-5">{children()}</div>
            </div>
        </div>
    }
}

/// One-message notice with a single dismiss button
#[component]
pub fn AlertDialog(
    title: String,
    message: String,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(default = "OK".to_string())] button_text: String,
) -> impl IntoView {
    view! {
        <BaseModal title=title is_open=is_open on_close=on_close max_width="max-w-sm">
            <p class="text-gray-700">{message}</p>
            <button
                type="button"
                class="btn-gradient mt-6 w-full rounded-xl py-2 font-semibold text-white"
                on:click=move |_| on_close.run(())
            >
                {button_text}
            </button>
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_overlay_is_hidden_and_inert() {
        let closed = overlay_class(false);
        assert!(closed.contains("opacity-0"));
        assert!(closed.contains("pointer-events-none"));
    }

    #[test]
    fn test_open_overlay_takes_pointer_events() {
        let open = overlay_class(true);
        assert!(!open.contains("pointer-events-none"));
        assert!(open.starts_with(OVERLAY_CLASS));
    }

    #[test]
    fn test_scroll_lock_waits_for_last_dialog() {
        let mut lock = ScrollLock::default();

        assert!(lock.acquire());
        assert!(!lock.acquire());

        assert!(!lock.release());
        assert!(lock.is_locked());

        assert!(lock.release());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_scroll_lock_release_without_holder() {
        let mut lock = ScrollLock::default();

        assert!(!lock.release());
        assert!(lock.acquire());
    }
}
