//! Entrance animations for elements scrolled into view
//!
//! Elements carrying `animate-on-scroll` get `animate-in` the first time at
//! least 10% of them is visible. The class is never removed.

use leptos::prelude::*;

/// Observe every `.animate-on-scroll` element currently in the document.
///
/// Call from the component that renders those elements; the observer is
/// disconnected when that component is disposed.
pub fn use_reveal_on_scroll() {
    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use leptos::wasm_bindgen::JsCast;
        use leptos::wasm_bindgen::closure::Closure;
        use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

        use crate::core::scroll::{
            REVEAL_SELECTOR_CLASS, REVEAL_THRESHOLD, REVEALED_CLASS, RevealLedger,
        };

        const REVEAL_ID_ATTR: &str = "data-reveal-id";

        type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

        let observer: StoredValue<Option<(IntersectionObserver, ObserverCallback)>, LocalStorage> =
            StoredValue::new_local(None);

        Effect::new(move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let ledger = Rc::new(RefCell::new(RevealLedger::<u32>::new()));
            let callback: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let id = target
                            .get_attribute(REVEAL_ID_ATTR)
                            .and_then(|id| id.parse::<u32>().ok());
                        if let Some(id) = id {
                            if ledger.borrow_mut().mark(id) {
                                let _ = target.class_list().add_1(REVEALED_CLASS);
                            }
                        }
                        observer.unobserve(&target);
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&REVEAL_THRESHOLD.into());

            let created = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            );
            let created = match created {
                Ok(created) => created,
                Err(e) => {
                    leptos::logging::warn!("Scroll animations disabled: {:?}", e);
                    return;
                }
            };

            let selector = format!(".{}", REVEAL_SELECTOR_CLASS);
            if let Ok(nodes) = document.query_selector_all(&selector) {
                for i in 0..nodes.length() {
                    let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok())
                    else {
                        continue;
                    };
                    let _ = element.set_attribute(REVEAL_ID_ATTR, &i.to_string());
                    created.observe(&element);
                }
            }

            observer.try_update_value(|slot| {
                if let Some((previous, _)) = slot.replace((created, callback)) {
                    previous.disconnect();
                }
            });
        });

        on_cleanup(move || {
            observer.try_update_value(|slot| {
                if let Some((observer, _callback)) = slot.take() {
                    observer.disconnect();
                }
            });
        });
    }
}
