//! Browser timers owned by the component that creates them
//!
//! Every timer here lives in a local `StoredValue` owned by the calling
//! component and is cancelled in that component's `on_cleanup`. On the
//! server nothing is scheduled; the handles are inert.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::{Interval, Timeout};

#[cfg(not(feature = "ssr"))]
use crate::core::scroll::Debounce;

#[cfg(not(feature = "ssr"))]
struct IntervalSlot {
    tick: Rc<dyn Fn()>,
    timer: Option<Interval>,
}

/// Handle to a repeating timer started by [`use_interval`]
#[derive(Clone, Copy)]
pub struct IntervalHandle {
    #[cfg(not(feature = "ssr"))]
    period_ms: u32,
    #[cfg(not(feature = "ssr"))]
    slot: StoredValue<IntervalSlot, LocalStorage>,
}

impl IntervalHandle {
    /// Cancel the timer. Must not be called from inside its own tick.
    pub fn stop(&self) {
        #[cfg(not(feature = "ssr"))]
        self.slot.try_update_value(|slot| {
            slot.timer.take();
        });
    }

    /// Start counting down a full period again
    pub fn restart(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let period_ms = self.period_ms;
            self.slot.try_update_value(|slot| {
                let tick = slot.tick.clone();
                slot.timer = Some(Interval::new(period_ms, move || tick()));
            });
        }
    }

    pub fn is_running(&self) -> bool {
        #[cfg(not(feature = "ssr"))]
        {
            self.slot
                .try_with_value(|slot| slot.timer.is_some())
                .unwrap_or(false)
        }
        #[cfg(feature = "ssr")]
        {
            false
        }
    }
}

/// Run `tick` every `period_ms` until stopped or until the calling
/// component is disposed.
pub fn use_interval(period_ms: u32, tick: impl Fn() + 'static) -> IntervalHandle {
    #[cfg(not(feature = "ssr"))]
    {
        let tick: Rc<dyn Fn()> = Rc::new(tick);
        let timer = {
            let tick = tick.clone();
            Interval::new(period_ms, move || tick())
        };
        let handle = IntervalHandle {
            period_ms,
            slot: StoredValue::new_local(IntervalSlot {
                tick,
                timer: Some(timer),
            }),
        };
        on_cleanup(move || handle.stop());
        handle
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (period_ms, tick);
        IntervalHandle {}
    }
}

#[cfg(not(feature = "ssr"))]
struct DebounceSlot {
    tickets: Debounce,
    pending: Option<Timeout>,
    action: Rc<dyn Fn()>,
}

/// Trailing-edge debouncer: each trigger supersedes the pending one and the
/// action runs once the triggers have been quiet for the delay.
#[derive(Clone, Copy)]
pub struct Debouncer {
    #[cfg(not(feature = "ssr"))]
    delay_ms: u32,
    #[cfg(not(feature = "ssr"))]
    slot: StoredValue<DebounceSlot, LocalStorage>,
}

impl Debouncer {
    pub fn trigger(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let slot = self.slot;
            let delay_ms = self.delay_ms;
            slot.try_update_value(|state| {
                let ticket = state.tickets.schedule();
                // Replacing the old timeout clears it
                state.pending = Some(Timeout::new(delay_ms, move || {
                    let action = slot
                        .try_update_value(|state| {
                            state.tickets.fire(ticket).then(|| state.action.clone())
                        })
                        .flatten();
                    if let Some(action) = action {
                        action();
                    }
                }));
            });
        }
    }

    /// Drop the pending run, if any
    pub fn cancel(&self) {
        #[cfg(not(feature = "ssr"))]
        self.slot.try_update_value(|state| {
            state.tickets.cancel();
            state.pending.take();
        });
    }
}

/// Debounce `action` by `delay_ms`; the pending run is cancelled when the
/// calling component is disposed.
pub fn use_debouncer(delay_ms: u32, action: impl Fn() + 'static) -> Debouncer {
    #[cfg(not(feature = "ssr"))]
    {
        let debouncer = Debouncer {
            delay_ms,
            slot: StoredValue::new_local(DebounceSlot {
                tickets: Debounce::new(),
                pending: None,
                action: Rc::new(action),
            }),
        };
        on_cleanup(move || debouncer.cancel());
        debouncer
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (delay_ms, action);
        Debouncer {}
    }
}

/// Whether the viewport is below the narrow breakpoint, tracked on resize.
///
/// Starts `false` so the server render and the first hydrated frame agree.
pub fn use_narrow_viewport() -> ReadSignal<bool> {
    let (is_narrow, set_is_narrow) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::rotator::is_narrow_viewport;

        let measure = move || {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64());
            if let Some(width) = width {
                set_is_narrow.set(is_narrow_viewport(width));
            }
        };

        Effect::new(move |_| measure());

        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "ssr")]
    let _ = set_is_narrow;

    is_narrow
}
