//! Hero statistics counters

use leptos::prelude::*;

use crate::core::content::COUNTER_TARGETS;
use crate::core::counter::{COUNTER_TICK_MS, CounterSet};
use crate::ui::timers::use_interval;

/// Counts the hero statistics up once per page lifetime.
#[component]
pub fn HeroCounters() -> impl IntoView {
    let counters = RwSignal::new(CounterSet::new(COUNTER_TARGETS));

    let timer = use_interval(COUNTER_TICK_MS, move || {
        counters.try_update(|c| c.tick());
    });

    // Stopped from an effect, never from inside the tick itself
    Effect::new(move |_| {
        if counters.with(CounterSet::is_complete) {
            timer.stop();
        }
    });

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6 lg:gap-8">
            {move || {
                counters.with(|set| {
                    set.labels()
                        .map(|label| {
                            let value = set.display(label);
                            view! {
                                <div class="text-center" data-counter=label.key()>
                                    <div class="text-3xl md:text-4xl font-bold text-[#EAE3F5] mb-2 tabular-nums">
                                        {value}
                                    </div>
                                    <div class="text-[#EAE3F5]/80 text-sm md:text-base">
                                        {label.to_string()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
