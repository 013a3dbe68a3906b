use leptos::prelude::*;

use crate::core::accordion::Accordion;
use crate::core::content::Topic;

/// Accordion where at most one topic is expanded
#[component]
pub fn TopicAccordion(topics: &'static [Topic]) -> impl IntoView {
    let accordion = match Accordion::new(topics.len()) {
        Ok(accordion) => RwSignal::new(accordion),
        Err(e) => {
            leptos::logging::warn!("Accordion not rendered: {}", e);
            return ().into_any();
        }
    };

    view! {
        <div class="max-w-5xl mx-auto space-y-4 md:space-y-8 mb-12 md:mb-20">
            {topics
                .iter()
                .enumerate()
                .map(|(index, topic)| {
                    let is_open = move || accordion.with(|a| a.is_open(index));
                    view! {
                        <div class="relative">
                            <div class="bg-white/10 backdrop-blur-md border border-white/20 rounded-xl overflow-hidden hover:border-white/40 transition-all duration-150 relative z-10">
                                <button
                                    class="w-full px-6 py-5 md:px-10 md:py-8 flex items-center justify-between text-left hover:bg-white/5 transition-all duration-150"
                                    on:click=move |_| accordion.update(|a| a.toggle(index))
                                    aria-expanded=move || is_open().to_string()
                                >
                                    <h3 class="text-lg md:text-2xl font-semibold text-white pr-4">
                                        {topic.title}
                                    </h3>
                                    <div
                                        class="flex-shrink-0 w-8 h-8 md:w-12 md:h-12 bg-white/20 rounded-full flex items-center justify-center hover:bg-white/30 transition-transform duration-150"
                                        class=("rotate-45", is_open)
                                    >
                                        <svg class="w-5 h-5 md:w-7 md:h-7 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4" />
                                        </svg>
                                    </div>
                                </button>
                            </div>
                            <Show when=is_open>
                                <div class="accordion-panel absolute top-full left-0 right-0 z-20 bg-gradient-to-br from-[#0a0514] via-[#1a0b2e] to-[#2d1b69] backdrop-blur-md border border-white/20 rounded-b-xl shadow-lg max-h-[70vh] overflow-y-auto">
                                    <div class="px-6 py-5 md:px-10 md:py-8">
                                        <p class="text-[#EAE3F5] text-base md:text-xl leading-relaxed whitespace-pre-line font-medium">
                                            {topic.description}
                                        </p>
                                    </div>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
