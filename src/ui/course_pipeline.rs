use leptos::prelude::*;

use crate::core::content::COURSE_PIPELINE;

/// Ordered learning path shown in the academy section
#[component]
pub fn CoursePipeline() -> impl IntoView {
    let last = COURSE_PIPELINE.len().saturating_sub(1);

    view! {
        <ol class="grid gap-4 md:grid-cols-5 md:gap-2">
            {COURSE_PIPELINE
                .iter()
                .enumerate()
                .map(|(i, stage)| {
                    view! {
                        <li class="animate-on-scroll relative flex md:flex-col items-start md:items-center gap-4 md:gap-3 md:text-center">
                            <span class="flex-shrink-0 w-10 h-10 rounded-full bg-gradient-to-br from-[#54366B] to-[#363B6B] text-white font-bold flex items-center justify-center shadow-lg">
                                {i + 1}
                            </span>
                            {(i < last).then(|| view! {
                                <span class="hidden md:block absolute top-5 left-[calc(50%+1.5rem)] right-[calc(-50%+1.5rem)] h-0.5 bg-[#54366B]/30" aria-hidden="true"></span>
                            })}
                            <div>
                                <h4 class="font-semibold text-[#170056]">{stage.title}</h4>
                                <p class="text-sm text-[#54366B] leading-snug">{stage.summary}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
