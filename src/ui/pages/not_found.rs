//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Crawlers should see a real 404, not a soft one
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    let path = use_location().pathname;

    view! {
        <Title text="Page Not Found - Insilico.lk" />

        <main class="min-h-screen flex items-center justify-center bg-gradient-to-br from-[#000A33] to-[#363B6B] px-4 text-center text-[#EAE3F5]">
            <section class="max-w-md">
                <Icon name=icons::FILE_TEXT class="w-16 h-16 mx-auto mb-6 invert opacity-80" />
                <p class="text-7xl font-bold text-white">"404"</p>
                <h1 class="mt-3 text-2xl font-semibold">"Nothing lives here"</h1>
                <p class="mt-2 mb-8 text-[#EAE3F5]/70 break-all">
                    "We couldn't find " <code class="text-white">{move || path.get()}</code> "."
                </p>
                <A
                    href="/"
                    attr:class="btn-gradient inline-flex items-center gap-2 px-6 py-3 rounded-full font-semibold text-white"
                >
                    "Go Home"
                </A>
            </section>
        </main>
    }
}
