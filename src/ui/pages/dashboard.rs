//! Dashboard page component
//!
//! Signed-in members land here. The same [`UserDashboard`] is rendered in
//! place of the marketing page on `/` while a session exists.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::content::{COMMUNITY_URL, LOGO_PATH};
use crate::core::session::User;
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::use_session_view;

/// `/dashboard` route
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_view();
    let navigate = use_navigate();

    // Signing out here leaves the page
    Effect::new(move |was_signed_in: Option<bool>| {
        let signed_in = session.user().is_some();
        if was_signed_in == Some(true) && !signed_in {
            navigate("/", Default::default());
        }
        signed_in
    });

    view! {
        <Title text="Dashboard - Insilico.lk" />

        {move || match session.user() {
            Some(user) => view! { <UserDashboard user=user /> }.into_any(),
            None if !session.is_resolved() => view! {
                <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-[#000A33] to-[#363B6B]">
                    <Icon name=icons::LOADER class="w-10 h-10 animate-spin invert" />
                </div>
            }
            .into_any(),
            None => view! { <SignedOutNotice /> }.into_any(),
        }}
    }
}

#[component]
fn SignedOutNotice() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 bg-gradient-to-br from-[#000A33] to-[#363B6B] text-[#EAE3F5] p-4">
            <h1 class="text-3xl font-bold text-white">"You are signed out"</h1>
            <p class="text-[#EAE3F5]/80">"Sign in from the home page to open your dashboard."</p>
            <A
                href="/"
                attr:class="px-6 py-3 bg-white text-[#000A33] font-semibold rounded-xl hover:bg-[#4d2884] hover:text-white transition-colors"
            >
                "Back to Insilico.lk"
            </A>
        </div>
    }
}

/// Member home: greeting, account details and sign-out
#[component]
pub fn UserDashboard(user: User) -> impl IntoView {
    let auth = use_auth_context();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        signing_out.set(true);
        spawn_local(async move {
            auth.sign_out().await;
            let _ = signing_out.try_set(false);
        });
    };

    let name = user.display_name().to_string();
    let email = user.email.clone().unwrap_or_default();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#000A33] to-[#363B6B] text-[#EAE3F5]">
            <header class="border-b border-[#EAE3F5]/20 bg-[#000A33]/60 backdrop-blur-md">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <img src=LOGO_PATH alt="Insilico.lk" class="w-8 h-8 object-contain invert" />
                        <span class="text-lg font-semibold text-white">"Insilico.lk"</span>
                    </div>
                    <button
                        class="flex items-center gap-2 px-4 py-2 rounded-full border border-[#EAE3F5]/20 bg-[#54366B] hover:bg-[#410056] transition-colors disabled:opacity-50"
                        on:click=on_sign_out
                        disabled=move || signing_out.get()
                    >
                        <Icon name=icons::LOG_OUT class="w-4 h-4 invert" />
                        {move || if signing_out.get() { "Signing out..." } else { "Sign out" }}
                    </button>
                </div>
            </header>

            <main class="container mx-auto px-4 py-12 space-y-10">
                <section>
                    <h1 class="text-3xl md:text-4xl font-bold text-white">{format!("Welcome, {}", name)}</h1>
                    <p class="mt-2 text-[#EAE3F5]/80">{email}</p>
                </section>

                <section class="grid gap-6 md:grid-cols-2">
                    <div class="rounded-2xl border border-white/20 bg-white/10 p-6">
                        <div class="flex items-center gap-3 mb-3">
                            <Icon name=icons::DNA class="w-6 h-6 invert" />
                            <h2 class="text-xl font-semibold text-white">"Your learning journey"</h2>
                        </div>
                        <p class="text-[#EAE3F5]/80">
                            "Course enrolments and progress will appear here once the academy portal opens."
                        </p>
                    </div>
                    <div class="rounded-2xl border border-white/20 bg-white/10 p-6">
                        <div class="flex items-center gap-3 mb-3">
                            <Icon name=icons::USERS class="w-6 h-6 invert" />
                            <h2 class="text-xl font-semibold text-white">"Community"</h2>
                        </div>
                        <p class="text-[#EAE3F5]/80 mb-4">
                            "Meet fellow learners and mentors in the Insilico.lk community group."
                        </p>
                        <a
                            href=COMMUNITY_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-white underline"
                        >
                            "Open the group"
                            <Icon name=icons::EXTERNAL_LINK class="w-4 h-4 invert" />
                        </a>
                    </div>
                </section>
            </main>
        </div>
    }
}
