//! Landing page component
//!
//! The Insilico.lk home page. Shows the marketing content to anonymous
//! visitors and the user dashboard once a session exists:
//! - SEO meta tags
//! - Sticky header that changes colour after scrolling, plus a full-screen
//!   mobile menu
//! - Hero with showcase video and animated counters
//! - Offer accordion, team carousel, research, academy rotator, services,
//!   SLBAIL lab carousel, advisors marquee, news and success stories
//! - Footer, auth modal and contact modal

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{
    ACADEMY_SLIDES, ADVISORS, Advisor, COMMUNITY_URL, CONTACT_EMAIL, CONTACT_PHONES, LAB_TOPICS,
    LOGO_PATH, NAV_ITEMS, NEWS, NavItem, NavTarget, OFFER_TOPICS, PARTNERS_IMAGE, PROGRAMS,
    QUICK_LINKS, RESEARCH_AREAS, SERVICES, SHOWCASE_VIDEO_URL, SLBAIL_BACKDROP, SUCCESS_STORIES,
    SectionId, TEAM, TEAM_PHOTOS, Topic,
};
use crate::core::scroll::HEADER_DEBOUNCE_MS;
use crate::ui::common::AlertDialog;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal_on_scroll;
use crate::ui::timers::{use_debouncer, use_narrow_viewport};
use crate::ui::{
    AuthModal, ClassRotator, ContactModal, CoursePipeline, HeroCounters, LabCarousel,
    PhotoCarousel, TopicAccordion, use_session_view,
};

use super::UserDashboard;

const RESEARCH_ICONS: [&str; 3] = [icons::DNA, icons::ATOM, icons::BRAIN];

const SERVICE_ICONS: [&str; 6] = [
    icons::NETWORK,
    icons::ATOM,
    icons::COMPUTER,
    icons::BRAIN,
    icons::FILE_TEXT,
    icons::FLASK,
];

/// Home page: marketing content, or the dashboard when signed in
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session_view();

    view! {
        <SeoMeta />

        {move || match session.user() {
            Some(user) => view! { <UserDashboard user=user /> }.into_any(),
            None => view! { <MarketingPage /> }.into_any(),
        }}
    }
}

/// Smooth-scroll to a page section
fn scroll_to_section(section: SectionId) {
    #[cfg(not(feature = "ssr"))]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&section.to_string()));
        let Some(element) = element else {
            leptos::logging::warn!("No section with id {}", section);
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(feature = "ssr")]
    let _ = section;
}

#[component]
fn MarketingPage() -> impl IntoView {
    let auth_open = RwSignal::new(false);
    let contact_open = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    use_reveal_on_scroll();

    let on_navigate = Callback::new(move |target: NavTarget| match target {
        NavTarget::Section(section) => scroll_to_section(section),
        NavTarget::Contact => contact_open.set(true),
    });
    let open_auth = Callback::new(move |_: ()| auth_open.set(true));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#170056] via-[#410056] to-[#54366B] relative">
            <Header menu_open=menu_open on_navigate=on_navigate on_login=open_auth />
            <MobileMenu menu_open=menu_open on_navigate=on_navigate />

            <Hero on_navigate=on_navigate />
            <ExploreSection />
            <OfferSection />
            <TeamSection />
            <ResearchSection />
            <AcademySection on_join=open_auth />
            <ServicesSection />
            <SlbailSection />
            <AdvisorsSection />
            <NewsSection />
            <SuccessStoriesSection />
            <Footer on_navigate=on_navigate />

            <AuthModal
                is_open=auth_open.into()
                on_close=Callback::new(move |_| auth_open.set(false))
            />
            <ContactModal
                is_open=contact_open.into()
                on_close=Callback::new(move |_| contact_open.set(false))
            />
        </div>
    }
}

#[component]
fn Header(
    menu_open: RwSignal<bool>,
    on_navigate: Callback<NavTarget>,
    on_login: Callback<()>,
) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);

    let recompute = use_debouncer(HEADER_DEBOUNCE_MS, move || {
        #[cfg(not(feature = "ssr"))]
        if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
            set_scrolled.set(crate::core::scroll::is_scrolled(offset));
        }
    });

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| recompute.trigger());
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "ssr")]
    let _ = (set_scrolled, recompute);

    let nav_class = move || {
        if scrolled.get() {
            "px-3 py-2 rounded-md text-sm transition-all transform hover:scale-105 text-gray-700 hover:text-gray-900 hover:bg-gray-100"
        } else {
            "px-3 py-2 rounded-md text-sm transition-all transform hover:scale-105 text-purple-100 hover:text-white hover:bg-white/10"
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "sticky top-0 z-50 backdrop-blur-md border-b transition-all duration-300 bg-white/95 border-gray-300/30"
            } else {
                "sticky top-0 z-50 backdrop-blur-md border-b transition-all duration-300 bg-gradient-to-r from-[#000A33]/80 to-[#363B6B]/80 border-[#EAE3F5]/20"
            }
        }>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <div class="flex items-center">
                        <img
                            src=LOGO_PATH
                            alt="Insilico.lk"
                            class="w-8 h-8 object-contain transition-all duration-300"
                            class:invert=move || !scrolled.get()
                        />
                        <span
                            class="ml-2 text-lg font-semibold transition-all duration-300"
                            class=("text-gray-900", move || scrolled.get())
                            class=("text-white", move || !scrolled.get())
                        >
                            "Insilico.lk"
                        </span>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden flex items-center justify-center w-12 h-12 rounded-md transition-all hover:bg-white/10"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            let name = if menu_open.get() { icons::X } else { icons::MENU };
                            view! {
                                <Icon
                                    name=name
                                    class=if scrolled.get() { "w-8 h-8" } else { "w-8 h-8 invert" }
                                />
                            }
                        }}
                    </button>

                    // Desktop navigation
                    <nav class="hidden lg:flex items-center space-x-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let target = item.target;
                                view! {
                                    <button class=nav_class on:click=move |_| on_navigate.run(target)>
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <button
                        class="px-5 py-2 bg-[#54366B] hover:bg-[#410056] text-[#EAE3F5] border border-[#EAE3F5]/20 transition-all transform hover:scale-105 shadow-lg rounded-full"
                        on:click=move |_| on_login.run(())
                    >
                        "Login"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Full-screen menu for small screens; closes after any choice
#[component]
fn MobileMenu(menu_open: RwSignal<bool>, on_navigate: Callback<NavTarget>) -> impl IntoView {
    view! {
        <Show when=move || menu_open.get()>
            <div class="menu-enter fixed inset-0 z-50 bg-gradient-to-br from-[#170056]/95 via-[#410056]/95 to-[#54366B]/95 backdrop-blur-md md:hidden">
                <div class="container mx-auto px-4 py-8">
                    <div class="flex justify-end mb-6">
                        <button
                            class="flex items-center justify-center w-12 h-12 rounded-md hover:bg-white/10"
                            on:click=move |_| menu_open.set(false)
                            aria-label="Close menu"
                        >
                            <Icon name=icons::X class="w-8 h-8 invert" />
                        </button>
                    </div>
                    <nav class="flex flex-col space-y-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item: &NavItem| {
                                let target = item.target;
                                view! {
                                    <button
                                        class="text-left px-4 py-2 rounded-md text-white hover:bg-white/10 text-lg"
                                        on:click=move |_| {
                                            on_navigate.run(target);
                                            menu_open.set(false);
                                        }
                                    >
                                        {item.mobile_label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Hero(on_navigate: Callback<NavTarget>) -> impl IntoView {
    view! {
        <section class="relative overflow-hidden z-10">
            <div class="absolute inset-0">
                <div class="absolute inset-0 bg-gradient-to-br from-[#000A33] to-[#363B6B]"></div>
                <BackdropShapes />
            </div>

            <div class="relative container mx-auto px-4 py-16 lg:py-24">
                <div class="grid lg:grid-cols-2 gap-8 lg:gap-12 items-center mb-12">
                    <div class="text-white space-y-4 lg:space-y-6 relative">
                        <div class="absolute inset-0 -m-8 bg-gradient-to-r from-[#000A33]/90 to-[#363B6B]/60 rounded-3xl blur-xl"></div>
                        <div class="relative">
                            <h1 class="animate-on-scroll text-3xl md:text-4xl lg:text-6xl font-bold leading-tight text-left -mt-4">
                                "Accelerating "
                                <span class="text-[#EAE3F5] text-4xl md:text-5xl lg:text-7xl">"Insilico"</span>
                                " Innovation"
                            </h1>
                            <p class="animate-on-scroll delay-200 text-lg md:text-xl lg:text-2xl text-[#EAE3F5]/90 leading-relaxed text-left mt-6">
                                "Empowering researchers and students in genomics, proteomics, and computational biology through world-class education and cutting-edge research."
                            </p>
                            <div class="animate-on-scroll delay-400 flex flex-col sm:flex-row gap-4 justify-start mt-6">
                                <button
                                    class="bg-[#363B6B] hover:bg-[#000A33] text-[#EAE3F5] border border-[#EAE3F5]/20 rounded-md transition-all transform hover:scale-105 shadow-lg text-base md:text-lg px-6 py-4"
                                    on:click=move |_| on_navigate.run(NavTarget::Section(SectionId::Courses))
                                >
                                    "Explore Courses"
                                </button>
                                <button
                                    class="border border-[#EAE3F5]/30 text-[#EAE3F5] bg-[#000A33]/40 hover:bg-[#363B6B]/60 rounded-md px-6 py-4 text-base md:text-lg transition-all transform hover:scale-105 font-semibold backdrop-blur-sm"
                                    on:click=move |_| on_navigate.run(NavTarget::Section(SectionId::Research))
                                >
                                    "View Research"
                                </button>
                            </div>
                        </div>
                    </div>

                    <div class="animate-on-scroll delay-600 relative hidden lg:block">
                        <div class="relative w-full h-64 md:h-80 lg:h-96 bg-gradient-to-br from-[#000A33]/40 to-[#363B6B]/40 backdrop-blur-sm rounded-2xl border-2 border-[#EAE3F5]/20 overflow-hidden shadow-2xl">
                            <iframe
                                src=SHOWCASE_VIDEO_URL
                                allow="autoplay; fullscreen; picture-in-picture; clipboard-write"
                                class="w-full h-full relative z-10 border-0"
                                title="Bioinformatics Showcase"
                            ></iframe>
                        </div>
                    </div>
                </div>

                <HeroCounters />
            </div>
        </section>
    }
}

/// Blurred decorative circles behind dark sections
#[component]
fn BackdropShapes(#[prop(default = "bg-[#54366B]/20")] tint: &'static str) -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            <div class=format!("absolute top-20 left-10 w-64 h-64 rounded-full blur-3xl {}", tint)></div>
            <div class="absolute bottom-20 right-10 w-96 h-96 rounded-full bg-[#000A33]/40 blur-3xl"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] rounded-full bg-[#363B6B]/20 blur-3xl"></div>
        </div>
    }
}

/// Title in a coloured pill, as used by the light sections
#[component]
fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    /// Pill background
    tint: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-8 lg:mb-12">
            <div class=format!("inline-block px-6 py-3 rounded-lg mb-4 {}", tint)>
                <h2 class="text-3xl md:text-4xl font-bold text-gray-800">{title}</h2>
            </div>
            <p class="text-lg md:text-xl text-gray-600 max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
fn ExploreSection() -> impl IntoView {
    view! {
        <section class="relative py-20 px-2 md:px-4 bg-white">
            <div class="container mx-auto max-w-7xl">
                <div class="text-center space-y-8">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#170056] mb-6">
                        "Explore"<span class="rainbow-dot">"."</span>
                        " Discover"<span class="rainbow-dot">"."</span>
                        " Advance"<span class="rainbow-dot">"."</span>
                    </h2>
                    <p class="text-lg md:text-xl text-[#54366B] leading-relaxed px-4 md:px-8">
                        "Let's shape the future of Bioinformatics and Computational Biology together! At Insilico.lk, we are building a vibrant scientific community that empowers future innovators in genomics, molecular modeling, data science, and more. With free learning resources, collaborative discussions, and the latest breakthroughs, we're here to support your journey to grow, explore, and lead in this rapidly evolving field."
                    </p>
                    <div class="mt-4">
                        <h3 class="text-xl font-semibold text-[#170056] mb-3">
                            "Powered by Researchers, Alumni & Ecosystem"
                        </h3>
                        <div class="w-full h-[50px] md:h-[350px] rounded-lg overflow-hidden">
                            <img src=PARTNERS_IMAGE alt="Bioinformatics Partners" class="w-full h-full object-contain" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn OfferSection() -> impl IntoView {
    view! {
        <section class="py-20 md:py-32 bg-gradient-to-br from-[#54366B] via-[#363B6B] to-[#000A33] relative overflow-hidden">
            <BackdropShapes tint="bg-[#EAE3F5]/10" />

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-12 md:mb-24">
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-6 md:mb-10">
                        "What We Offer at Insilico.lk"
                    </h2>
                    <p class="text-lg md:text-xl lg:text-2xl text-[#EAE3F5]/90 max-w-5xl mx-auto leading-relaxed">
                        "Join us at Insilico.lk – where innovation meets opportunity, and passion meets purpose. Build your future in the growing world of informatics!"
                    </p>
                </div>

                <TopicAccordion topics=&OFFER_TOPICS />

                <div class="text-center">
                    <a
                        href=COMMUNITY_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-gradient-to-r from-green-500 to-green-600 hover:from-green-600 hover:to-green-700 text-white px-6 py-3 md:px-12 md:py-6 rounded-xl text-base md:text-xl font-semibold transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-xl inline-flex items-center justify-center gap-3"
                    >
                        <Icon name=icons::USERS class="w-5 h-5 md:w-7 md:h-7 invert" />
                        "Join Our Community"
                    </a>
                    <p class="text-[#EAE3F5]/70 text-sm md:text-base mt-3 md:mt-4">
                        "Connect with fellow informatics enthusiasts and stay updated with the latest developments"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TeamSection() -> impl IntoView {
    let is_narrow = use_narrow_viewport();
    let photos = Memo::new(move |_| TEAM_PHOTOS.select(is_narrow.get()));

    view! {
        <section id=SectionId::Team.to_string() class="relative py-20 bg-gradient-to-br from-[#000A33] to-[#363B6B] overflow-hidden">
            <BackdropShapes />

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">"Be a Part of the Future"</h2>
                </div>

                <div class="mb-16">
                    <PhotoCarousel slides=photos />
                </div>

                <div class="mt-16">
                    <div class="text-center mb-12">
                        <h3 class="text-2xl md:text-3xl font-semibold text-white mb-4">
                            "Meet our expert team of researchers and educators"
                        </h3>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {TEAM
                            .iter()
                            .map(|member| {
                                view! {
                                    <div class="animate-on-scroll bg-white/10 backdrop-blur-md border-2 border-white/20 hover:border-white/40 rounded-xl p-6 text-center transition-all transform hover:scale-105">
                                        <div class="w-32 h-32 mx-auto mb-4 rounded-full overflow-hidden border-4 border-white/20">
                                            <img src=member.image alt=member.name class="w-full h-full object-cover" />
                                        </div>
                                        <a
                                            href=member.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-xl font-semibold text-white hover:text-[#4ECDC4] transition-all inline-flex items-center justify-center gap-2"
                                        >
                                            {member.name}
                                            <Icon name=icons::EXTERNAL_LINK class="w-4 h-4 invert" />
                                        </a>
                                        <p class="text-purple-100 mt-2">{member.qualification}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Card that swaps its icon and title for the description on hover
#[component]
fn HoverCard(
    topic: Topic,
    icon: &'static str,
    /// `research-card` or `service-card`
    kind: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} animate-on-scroll group bg-white border-2 border-transparent bg-gradient-to-r from-blue-600/10 to-purple-600/10 hover:bg-gray-800 shadow-lg cursor-pointer min-h-[280px] md:min-h-[320px] relative overflow-hidden rounded-xl",
            kind,
        )>
            <div class="absolute inset-0 flex flex-col justify-center items-center p-8 transition-all duration-300 group-hover:opacity-0">
                <Icon name=icon class="h-20 w-20 md:h-24 md:w-24 mb-6" />
                <h3 class="text-2xl md:text-3xl font-bold text-gray-800 text-center">{topic.title}</h3>
            </div>
            <div class="hover-description absolute inset-0 bg-gray-800 flex items-center justify-center p-8 opacity-0 group-hover:opacity-100 transition-all duration-300">
                <p class="text-white text-center text-base md:text-lg leading-relaxed">{topic.description}</p>
            </div>
        </div>
    }
}

#[component]
fn ResearchSection() -> impl IntoView {
    view! {
        <section id=SectionId::Research.to_string() class="py-12 md:py-20 bg-white relative z-10">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Research Areas"
                    subtitle="Pioneering research in bioinformatics, cheminformatics, computational chemistry and AI-driven drug discovery applications"
                    tint="bg-[#EEBBFF]"
                />
                <div class="grid md:grid-cols-3 gap-8 lg:gap-10">
                    {RESEARCH_AREAS
                        .iter()
                        .zip(RESEARCH_ICONS)
                        .map(|(topic, icon)| view! { <HoverCard topic=*topic icon=icon kind="research-card" /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AcademySection(on_join: Callback<()>) -> impl IntoView {
    view! {
        <section id=SectionId::Courses.to_string() class="py-20 bg-gradient-to-br from-[#000A33] via-[#000A33] via-75% to-black">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <div class="inline-block border-2 border-white/30 rounded-xl px-8 py-4 backdrop-blur-sm">
                        <h2 class="text-4xl md:text-5xl font-bold text-white text-center">"Our Academy"</h2>
                    </div>
                    <p class="text-lg text-gray-300 max-w-4xl mx-auto mt-8">
                        "At Insilico.lk Academy, we're revolutionizing science education through our innovative journey-based learning approach! Our passionate mentors guide learners through engaging, self-paced projects aligned with the Sustainable Development Goals (SDGs) from core foundations to cutting-edge paths in Bioinformatics, Cheminformatics, Computational Biology, and AI in Life Sciences. Regular team challenges ignite curiosity, foster collaboration, and build essential skills for the future of healthcare, agriculture, and environmental science."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-start">
                    <ClassRotator slides=&ACADEMY_SLIDES />
                    <div class="rounded-2xl bg-white p-6 md:p-8 shadow-xl">
                        <CoursePipeline />
                    </div>
                </div>

                <div class="text-center mt-12">
                    <button
                        class="bg-white text-[#000A33] px-8 py-4 rounded-xl text-lg font-semibold hover:bg-[#4d2884] hover:text-white transition-colors duration-300 shadow-lg"
                        on:click=move |_| on_join.run(())
                    >
                        "Join Our Academy"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id=SectionId::Services.to_string() class="py-12 md:py-20 bg-white relative z-10">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Our Services"
                    subtitle="Professional bioinformatics, cheminformatics and computational biology services"
                    tint="bg-[#FFCB9C]"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                    {SERVICES
                        .iter()
                        .zip(SERVICE_ICONS)
                        .map(|(topic, icon)| view! { <HoverCard topic=*topic icon=icon kind="service-card" /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SlbailSection() -> impl IntoView {
    let launching_soon = RwSignal::new(false);

    view! {
        <section id=SectionId::Slbail.to_string() class="py-20 relative">
            <div class="absolute inset-0 z-0">
                <img src=SLBAIL_BACKDROP alt="SLBAIL Background" class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-black/50"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <div class="inline-block border-2 border-white/30 rounded-xl px-8 py-4 backdrop-blur-sm">
                        <h2 class="text-4xl md:text-5xl font-bold text-white text-center">"SLBAIL"</h2>
                    </div>
                    <h3 class="text-xl md:text-2xl font-semibold text-[#EAE3F5] mb-4 mt-8">
                        "Sri Lankan Bioinformatics and Artificial Intelligence Lab"
                    </h3>
                    <p class="text-lg text-gray-300 max-w-4xl mx-auto mt-8">
                        "Sri Lanka's first Bioinformatics and Artificial Intelligence Lab (SLBAIL) is transforming the landscape of drug discovery by fusing advanced AI technologies with rich traditional botanical wisdom. This innovative system streamlines and enhances the drug development process, setting a new benchmark in AI-driven pharmaceutical research."
                    </p>
                </div>

                <div class="mb-12">
                    <LabCarousel topics=&LAB_TOPICS />
                </div>

                <div class="text-center">
                    <button
                        class="bg-white text-[#000A33] px-8 py-4 rounded-xl text-lg font-semibold hover:bg-[#4d2884] hover:text-white transition-all duration-300 shadow-lg transform hover:scale-105"
                        on:click=move |_| launching_soon.set(true)
                    >
                        "Explore SLBAIL"
                    </button>
                </div>
            </div>

            <AlertDialog
                title="SLBAIL".to_string()
                message="SLBAIS will be launching soon.".to_string()
                is_open=launching_soon.into()
                on_close=Callback::new(move |_| launching_soon.set(false))
            />
        </section>
    }
}

#[component]
fn AdvisorCard(advisor: Advisor) -> impl IntoView {
    view! {
        <div class="min-w-[120px] sm:min-w-[160px] md:min-w-[240px] lg:min-w-[300px] bg-white border-2 border-transparent bg-gradient-to-r from-blue-600/10 to-purple-600/10 hover:shadow-lg rounded-xl shadow-md flex-shrink-0 overflow-hidden">
            <div class="bg-gray-50 p-1 md:p-3">
                <img src=advisor.image alt=advisor.name class="w-full h-16 sm:h-20 md:h-32 lg:h-40 object-contain" />
            </div>
            <div class="p-1 md:p-3 space-y-1">
                <h3 class="text-xs sm:text-sm md:text-base lg:text-lg font-semibold text-black hover:text-[#A50053] transition-colors leading-tight">
                    {advisor.name}
                </h3>
                {(!advisor.title.is_empty()).then(|| view! {
                    <p class="text-xs md:text-sm text-gray-700 font-medium leading-tight">{advisor.title}</p>
                })}
                <p class="text-xs lg:text-sm text-gray-600 leading-tight">{advisor.experience}</p>
                <p class="text-xs lg:text-sm text-gray-600 font-medium leading-tight">{advisor.education}</p>
            </div>
        </div>
    }
}

#[component]
fn AdvisorsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Advisors.to_string() class="py-12 md:py-20 bg-white relative z-10">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Our Advisors"
                    subtitle="Brilliant minds who guide us with their wealth of expertise and insight."
                    tint="bg-[#FFBBE5]"
                />
                // The list is rendered twice so the marquee loops without a gap
                <div class="relative overflow-hidden">
                    <div class="flex animate-scroll space-x-2 md:space-x-3 lg:space-x-4">
                        {ADVISORS
                            .iter()
                            .chain(ADVISORS.iter())
                            .map(|advisor| view! { <AdvisorCard advisor=*advisor /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn NewsSection() -> impl IntoView {
    view! {
        <section id=SectionId::News.to_string() class="py-12 md:py-20 bg-white relative z-10">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Latest News & Updates"
                    subtitle="Stay informed about the latest developments in informatics"
                    tint="bg-[#C8FFA4]"
                />
                <div class="grid md:grid-cols-3 gap-6 lg:gap-8">
                    {NEWS
                        .iter()
                        .map(|article| {
                            view! {
                                <article class="animate-on-scroll bg-white border-2 border-transparent bg-gradient-to-r from-blue-600/10 to-purple-600/10 hover:shadow-lg rounded-xl overflow-hidden transition-all transform hover:scale-105 shadow-md">
                                    <img src=article.image alt=article.title class="w-full h-40 md:h-48 object-cover" />
                                    <div class="p-6 space-y-3">
                                        <h3 class="text-lg md:text-xl font-semibold text-black hover:text-[#00A81C] transition-all">
                                            {article.title}
                                        </h3>
                                        <p class="text-sm md:text-base text-gray-700">{article.description}</p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SuccessStoriesSection() -> impl IntoView {
    view! {
        <section id=SectionId::SuccessStories.to_string() class="py-12 md:py-20 bg-white relative z-10">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Success Stories"
                    subtitle="Hear from our students and their achievements"
                    tint="bg-[#FFD97B]"
                />
                <div class="grid md:grid-cols-3 gap-6 lg:gap-8">
                    {SUCCESS_STORIES
                        .iter()
                        .map(|story| {
                            view! {
                                <div class="animate-on-scroll bg-white border-2 border-transparent bg-gradient-to-r from-blue-600/10 to-purple-600/10 hover:shadow-lg rounded-xl p-6 text-center transition-all transform hover:scale-105 shadow-md">
                                    <div class="w-20 h-20 mx-auto mb-4 rounded-full overflow-hidden border-4 border-purple-400">
                                        <img src=story.image alt=story.name class="w-full h-full object-cover" />
                                    </div>
                                    <h3 class="text-lg font-semibold text-black hover:text-[#E5C400] transition-all">{story.name}</h3>
                                    <p class="text-gray-700 mb-4">{story.role}</p>
                                    <p class="text-gray-700 text-sm italic">{format!("\"{}\"", story.testimonial)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer(on_navigate: Callback<NavTarget>) -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-br from-[#000A33] to-[#363B6B] text-[#EAE3F5] py-12 md:py-16 relative z-10">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-4 gap-6 lg:gap-8">
                    <div class="space-y-4">
                        <span class="text-xl font-bold text-white">"Insilico.lk"</span>
                        <p class="text-[#EAE3F5]/90 leading-relaxed text-sm md:text-base">
                            "Advancing informatics education and research in Sri Lanka through innovative programs and cutting-edge technology."
                        </p>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4 text-white">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .iter()
                                .map(|&(label, section)| {
                                    view! {
                                        <li>
                                            <button
                                                class="text-[#EAE3F5]/80 hover:text-white transition-colors text-sm md:text-base"
                                                on:click=move |_| on_navigate.run(NavTarget::Section(section))
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4 text-white">"Programs"</h3>
                        <ul class="space-y-2">
                            {PROGRAMS
                                .iter()
                                .map(|program| view! {
                                    <li class="text-[#EAE3F5]/80 text-sm md:text-base">{*program}</li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4 text-white">"Connect With Us"</h3>
                        <p class="text-[#EAE3F5]/80 text-sm md:text-base">
                            "Email: "
                            <a href=format!("mailto:{}", CONTACT_EMAIL) class="hover:text-white">{CONTACT_EMAIL}</a>
                            <br />
                            {format!("Phone: {}", CONTACT_PHONES.join(", "))}
                        </p>
                        <button
                            class="mt-4 text-sm underline text-[#EAE3F5]/80 hover:text-white"
                            on:click=move |_| on_navigate.run(NavTarget::Contact)
                        >
                            "Send us a message"
                        </button>
                    </div>
                </div>

                <div class="border-t border-[#EAE3F5]/20 mt-8 lg:mt-12 pt-6 lg:pt-8 text-center text-[#EAE3F5]/80">
                    <p class="text-sm md:text-base">
                        "© 2024 Insilico.lk. All rights reserved. | Privacy Policy | Terms of Service"
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Insilico.lk - Bioinformatics Education & Research in Sri Lanka" />

        <Meta name="description" content="Empowering researchers and students in genomics, proteomics, and computational biology through world-class education and cutting-edge research." />
        <Meta name="keywords" content="bioinformatics, cheminformatics, computational biology, drug discovery, molecular docking, Sri Lanka, courses, research" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Insilico.lk - Accelerating Insilico Innovation" />
        <Meta property="og:description" content="Bioinformatics and computational biology education, research and services in Sri Lanka." />
        <Meta property="og:image" content=LOGO_PATH />

        <Link rel="icon" href=LOGO_PATH />

        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"EducationalOrganization","name":"Insilico.lk","description":"Advancing informatics education and research in Sri Lanka","email":"info@bioinformatics.lk","telephone":["0765617680","0775297815"]}"#></script>
    }
}
