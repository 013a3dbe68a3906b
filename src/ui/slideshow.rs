//! Slideshow components
//!
//! All three carousels on the landing page share [`use_slideshow`]: an
//! [`IndexRotator`] in a signal plus an owned auto-advance interval.
//! Manual navigation changes the index without resetting the countdown.

use leptos::prelude::*;

use crate::core::content::{LabTopic, Slide};
use crate::core::error::StateError;
use crate::core::rotator::IndexRotator;
use crate::ui::icon::{Icon, icons};
use crate::ui::timers::{IntervalHandle, use_interval};

#[cfg(not(feature = "ssr"))]
impl crate::core::rotator::ActiveMark for web_sys::Element {
    fn set_active(&mut self, active: bool) {
        let classes = self.class_list();
        let _ = if active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }
}

/// Rotating index shared by a carousel's slides and controls
#[derive(Clone, Copy)]
pub struct Slideshow {
    rotator: RwSignal<IndexRotator>,
    timer: IntervalHandle,
}

impl Slideshow {
    /// Current index (tracked)
    pub fn index(&self) -> usize {
        self.rotator.with(|r| r.index())
    }

    pub fn len(&self) -> usize {
        self.rotator.with(|r| r.len())
    }

    /// "i / N" position text (tracked)
    pub fn position_label(&self) -> String {
        self.rotator.with(|r| r.position_label())
    }

    pub fn next(&self) {
        self.rotator.update(IndexRotator::next);
    }

    pub fn previous(&self) {
        self.rotator.update(IndexRotator::previous);
    }

    pub fn jump(&self, index: usize) {
        self.rotator.update(|r| {
            r.jump(index);
        });
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_running()
    }
}

/// Start a slideshow over a list whose length may change at runtime.
///
/// A length change re-clamps the index and restarts the countdown.
pub fn use_slideshow(len: Signal<usize>) -> Result<Slideshow, StateError> {
    let initial = IndexRotator::new(len.get_untracked())?;
    let rotator = RwSignal::new(initial);
    let timer = use_interval(initial.interval_ms(), move || {
        rotator.try_update(IndexRotator::advance);
    });

    Effect::new(move |previous: Option<usize>| {
        let current = len.get();
        if previous.is_some_and(|previous| previous != current) {
            rotator.update(|r| {
                if let Err(e) = r.resize(current) {
                    leptos::logging::warn!("Slideshow kept its old list: {}", e);
                }
            });
            timer.restart();
        }
        current
    });

    Ok(Slideshow { rotator, timer })
}

#[component]
fn SlideArrows(show: Slideshow, #[prop(default = "text-white")] tone: &'static str) -> impl IntoView {
    view! {
        <button
            class=format!("absolute left-3 top-1/2 -translate-y-1/2 z-10 p-2 rounded-full bg-black/30 hover:bg-black/50 transition-colors {}", tone)
            on:click=move |_| show.previous()
            aria-label="Previous slide"
        >
            <Icon name=icons::CHEVRON_LEFT class="w-6 h-6 invert" />
        </button>
        <button
            class=format!("absolute right-3 top-1/2 -translate-y-1/2 z-10 p-2 rounded-full bg-black/30 hover:bg-black/50 transition-colors {}", tone)
            on:click=move |_| show.next()
            aria-label="Next slide"
        >
            <Icon name=icons::CHEVRON_RIGHT class="w-6 h-6 invert" />
        </button>
    }
}

#[component]
fn SlideDots(show: Slideshow, len: Signal<usize>) -> impl IntoView {
    view! {
        <div class="absolute bottom-4 left-1/2 -translate-x-1/2 z-10 flex gap-2">
            {move || {
                (0..len.get())
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if show.index() == i {
                                        "w-3 h-3 rounded-full bg-white transition-all"
                                    } else {
                                        "w-3 h-3 rounded-full bg-white/50 hover:bg-white/75 transition-all"
                                    }
                                }
                                on:click=move |_| show.jump(i)
                                aria-label=format!("Go to slide {}", i + 1)
                            ></button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Full-width photo carousel with arrows, dots and a position counter
#[component]
pub fn PhotoCarousel(
    /// Slides for the current viewport
    #[prop(into)]
    slides: Signal<&'static [Slide]>,
) -> impl IntoView {
    let len = Signal::derive(move || slides.with(|s| s.len()));
    let show = match use_slideshow(len) {
        Ok(show) => show,
        Err(e) => {
            leptos::logging::warn!("Photo carousel disabled: {}", e);
            return ().into_any();
        }
    };

    view! {
        <div class="relative w-full h-[320px] md:h-[520px] overflow-hidden rounded-2xl shadow-2xl bg-gray-900">
            // Re-created on every index change so the fade replays
            {move || {
                let list = slides.get();
                list.get(show.index())
                    .or(list.first())
                    .map(|slide| {
                        view! {
                            <img
                                src=slide.src
                                alt=slide.alt
                                class="slide-enter absolute inset-0 w-full h-full object-cover"
                            />
                        }
                    })
            }}
            <SlideArrows show=show />
            <SlideDots show=show len=len />
            <div class="absolute top-4 right-4 z-10 px-3 py-1 rounded-full bg-black/50 text-white text-sm">
                {move || show.position_label()}
            </div>
        </div>
    }
    .into_any()
}

/// SLBAIL topic carousel: image with title and description overlay
#[component]
pub fn LabCarousel(topics: &'static [LabTopic]) -> impl IntoView {
    let len = Signal::derive(move || topics.len());
    let show = match use_slideshow(len) {
        Ok(show) => show,
        Err(e) => {
            leptos::logging::warn!("Lab carousel disabled: {}", e);
            return ().into_any();
        }
    };

    view! {
        <div class="relative w-full h-[420px] md:h-[480px] overflow-hidden rounded-2xl shadow-2xl">
            {move || {
                topics.get(show.index()).map(|topic| {
                    view! {
                        <div class="slide-enter absolute inset-0">
                            <img src=topic.image alt=topic.title class="w-full h-full object-cover" />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/30 to-transparent"></div>
                            <div class="absolute bottom-12 left-0 right-0 px-8 md:px-16 text-white">
                                <span class=format!("inline-block mb-3 px-4 py-1 rounded-full text-sm font-semibold bg-gradient-to-r {}", topic.color)>
                                    {topic.title}
                                </span>
                                <p class="max-w-2xl text-base md:text-lg leading-relaxed">{topic.description}</p>
                            </div>
                        </div>
                    }
                })
            }}
            <SlideArrows show=show />
            <SlideDots show=show len=len />
        </div>
    }
    .into_any()
}

/// Stacked slides switched by toggling the `active` class on the elements
/// themselves
#[component]
pub fn ClassRotator(slides: &'static [Slide]) -> impl IntoView {
    let len = Signal::derive(move || slides.len());
    let show = match use_slideshow(len) {
        Ok(show) => show,
        Err(e) => {
            leptos::logging::warn!("Rotator disabled: {}", e);
            return ().into_any();
        }
    };
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let index = show.index();
        let Some(container) = container.get() else {
            return;
        };
        let nodes = container.get_elements_by_class_name("slide");
        let mut elements: Vec<web_sys::Element> =
            (0..nodes.length()).filter_map(|i| nodes.item(i)).collect();
        crate::core::rotator::mark_active(&mut elements, index);
    });

    #[cfg(feature = "ssr")]
    let _ = show;

    view! {
        <div node_ref=container class="slideshow relative w-full h-[300px] md:h-[420px] overflow-hidden rounded-2xl shadow-xl">
            {slides
                .iter()
                .enumerate()
                .map(|(i, slide)| {
                    view! {
                        <div class=if i == 0 { "slide active" } else { "slide" }>
                            <img src=slide.src alt=slide.alt class="w-full h-full object-cover" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
