//! Insilico.lk - bioinformatics education and research website
//!
//! The public landing page for Insilico.lk, built with Leptos and
//! WebAssembly: animated marketing sections, slideshows, an auth modal
//! backed by Supabase, and a member dashboard shown once signed in.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
