//! Contact modal
//!
//! Shows the contact details and drafts an e-mail in the visitor's own mail
//! client. Nothing is sent from the page itself.

use leptos::prelude::*;

use crate::core::content::{COMMUNITY_URL, CONTACT_EMAIL, CONTACT_PHONES};
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

/// A drafted enquiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Enquiry {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.message.trim().is_empty()
    }

    pub fn subject(&self) -> String {
        format!("Enquiry from {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        let mut body = self.message.trim().to_string();
        body.push_str("\n\n");
        body.push_str(self.name.trim());
        if !self.email.trim().is_empty() {
            body.push_str(&format!(" <{}>", self.email.trim()));
        }
        body
    }

    /// `mailto:` link with the subject and body passed through `encode`
    pub fn mailto(&self, encode: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            CONTACT_EMAIL,
            encode(&self.subject()),
            encode(&self.body())
        )
    }
}

#[cfg(not(feature = "ssr"))]
fn open_mail_client(enquiry: &Enquiry) {
    let href = enquiry.mailto(|part| String::from(js_sys::encode_uri_component(part)));
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&href) {
            leptos::logging::warn!("Could not open mail client: {:?}", e);
        }
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg text-gray-800 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent";

#[component]
pub fn ContactModal(is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let incomplete = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let enquiry = Enquiry {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if !enquiry.is_complete() {
            incomplete.set(true);
            return;
        }
        incomplete.set(false);

        #[cfg(not(feature = "ssr"))]
        open_mail_client(&enquiry);

        message.set(String::new());
        on_close.run(());
    };

    view! {
        <BaseModal
            title="Contact Us".to_string()
            subtitle="We'd love to hear from you. Reach out with any questions about our courses, research or services.".to_string()
            is_open=is_open
            on_close=on_close
            max_width="max-w-lg"
        >
            <div class="space-y-3 mb-6 text-gray-700">
                <a href=format!("mailto:{}", CONTACT_EMAIL) class="flex items-center gap-3 hover:text-purple-700">
                    <Icon name=icons::MAIL class="w-5 h-5" />
                    {CONTACT_EMAIL}
                </a>
                {CONTACT_PHONES
                    .iter()
                    .map(|phone| {
                        view! {
                            <a href=format!("tel:{}", phone) class="flex items-center gap-3 hover:text-purple-700">
                                <Icon name=icons::PHONE class="w-5 h-5" />
                                {*phone}
                            </a>
                        }
                    })
                    .collect_view()}
                <a
                    href=COMMUNITY_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-3 hover:text-purple-700"
                >
                    <Icon name=icons::USERS class="w-5 h-5" />
                    "Join our WhatsApp community"
                </a>
            </div>

            <form on:submit=on_submit class="space-y-4 border-t border-gray-200 pt-6">
                <input
                    type="text"
                    placeholder="Your name"
                    autocomplete="name"
                    class=INPUT_CLASS
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Your email (optional)"
                    autocomplete="email"
                    class=INPUT_CLASS
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <textarea
                    rows="4"
                    placeholder="How can we help?"
                    class=INPUT_CLASS
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || incomplete.get()>
                    <p class="text-sm text-red-500">"Please add your name and a message."</p>
                </Show>
                <button
                    type="submit"
                    class="btn-gradient w-full py-2.5 text-white font-semibold rounded-lg"
                >
                    "Send Message"
                </button>
            </form>
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry() -> Enquiry {
        Enquiry {
            name: " Kasuni ".to_string(),
            email: "kasuni@example.com".to_string(),
            message: "Is the docking workshop open?".to_string(),
        }
    }

    #[test]
    fn test_enquiry_needs_name_and_message() {
        assert!(enquiry().is_complete());
        assert!(!Enquiry { message: "  ".to_string(), ..enquiry() }.is_complete());
        assert!(!Enquiry { name: String::new(), ..enquiry() }.is_complete());
    }

    #[test]
    fn test_body_signs_with_name_and_address() {
        assert_eq!(
            enquiry().body(),
            "Is the docking workshop open?\n\nKasuni <kasuni@example.com>"
        );
        assert_eq!(
            Enquiry { email: String::new(), ..enquiry() }.body(),
            "Is the docking workshop open?\n\nKasuni"
        );
    }

    #[test]
    fn test_mailto_encodes_parts() {
        let href = enquiry().mailto(|part| part.replace(' ', "%20").replace('\n', "%0A"));

        assert!(href.starts_with("mailto:info@bioinformatics.lk?subject=Enquiry%20from%20Kasuni&body="));
        assert!(!href.contains(' '));
    }
}
