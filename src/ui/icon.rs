use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under `/icons`, without the `.svg` extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const USERS: &str = "users";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const LOADER: &str = "loader";
    pub const LOG_OUT: &str = "log-out";
    pub const DNA: &str = "dna";
    pub const ATOM: &str = "atom";
    pub const BRAIN: &str = "brain";
    pub const NETWORK: &str = "network";
    pub const FLASK: &str = "flask-conical";
    pub const COMPUTER: &str = "computer";
    pub const FILE_TEXT: &str = "file-text";
}
