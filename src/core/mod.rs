//! Platform-independent view state and site content

pub mod accordion;
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod rotator;
pub mod scroll;
pub mod session;
#[cfg(test)]
mod tests;

pub use accordion::Accordion;
pub use config::ProviderConfig;
#[cfg(feature = "ssr")]
pub use config::Config;
pub use counter::{CounterLabel, CounterSet, TickOutcome};
pub use error::{AuthError, StateError};
pub use rotator::{ActiveMark, IndexRotator, ResponsiveSlides, is_narrow_viewport, mark_active};
pub use scroll::{Debounce, RevealLedger, Ticket, is_scrolled};
pub use session::{
    GateAction, Session, SessionChange, SessionChannel, SessionEvent, SessionGate,
    SessionProvider, Subscription, User, UserMetadata, ViewState, lookup_or_anonymous,
};
