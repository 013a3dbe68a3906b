//! Common reusable UI components

pub mod modal;

pub use modal::{AlertDialog, BaseModal, ScrollLock, provide_scroll_lock};
