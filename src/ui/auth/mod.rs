//! Authentication UI module
//!
//! The identity provider client, the auth context that shares it and the
//! sign-in / sign-up modal.

mod auth_modal;
mod context;
mod supabase;

pub use auth_modal::{AuthMode, AuthModal};
pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use supabase::SupabaseAuth;
