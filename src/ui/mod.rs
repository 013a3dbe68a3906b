pub mod accordion;
pub mod auth;
pub mod common;
pub mod contact_modal;
pub mod counters;
pub mod course_pipeline;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod session_view;
pub mod slideshow;
pub mod timers;

pub use accordion::TopicAccordion;
pub use auth::{AuthModal, provide_auth_context, use_auth_context};
pub use contact_modal::ContactModal;
pub use counters::HeroCounters;
pub use course_pipeline::CoursePipeline;
pub use icon::{Icon, icons};
pub use session_view::{SessionView, use_session_view};
pub use slideshow::{ClassRotator, LabCarousel, PhotoCarousel};
