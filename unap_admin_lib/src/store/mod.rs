//! Per-page state slices. Each slice owns the data, cursors, and request
//! state for one admin page and talks to the server through [`AdminClient`].
//!
//! [`AdminClient`]: unap_admin_api::AdminClient

pub mod communications;
pub mod moderation;
pub mod overview;
pub mod paged;
pub mod post_content;
pub mod scheduling;
pub mod submissions;
pub mod support;
pub mod trending;
pub mod users;

pub use communications::{CommunicationsSlice, SendReport};
pub use moderation::ModerationSlice;
pub use overview::OverviewSlice;
pub use paged::{HasId, PagedCollection, RequestState, Selection};
pub use post_content::PostContentSlice;
pub use scheduling::SchedulingSlice;
pub use submissions::SubmissionsSlice;
pub use support::SupportSlice;
pub use trending::{TrendingSlice, MANUAL_PIN_CAPACITY};
pub use users::{GrantBlast, GrantForm, GrantMode, UsersSlice};
