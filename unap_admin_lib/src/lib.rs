//! State and operation layer for the UNAP admin console.
//!
//! Sits between the raw HTTP client in `unap_admin_api` and any frontend.
//! Each admin page gets a slice in [`store`] that owns its cached rows,
//! pagination cursors, and request lifecycle; mutations either patch cached
//! rows in place, remove them, or refetch the page, depending on what the
//! server call can invalidate.

pub mod error;
pub mod store;
pub mod validation;

pub use error::OpError;
pub use store::{
    CommunicationsSlice, GrantBlast, GrantForm, GrantMode, HasId, ModerationSlice, OverviewSlice,
    PagedCollection, PostContentSlice, RequestState, SchedulingSlice, Selection, SendReport,
    SubmissionsSlice, SupportSlice, TrendingSlice, UsersSlice, MANUAL_PIN_CAPACITY,
};
pub use validation::RecipientFilter;
