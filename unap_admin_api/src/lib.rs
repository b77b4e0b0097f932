mod client;
mod errors;
mod query;
mod session;
pub mod types;
pub use self::client::{AdminClient, Envelope, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    PageQuery, PagedQuery, Query, SubmissionListQuery, SubmissionStatus, TrendingOverviewQuery,
    UserFilter, UserListQuery,
};
pub use self::session::{FileStore, KeyValueStore, MemoryStore, SessionStore};
