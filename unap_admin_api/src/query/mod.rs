mod common;
mod submissions;
mod trending;
mod users;

pub use self::common::{PageQuery, PagedQuery, Query};
pub use self::submissions::{SubmissionListQuery, SubmissionStatus};
pub use self::trending::TrendingOverviewQuery;
pub use self::users::{UserFilter, UserListQuery};
