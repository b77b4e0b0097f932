//! Query builder for the admin user list.

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::common::{PageQuery, PagedQuery, Query};

/// Server-side user list filter.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum UserFilter {
    #[default]
    All,
    Active,
    Restricted,
    Rewarded,
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UserFilter::All => "all",
                UserFilter::Active => "active",
                UserFilter::Restricted => "restricted",
                UserFilter::Rewarded => "rewarded",
            }
        )
    }
}

impl FromStr for UserFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(UserFilter::All),
            "active" => Ok(UserFilter::Active),
            "restricted" => Ok(UserFilter::Restricted),
            "rewarded" => Ok(UserFilter::Rewarded),
            _ => Err(()),
        }
    }
}

/// Query builder for `GET /api/admin/users`.
#[derive(Clone, Copy, Default)]
pub struct UserListQuery {
    pub common: PageQuery,
    /// Omitted from the URL when `None`; the server then applies no filter.
    pub filter: Option<UserFilter>,
}

impl UserListQuery {
    pub fn with_filter(mut self, filter: UserFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl Query for UserListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.append_to(url);
        if let Some(filter) = self.filter {
            url.query_pairs_mut()
                .append_pair("filter", &filter.to_string());
        }
        url
    }
}

impl PagedQuery for UserListQuery {
    fn common(&mut self) -> &mut PageQuery {
        &mut self.common
    }
}
