//! Query builder for blast submissions.

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::common::{PageQuery, PagedQuery, Query};

/// Review state of a submission.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SubmissionStatus::Pending => "pending",
                SubmissionStatus::Approved => "approved",
                SubmissionStatus::Rejected => "rejected",
            }
        )
    }
}

impl FromStr for SubmissionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// Query builder for `GET /api/admin/ublasts/submissions`.
#[derive(Clone, Copy, Default)]
pub struct SubmissionListQuery {
    pub common: PageQuery,
    /// `None` fetches submissions in every state.
    pub status: Option<SubmissionStatus>,
}

impl SubmissionListQuery {
    pub fn with_status(mut self, status: SubmissionStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl Query for SubmissionListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.append_to(url);
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", &status.to_string());
        }
        url
    }
}

impl PagedQuery for SubmissionListQuery {
    fn common(&mut self) -> &mut PageQuery {
        &mut self.common
    }
}
