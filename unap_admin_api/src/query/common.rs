//! Shared query infrastructure: the [`Query`] trait and [`PageQuery`] fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Trait for queries that carry the common pagination fields, providing
/// shared builder methods.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the common pagination fields.
    fn common(&mut self) -> &mut PageQuery;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.common().page = page;
        self
    }

    /// Sets the number of rows per page.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.common().limit = Some(limit);
        self
    }
}

/// Pagination fields shared by all list queries.
#[derive(Clone, Copy)]
pub struct PageQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Rows per page. `None` uses the API default.
    pub limit: Option<i64>,
}

impl Default for PageQuery {
    fn default() -> PageQuery {
        PageQuery {
            page: 1,
            limit: None,
        }
    }
}

impl PageQuery {
    /// Appends the pagination parameters to the URL.
    pub fn append_to(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        url
    }
}

impl Query for PageQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.append_to(url)
    }
}

impl PagedQuery for PageQuery {
    fn common(&mut self) -> &mut PageQuery {
        self
    }
}
