//! Shared state machinery for paginated resource slices.
//!
//! Every slice owns one or more [`PagedCollection`]s with a matching
//! [`RequestState`] each. A collection holds exactly one page window; page
//! turns replace the window rather than accumulating rows.

use std::collections::BTreeSet;

use unap_admin_api::types::{
    AdminUser, ModerationAction, Offer, Post, RewardedUBlast, Submission, SupportThread, UBlast,
};

/// Lifecycle of one logical fetch: `idle -> loading -> idle-with-data`
/// or `idle-with-error`. No automatic retry; the user re-triggers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    pub loading: bool,
    pub error: String,
}

impl RequestState {
    /// Marks the request in flight and clears any prior error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    pub fn succeed(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }
}

/// Rows addressable by a stable server-assigned id.
pub trait HasId {
    fn row_id(&self) -> &str;
}

macro_rules! impl_has_id {
    ($($ty:ty),* $(,)?) => {
        $(impl HasId for $ty {
            fn row_id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_has_id!(
    AdminUser,
    Post,
    UBlast,
    Submission,
    ModerationAction,
    SupportThread,
    Offer,
    RewardedUBlast,
);

/// One page window of a remote collection.
///
/// Invariant: `1 <= page <= total_pages` whenever `total_pages >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedCollection<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub total_pages: i64,
}

impl<T> Default for PagedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
        }
    }
}

impl<T> PagedCollection<T> {
    /// Replaces the window with a fetched page. A missing (`< 1`) page in
    /// the response keeps the current cursor; `total_pages` is floored at 1.
    pub fn apply(&mut self, items: Vec<T>, page: i64, total_pages: i64) {
        self.items = items;
        if page >= 1 {
            self.page = page;
        }
        self.total_pages = total_pages.max(1);
        self.page = self.page.min(self.total_pages);
    }

    /// Moves the cursor, clamped to `[1, total_pages]`. The caller refetches.
    pub fn set_page(&mut self, page: i64) {
        self.page = page.clamp(1, self.total_pages);
    }

    pub fn reset_cursor(&mut self) {
        self.page = 1;
    }

    pub fn next_page(&self) -> i64 {
        (self.page + 1).min(self.total_pages)
    }

    pub fn prev_page(&self) -> i64 {
        (self.page - 1).max(1)
    }
}

impl<T: HasId> PagedCollection<T> {
    /// Applies `patch` to the row with the given id, if present in the
    /// current window. Returns whether a row was touched.
    pub fn patch_row(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|row| row.row_id() == id) {
            Some(row) => {
                patch(row);
                true
            }
            None => false,
        }
    }

    /// Removes exactly the row with the given id from the current window.
    pub fn remove_row(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|row| row.row_id() != id);
        self.items.len() != before
    }

    /// Removes every row whose id is in `ids`.
    pub fn remove_rows(&mut self, ids: &[String]) {
        self.items.retain(|row| !ids.iter().any(|id| id == row.row_id()));
    }
}

/// Bulk-selection set over the rows currently in view. Cleared whenever the
/// underlying page reloads so it can never reference rows no longer shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.ids = ids.into_iter().map(str::to_string).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> AdminUser {
        AdminUser {
            id: id.to_string(),
            ..AdminUser::default()
        }
    }

    #[test]
    fn apply_keeps_cursor_when_response_omits_page() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.page = 3;
        coll.total_pages = 5;
        coll.apply(vec![user("a")], 0, 5);
        assert_eq!(coll.page, 3);
        assert_eq!(coll.total_pages, 5);
    }

    #[test]
    fn apply_floors_total_pages_at_one() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.apply(Vec::new(), 1, 0);
        assert_eq!(coll.total_pages, 1);
        assert_eq!(coll.page, 1);
    }

    #[test]
    fn apply_clamps_page_into_range() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.page = 5;
        coll.total_pages = 5;
        coll.apply(Vec::new(), 0, 2);
        assert!(coll.page >= 1 && coll.page <= coll.total_pages);
    }

    #[test]
    fn set_page_clamps() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.total_pages = 4;
        coll.set_page(9);
        assert_eq!(coll.page, 4);
        coll.set_page(0);
        assert_eq!(coll.page, 1);
    }

    #[test]
    fn next_and_prev_stay_in_range() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.apply(Vec::new(), 2, 5);
        assert_eq!(coll.next_page(), 3);
        assert_eq!(coll.prev_page(), 1);
        coll.apply(Vec::new(), 5, 5);
        assert_eq!(coll.next_page(), 5);
    }

    #[test]
    fn patch_row_touches_only_the_matching_id() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.apply(vec![user("a"), user("b")], 1, 1);
        let touched = coll.patch_row("b", |row| row.ublast_blocked = true);
        assert!(touched);
        assert!(!coll.items[0].ublast_blocked);
        assert!(coll.items[1].ublast_blocked);
    }

    #[test]
    fn patch_row_missing_id_is_a_no_op() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.apply(vec![user("a")], 1, 1);
        let before = coll.clone();
        assert!(!coll.patch_row("zzz", |row| row.ublast_blocked = true));
        assert_eq!(coll, before);
    }

    #[test]
    fn remove_row_removes_exactly_one_id() {
        let mut coll = PagedCollection::<AdminUser>::default();
        coll.apply(vec![user("a"), user("b"), user("c")], 1, 1);
        assert!(coll.remove_row("b"));
        let ids: Vec<&str> = coll.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!coll.remove_row("b"));
    }

    #[test]
    fn selection_toggle_and_clear() {
        let mut sel = Selection::default();
        sel.toggle("a");
        sel.toggle("b");
        assert!(sel.contains("a"));
        sel.toggle("a");
        assert!(!sel.contains("a"));
        assert_eq!(sel.len(), 1);
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_replaces_prior_selection() {
        let mut sel = Selection::default();
        sel.toggle("stale");
        sel.select_all(["a", "b"]);
        assert!(!sel.contains("stale"));
        assert_eq!(sel.ids(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn request_state_lifecycle() {
        let mut req = RequestState::default();
        req.fail("boom");
        assert_eq!(req.error, "boom");
        req.begin();
        assert!(req.loading);
        assert!(req.error.is_empty());
        req.succeed();
        assert!(!req.loading);
    }
}
