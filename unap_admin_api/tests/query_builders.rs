use unap_admin_api::{
    PageQuery, PagedQuery, Query, SubmissionListQuery, SubmissionStatus, TrendingOverviewQuery,
    UserFilter, UserListQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn page_query_defaults() {
    let url = PageQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=1"));
    assert!(!query.contains("limit="));
}

#[test]
fn page_query_with_page_and_limit() {
    let url = PageQuery::default()
        .with_page(3)
        .with_limit(10)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=3"));
    assert!(query.contains("limit=10"));
}

#[test]
fn user_query_defaults_have_no_filter() {
    let url = UserListQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=1"));
    assert!(!query.contains("filter="));
}

#[test]
fn user_query_filter_variants() {
    let url = UserListQuery::default()
        .with_filter(UserFilter::Restricted)
        .add_to_url(&base_url());
    assert!(url.query().unwrap().contains("filter=restricted"));

    let url = UserListQuery::default()
        .with_filter(UserFilter::Rewarded)
        .with_page(2)
        .with_limit(10)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("filter=rewarded"));
    assert!(query.contains("page=2"));
    assert!(query.contains("limit=10"));
}

#[test]
fn submission_query_with_status() {
    let url = SubmissionListQuery::default()
        .with_status(SubmissionStatus::Pending)
        .with_limit(10)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("status=pending"));
    assert!(query.contains("limit=10"));
}

#[test]
fn submission_query_without_status() {
    let url = SubmissionListQuery::default().add_to_url(&base_url());
    assert!(!url.query().unwrap().contains("status="));
}

#[test]
fn trending_query_carries_three_cursors() {
    let url = TrendingOverviewQuery::default()
        .with_top_page(2)
        .with_manual_page(3)
        .with_organic_page(4)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("topPage=2"));
    assert!(query.contains("manualPage=3"));
    assert!(query.contains("organicPage=4"));
}

#[test]
fn user_filter_round_trips_from_str() {
    assert_eq!("restricted".parse::<UserFilter>(), Ok(UserFilter::Restricted));
    assert!("bogus".parse::<UserFilter>().is_err());
}
