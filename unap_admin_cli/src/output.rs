use serde::Serialize;
use tabled::{Table, Tabled};
use unap_admin_api::types::{
    AdminUser, ModerationAction, Offer, OverviewStats, Post, RewardedUBlast, Submission,
    SupportMessage, SupportThread, TrendingPlacement, UBlast,
};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    #[serde(rename = "Username")]
    username: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Followers")]
    #[serde(rename = "Followers")]
    followers: i64,
    #[tabled(rename = "Blocked")]
    #[serde(rename = "Blocked")]
    blocked: String,
}

#[derive(Tabled, Serialize)]
struct PostRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    post_type: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Views")]
    #[serde(rename = "Views")]
    views: i64,
    #[tabled(rename = "Likes")]
    #[serde(rename = "Likes")]
    likes: i64,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct BlastRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Scheduled")]
    #[serde(rename = "Scheduled")]
    scheduled: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct SubmissionRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    user: String,
    #[tabled(rename = "Blast")]
    #[serde(rename = "Blast")]
    blast: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Submitted")]
    #[serde(rename = "Submitted")]
    submitted: String,
}

#[derive(Tabled, Serialize)]
struct ActionRow {
    #[tabled(rename = "When")]
    #[serde(rename = "When")]
    when: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    action_type: String,
    #[tabled(rename = "Target")]
    #[serde(rename = "Target")]
    target: String,
    #[tabled(rename = "By")]
    #[serde(rename = "By")]
    by: String,
    #[tabled(rename = "Reason")]
    #[serde(rename = "Reason")]
    reason: String,
}

#[derive(Tabled, Serialize)]
struct ThreadRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    user: String,
    #[tabled(rename = "Subject")]
    #[serde(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Last Message")]
    #[serde(rename = "Last Message")]
    last_message: String,
}

#[derive(Tabled, Serialize)]
struct MessageRow {
    #[tabled(rename = "When")]
    #[serde(rename = "When")]
    when: String,
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    from: String,
    #[tabled(rename = "Text")]
    #[serde(rename = "Text")]
    text: String,
}

#[derive(Tabled, Serialize)]
struct TrendingRow {
    #[tabled(rename = "Pos")]
    #[serde(rename = "Pos")]
    position: String,
    #[tabled(rename = "Placement")]
    #[serde(rename = "Placement")]
    placement_id: String,
    #[tabled(rename = "Post")]
    #[serde(rename = "Post")]
    post_id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct OfferRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Blast")]
    #[serde(rename = "Blast")]
    blast: String,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    user: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct RewardedRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    user: String,
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Expires")]
    #[serde(rename = "Expires")]
    expires: String,
}

// -- Row builders --

fn build_user_rows(users: &[AdminUser]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id.clone(),
            name: u.name.clone(),
            username: u.username.clone(),
            email: u.email.clone(),
            status: u.status.clone(),
            followers: u.followers,
            blocked: if u.ublast_blocked {
                u.ublast_blocked_until.clone().unwrap_or_else(|| "yes".to_string())
            } else {
                String::new()
            },
        })
        .collect()
}

fn build_post_rows(posts: &[Post]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| PostRow {
            id: p.id.clone(),
            author: p.user.name.clone(),
            post_type: p.post_type.clone(),
            status: p.status.clone(),
            views: p.stats.views,
            likes: p.stats.likes,
            created: short_date(&p.created_at),
        })
        .collect()
}

fn build_blast_rows(blasts: &[UBlast]) -> Vec<BlastRow> {
    blasts
        .iter()
        .map(|b| BlastRow {
            id: b.id.clone(),
            title: b.title.clone(),
            status: b.status.clone(),
            scheduled: b.scheduled_for.as_deref().map(short_date).unwrap_or_default(),
            created: short_date(&b.created_at),
        })
        .collect()
}

fn build_submission_rows(submissions: &[Submission]) -> Vec<SubmissionRow> {
    submissions
        .iter()
        .map(|s| SubmissionRow {
            id: s.id.clone(),
            user: s.user.username.clone(),
            blast: s.blast_title.clone(),
            status: s.status.clone(),
            submitted: short_date(&s.submitted_at),
        })
        .collect()
}

fn build_action_rows(actions: &[ModerationAction]) -> Vec<ActionRow> {
    actions
        .iter()
        .map(|a| ActionRow {
            when: short_date(&a.performed_at),
            action_type: a.action_type.clone(),
            target: a
                .target_name
                .clone()
                .unwrap_or_else(|| format!("{} {}", a.target_type, a.target_id)),
            by: a.performed_by.clone(),
            reason: a.reason.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_thread_rows(threads: &[SupportThread]) -> Vec<ThreadRow> {
    threads
        .iter()
        .map(|t| ThreadRow {
            id: t.id.clone(),
            user: t.user.username.clone(),
            subject: t.last_subject.clone(),
            status: t.status.clone(),
            last_message: short_date(&t.last_message_at),
        })
        .collect()
}

fn build_message_rows(messages: &[SupportMessage]) -> Vec<MessageRow> {
    messages
        .iter()
        .map(|m| MessageRow {
            when: short_date(&m.timestamp),
            from: if m.is_admin { "admin" } else { "user" }.to_string(),
            text: m.text.clone(),
        })
        .collect()
}

fn build_trending_rows(placements: &[TrendingPlacement]) -> Vec<TrendingRow> {
    placements
        .iter()
        .map(|p| TrendingRow {
            position: p.position.map(|n| n.to_string()).unwrap_or_default(),
            placement_id: p.id.clone(),
            post_id: p.post_id.clone(),
            title: p.title.clone().unwrap_or_default(),
            score: p.score.map(|s| format!("{:.1}", s)).unwrap_or_default(),
            status: p.status.clone(),
        })
        .collect()
}

fn build_offer_rows(offers: &[Offer]) -> Vec<OfferRow> {
    offers
        .iter()
        .map(|o| OfferRow {
            id: o.id.clone(),
            blast: o.ublast.title.clone(),
            user: o.user.name.clone(),
            price: format_cents(o.price_cents, &o.currency),
            status: o.status.clone(),
        })
        .collect()
}

fn build_rewarded_rows(rewarded: &[RewardedUBlast]) -> Vec<RewardedRow> {
    rewarded
        .iter()
        .map(|r| RewardedRow {
            id: r.id.clone(),
            title: r.title.clone(),
            user: r.user.name.clone(),
            label: r.reward_label.clone(),
            status: r.status.clone(),
            expires: r.expires_at.as_deref().map(short_date).unwrap_or_default(),
        })
        .collect()
}

// -- Printing --

pub fn print_users(users: &[AdminUser], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_user_rows(users))),
        OutputFormat::Json => print_json(users),
    }
}

pub fn print_posts(posts: &[Post], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_post_rows(posts))),
        OutputFormat::Json => print_json(posts),
    }
}

pub fn print_blasts(blasts: &[UBlast], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_blast_rows(blasts))),
        OutputFormat::Json => print_json(blasts),
    }
}

pub fn print_submissions(submissions: &[Submission], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_submission_rows(submissions))),
        OutputFormat::Json => print_json(submissions),
    }
}

pub fn print_actions(actions: &[ModerationAction], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_action_rows(actions))),
        OutputFormat::Json => print_json(actions),
    }
}

pub fn print_threads(threads: &[SupportThread], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_thread_rows(threads))),
        OutputFormat::Json => print_json(threads),
    }
}

pub fn print_messages(messages: &[SupportMessage], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_message_rows(messages))),
        OutputFormat::Json => print_json(messages),
    }
}

pub fn print_trending(placements: &[TrendingPlacement], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_trending_rows(placements))),
        OutputFormat::Json => print_json(placements),
    }
}

pub fn print_offers(offers: &[Offer], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_offer_rows(offers))),
        OutputFormat::Json => print_json(offers),
    }
}

pub fn print_rewarded(rewarded: &[RewardedUBlast], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_rewarded_rows(rewarded))),
        OutputFormat::Json => print_json(rewarded),
    }
}

pub fn print_stats(stats: &OverviewStats, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(stats),
        OutputFormat::Table => {
            println!("Users:          {}", stats.total_users);
            println!("Active users:   {}", stats.total_active_users);
            println!("Posts:          {}", stats.total_uposts);
            println!("UBlasts:        {}", stats.total_ublasts);
            println!("UBlast shares:  {}", stats.total_ublast_shares);
            println!(
                "Share progress: {:.1}% ({} of {})",
                stats.ublast_share_percent, stats.ublast_shared_count, stats.ublast_share_target
            );
            if !stats.trending_hashtags.is_empty() {
                let tags: Vec<String> = stats
                    .trending_hashtags
                    .iter()
                    .map(|h| format!("#{} ({})", h.tag, h.count))
                    .collect();
                println!("Trending:       {}", tags.join(", "));
            }
        }
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Pagination footer, written to stderr so table output stays pipeable.
pub fn page_line(page: i64, total_pages: i64) {
    eprintln!("Page {}/{}", page, total_pages);
}

pub fn format_cents(cents: i64, currency: &str) -> String {
    format!("{:.2} {}", cents as f64 / 100.0, currency.to_uppercase())
}

fn short_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AdminUser {
        AdminUser {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            ublast_blocked: true,
            ublast_blocked_until: Some("2026-01-01T00:00:00Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn json_format_accepts_row_slices() {
        let users = vec![sample_user()];
        // Both entry points take the unsized slice directly.
        print_users(users.as_slice(), &OutputFormat::Json);
        print_json(users.as_slice());
    }

    #[test]
    fn user_rows_show_block_expiry() {
        let rows = build_user_rows(&[sample_user()]);
        assert_eq!(rows[0].blocked, "2026-01-01T00:00:00Z");

        let mut unblocked = sample_user();
        unblocked.ublast_blocked = false;
        let rows = build_user_rows(&[unblocked]);
        assert!(rows[0].blocked.is_empty());
    }

    #[test]
    fn format_cents_shows_dollars_and_currency() {
        assert_eq!(format_cents(12345, "usd"), "123.45 USD");
        assert_eq!(format_cents(0, "eur"), "0.00 EUR");
    }

    #[test]
    fn short_date_falls_back_to_raw_input() {
        assert_eq!(short_date("2026-08-01T09:30:00Z"), "2026-08-01 09:30");
        assert_eq!(short_date("yesterday"), "yesterday");
    }
}
