mod blast;
pub use self::blast::{BlastDraft, BlastResponse, BlastsPage, UBlast};

mod moderation;
pub use self::moderation::{ActionsPage, ModerationAction};

mod offer;
pub use self::offer::{
    Offer, OfferBlastRef, OfferParty, OfferStatusCounts, OffersPage, OffersSummary,
    PerBlastEarnings, RewardedPage, RewardedUBlast,
};

mod post;
pub use self::post::{Post, PostAuthor, PostStats, PostsPage};

mod stats;
pub use self::stats::{GrowthPoint, OverviewStats, PlatformPoint, TrendingHashtag};

mod submission;
pub use self::submission::{Submission, SubmissionAuthor, SubmissionsPage};

mod support;
pub use self::support::{MessagesPage, SupportMessage, SupportThread, ThreadsPage};

mod trending;
pub use self::trending::{TierMeta, TrendingMeta, TrendingOverview, TrendingPlacement};

mod user;
pub use self::user::{AdminUser, RestrictionUpdate, UsersPage};
