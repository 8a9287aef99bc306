//! Business logic services.

pub mod account;
pub mod catalog;
pub mod comment;
pub mod moderation;
pub mod origin;
pub mod vote;

pub use account::{
    AccountService, AuthSession, LoginInput, ProfileView, SignupInput, UpdateProfileInput,
};
pub use catalog::{CatalogService, CatalogView, ItemWithTally};
pub use comment::{CommentService, CommentView, NewComment};
pub use moderation::{AccountSummary, ModerationService, OverviewStats};
pub use origin::OriginService;
pub use vote::{VoteOutcome, VoteService};
