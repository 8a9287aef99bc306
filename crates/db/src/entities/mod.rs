//! Database entities.

pub mod comment;
pub mod contest_item;
pub mod origin_record;
pub mod user;
pub mod vote;

pub use comment::Entity as Comment;
pub use contest_item::Entity as ContestItem;
pub use origin_record::Entity as OriginRecord;
pub use user::Entity as User;
pub use vote::Entity as Vote;
