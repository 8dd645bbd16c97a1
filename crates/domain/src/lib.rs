mod member;
mod reminder;
mod shared;

pub use member::{ContactChannel, Member};
pub use reminder::Reminder;
pub use shared::entity::ID;
