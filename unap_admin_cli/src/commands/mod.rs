pub mod communications;
pub mod login;
pub mod moderation;
pub mod overview;
pub mod posts;
pub mod scheduling;
pub mod settings;
pub mod submissions;
pub mod support;
pub mod trending;
pub mod users;
