pub mod listener;
pub mod messages;
