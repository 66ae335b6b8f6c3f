pub mod menu;
pub mod messages;
