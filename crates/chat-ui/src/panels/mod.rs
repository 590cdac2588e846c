pub mod button;
pub mod messages;
pub mod window;
