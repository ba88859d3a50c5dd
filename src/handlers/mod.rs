pub mod users;
pub mod health;
pub mod fallback;
