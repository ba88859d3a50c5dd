pub mod user;
pub mod response;
