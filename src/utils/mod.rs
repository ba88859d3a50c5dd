pub mod user_data;
pub mod discount;
pub mod diagnostics;
