pub mod date;
pub mod filter;
pub mod notification;
pub mod overlap;
pub mod time_validation;
