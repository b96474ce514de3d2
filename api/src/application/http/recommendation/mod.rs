pub mod handlers;
pub mod router;
pub mod validators;
pub mod views;
