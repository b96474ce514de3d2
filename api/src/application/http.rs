pub mod health;
pub mod html;
pub mod recommendation;
pub mod server;
