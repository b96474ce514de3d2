pub mod errors;
pub mod form;
pub mod recommendation;

pub use errors::*;
pub use form::*;
pub use recommendation::*;
