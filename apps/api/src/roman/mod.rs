pub mod convert;
pub mod handlers;

pub use convert::RomanError;
