pub mod builder;
pub mod clock;
pub mod error;

pub use builder::*;
pub use clock::*;
pub use error::*;
