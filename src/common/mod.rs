pub mod codec;
pub mod error;
pub mod metadata;

pub use codec::*;
pub use error::*;
pub use metadata::*;
