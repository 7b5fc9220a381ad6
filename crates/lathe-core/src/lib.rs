pub mod error;
pub mod step;
pub mod traits;

pub use error::{LatheError, Result};
pub use step::DifferenceStep;
pub use traits::Validate;
