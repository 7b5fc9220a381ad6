//! Lathe geometry: 2D profile curves, surfaces of revolution, and profile sampling.

pub mod profile;
pub mod sample;
pub mod surface;

pub use profile::{Profile, ProfileKind};
pub use sample::{profile_winding, Winding};
pub use surface::{Revolution, Surface};
