pub mod events;
pub mod proposal;
pub mod registry;

pub use events::*;
pub use proposal::*;
pub use registry::*;
