//! Domain model for computation requests.
//!
//! The closed set of input file types is modelled as [`FileType`]; every
//! type maps to exactly one slot of [`RequestFiles`], so only parsing a raw
//! tag can fail.

mod error;
mod file_type;
mod request;
mod resource;
mod trigger;

pub use error::{FileSlotError, ParseFileTypeError};
pub use file_type::FileType;
pub use request::{ComputationRequest, FileSlots, RequestFiles};
pub use resource::FileResource;
pub use trigger::TriggerOrigin;
