pub mod errors;

pub use errors::{AffinityError, AffinityResult};
