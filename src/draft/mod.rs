pub mod conversion;
pub mod definition;
pub mod payload;
pub mod snapshot;

pub use conversion::*;
pub use definition::*;
pub use payload::*;
pub use snapshot::*;
