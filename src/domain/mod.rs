mod park;
mod status;
pub(crate) mod storage;

pub use park::{Field, Park, MISSING_UPDATE_TIME};
pub use status::{classify, FieldStatus};
