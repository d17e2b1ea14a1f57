mod record;
mod value;

pub use record::{Record, RowId};
pub use value::{CellValue, FieldValue, Tone};
