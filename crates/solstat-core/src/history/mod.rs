//! Stored play history records.
//!
//! History files keep every record in the layout it was written with. Older
//! layouts have fewer trailing fields; [`HistoryRecord::upgrade`] fills them
//! with the defaults below so the log table only deals with [`LogRecord`].

mod record;

pub use record::*;
