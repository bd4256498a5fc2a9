pub mod defect_entry;
pub mod entry;
pub mod object_entry;
pub mod time_entry;

pub use defect_entry::DefectEntry;
pub use entry::{Entry, EntryContext, EntryError, EntryKind};
pub use object_entry::{Classification, ObjectEntry, ObjectSize};
pub use time_entry::TimeEntry;
