mod models;

pub use models::{Entry, NoteError, NoteStore};
