pub mod io;

pub use io::{atomic_write_str, ensure_parent_dir};
