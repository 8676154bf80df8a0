pub use crate::app::Console;
pub use mlconsole_types::prelude::*;

// vim: ts=4
