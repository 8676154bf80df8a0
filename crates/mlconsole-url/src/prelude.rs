pub use mlconsole_types::prelude::*;

// vim: ts=4
