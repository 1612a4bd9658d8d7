//! Command implementations
//!
//! Each command is an `impl Repository` block taking an explicit request
//! struct built by the dispatcher, so no command reads ambient argument
//! state. User-input problems are reported through the repository writer
//! and return normally; storage failures propagate as errors for the
//! dispatcher to treat as fatal.

pub mod porcelain;
