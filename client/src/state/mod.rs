//! View state for the artwork page.
//!
//! DESIGN
//! ======
//! State types are plain structs with pure transitions. Pages wrap them in
//! `RwSignal`s and components receive read-only views plus callbacks, so the
//! gallery index has exactly one writer.

pub mod gallery;
pub mod viewport;
