//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take data, a [`Theme`](crate::util::theme::Theme),
//! and callbacks as props. Page modules own the state they render.

pub mod gallery;
pub mod link_list;
pub mod page_layout;
pub mod placard;
