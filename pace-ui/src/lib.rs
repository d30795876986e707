//! pace-ui - Pure view components for pace
//!
//! Props-and-callbacks components with no app state of their own. All
//! navigation, mutation, and side effects flow through handlers supplied by
//! the caller.

pub mod components;

pub use components::*;
