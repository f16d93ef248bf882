//! Command implementations.

mod list;

pub use list::{list_execute, render};
