//! Plan-time predicate analysis.

pub mod pushdown;

pub use pushdown::push_down;
