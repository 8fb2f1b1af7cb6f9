//! Test utilities for gdt development.
//!
//! Provides grid fixtures ([`fixtures`]) and a Dijkstra reference
//! implementation ([`oracle`]) that property tests compare the
//! propagator against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::{grid_from_rows, open_grid, random_grid, stack_rows};
pub use oracle::dijkstra;
