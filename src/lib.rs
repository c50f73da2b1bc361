//! cattree: flat, parent-referencing category lists in tree order.
//!
//! - [`domain::sort_for_tree`] reorders records so every record follows its
//!   ancestors (pre-order, siblings in input order) and records whose parent
//!   is missing are appended or dropped.
//! - [`domain::CategoryTree`] holds the same records as an arena tree with
//!   depths, for indented labels ([`domain::LabelFormatter`]).
//! - [`application::PathComposer`] builds breadcrumbs through a
//!   [`infrastructure::traits::CategoryLookup`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
