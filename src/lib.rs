//! # rules-export
//!
//! Export the filtering rules of a mailbox store as Gmail-style
//! filter descriptions.
//!
//! Native rules are read from a [`backend::Backend`], normalized into
//! [`rule::NormalizedRule`]s by [`rule::normalize`], then rendered
//! either as descriptive sentences or as CSV rows.

pub mod backend;
pub mod cli;
pub mod completion;
pub mod config;
pub mod manual;
pub mod output;
pub mod printer;
pub mod rule;
pub mod store;
