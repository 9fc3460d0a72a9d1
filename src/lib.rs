//! A small library for querying how much free disk space the current user
//! has on the filesystem holding a path.
//!
//! The main entry point is [`query_free_space`]. Everything else is either
//! built on top of it ([`check`]) or supports the `diskspace` binary
//! ([`options`]).

#![warn(rust_2018_idioms)]

pub mod utils {
    pub mod logging;
}
pub mod check;
pub mod constants;
pub mod disk;
pub mod options;

pub use disk::{
    query_free_space, query_free_space_for_file, query_usage, query_usage_for_file, QueryError,
    QueryResult, Usage,
};
