//! Terminal module: raw ANSI output plumbing.

mod output;

pub use output::OutputBuffer;
