//! A lightweight terminal progress indicator for long tile runs.
//!
//! The bar renders to stderr and stays silent when stderr is not a terminal,
//! so batch jobs and tests produce clean output.

mod bar;

pub use bar::ProgressBar;
