#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

//! Iterated-apply microbenchmark: `times(n, f, x)` computes `f^n(x)`.

pub mod bench;
pub mod config;
pub mod error;
pub mod iterate;
pub mod version;

pub use config::{Config, OverflowPolicy};
pub use error::Error;
pub use iterate::{add_five, checked_add_five, times, try_times};
pub use version::VERSION;
