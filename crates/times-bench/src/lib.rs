#![deny(clippy::all)]
#![warn(clippy::pedantic)]

//! Criterion benchmarks for times.
//!
//! Run benchmarks with: `cargo bench -p times-bench`
//!
//! The library is empty; the benchmarks live in `benches/`. For a quick
//! in-process measurement without Criterion use `times bench`.
