//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;
pub mod verify;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckReport, check};
pub use generate::{GenerateConfig, GenerateReport, generate};
pub use verify::{VerifyReport, verify};
