//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check_report, print_conference, print_generate_report,
    print_verify_report,
};
pub use formatters::exhaustion_notice;
