//! Lotofácil Closure
//!
//! Generates 8 Lotofácil games over a 21-number pool such that every possible
//! draw of 15 numbers from the pool scores at least 11 points in one of them,
//! and proves it by checking all 54,264 draws.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lotofacil_closure::closure::search;
//! use lotofacil_closure::core::Pool;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let pool = Pool::new(&(1..=21).collect::<Vec<u8>>()).unwrap();
//! let result = search(&pool, 500, &mut StdRng::seed_from_u64(42));
//!
//! if result.guaranteed {
//!     for game in &result.games {
//!         println!("{game}");
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Closure search and proof
pub mod closure;

// Prize conference
pub mod scoring;

// TXT and CSV renderings
pub mod export;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
