//! Closure proof and search
//!
//! `validator` proves the 11-point guarantee of a game set by scanning every
//! draw inside the pool; `searcher` proposes random 8-game sets until one
//! passes.

mod result;
pub mod searcher;
pub mod validator;

pub use result::{Cancelled, GenerationResult, SearchStatus};
pub use searcher::{
    Candidate, frequencies, is_balanced, sample_candidate, search, search_cancellable,
    search_parallel,
};
pub use validator::{
    Proof, max_hits, validate_guarantee, validate_guarantee_cancellable, worst_case,
};
