//! urodiag common - shared types and scoring for the urodiag tools
//!
//! Rule-based presumptive scoring of acute urinary system conditions
//! (bladder inflammation, nephritis) from six patient inputs, plus support
//! for the labeled acute inflammations dataset.
//!
//! Illustrative heuristics only. Not a medical decision-support system.

pub mod dataset;
pub mod observation;
pub mod scorer;

pub use dataset::*;
pub use observation::*;
pub use scorer::*;
