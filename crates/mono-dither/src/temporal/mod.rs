//! Temporal selection over whole frame sequences.
//!
//! Two stages run once per sequence, before any per-frame work:
//!
//! 1. **Trim** ([`trim`]) - restrict the sequence to a time window
//! 2. **Sample** ([`sample`]) - reduce the frame count to a budget by even
//!    index sampling
//!
//! Both preserve frame order. The index arithmetic is exposed separately
//! ([`trim_window`], [`sample_indices`]) so it can be checked without
//! building frames.

mod sample;
mod trim;

pub use sample::{sample, sample_indices};
pub use trim::{trim, trim_window};
