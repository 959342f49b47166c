//! # Particle-Flow Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Descriptor builders and random events
//! └── integration/      # Cross-crate scenarios driven through EventObjectService
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pf-tests
//!
//! # By category
//! cargo test -p pf-tests integration::
//!
//! # Benchmarks
//! cargo bench -p pf-tests
//! ```

pub mod fixtures;
pub mod integration;
