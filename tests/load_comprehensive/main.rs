//! Load Comprehensive Test Suite
//!
//! Tests for the form loading semantic guarantees.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Coercion** (per declared kind)
//!   Scalar and list coercion rules.
//!
//! - **Tier 2: Field Resolution** (aliases, absent keys, null literal, settable)
//!
//! - **Tier 3: Error Policy** (first error wins, unsupported overwrite)
//!
//! - **Tier 4: Entry Point** (structural and destination errors)
//!
//! - **Tier 5: Property-Based** (random inputs)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test load_comprehensive
//!
//! # Run only property-based tests
//! cargo test --test load_comprehensive properties
//! ```

// Test utilities
mod test_utils;




// Tier 4: Entry Point
mod entry_point;

// Tier 5: Property-Based
mod properties;
