//! Property-based tests for Post Board
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `browser_props`: Tests for the list browser derivation
//!   - Every filtered record matches the query, every match is kept
//!   - Empty query is the identity
//!   - Pages partition the filtered set in order
//!   - `total_pages` is the ceiling of count / page size
//!   - Query edits never touch the page
//!
//! - `credential_props`: Tests for login form validation
//!   - Empty fields are always reported first
//!   - Short passwords are rejected for well-formed emails
//!   - Whitespace-bearing emails never pass
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod browser_props;
mod credential_props;
