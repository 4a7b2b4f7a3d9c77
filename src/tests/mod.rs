//! Crate-level test tree: unit tables, property laws and mock-driven tests
//! that cut across more than one module.

mod mocks;
mod property;
mod unit;
