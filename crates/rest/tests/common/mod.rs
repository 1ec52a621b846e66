//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test servers over memory and file backends
//! - [`fixtures`] - Patient request bodies and seeded records

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
