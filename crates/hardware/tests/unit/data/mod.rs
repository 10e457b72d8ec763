//! Test data tests.
