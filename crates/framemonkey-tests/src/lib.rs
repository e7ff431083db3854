//! Integration test crate for FrameMonkey.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives the range selector, session and compression job together.

#[cfg(test)]
mod selector;

#[cfg(test)]
mod compress;
