//! Test doubles for exercising provisioning and loading without a network.

pub mod test_utils;

pub use test_utils::*;
