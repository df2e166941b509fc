//! HTTP request handlers for the API.

mod pages;
mod system;

#[cfg(test)]
mod pages_test;

pub use pages::*;
pub use system::*;
