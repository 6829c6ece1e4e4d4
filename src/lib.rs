//! Two containers and a client that drives them:
//!
//! - [`Deque`]: a doubly-linked-list double-ended queue.
//! - [`RandomizedQueue`]: a resizing-array queue with uniformly random
//!   removal, sampling and iteration order.
//! - [`crate::core::permutation`]: picks `k` random tokens out of an input stream.

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
#[macro_use]
pub mod utils;


pub mod core;
pub mod structs;

pub use structs::{Deque, RandomizedQueue};
pub use utils::error::{CollectionError, Result};

/// Installs the logger. Safe to call more than once.
#[inline]
pub fn init() {
    utils::logger::init();

    debug!("deques Version: {} Initialized.", env!("CARGO_PKG_VERSION"));
}
