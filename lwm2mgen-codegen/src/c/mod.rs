//! C and C++ output emitters.

pub mod handlers;
pub mod objdef;
