#![allow(dead_code, unused_imports)]

pub use taskdag_test_utils::builders;
pub use taskdag_test_utils::{due, init_tracing};
