//! Rule wrappers
//!
//! Combinators wrap an existing [`Validate`](crate::foundation::Validate)
//! implementation and adjust how it reports failures.

pub mod message;

pub use message::{WithMessage, with_message};
