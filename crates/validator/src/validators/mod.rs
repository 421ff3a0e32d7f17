//! Built-in rules
//!
//! Every rule here validates a `str` and can be attached to a
//! [`FieldSpec`](crate::schema::FieldSpec).
//!
//! - **Length**: [`NotEmpty`], [`MinLength`], [`MaxLength`], [`ExactLength`], [`LengthRange`]
//! - **Pattern**: [`MatchesRegex`], [`Digits`]
//! - **Choice**: [`OneOf`]

pub mod choice;
pub mod length;
pub mod pattern;

pub use choice::{OneOf, one_of};
pub use length::{
    ExactLength, LengthRange, MaxLength, MinLength, NotEmpty, exact_length, length_range,
    max_length, min_length, not_empty,
};
pub use pattern::{Digits, MatchesRegex, digits, matches_regex};
