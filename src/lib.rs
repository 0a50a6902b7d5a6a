//! Untyped lambda calculus combinators and Church encodings written as
//! plain Rust closures.
//!
//! ```
//! use church_calc::{decode::to_number, numeral::{add, encode}};
//!
//! let seven = add().apply(encode(3)).apply(encode(4));
//! assert_eq!(to_number(&seven), Some(7));
//! ```

#[macro_use]
pub mod term;
pub mod combinator;
pub mod boolean;
pub mod numeral;
pub mod pair;
pub mod predicate;
pub mod decode;

pub use term::Term;
