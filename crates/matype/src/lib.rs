//! # matype
//!
//! Incremental compiler from a compact, line-oriented shorthand for algebra and
//! matrices to LaTeX.
//!
//! ## Overview
//!
//! ```text
//! a <= b          ->  a \leq b
//! x != y;         ->  x \neq y
//! [1, 2; 3, 4]    ->  \left[ \begin{array}{cc} ... \end{array} \right]
//! [1 | 2; 3 | 4]  ->  same, with a {c|c} column spec
//! ```
//!
//! Operators are runs of `+ - * = < > ^ ; ! ~` looked up in the
//! [`token`] table; unknown runs are copied through. `;` is a row break.
//! Inside `[ ... ]`, `,` separates cells, `;` or a newline ends a row and `|`
//! places a vertical bar after the current cell.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   feed()/update()   ┌────────────┐
//! │  characters  │ ──────────────────► │   Parser   │
//! │  (any chunks)│                     │  [Context] │
//! └──────────────┘                     └────────────┘
//!                                            │
//!                                            │ finish()
//!                                            ▼
//!                                   LaTeX or ParseError
//! ```
//!
//! The [`Parser`] keeps a stack of [`Context`](context::Context)s. Each character
//! goes to the innermost one, which answers with an
//! [`Outcome`](context::Outcome): absorb it, open a child, close itself with a
//! [`Fold`](context::Fold) for its parent, or ask for the character to be
//! replayed after a transition. The first structural error latches and stops
//! the parse.
//!
//! ## Examples
//!
//! ### One-shot
//!
//! ```
//! let latex = matype::compile("[1, 2; 3, 4]").unwrap();
//! assert!(latex.starts_with("\\left[\n\\begin{array}{cc}"));
//! ```
//!
//! ### Streaming
//!
//! ```
//! use matype::Parser;
//!
//! let mut parser = Parser::new();
//! parser.update("x ==").unwrap();
//! parser.update("> y").unwrap();
//! assert_eq!(parser.finish().unwrap(), "x \\implies y");
//! ```
//!
//! ### Errors
//!
//! ```
//! let err = matype::compile("[1, 2; 3]").unwrap_err();
//! assert_eq!(err.to_string(), "Inconsistent row size! (1:9)");
//! ```

/// Parsing contexts and the instructions they return.
pub mod context;
/// Error taxonomy and source positions.
pub mod error;
pub mod finalize;
/// The parsing driver.
pub mod parser;
/// Serializable compilation results.
pub mod report;
pub mod token;

#[cfg(test)]
mod tests;

pub use error::{ParseError, Position};
pub use parser::{Parser, compile};
pub use report::Report;

/// Schema version of the JSON [`Report`].
pub const SCHEMA_VERSION: &str = "1.0.0";
