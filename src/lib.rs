//! hello-build
//! ============
//!
//! Print `Hello, {name}!` for the first command-line argument,
//! or `Hello, world!` when there is none.

pub mod cli;
pub mod error;

mod greeting;

pub use cli::{run, Opt, SUCCESS};
pub use greeting::{select_name, Greeting, DEFAULT_NAME};
