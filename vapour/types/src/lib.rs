/*!
    Shared types for the vapour crate ecosystem.

    This crate defines the vocabulary of the ecosystem — the types that cross crate
    boundaries. It has no async machinery and no heavy dependencies, enabling
    consumers to depend on it without pulling in a runtime.

    # Core Types

    - [`Rational`] - Rational numbers for frame rates
    - [`StreamInfo`] - Stream metadata reported once at open time

    # Error Handling

    - [`Error`] and [`Result`] - Common error types
*/

mod error;
mod info;
mod rational;

pub use error::{Error, Result};
pub use info::StreamInfo;
pub use rational::Rational;
