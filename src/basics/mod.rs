//! Building blocks for turning callback style APIs into futures and chaining
//! them without `async`/`await`.

pub mod and_then;
pub mod promise;

pub use and_then::Chain;
pub use promise::{Promise, Resolver};
