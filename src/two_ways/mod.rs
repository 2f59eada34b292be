//! Each of the below modules implements the same lookup in two ways. Each
//! module is structured as follows (where `operation` is the module name):
//!
//! ```ignore
//! pub mod operation {
//!     //! The operation available in the auto and manual modules are
//!     //! functionally identical: same inputs, same outcome, same side effects
//!     //! on the host capabilities.
//!
//!     pub mod auto {
//!         pub async fn operation() {
//!            // steps written one after the other with async-await syntax,
//!            // the first failure propagated with `?`.
//!         }
//!     }
//!
//!     pub mod manual {
//!         pub async fn operation() {
//!             // steps chained as continuations with
//!             // [`crate::basics::Chain::and_then`], the failure left to
//!             // whoever awaits the end of the chain.
//!         }
//!     }
//! }
//! ```

pub mod locate;
