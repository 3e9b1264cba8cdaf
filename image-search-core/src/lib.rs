//! Image Search Core Library
//!
//! Provides the search logic for image search front ends:
//! - [`SearchSession`]: query / page / result accumulation state machine
//! - [`ViewModel`]: presentation flags derived from the session state
//! - [`DismissalSignal`]: process-wide "close the preview" broadcast
//! - [`fetch_page`]: stateless single-page fetch
//!
//! The library holds no terminal or UI code. Front ends own a session, drive
//! fetches through [`FetchTicket`]s and render the [`ViewModel`].

pub mod dismissal;
pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use dismissal::{DismissalSignal, DismissalSubscription};
pub use error::{CoreError, CoreResult, FetchFailure};
pub use services::{connect_provider, fetch_page, SearchSession};
pub use types::{FetchTicket, SearchState, SessionEvent, ViewModel};
