//! Expiry countdown for a displayed signed URL.
//!
//! [`ExpiryTimer`] is the pure seconds-remaining state; [`CountdownSlot`]
//! owns the one running tick task. Starting a new countdown aborts the old
//! task, and dropping the slot aborts whatever is still running.

mod slot;
mod timer;

pub use slot::{CountdownEvent, CountdownSlot};
pub use timer::{format_remaining, ExpiryTimer};
