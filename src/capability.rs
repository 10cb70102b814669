//! Behaviors shared by several kinds of Reddit objects.
//!
//! Each capability is a trait whose methods all have default implementations, built on top of
//! [`Thing`] or [`HasPath`]. Models opt into a capability with an empty `impl` block. None of the
//! capabilities keep state or touch the model they're called on: they make a single request (or
//! build a single listing stream) and return whatever the [`Client`] answered, errors included.
//!
//! [`Thing`]: crate::thing::Thing
//! [`HasPath`]: crate::thing::HasPath
//! [`Client`]: crate::client::Client

mod inbox_toggleable;
mod inboxable;
mod rising;
mod votable;

pub use inbox_toggleable::InboxToggleable;
pub use inboxable::Inboxable;
pub use rising::HasRisingListing;
pub use votable::{VoteDirection, Votable};
