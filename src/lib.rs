//! Asynchronous wrapper crate for the [Reddit](https://www.reddit.com/dev/api) API.
//!
//! ## Usage
//!
//! First, create a [`Client`]. You have to provide a descriptive User-Agent for your project, and
//! an OAuth access token for anything beyond reading public listings.
//!
//! ```no_run
//! # use snoosh::client::{Client, OAUTH_URL};
//! # fn main() -> Result<(), snoosh::error::Error> {
//! let client = Client::with_access_token(
//!     OAUTH_URL,
//!     "linux:MyProject:1.0 (by /u/username)",
//!     "access token",
//! )?;
//! # Ok(()) }
//! ```
//!
//! Objects are reached through lazy handles, which don't perform any request until you do
//! something with them. What you can do depends on the capabilities of the object, found in
//! [`capability`]:
//!
//! ```no_run
//! # use snoosh::client::{Client, OAUTH_URL};
//! use snoosh::capability::{InboxToggleable, Votable};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), snoosh::error::Error> {
//! # let client = Client::with_access_token(OAUTH_URL, "MyProject/1.0 (by /u/username)", "token")?;
//! let submission = client.submission("5or86n");
//!
//! submission.upvote().await?;
//! submission.disable_inbox_replies().await?;
//! # Ok(()) }
//! ```
//!
//! Listings are exposed as [`Stream`]s, fetching pages as they are consumed:
//!
//! ```no_run
//! # use snoosh::client::{Client, WWW_URL};
//! use futures::prelude::*;
//! use snoosh::capability::HasRisingListing;
//! use snoosh::listing::ListingOptions;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), snoosh::error::Error> {
//! # let client = Client::new(WWW_URL, "MyProject/1.0 (by /u/username)")?;
//! let mut rising = client.subreddit("rust").rising(ListingOptions::new().limit(20));
//!
//! while let Some(submission) = rising.next().await {
//!     println!("{}", submission?.title().unwrap_or_default());
//! }
//! # Ok(()) }
//! ```
//!
//! ## Notes
//!
//! `snoosh` makes exactly one attempt per request. It doesn't retry, rate limit, or refresh
//! access tokens: errors are returned to the caller as they come. Requests are logged through the
//! [`log`](https://docs.rs/log) facade.
//!
//! [`Client`]: client/struct.Client.html
//! [`Stream`]: https://docs.rs/futures/0.3/futures/stream/trait.Stream.html

mod api_path;

/// Client related structures.
pub mod client;

/// Error management.
pub mod error;

/// Identifiers and the traits every model builds on.
pub mod thing;

/// Paginated listings.
pub mod listing;

pub mod capability;

/// Submission management.
pub mod submission;

/// Comment management.
pub mod comment;

/// Private message management.
pub mod message;

/// Subreddits and the front page.
pub mod subreddit;

/// Inbox management.
pub mod inbox;
