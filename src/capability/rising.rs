use crate::api_path;
use crate::listing::{listing, ListingOptions, ListingStream};
use crate::submission::Submission;
use crate::thing::HasPath;

fn join_path(path: &str, segment: &str) -> String {
    if path.is_empty() || path.ends_with('/') {
        format!("{}{}", path, segment)
    } else {
        format!("{}/{}", path, segment)
    }
}

/// Objects with `rising` and `randomrising` listings: subreddits and the front page.
pub trait HasRisingListing: HasPath {
    /// Returns a Stream over the rising submissions.
    ///
    /// `options` is passed on to the listing as is.
    ///
    /// ```no_run
    /// # use snoosh::client::{Client, WWW_URL};
    /// # use snoosh::capability::HasRisingListing;
    /// # use snoosh::listing::ListingOptions;
    /// use futures::prelude::*;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> snoosh::error::Result<()> {
    /// let client = Client::new(WWW_URL, "MyProject/1.0 (by /u/username)")?;
    ///
    /// let mut rising = client.subreddit("test").rising(ListingOptions::new().limit(10));
    ///
    /// while let Some(submission) = rising.next().await {
    ///     println!("{}", submission?.title().unwrap_or_default());
    /// }
    /// # Ok(()) }
    /// ```
    fn rising(&self, options: ListingOptions) -> ListingStream<Submission> {
        listing(
            self.client(),
            join_path(&self.path(), api_path::RISING),
            options,
        )
    }

    /// Returns a Stream over random rising submissions.
    ///
    /// `options` is passed on to the listing as is.
    fn random_rising(&self, options: ListingOptions) -> ListingStream<Submission> {
        listing(
            self.client(),
            join_path(&self.path(), api_path::RANDOM_RISING),
            options,
        )
    }
}
