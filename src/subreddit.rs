use crate::capability::HasRisingListing;
use crate::client::Client;
use crate::thing::{HasPath, RedditBase};

use itertools::Itertools;

/// A subreddit, known by its display name.
#[derive(Debug, Clone)]
pub struct Subreddit {
    client: Client,
    display_name: String,
}

impl Subreddit {
    /// The name of the subreddit, without the `r/` prefix.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl RedditBase for Subreddit {
    fn client(&self) -> &Client {
        &self.client
    }
}

impl HasPath for Subreddit {
    fn path(&self) -> String {
        // `+` joins several subreddits and must stay as is
        format!(
            "r/{}/",
            self.display_name.split('+').map(urlencoding::encode).join("+")
        )
    }
}

impl HasRisingListing for Subreddit {}

/// The front page: the subreddits the authenticated user is subscribed to, or the default ones
/// for anonymous clients.
#[derive(Debug, Clone)]
pub struct Front {
    client: Client,
}

impl RedditBase for Front {
    fn client(&self) -> &Client {
        &self.client
    }
}

impl HasPath for Front {
    fn path(&self) -> String {
        String::new()
    }
}

impl HasRisingListing for Front {}

impl Client {
    /// Returns a lazy handle on a subreddit. No request is made.
    ///
    /// `display_name` is the name of the subreddit without the `r/` prefix, e.g. `rust`. Several
    /// subreddits can be combined with `+` (`rust+programming`).
    pub fn subreddit(&self, display_name: &str) -> Subreddit {
        Subreddit {
            client: self.clone(),
            display_name: display_name
                .trim_start_matches('/')
                .trim_start_matches("r/")
                .to_string(),
        }
    }

    /// Returns a handle on the front page.
    pub fn front(&self) -> Front {
        Front {
            client: self.clone(),
        }
    }
}
