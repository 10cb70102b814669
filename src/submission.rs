use crate::capability::{InboxToggleable, Votable};
use crate::client::Client;
use crate::error::Result;
use crate::thing::{thing_data, FromThing, Fullname, Kind, RawThing, RedditBase, Thing};

use chrono::{offset::Utc, DateTime};

use derivative::Derivative;

use serde::Deserialize;
use serde_with::{serde_as, TimestampSecondsWithFrac};

/// Data of a submission (link or self post), as returned by the API.
#[serde_as]
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct SubmissionData {
    pub id: String,
    pub name: Fullname,
    pub title: String,
    /// `[deleted]` for deleted accounts.
    pub author: String,
    pub subreddit: String,
    pub score: i64,
    pub num_comments: u64,
    pub permalink: String,
    /// Link target. For self posts, the submission's own URL.
    pub url: String,
    #[serde(default)]
    pub selftext: String,
    pub is_self: bool,
    pub over_18: bool,
    #[serde_as(as = "TimestampSecondsWithFrac<f64>")]
    pub created_utc: DateTime<Utc>,
}

/// A submission: a link or a self post.
///
/// Submissions returned by listings carry their [`SubmissionData`]. Those made with
/// [`Client::submission`] are lazy handles only knowing their fullname, which is all voting and
/// the other actions need.
#[derive(Derivative, Clone)]
#[derivative(Debug, PartialEq)]
pub struct Submission {
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    client: Client,
    fullname: Fullname,
    data: Option<SubmissionData>,
}

impl Submission {
    /// The submission's base 36 ID.
    pub fn id(&self) -> &str {
        self.fullname.id()
    }

    /// The data this submission was loaded with, if any.
    pub fn data(&self) -> Option<&SubmissionData> {
        self.data.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.title.as_str())
    }
}

impl RedditBase for Submission {
    fn client(&self) -> &Client {
        &self.client
    }
}

impl Thing for Submission {
    fn fullname(&self) -> &Fullname {
        &self.fullname
    }
}

impl Votable for Submission {}
impl InboxToggleable for Submission {}

impl FromThing for Submission {
    fn from_thing(client: &Client, thing: RawThing) -> Result<Self> {
        let data: SubmissionData = thing_data(thing, Kind::Link)?;

        Ok(Submission {
            client: client.clone(),
            fullname: data.name.clone(),
            data: Some(data),
        })
    }
}

impl Client {
    /// Returns a lazy handle on the submission with the given ID. No request is made.
    ///
    /// ```
    /// # use snoosh::client::{Client, WWW_URL};
    /// # use snoosh::thing::Thing;
    /// # fn main() -> snoosh::error::Result<()> {
    /// let client = Client::new(WWW_URL, "MyProject/1.0 (by /u/username)")?;
    /// let submission = client.submission("5or86n");
    ///
    /// assert_eq!(submission.fullname().to_string(), "t3_5or86n");
    /// # Ok(()) }
    /// ```
    pub fn submission(&self, id: &str) -> Submission {
        Submission {
            client: self.clone(),
            fullname: Fullname::new(Kind::Link, id),
            data: None,
        }
    }
}
