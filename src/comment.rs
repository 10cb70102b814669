use crate::capability::{InboxToggleable, Inboxable, Votable};
use crate::client::Client;
use crate::error::Result;
use crate::thing::{thing_data, FromThing, Fullname, Kind, RawThing, RedditBase, Thing};

use chrono::{offset::Utc, DateTime};

use derivative::Derivative;

use serde::Deserialize;
use serde_with::{serde_as, TimestampSecondsWithFrac};

#[serde_as]
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct CommentData {
    pub id: String,
    pub name: Fullname,
    pub author: String,
    pub body: String,
    pub subreddit: String,
    #[serde(default)]
    pub score: i64,
    /// The submission the comment belongs to. Missing from inbox listings.
    #[serde(default)]
    pub link_id: Option<Fullname>,
    pub parent_id: Fullname,
    /// Whether the comment is unread. Only meaningful in inbox listings.
    #[serde(default)]
    pub new: bool,
    #[serde_as(as = "TimestampSecondsWithFrac<f64>")]
    pub created_utc: DateTime<Utc>,
}

/// A comment, either from a submission's comment tree or from the inbox.
#[derive(Derivative, Clone)]
#[derivative(Debug, PartialEq)]
pub struct Comment {
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    client: Client,
    fullname: Fullname,
    data: Option<CommentData>,
}

impl Comment {
    pub fn id(&self) -> &str {
        self.fullname.id()
    }

    /// The data this comment was loaded with, if any.
    pub fn data(&self) -> Option<&CommentData> {
        self.data.as_ref()
    }

    pub fn body(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.body.as_str())
    }
}

impl RedditBase for Comment {
    fn client(&self) -> &Client {
        &self.client
    }
}

impl Thing for Comment {
    fn fullname(&self) -> &Fullname {
        &self.fullname
    }
}

impl Votable for Comment {}
impl InboxToggleable for Comment {}
impl Inboxable for Comment {}

impl FromThing for Comment {
    fn from_thing(client: &Client, thing: RawThing) -> Result<Self> {
        let data: CommentData = thing_data(thing, Kind::Comment)?;

        Ok(Comment {
            client: client.clone(),
            fullname: data.name.clone(),
            data: Some(data),
        })
    }
}

impl Client {
    /// Returns a lazy handle on the comment with the given ID. No request is made.
    pub fn comment(&self, id: &str) -> Comment {
        Comment {
            client: self.clone(),
            fullname: Fullname::new(Kind::Comment, id),
            data: None,
        }
    }
}
