use crate::capability::Inboxable;
use crate::client::Client;
use crate::error::Result;
use crate::thing::{thing_data, FromThing, Fullname, Kind, RawThing, RedditBase, Thing};

use chrono::{offset::Utc, DateTime};

use derivative::Derivative;

use serde::Deserialize;
use serde_with::{serde_as, TimestampSecondsWithFrac};

/// Subject Reddit gives to messages from subreddits the user blocked.
const BLOCKED_SUBREDDIT_SUBJECT: &str = "[message from blocked subreddit]";

#[serde_as]
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct MessageData {
    pub id: String,
    pub name: Fullname,
    /// `None` for messages sent on behalf of a subreddit.
    pub author: Option<String>,
    pub subject: String,
    pub body: String,
    pub dest: String,
    /// Set for messages sent by (or to) a subreddit's moderators.
    pub subreddit: Option<String>,
    #[serde(default)]
    pub new: bool,
    #[serde_as(as = "TimestampSecondsWithFrac<f64>")]
    pub created_utc: DateTime<Utc>,
}

/// A private message.
#[derive(Derivative, Clone)]
#[derivative(Debug, PartialEq)]
pub struct Message {
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    client: Client,
    fullname: Fullname,
    data: Option<MessageData>,
}

impl Message {
    pub fn id(&self) -> &str {
        self.fullname.id()
    }

    /// The data this message was loaded with, if any.
    pub fn data(&self) -> Option<&MessageData> {
        self.data.as_ref()
    }

    /// Whether this is a notice about a message from a subreddit the user blocked. Such messages
    /// can be used to [unblock the subreddit](Inboxable::unblock_subreddit).
    pub fn is_from_blocked_subreddit(&self) -> bool {
        matches!(
            &self.data,
            Some(MessageData {
                subreddit: Some(_),
                subject,
                ..
            }) if subject == BLOCKED_SUBREDDIT_SUBJECT
        )
    }
}

impl RedditBase for Message {
    fn client(&self) -> &Client {
        &self.client
    }
}

impl Thing for Message {
    fn fullname(&self) -> &Fullname {
        &self.fullname
    }
}

impl Inboxable for Message {}

impl FromThing for Message {
    fn from_thing(client: &Client, thing: RawThing) -> Result<Self> {
        let data: MessageData = thing_data(thing, Kind::Message)?;

        Ok(Message {
            client: client.clone(),
            fullname: data.name.clone(),
            data: Some(data),
        })
    }
}

impl Client {
    /// Returns a lazy handle on the message with the given ID. No request is made.
    pub fn message(&self, id: &str) -> Message {
        Message {
            client: self.clone(),
            fullname: Fullname::new(Kind::Message, id),
            data: None,
        }
    }
}
