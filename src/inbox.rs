use crate::api_path;
use crate::capability::Inboxable;
use crate::client::Client;
use crate::comment::Comment;
use crate::error::{Error, Result};
use crate::listing::{listing, ListingOptions, ListingStream};
use crate::message::Message;
use crate::thing::{FromThing, Fullname, Kind, RawThing, RedditBase, Thing};

use itertools::Itertools;

use log::debug;

/// Maximum number of items Reddit accepts in a single bulk inbox request.
const MAX_BATCH_SIZE: usize = 25;

/// An item from the inbox: a comment reply, a username mention or a private message.
#[derive(Debug, PartialEq, Clone)]
pub enum InboxItem {
    Comment(Comment),
    Message(Message),
}

impl RedditBase for InboxItem {
    fn client(&self) -> &Client {
        match self {
            InboxItem::Comment(c) => c.client(),
            InboxItem::Message(m) => m.client(),
        }
    }
}

impl Thing for InboxItem {
    fn fullname(&self) -> &Fullname {
        match self {
            InboxItem::Comment(c) => c.fullname(),
            InboxItem::Message(m) => m.fullname(),
        }
    }
}

impl Inboxable for InboxItem {}

impl FromThing for InboxItem {
    fn from_thing(client: &Client, thing: RawThing) -> Result<Self> {
        match thing.kind.parse::<Kind>() {
            Ok(Kind::Comment) => Ok(InboxItem::Comment(Comment::from_thing(client, thing)?)),
            Ok(Kind::Message) => Ok(InboxItem::Message(Message::from_thing(client, thing)?)),
            _ => Err(Error::UnexpectedKind {
                expected: format!("{} or {}", Kind::Comment, Kind::Message),
                found: thing.kind,
            }),
        }
    }
}

/// The authenticated user's inbox.
///
/// The bulk methods accept any number of items, and make one request per 25 items. They can be
/// given a mix of comments and messages through [`InboxItem`] or `&dyn Thing`.
///
/// ```no_run
/// # use snoosh::client::{Client, OAUTH_URL};
/// # use snoosh::listing::ListingOptions;
/// use futures::prelude::*;
///
/// # #[tokio::main]
/// # async fn main() -> snoosh::error::Result<()> {
/// # let client = Client::with_access_token(OAUTH_URL, "MyProject/1.0 (by /u/username)", "token")?;
/// let inbox = client.inbox();
///
/// let unread: Vec<_> = inbox
///     .unread(false, ListingOptions::new().unlimited())
///     .try_collect()
///     .await?;
///
/// inbox.mark_read(&unread.iter().collect::<Vec<_>>()).await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Inbox<'a> {
    client: &'a Client,
}

impl<'a> Inbox<'a> {
    async fn post_fullnames<T>(&self, endpoint: &str, items: &[&T]) -> Result<()>
    where
        T: Thing + ?Sized,
    {
        for chunk in items.chunks(MAX_BATCH_SIZE) {
            let ids = chunk.iter().map(|item| item.fullname()).join(",");
            debug!("{} items to {}", chunk.len(), endpoint);

            self.client.post(endpoint, &[("id", ids)]).await?;
        }

        Ok(())
    }

    /// Mark the items as read.
    pub async fn mark_read<T: Thing + ?Sized>(&self, items: &[&T]) -> Result<()> {
        self.post_fullnames(api_path::READ_MESSAGE, items).await
    }

    /// Mark the items as unread.
    pub async fn mark_unread<T: Thing + ?Sized>(&self, items: &[&T]) -> Result<()> {
        self.post_fullnames(api_path::UNREAD_MESSAGE, items).await
    }

    /// Mark the items as collapsed.
    pub async fn collapse<T: Thing + ?Sized>(&self, items: &[&T]) -> Result<()> {
        self.post_fullnames(api_path::COLLAPSE, items).await
    }

    /// Mark the items as uncollapsed.
    pub async fn uncollapse<T: Thing + ?Sized>(&self, items: &[&T]) -> Result<()> {
        self.post_fullnames(api_path::UNCOLLAPSE, items).await
    }

    /// Mark the whole inbox as read, in a single request.
    ///
    /// Reddit processes this asynchronously: items may still show up as unread for a short while.
    pub async fn mark_all_read(&self) -> Result<()> {
        let form: &[(&str, &str)] = &[];

        self.client.post(api_path::READ_ALL_MESSAGES, form).await?;
        Ok(())
    }

    /// Returns a Stream over every item in the inbox.
    pub fn all(&self, options: ListingOptions) -> ListingStream<InboxItem> {
        listing(self.client, api_path::INBOX, options)
    }

    /// Returns a Stream over the unread items of the inbox. When `mark_read` is `true`, Reddit
    /// marks the items as read as it sends them.
    pub fn unread(&self, mark_read: bool, options: ListingOptions) -> ListingStream<InboxItem> {
        listing(
            self.client,
            api_path::UNREAD,
            options.param("mark", mark_read.to_string()),
        )
    }

    /// Returns a Stream over the private messages received.
    pub fn messages(&self, options: ListingOptions) -> ListingStream<InboxItem> {
        listing(self.client, api_path::MESSAGES, options)
    }

    /// Returns a Stream over the private messages sent.
    pub fn sent(&self, options: ListingOptions) -> ListingStream<Message> {
        listing(self.client, api_path::SENT, options)
    }

    /// Returns a Stream over the replies to the user's comments.
    pub fn comment_replies(&self, options: ListingOptions) -> ListingStream<Comment> {
        listing(self.client, api_path::COMMENT_REPLIES, options)
    }

    /// Returns a Stream over the replies to the user's submissions.
    pub fn submission_replies(&self, options: ListingOptions) -> ListingStream<Comment> {
        listing(self.client, api_path::SUBMISSION_REPLIES, options)
    }

    /// Returns a Stream over the comments mentioning the user.
    pub fn mentions(&self, options: ListingOptions) -> ListingStream<Comment> {
        listing(self.client, api_path::MENTIONS, options)
    }
}

impl Client {
    /// Returns the inbox of the authenticated user.
    pub fn inbox(&self) -> Inbox<'_> {
        Inbox { client: self }
    }
}
