use crate::api_path;
use crate::error::Result;
use crate::thing::{Fullname, Thing};

use async_trait::async_trait;

use serde::Serialize;

#[derive(Serialize)]
struct IdForm<'a> {
    id: &'a Fullname,
}

async fn post_id<T: Thing + ?Sized>(item: &T, endpoint: &str) -> Result<()> {
    let form = IdForm {
        id: item.fullname(),
    };

    item.client().post(endpoint, &form).await?;
    Ok(())
}

/// Objects that come from the inbox: comment replies, mentions and private messages.
///
/// These methods only make sense for objects retrieved through the authenticated user's
/// [`Inbox`]. The read state and collapse methods go through the inbox's bulk operations with a
/// single item; to update many items at once, call those operations directly.
///
/// [`Inbox`]: crate::inbox::Inbox
#[async_trait]
pub trait Inboxable: Thing {
    /// Block the user who sent the item.
    async fn block(&self) -> Result<()> {
        post_id(self, api_path::BLOCK).await
    }

    /// Unblock the subreddit that sent the item.
    ///
    /// ```no_run
    /// # use snoosh::client::{Client, OAUTH_URL};
    /// # use snoosh::capability::Inboxable;
    /// # use snoosh::inbox::InboxItem;
    /// # use snoosh::listing::ListingOptions;
    /// use futures::prelude::*;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> snoosh::error::Result<()> {
    /// # let client = Client::with_access_token(OAUTH_URL, "MyProject/1.0 (by /u/username)", "token")?;
    /// let mut messages = client.inbox().messages(ListingOptions::new().unlimited());
    ///
    /// while let Some(item) = messages.next().await {
    ///     if let InboxItem::Message(message) = item? {
    ///         if message.is_from_blocked_subreddit() {
    ///             message.unblock_subreddit().await?;
    ///         }
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    async fn unblock_subreddit(&self) -> Result<()> {
        post_id(self, api_path::UNBLOCK_SUBREDDIT).await
    }

    /// Mark the item as read.
    ///
    /// To mark the whole inbox as read with a single request, use [`Inbox::mark_all_read`].
    ///
    /// [`Inbox::mark_all_read`]: crate::inbox::Inbox::mark_all_read
    async fn mark_read(&self) -> Result<()> {
        self.client().inbox().mark_read(&[self]).await
    }

    /// Mark the item as unread.
    async fn mark_unread(&self) -> Result<()> {
        self.client().inbox().mark_unread(&[self]).await
    }

    /// Mark the item as collapsed.
    async fn collapse(&self) -> Result<()> {
        self.client().inbox().collapse(&[self]).await
    }

    /// Mark the item as uncollapsed.
    async fn uncollapse(&self) -> Result<()> {
        self.client().inbox().uncollapse(&[self]).await
    }
}
