use crate::api_path;
use crate::error::Result;
use crate::thing::{Fullname, Thing};

use async_trait::async_trait;

use serde::Serialize;

#[derive(Serialize)]
struct SendRepliesForm<'a> {
    id: &'a Fullname,
    state: bool,
}

async fn send_replies<T: Thing + ?Sized>(item: &T, state: bool) -> Result<()> {
    let form = SendRepliesForm {
        id: item.fullname(),
        state,
    };

    item.client().post(api_path::SEND_REPLIES, &form).await?;
    Ok(())
}

/// Objects that can optionally send replies to their author's inbox.
///
/// This only applies to objects created by the authenticated user. Calling these methods on
/// anything else is up to Reddit to reject.
#[async_trait]
pub trait InboxToggleable: Thing {
    /// Enable inbox replies for the object.
    async fn enable_inbox_replies(&self) -> Result<()> {
        send_replies(self, true).await
    }

    /// Disable inbox replies for the object.
    ///
    /// ```no_run
    /// # use snoosh::client::{Client, OAUTH_URL};
    /// # use snoosh::capability::InboxToggleable;
    /// # #[tokio::main]
    /// # async fn main() -> snoosh::error::Result<()> {
    /// # let client = Client::with_access_token(OAUTH_URL, "MyProject/1.0 (by /u/username)", "token")?;
    /// client.comment("dkk4qjd").disable_inbox_replies().await?;
    /// client.submission("8dmv8z").disable_inbox_replies().await?;
    /// # Ok(()) }
    /// ```
    async fn disable_inbox_replies(&self) -> Result<()> {
        send_replies(self, false).await
    }
}
