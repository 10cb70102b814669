use futures::prelude::*;
use snoosh::capability::Inboxable;
use snoosh::client::{Client, OAUTH_URL};
use snoosh::inbox::InboxItem;
use snoosh::listing::ListingOptions;

#[tokio::main]
async fn main() -> snoosh::error::Result<()> {
    let token = std::env::var("REDDIT_ACCESS_TOKEN").unwrap_or_default();
    let client = Client::with_access_token(
        OAUTH_URL,
        "linux:snoosh-demo:0.1 (by /u/username)",
        &token,
    )?;

    let mut unread = client
        .inbox()
        .unread(false, ListingOptions::new().limit(25));

    while let Some(item) = unread.next().await {
        let item = item?;

        match &item {
            InboxItem::Comment(comment) => {
                println!("- reply: {}", comment.body().unwrap_or_default())
            }
            InboxItem::Message(message) => match message.data() {
                Some(data) => println!("- message: {}", data.subject),
                None => println!("- message {}", message.id()),
            },
        }

        item.mark_read().await?;
    }

    Ok(())
}
