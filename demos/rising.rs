use futures::prelude::*;
use snoosh::capability::HasRisingListing;
use snoosh::client::{Client, WWW_URL};
use snoosh::listing::ListingOptions;

#[tokio::main]
async fn main() -> snoosh::error::Result<()> {
    let client = Client::new(WWW_URL, "linux:snoosh-demo:0.1 (by /u/username)")?;

    println!("Ten rising submissions from r/rust!");

    let mut rising = client
        .subreddit("rust")
        .rising(ListingOptions::new().limit(10));

    while let Some(submission) = rising.next().await {
        match submission {
            Ok(submission) => match submission.data() {
                Some(data) => println!("- [{}] {}", data.score, data.title),
                None => println!("- {}", submission.id()),
            },
            Err(e) => println!("- couldn't load submission: {}", e),
        }
    }

    Ok(())
}
