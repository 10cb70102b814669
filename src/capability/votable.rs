use crate::api_path;
use crate::error::Result;
use crate::thing::{Fullname, Thing};

use async_trait::async_trait;

use serde::Serialize;
use serde_repr::Serialize_repr;

use std::fmt;

/// Direction of a vote, as sent in the `dir` field of `api/vote/`.
#[derive(Debug, PartialEq, Eq, Serialize_repr, Clone, Copy)]
#[repr(i8)]
pub enum VoteDirection {
    Up = 1,
    Clear = 0,
    Down = -1,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as i8)
    }
}

#[derive(Serialize)]
struct VoteForm<'a> {
    dir: VoteDirection,
    id: &'a Fullname,
}

async fn vote<T: Thing + ?Sized>(item: &T, direction: VoteDirection) -> Result<()> {
    let form = VoteForm {
        dir: direction,
        id: item.fullname(),
    };

    item.client().post(api_path::VOTE, &form).await?;
    Ok(())
}

/// Objects that can be voted on: submissions and comments.
///
/// Votes must be cast by humans. That is, API clients proxying a human's action one-for-one are
/// OK, but bots deciding how to vote on content or amplifying a human's vote are not. See the
/// [reddit rules](https://www.reddit.com/dev/api#POST_api_vote) for more details on what
/// constitutes vote manipulation.
///
/// ```no_run
/// # use snoosh::client::{Client, OAUTH_URL};
/// # use snoosh::capability::Votable;
/// # #[tokio::main]
/// # async fn main() -> snoosh::error::Result<()> {
/// # let client = Client::with_access_token(OAUTH_URL, "MyProject/1.0 (by /u/username)", "token")?;
/// client.submission("5or86n").upvote().await?;
/// client.comment("dxolpyc").clear_vote().await?;
/// # Ok(()) }
/// ```
#[async_trait]
pub trait Votable: Thing {
    /// Upvote the object.
    async fn upvote(&self) -> Result<()> {
        vote(self, VoteDirection::Up).await
    }

    /// Downvote the object.
    async fn downvote(&self) -> Result<()> {
        vote(self, VoteDirection::Down).await
    }

    /// Clear the authenticated user's vote on the object.
    async fn clear_vote(&self) -> Result<()> {
        vote(self, VoteDirection::Clear).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use crate::error::Error;
    use mockito::mock;

    fn client() -> Client {
        Client::new(&mockito::server_url(), b"snoosh/unit_test").unwrap()
    }

    #[test]
    fn direction_wire_value() {
        assert_eq!(VoteDirection::Up.to_string(), "1");
        assert_eq!(VoteDirection::Clear.to_string(), "0");
        assert_eq!(VoteDirection::Down.to_string(), "-1");
    }

    #[tokio::test]
    async fn vote_posts_direction_and_fullname() {
        let client = client();
        let submission = client.submission("vote0");

        for (direction, body) in [
            (VoteDirection::Up, "dir=1&id=t3_vote0"),
            (VoteDirection::Clear, "dir=0&id=t3_vote0"),
            (VoteDirection::Down, "dir=-1&id=t3_vote0"),
        ] {
            let m = mock("POST", "/api/vote/")
                .match_body(body)
                .with_body("{}")
                .expect(1)
                .create();

            assert_eq!(vote(&submission, direction).await, Ok(()));
            m.assert();
        }
    }

    #[tokio::test]
    async fn upvote() {
        let m = mock("POST", "/api/vote/")
            .match_body("dir=1&id=t3_5or86n")
            .with_body("{}")
            .expect(1)
            .create();

        assert_eq!(client().submission("5or86n").upvote().await, Ok(()));
        m.assert();
    }

    #[tokio::test]
    async fn downvote() {
        let m = mock("POST", "/api/vote/")
            .match_body("dir=-1&id=t1_dxolpyc")
            .with_body("{}")
            .expect(1)
            .create();

        assert_eq!(client().comment("dxolpyc").downvote().await, Ok(()));
        m.assert();
    }

    #[tokio::test]
    async fn clear_vote() {
        let m = mock("POST", "/api/vote/")
            .match_body("dir=0&id=t1_dxolpyc")
            .with_body("{}")
            .expect(1)
            .create();

        assert_eq!(client().comment("dxolpyc").clear_vote().await, Ok(()));
        m.assert();
    }

    #[tokio::test]
    async fn vote_error_is_returned_as_is() {
        let m = mock("POST", "/api/vote/")
            .match_body("dir=1&id=t3_archived")
            .with_status(400)
            .with_body(r#"{"message": "Bad Request", "error": 400}"#)
            .expect(1)
            .create();

        assert_eq!(
            client().submission("archived").upvote().await,
            Err(Error::Http {
                code: 400,
                reason: Some(String::from("Bad Request")),
            })
        );
        m.assert();
    }
}
