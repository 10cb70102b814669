use crate::client::Client;
use crate::error::{Error, Result};

use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use std::{fmt, str::FromStr};

/// Type prefix of a [`Fullname`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Kind {
    Comment,
    Account,
    Link,
    Message,
    Subreddit,
    Award,
}

impl Kind {
    /// The prefix used on the wire, e.g. `t3` for [`Kind::Link`].
    pub fn prefix(self) -> &'static str {
        match self {
            Kind::Comment => "t1",
            Kind::Account => "t2",
            Kind::Link => "t3",
            Kind::Message => "t4",
            Kind::Subreddit => "t5",
            Kind::Award => "t6",
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s {
            "t1" => Kind::Comment,
            "t2" => Kind::Account,
            "t3" => Kind::Link,
            "t4" => Kind::Message,
            "t5" => Kind::Subreddit,
            "t6" => Kind::Award,
            _ => return Err(Error::ParseFullname(s.to_string())),
        };

        Ok(kind)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Stable identifier of a Reddit object: its [`Kind`] prefix and its base 36 ID, joined by an
/// underscore (`t3_5or86n`).
///
/// ```
/// # use snoosh::thing::{Fullname, Kind};
/// let fullname: Fullname = "t3_5or86n".parse().unwrap();
///
/// assert_eq!(fullname.kind(), Kind::Link);
/// assert_eq!(fullname.id(), "5or86n");
/// assert_eq!(fullname.to_string(), "t3_5or86n");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct Fullname {
    kind: Kind,
    id: String,
}

impl Fullname {
    /// Build a fullname from a kind and a bare ID. A `kind_` prefix already present on `id` is
    /// stripped.
    pub fn new(kind: Kind, id: impl Into<String>) -> Self {
        let id = id.into();
        let id = match id.strip_prefix(kind.prefix()).and_then(|s| s.strip_prefix('_')) {
            Some(bare) => bare.to_string(),
            None => id,
        };

        Fullname { kind, id }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The bare base 36 ID, without the kind prefix.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FromStr for Fullname {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('_') {
            Some((prefix, id)) if !id.is_empty() => Ok(Fullname {
                kind: prefix
                    .parse()
                    .map_err(|_| Error::ParseFullname(s.to_string()))?,
                id: id.to_string(),
            }),
            _ => Err(Error::ParseFullname(s.to_string())),
        }
    }
}

impl fmt::Display for Fullname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.id)
    }
}

/// Anything holding on to a [`Client`].
pub trait RedditBase: Send + Sync {
    /// The client requests about this object are made with.
    fn client(&self) -> &Client;
}

/// A Reddit object identified by a [`Fullname`].
pub trait Thing: RedditBase {
    fn fullname(&self) -> &Fullname;
}

/// A Reddit object with listings under its own path (`r/rust/`, or the front page).
pub trait HasPath: RedditBase {
    /// Path relative to the client's base URL. Either empty or ending with a `/`.
    fn path(&self) -> String;
}

/// The `{"kind": ..., "data": ...}` envelope every object comes wrapped in.
#[derive(Debug, Deserialize)]
pub(crate) struct RawThing {
    pub kind: String,
    pub data: JsonValue,
}

/// Models that can be built from a listing child.
pub(crate) trait FromThing: Sized {
    fn from_thing(client: &Client, thing: RawThing) -> Result<Self>;
}

/// Deserialize the `data` of a thing, checking its kind first.
pub(crate) fn thing_data<T>(thing: RawThing, expected: Kind) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    if thing.kind != expected.prefix() {
        return Err(Error::UnexpectedKind {
            expected: expected.prefix().to_string(),
            found: thing.kind,
        });
    }

    Ok(serde_json::from_value(thing.data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fullname() {
        let fullname: Fullname = "t1_dkk4qjd".parse().unwrap();

        assert_eq!(fullname, Fullname::new(Kind::Comment, "dkk4qjd"));
        assert_eq!(fullname.kind(), Kind::Comment);
        assert_eq!(fullname.id(), "dkk4qjd");
    }

    #[test]
    fn parse_invalid_fullname() {
        for s in ["", "dkk4qjd", "t1_", "t9_abc", "_abc"] {
            assert_eq!(
                s.parse::<Fullname>(),
                Err(Error::ParseFullname(s.to_string()))
            );
        }
    }

    #[test]
    fn new_strips_prefix() {
        assert_eq!(
            Fullname::new(Kind::Link, "t3_5or86n").to_string(),
            "t3_5or86n"
        );

        // a prefix of another kind is part of the ID
        assert_eq!(Fullname::new(Kind::Link, "t1_x").id(), "t1_x");
    }

    #[test]
    fn fullname_serde() {
        let fullname: Fullname = serde_json::from_str(r#""t4_abc""#).unwrap();

        assert_eq!(fullname, Fullname::new(Kind::Message, "abc"));
        assert_eq!(serde_json::to_string(&fullname).unwrap(), r#""t4_abc""#);
        assert!(serde_json::from_str::<Fullname>(r#""nope""#).is_err());
    }

    #[test]
    fn thing_data_checks_kind() {
        let thing = RawThing {
            kind: String::from("t4"),
            data: serde_json::json!({}),
        };

        assert_eq!(
            thing_data::<JsonValue>(thing, Kind::Comment),
            Err(Error::UnexpectedKind {
                expected: String::from("t1"),
                found: String::from("t4"),
            })
        );
    }
}
