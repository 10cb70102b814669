use crate::client::Client;
use crate::error::Result;
use crate::thing::{FromThing, RawThing};

use either::Either;

use futures::stream::{self, unfold, BoxStream};
use futures::StreamExt;

use log::trace;

use serde::Deserialize;

use std::collections::BTreeMap;
use std::fmt;

/// Number of items requested per page when a listing has no limit.
const UNBOUNDED_PAGE_SIZE: u32 = 1024;

/// Lazy, paginated sequence of items from a listing endpoint.
///
/// Requests are only made as the stream is polled. Each call to a listing method returns a new
/// stream starting from the first page; streams never share state with each other.
pub type ListingStream<T> = BoxStream<'static, Result<T>>;

/// Time period for listings that support one (`top`, `controversial`, search, ...).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeFilter::Hour => "hour",
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::All => "all",
        })
    }
}

/// Options for a listing request.
///
/// Every option ends up as a query parameter of the listing request. Their names and values are
/// not checked: Reddit ignores what it doesn't know about.
///
/// ```
/// # use snoosh::listing::{ListingOptions, TimeFilter};
/// let options = ListingOptions::new()
///     .limit(5)
///     .after("t3_5or86n")
///     .time_filter(TimeFilter::Week)
///     .param("sr_detail", "true");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ListingOptions {
    limit: Option<u32>,
    params: BTreeMap<String, String>,
}

impl Default for ListingOptions {
    fn default() -> Self {
        ListingOptions {
            limit: Some(100),
            params: BTreeMap::new(),
        }
    }
}

impl ListingOptions {
    /// Create a new instance of `ListingOptions`, limited to 100 items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of items the stream yields in total, across all pages.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Yield everything the listing has.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Start after the item with the given fullname.
    pub fn after(self, fullname: impl Into<String>) -> Self {
        self.param("after", fullname)
    }

    /// Start before the item with the given fullname.
    pub fn before(self, fullname: impl Into<String>) -> Self {
        self.param("before", fullname)
    }

    /// Number of items already seen in this listing.
    pub fn count(self, count: u32) -> Self {
        self.param("count", count.to_string())
    }

    pub fn time_filter(self, time_filter: TimeFilter) -> Self {
        self.param("t", time_filter.to_string())
    }

    /// Set an arbitrary query parameter, replacing any previous value.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn get_limit(&self) -> Option<u32> {
        self.limit
    }

    /// The query parameters set so far, `limit` excluded.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

#[derive(Debug, Deserialize)]
struct RawListing {
    data: RawListingData,
}

#[derive(Debug, Deserialize)]
struct RawListingData {
    after: Option<String>,
    children: Vec<RawThing>,
}

#[derive(Debug)]
struct Page {
    client: Client,
    endpoint: String,
    params: BTreeMap<String, String>,
    remaining: Option<u32>,
}

/// Returns a stream over the items of the listing at `endpoint`.
pub(crate) fn listing<T>(
    client: &Client,
    endpoint: impl Into<String>,
    options: ListingOptions,
) -> ListingStream<T>
where
    T: FromThing + Send + 'static,
{
    let mut params = options.params;
    params.insert(
        String::from("limit"),
        options.limit.unwrap_or(UNBOUNDED_PAGE_SIZE).to_string(),
    );
    params
        .entry(String::from("raw_json"))
        .or_insert_with(|| String::from("1"));

    let page = Page {
        client: client.clone(),
        endpoint: endpoint.into(),
        params,
        remaining: options.limit,
    };

    unfold(Some(page), next_page::<T>)
        .map(stream::iter)
        .flatten()
        .boxed()
}

async fn next_page<T: FromThing>(
    page: Option<Page>,
) -> Option<(impl Iterator<Item = Result<T>>, Option<Page>)> {
    // `page` will be `None` if the previous page errored or was the last one. If that is the case,
    // return `None` to end the stream.
    let mut page = page?;

    if page.remaining == Some(0) {
        return None;
    }

    let listing = match page.client.get(&page.endpoint, &page.params).await {
        Err(e) => return Some((Either::Left(std::iter::once(Err(e))), None)),
        Ok(body) => match serde_json::from_value::<RawListing>(body) {
            Err(e) => return Some((Either::Left(std::iter::once(Err(e.into()))), None)),
            Ok(listing) => listing.data,
        },
    };

    if listing.children.is_empty() {
        return None;
    }

    let mut children = listing.children;
    if let Some(remaining) = page.remaining {
        children.truncate(remaining as usize);
        page.remaining = Some(remaining - children.len() as u32);
    }

    trace!(
        "{}: {} items, next page after {:?}",
        page.endpoint,
        children.len(),
        listing.after
    );

    let items: Vec<Result<T>> = children
        .into_iter()
        .map(|child| T::from_thing(&page.client, child))
        .collect();

    // a missing or repeated cursor means there is nothing left to fetch
    let next = match listing.after {
        Some(after) if page.params.get("after") != Some(&after) => {
            page.params.insert(String::from("after"), after);
            Some(page)
        }
        _ => None,
    };

    Some((Either::Right(items.into_iter()), next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::submission::Submission;
    use crate::thing::Thing;
    use mockito::{mock, Matcher};
    use pretty_assertions::assert_eq;

    const PAGES: [&str; 2] = [
        include_str!("mocked/listing-page_1.json"),
        include_str!("mocked/listing-page_2.json"),
    ];

    fn client() -> Client {
        Client::new(&mockito::server_url(), b"snoosh/unit_test").unwrap()
    }

    fn ids(items: Vec<Result<Submission>>) -> Vec<String> {
        items
            .into_iter()
            .map(|s| s.unwrap().fullname().to_string())
            .collect()
    }

    #[test]
    fn build_options() {
        let options = ListingOptions::new()
            .limit(5)
            .after("t3_a")
            .before("t3_b")
            .count(25)
            .time_filter(TimeFilter::Week)
            .param("sr_detail", "true");

        assert_eq!(options.get_limit(), Some(5));
        assert_eq!(
            options.params().iter().collect::<Vec<_>>(),
            vec![
                (&String::from("after"), &String::from("t3_a")),
                (&String::from("before"), &String::from("t3_b")),
                (&String::from("count"), &String::from("25")),
                (&String::from("sr_detail"), &String::from("true")),
                (&String::from("t"), &String::from("week")),
            ]
        );
    }

    #[test]
    fn default_limit_is_100() {
        assert_eq!(ListingOptions::new().get_limit(), Some(100));
        assert_eq!(ListingOptions::new().unlimited().get_limit(), None);
    }

    #[tokio::test]
    async fn follows_cursor_until_exhausted() {
        let mocks = [
            mock(
                "GET",
                Matcher::Exact(String::from("/listing/all?limit=1024&raw_json=1")),
            )
            .with_body(PAGES[0])
            .expect(1)
            .create(),
            mock(
                "GET",
                Matcher::Exact(String::from(
                    "/listing/all?after=t3_c&limit=1024&raw_json=1",
                )),
            )
            .with_body(PAGES[1])
            .expect(1)
            .create(),
        ];

        let items = listing::<Submission>(
            &client(),
            "listing/all",
            ListingOptions::new().unlimited(),
        )
        .collect::<Vec<_>>()
        .await;

        assert_eq!(ids(items), ["t3_a", "t3_b", "t3_c", "t3_d", "t3_e"]);

        for m in &mocks {
            m.assert();
        }
    }

    #[tokio::test]
    async fn stops_at_limit_within_page() {
        let m = mock(
            "GET",
            Matcher::Exact(String::from("/listing/short?limit=2&raw_json=1")),
        )
        .with_body(PAGES[0])
        .expect(1)
        .create();

        let items = listing::<Submission>(&client(), "listing/short", ListingOptions::new().limit(2))
            .collect::<Vec<_>>()
            .await;

        assert_eq!(ids(items), ["t3_a", "t3_b"]);
        m.assert();
    }

    #[tokio::test]
    async fn stops_at_limit_across_pages() {
        let _m = [
            mock(
                "GET",
                Matcher::Exact(String::from("/listing/four?limit=4&raw_json=1")),
            )
            .with_body(PAGES[0])
            .create(),
            mock(
                "GET",
                Matcher::Exact(String::from(
                    "/listing/four?after=t3_c&limit=4&raw_json=1",
                )),
            )
            .with_body(PAGES[1])
            .create(),
        ];

        let items = listing::<Submission>(&client(), "listing/four", ListingOptions::new().limit(4))
            .collect::<Vec<_>>()
            .await;

        assert_eq!(ids(items), ["t3_a", "t3_b", "t3_c", "t3_d"]);
    }

    #[tokio::test]
    async fn empty_page_ends_listing() {
        let _m = mock(
            "GET",
            Matcher::Exact(String::from("/listing/empty?limit=100&raw_json=1")),
        )
        .with_body(r#"{"kind": "Listing", "data": {"after": null, "before": null, "children": []}}"#)
        .create();

        let items = listing::<Submission>(&client(), "listing/empty", ListingOptions::new())
            .collect::<Vec<_>>()
            .await;

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn repeated_cursor_ends_listing() {
        // page 1 points back to the cursor it was requested with
        let m = mock(
            "GET",
            Matcher::Exact(String::from(
                "/listing/loop?after=t3_c&limit=100&raw_json=1",
            )),
        )
        .with_body(PAGES[0])
        .expect(1)
        .create();

        let items = listing::<Submission>(
            &client(),
            "listing/loop",
            ListingOptions::new().after("t3_c"),
        )
        .collect::<Vec<_>>()
        .await;

        assert_eq!(ids(items), ["t3_a", "t3_b", "t3_c"]);
        m.assert();
    }

    #[tokio::test]
    async fn error_ends_listing() {
        let m = mock(
            "GET",
            Matcher::Exact(String::from("/listing/private?limit=100&raw_json=1")),
        )
        .with_status(403)
        .with_body(r#"{"reason": "private", "message": "Forbidden", "error": 403}"#)
        .expect(1)
        .create();

        let items = listing::<Submission>(&client(), "listing/private", ListingOptions::new())
            .collect::<Vec<_>>()
            .await;

        assert_eq!(
            items,
            vec![Err(Error::Http {
                code: 403,
                reason: Some(String::from("Forbidden")),
            })]
        );
        m.assert();
    }

    #[tokio::test]
    async fn malformed_listing_is_an_error() {
        let _m = mock(
            "GET",
            Matcher::Exact(String::from("/listing/weird?limit=100&raw_json=1")),
        )
        .with_body(r#"{"kind": "t3", "data": {"id": "a"}}"#)
        .create();

        let items = listing::<Submission>(&client(), "listing/weird", ListingOptions::new())
            .collect::<Vec<_>>()
            .await;

        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(Error::Serial(_))));
    }

    #[tokio::test]
    async fn streams_are_independent() {
        let m = mock(
            "GET",
            Matcher::Exact(String::from("/listing/twice?limit=2&raw_json=1")),
        )
        .with_body(PAGES[0])
        .expect(2)
        .create();

        let client = client();
        let mut first = listing::<Submission>(&client, "listing/twice", ListingOptions::new().limit(2));
        let second = listing::<Submission>(&client, "listing/twice", ListingOptions::new().limit(2));

        // exhaust the first one before touching the second one
        while first.next().await.is_some() {}

        assert_eq!(ids(second.collect().await), ["t3_a", "t3_b"]);
        m.assert();
    }
}
