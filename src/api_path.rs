//! Endpoint paths, relative to the client's base URL.

pub const VOTE: &str = "api/vote/";
pub const SEND_REPLIES: &str = "api/sendreplies";
pub const BLOCK: &str = "api/block";
pub const UNBLOCK_SUBREDDIT: &str = "api/unblock_subreddit/";

pub const READ_MESSAGE: &str = "api/read_message/";
pub const UNREAD_MESSAGE: &str = "api/unread_message/";
pub const COLLAPSE: &str = "api/collapse_message/";
pub const UNCOLLAPSE: &str = "api/uncollapse_message/";
pub const READ_ALL_MESSAGES: &str = "api/read_all_messages";

pub const INBOX: &str = "message/inbox/";
pub const UNREAD: &str = "message/unread/";
pub const MESSAGES: &str = "message/messages/";
pub const SENT: &str = "message/sent/";
pub const COMMENT_REPLIES: &str = "message/comments/";
pub const SUBMISSION_REPLIES: &str = "message/selfreply";
pub const MENTIONS: &str = "message/mentions";

/// Listing segments joined onto a subreddit (or front page) path.
pub const RISING: &str = "rising";
pub const RANDOM_RISING: &str = "randomrising";
