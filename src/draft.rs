use leptos::prelude::*;
use serde::Serialize;

/// Inline message shown when the tweet text fails validation.
pub const EMPTY_TWEET_MESSAGE: &str = "Tweet cannot be empty";

/// The in-progress, unsaved tweet text plus the acting user's id.
///
/// The text lives in a signal so the textarea can bind to it; the user id is
/// fixed by the hosting page at construction and is not user-editable.
#[derive(Debug, Clone, Copy)]
pub struct Draft {
    pub tweet: RwSignal<String>,
    pub user_id: i64,
}

impl Draft {
    pub fn new(user_id: i64) -> Draft {
        Draft {
            tweet: RwSignal::new(String::new()),
            user_id,
        }
    }
}

/// Wire format of the submission body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TweetPayload {
    pub tweet: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Outcome of checking a draft against the submission rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Validity {
    /// The draft may be sent; carries the snapshot to post.
    Valid(TweetPayload),
    /// The draft may not be sent; carries the inline message to show.
    Invalid(&'static str),
}

/// Decides whether a draft may be submitted.
///
/// The only rule is that the tweet text is non-empty. Whitespace-only text
/// passes; the length check is on characters typed, not content.
///
/// ### Parameters
/// `tweet`: the draft text as of this submit activation
///
/// `user_id`: the configured author id
pub fn validate(tweet: &str, user_id: i64) -> Validity {
    if tweet.is_empty() {
        Validity::Invalid(EMPTY_TWEET_MESSAGE)
    } else {
        Validity::Valid(TweetPayload {
            tweet: tweet.to_string(),
            user_id,
        })
    }
}
