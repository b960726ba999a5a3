use crate::draft::{TweetPayload, Validity, validate};

/// Lifecycle of one submission attempt. Only the submit handler moves it,
/// always `Idle → Submitting → (Success | Error)`; a fresh submit from
/// `Success` or `Error` re-enters `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Label for the submit button; relabeled while a request is in flight.
    pub fn button_label(self) -> &'static str {
        match self {
            SubmissionStatus::Submitting => "Posting...",
            _ => "Post Tweet",
        }
    }

    /// Message shown under the form once a submission settles.
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some("Tweet posted successfully!"),
            SubmissionStatus::Error => Some("Error posting tweet."),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

/// What one submit activation should do, given the current status and draft.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// A request is already in flight; this activation is dropped.
    Blocked,
    /// The draft failed validation; show the reason inline, send nothing.
    Rejected(&'static str),
    /// Send exactly this payload.
    Post(TweetPayload),
}

/// Plans a submit activation. The `Submitting` gate is what keeps rapid
/// repeated activation down to at most one request per submission cycle.
pub fn plan_submit(status: SubmissionStatus, tweet: &str, user_id: i64) -> SubmitAction {
    if status == SubmissionStatus::Submitting {
        return SubmitAction::Blocked;
    }
    match validate(tweet, user_id) {
        Validity::Valid(payload) => SubmitAction::Post(payload),
        Validity::Invalid(reason) => SubmitAction::Rejected(reason),
    }
}

/// Status the form settles into once the request future completes.
pub fn settled(result: &anyhow::Result<()>) -> SubmissionStatus {
    match result {
        Ok(()) => SubmissionStatus::Success,
        Err(_) => SubmissionStatus::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::EMPTY_TWEET_MESSAGE;
    use anyhow::anyhow;

    #[test]
    fn test_valid_draft_posts() {
        //idle form, non-empty text: exactly one post with both fields
        let action = plan_submit(SubmissionStatus::Idle, "hello world", 42);
        let SubmitAction::Post(payload) = action else {
            panic!("expected a post");
        };
        assert_eq!(payload.tweet, "hello world");
        assert_eq!(payload.user_id, 42);
    }

    #[test]
    fn test_empty_draft_is_rejected() {
        //empty text never reaches the network, whatever the settled status
        for status in [
            SubmissionStatus::Idle,
            SubmissionStatus::Success,
            SubmissionStatus::Error,
        ] {
            assert_eq!(
                plan_submit(status, "", 42),
                SubmitAction::Rejected(EMPTY_TWEET_MESSAGE)
            );
        }
    }

    #[test]
    fn test_in_flight_submit_is_blocked() {
        //double activation while submitting issues no second request
        assert_eq!(
            plan_submit(SubmissionStatus::Submitting, "test", 7),
            SubmitAction::Blocked
        );
        //even an invalid draft is not re-reported while in flight
        assert_eq!(
            plan_submit(SubmissionStatus::Submitting, "", 7),
            SubmitAction::Blocked
        );
    }

    #[test]
    fn test_settled_statuses_allow_resubmit() {
        //a fresh submit from success or error re-enters the cycle
        for status in [SubmissionStatus::Success, SubmissionStatus::Error] {
            assert!(matches!(
                plan_submit(status, "again", 7),
                SubmitAction::Post(_)
            ));
        }
    }

    #[test]
    fn test_settled() {
        assert_eq!(settled(&Ok(())), SubmissionStatus::Success);
        assert_eq!(
            settled(&Err(anyhow!("connection refused"))),
            SubmissionStatus::Error
        );
    }

    #[test]
    fn test_labels_and_messages() {
        assert_eq!(SubmissionStatus::Idle.button_label(), "Post Tweet");
        assert_eq!(SubmissionStatus::Submitting.button_label(), "Posting...");
        assert_eq!(SubmissionStatus::Success.button_label(), "Post Tweet");
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Submitting.message(), None);
        assert_eq!(
            SubmissionStatus::Success.message(),
            Some("Tweet posted successfully!")
        );
        assert_eq!(
            SubmissionStatus::Error.message(),
            Some("Error posting tweet.")
        );
    }
}
