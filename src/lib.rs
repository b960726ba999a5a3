use leptos::prelude::*;

pub mod api;
pub mod draft;
pub mod frontend;
pub mod submit;

/// Hold logical items of our website
#[derive(Debug)]
pub struct Website {
    // Hold the in-progress tweet and the acting user's id
    pub draft: draft::Draft,
    // Hold the lifecycle of the current submission attempt
    pub status: RwSignal<submit::SubmissionStatus>,
}

impl Website {
    pub fn new(user_id: i64) -> Self {
        Website {
            draft: draft::Draft::new(user_id),
            status: RwSignal::new(submit::SubmissionStatus::default()),
        }
    }

    pub fn app(user_id: i64) -> impl IntoView {
        let website = Website::new(user_id);

        view! { <frontend::TweetForm draft=website.draft status=website.status /> }
    }
}
