//! This module contains the frontend components for the tweet form.
use crate::api::post_tweet;
use crate::draft::Draft;
use crate::submit::{SubmissionStatus, SubmitAction, plan_submit, settled};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// This component renders the tweet textarea with its submit button and
/// reflects the submission lifecycle in the button label and status line.
///
/// ### Parameters
/// `draft`: the in-progress tweet text plus the configured author id
///
/// `status`: read-write signal for the submission lifecycle
#[component]
pub fn TweetForm(draft: Draft, status: RwSignal<SubmissionStatus>) -> impl IntoView {
    let field_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match plan_submit(status.get(), &draft.tweet.get(), draft.user_id) {
            SubmitAction::Blocked => (),
            SubmitAction::Rejected(reason) => {
                field_error.set(Some(reason));
                // Back to idle so the field message is the only one shown
                status.set(SubmissionStatus::Idle);
            }
            SubmitAction::Post(payload) => {
                field_error.set(None);
                status.set(SubmissionStatus::Submitting);
                spawn_local(async move {
                    let result = post_tweet(&payload).await;
                    if let Err(error) = &result {
                        leptos::logging::error!("Error posting tweet: {error:?}");
                    }
                    status.set(settled(&result));
                });
            }
        }
    };

    view! {
        <div class="add-tweet">
            <h2>"Add a Tweet"</h2>
            <form on:submit=on_submit>
                <div>
                    <textarea
                        rows="4"
                        prop:value=move || draft.tweet.get()
                        on:input=move |ev| draft.tweet.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || field_error.get().is_some()>
                        <p class="field-error">{move || field_error.get().unwrap_or("")}</p>
                    </Show>
                </div>
                <button type="submit">{move || status.get().button_label()}</button>
                <StatusLine status=status.read_only() />
            </form>
        </div>
    }
}

/// Shows the settled submission message; nothing while idle or in flight.
///
/// ### Parameters
/// `status`: read signal for the submission lifecycle
#[component]
pub fn StatusLine(status: ReadSignal<SubmissionStatus>) -> impl IntoView {
    let class = move || match status.get() {
        SubmissionStatus::Success => "status-line status-success",
        SubmissionStatus::Error => "status-line status-error",
        _ => "status-line",
    };

    view! {
        <Show when=move || status.get().message().is_some()>
            <p class=class>{move || status.get().message().unwrap_or("")}</p>
        </Show>
    }
}
