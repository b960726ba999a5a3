use crate::draft::TweetPayload;
use anyhow::{Result, anyhow};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Backend route that accepts a new tweet.
pub const TWEETS_ENDPOINT: &str = "/api/tweets";

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

/// POSTs the payload to the tweets endpoint as JSON.
///
/// Any response that arrives counts as a post: the HTTP status code is
/// deliberately not inspected, so a 4xx/5xx from the server still reads as
/// success here. Only a rejected fetch (network failure) is an error.
pub async fn post_tweet(payload: &TweetPayload) -> Result<()> {
    let body = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(TWEETS_ENDPOINT, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let _: Response = response.dyn_into().map_err(js_error)?;

    Ok(())
}
