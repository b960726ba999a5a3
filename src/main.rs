use tweetbox::Website;

// The acting user's id would come from the host page's session; a fixed id
// stands in for it in this standalone build.
const DEMO_USER_ID: i64 = 42;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| Website::app(DEMO_USER_ID));
}
