//! Manual end-to-end harness. Run the server, then:
//!
//! ```sh
//! API_BASE=http://localhost:5000 cargo run -p tester
//! ```

use editor::{api::HttpApi, workflow::Editor};
use writing::{Profile, TransformMode};

const SAMPLE: &str = "The quarterly report indicates that our team has made significant \
progress on the new onboarding flow, though several blockers remain around the billing \
integration and the migration of legacy accounts. We expect the remaining work to take \
roughly three weeks, assuming the upstream vendor ships their fix on schedule and no \
further regressions appear in the authentication service during the rollout window.";

#[tokio::main]
async fn main() {
    let base = std::env::var("API_BASE").unwrap_or_else(|_| "http://localhost:5000".to_string());

    let health: serde_json::Value = reqwest::get(format!("{base}/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    println!("health: {health}");

    let mut editor = Editor::new(HttpApi::new(&base));
    editor.set_text(SAMPLE);
    println!("words before: {}", editor.draft().word_count());

    let profile = Profile::signup_defaults("tester");
    let outcome = editor
        .submit(TransformMode::Professional, Some(&profile))
        .await;

    println!("outcome: {outcome:?}");
    println!("words after: {}", editor.draft().word_count());
    println!("---\n{}", editor.draft().content());

    if let Some(notice) = editor.notice() {
        println!("notice: {notice}");
    }
}
