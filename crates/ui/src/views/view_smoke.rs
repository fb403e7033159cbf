use storage::repository::{ProgressRepository, Storage};
use tracker_core::model::ProblemId;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_stats_and_cards() {
    let mut harness = setup_view_harness(ViewKind::Tracker, &[1, 2, 3]).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0 / 3 Solved (0%)"), "missing stats line in {html}");
    assert!(html.contains("Problem 1"), "missing problem card in {html}");
    assert!(html.contains("Problem 3"), "missing problem card in {html}");
    assert!(html.contains("Video Coming Soon"), "missing link fallback in {html}");

    // nothing toggled yet, so nothing has been persisted
    let stored = harness.storage.progress.get("leetcode_progress").await.unwrap();
    assert!(stored.is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_reflects_preseeded_progress() {
    let storage = Storage::in_memory();
    storage
        .progress
        .set("leetcode_progress", "[1]")
        .await
        .expect("seed progress");

    let mut harness = setup_view_harness_with_storage(ViewKind::Tracker, &[1, 2, 3], storage).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("1 / 3 Solved (33%)"), "missing stats line in {html}");
    assert!(html.contains("problem-name--done"), "missing done styling in {html}");
    assert!(harness.tracker.is_completed(ProblemId::new(1)));
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_treats_malformed_storage_as_empty() {
    let storage = Storage::in_memory();
    storage
        .progress
        .set("leetcode_progress", "{\"oops\": true}")
        .await
        .expect("seed progress");

    let mut harness = setup_view_harness_with_storage(ViewKind::Tracker, &[1, 2, 3], storage).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0 / 3 Solved (0%)"), "missing stats line in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_view_smoke_renders_form_fields() {
    let mut harness = setup_view_harness(ViewKind::Register, &[]).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Phone Number"), "missing field label in {html}");
    assert!(html.contains("College"), "missing field label in {html}");
    assert!(html.contains("Submit"), "missing submit button in {html}");
}
