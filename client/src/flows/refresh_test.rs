use super::*;
use crate::net::types::Activity;
use crate::state::activities::ListStatus;

// =============================================================
// Helpers
// =============================================================

fn listing(names: &[&str]) -> ActivityCollection {
    names
        .iter()
        .map(|name| {
            let activity = Activity {
                description: format!("{name} description"),
                schedule: "Fri".to_owned(),
                max_participants: 5,
                participants: vec!["a@mergington.edu".to_owned()],
            };
            ((*name).to_owned(), activity)
        })
        .collect()
}

fn card_names(ctx: ViewContext) -> Vec<String> {
    ctx.activities
        .with_untracked(|s| s.cards.iter().map(|c| c.name.clone()).collect())
}

fn options(ctx: ViewContext) -> Vec<String> {
    ctx.activities.with_untracked(|s| s.options.clone())
}

// =============================================================
// apply_fetch_result
// =============================================================

#[test]
fn success_fills_cards_and_selector_together() {
    let ctx = ViewContext::new();
    let seq = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();

    apply_fetch_result(ctx, seq, Ok(listing(&["Chess Club", "Art Club"])));

    assert_eq!(ctx.activities.with_untracked(|s| s.status), ListStatus::Ready);
    assert_eq!(card_names(ctx), vec!["Chess Club", "Art Club"]);
    assert_eq!(options(ctx), vec!["Chess Club", "Art Club"]);
}

#[test]
fn failure_after_success_keeps_selector_options() {
    let ctx = ViewContext::new();
    let first = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();
    apply_fetch_result(ctx, first, Ok(listing(&["A"])));

    let second = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();
    apply_fetch_result(ctx, second, Err(ApiError::Transport("offline".to_owned())));

    assert_eq!(ctx.activities.with_untracked(|s| s.status), ListStatus::Failed);
    assert!(card_names(ctx).is_empty());
    assert_eq!(options(ctx), vec!["A"]);
}

#[test]
fn superseded_result_is_dropped() {
    let ctx = ViewContext::new();
    let older = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();
    let newer = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();

    apply_fetch_result(ctx, newer, Ok(listing(&["New"])));
    apply_fetch_result(ctx, older, Ok(listing(&["Old"])));
    apply_fetch_result(ctx, older, Err(ApiError::Status(500)));

    assert_eq!(ctx.activities.with_untracked(|s| s.status), ListStatus::Ready);
    assert_eq!(card_names(ctx), vec!["New"]);
    assert_eq!(options(ctx), vec!["New"]);
}

#[test]
fn selection_survives_reorder_but_not_removal() {
    let ctx = ViewContext::new();
    ctx.signup.update(|s| s.activity = "B".to_owned());

    let seq = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();
    apply_fetch_result(ctx, seq, Ok(listing(&["B", "A"])));
    assert_eq!(ctx.signup.with_untracked(|s| s.activity.clone()), "B");

    let seq = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();
    apply_fetch_result(ctx, seq, Ok(listing(&["C"])));
    assert_eq!(ctx.signup.with_untracked(|s| s.activity.clone()), "");
}

#[test]
fn stale_result_does_not_touch_selection() {
    let ctx = ViewContext::new();
    ctx.signup.update(|s| s.activity = "B".to_owned());
    let older = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();
    let _newer = ctx.activities.try_update(|s| s.begin_refresh()).unwrap();

    apply_fetch_result(ctx, older, Ok(listing(&["C"])));

    assert_eq!(ctx.signup.with_untracked(|s| s.activity.clone()), "B");
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_starts_a_new_generation() {
    let ctx = ViewContext::new();
    refresh(ctx);
    refresh(ctx);
    assert_eq!(ctx.activities.with_untracked(|s| s.latest_refresh), 2);
    assert_eq!(ctx.activities.with_untracked(|s| s.status), ListStatus::Loading);
}
