use super::*;

// =============================================================
// Helpers
// =============================================================

fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "desc".to_owned(),
        schedule: "Mon".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn collection(entries: &[(&str, Activity)]) -> ActivityCollection {
    entries
        .iter()
        .map(|(name, a)| ((*name).to_owned(), a.clone()))
        .collect()
}

fn key(activity: &str, email: &str) -> ParticipantKey {
    ParticipantKey { activity: activity.to_owned(), email: email.to_owned() }
}

fn rendered_rows(state: &ActivitiesState) -> Vec<(String, Vec<String>)> {
    state
        .cards
        .iter()
        .map(|c| (c.name.clone(), c.participants.iter().map(|p| p.email.clone()).collect()))
        .collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_loading_and_empty() {
    let state = ActivitiesState::default();
    assert_eq!(state.status, ListStatus::Loading);
    assert!(state.cards.is_empty());
    assert!(state.options.is_empty());
    assert_eq!(state.latest_refresh, 0);
}

// =============================================================
// ActivityCard
// =============================================================

#[test]
fn chess_club_card_shows_nine_spots_and_one_row() {
    let card = ActivityCard::from_activity("Chess Club", &activity(10, &["a@x.com"]));
    assert_eq!(card.availability_label(), "9 spots left");
    assert_eq!(card.participants, vec![key("Chess Club", "a@x.com")]);
}

#[test]
fn card_without_participants_has_no_rows() {
    let card = ActivityCard::from_activity("Drama", &activity(3, &[]));
    assert!(card.participants.is_empty());
    assert_eq!(card.spots_left, 3);
}

#[test]
fn card_rows_keep_server_order() {
    let card = ActivityCard::from_activity("Gym", &activity(9, &["z@x.com", "a@x.com", "m@x.com"]));
    let emails: Vec<&str> = card.participants.iter().map(|p| p.email.as_str()).collect();
    assert_eq!(emails, vec!["z@x.com", "a@x.com", "m@x.com"]);
}

// =============================================================
// Refresh sequencing
// =============================================================

#[test]
fn apply_loaded_fills_cards_and_options_from_same_fetch() {
    let mut state = ActivitiesState::default();
    let seq = state.begin_refresh();
    let data = collection(&[("Chess Club", activity(10, &["a@x.com"])), ("Drama", activity(4, &[]))]);
    assert!(state.apply_loaded(seq, &data));

    assert_eq!(state.status, ListStatus::Ready);
    assert_eq!(state.options, vec!["Chess Club".to_owned(), "Drama".to_owned()]);
    let names: Vec<&str> = state.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Chess Club", "Drama"]);
}

#[test]
fn repeated_identical_refreshes_render_identically() {
    let mut state = ActivitiesState::default();
    let data = collection(&[("A", activity(2, &["x@x.com"])), ("B", activity(2, &["y@x.com", "z@x.com"]))]);

    let first = state.begin_refresh();
    state.apply_loaded(first, &data);
    let rows_first = rendered_rows(&state);
    let options_first = state.options.clone();

    let second = state.begin_refresh();
    state.apply_loaded(second, &data);

    assert_eq!(rendered_rows(&state), rows_first);
    assert_eq!(state.options, options_first);
}

#[test]
fn spots_left_is_recomputed_on_every_load() {
    let mut state = ActivitiesState::default();
    let seq = state.begin_refresh();
    state.apply_loaded(seq, &collection(&[("A", activity(5, &["a@x.com"]))]));
    assert_eq!(state.cards[0].spots_left, 4);

    let seq = state.begin_refresh();
    state.apply_loaded(seq, &collection(&[("A", activity(5, &["a@x.com", "b@x.com", "c@x.com"]))]));
    assert_eq!(state.cards[0].spots_left, 2);
}

#[test]
fn apply_failed_keeps_selector_options() {
    let mut state = ActivitiesState::default();
    let seq = state.begin_refresh();
    state.apply_loaded(seq, &collection(&[("A", activity(1, &[]))]));

    let seq = state.begin_refresh();
    assert!(state.apply_failed(seq));
    assert_eq!(state.status, ListStatus::Failed);
    assert!(state.cards.is_empty());
    assert_eq!(state.options, vec!["A".to_owned()]);
}

#[test]
fn failed_then_successful_refresh_does_not_duplicate_options() {
    let mut state = ActivitiesState::default();
    let data = collection(&[("A", activity(1, &[])), ("B", activity(1, &[]))]);

    let seq = state.begin_refresh();
    state.apply_loaded(seq, &data);
    let seq = state.begin_refresh();
    state.apply_failed(seq);
    let seq = state.begin_refresh();
    state.apply_loaded(seq, &data);

    assert_eq!(state.options, vec!["A".to_owned(), "B".to_owned()]);
}

#[test]
fn stale_refresh_result_is_discarded() {
    let mut state = ActivitiesState::default();
    let slow = state.begin_refresh();
    let fast = state.begin_refresh();

    assert!(state.apply_loaded(fast, &collection(&[("New", activity(1, &[]))])));
    assert!(!state.apply_loaded(slow, &collection(&[("Old", activity(1, &[]))])));
    assert!(!state.apply_failed(slow));

    assert_eq!(state.status, ListStatus::Ready);
    assert_eq!(state.options, vec!["New".to_owned()]);
}

// =============================================================
// Removal feedback
// =============================================================

#[test]
fn removing_marker_is_cleared_by_next_render() {
    let mut state = ActivitiesState::default();
    let data = collection(&[("A", activity(3, &["a@x.com"]))]);
    let seq = state.begin_refresh();
    state.apply_loaded(seq, &data);

    state.mark_removing(key("A", "a@x.com"));
    assert!(state.is_removing(&key("A", "a@x.com")));
    assert!(!state.is_removing(&key("A", "b@x.com")));

    let seq = state.begin_refresh();
    state.apply_loaded(seq, &data);
    assert!(!state.is_removing(&key("A", "a@x.com")));
}

#[test]
fn removing_marker_survives_stale_result() {
    let mut state = ActivitiesState::default();
    let stale = state.begin_refresh();
    let _current = state.begin_refresh();
    state.mark_removing(key("A", "a@x.com"));

    state.apply_loaded(stale, &collection(&[("A", activity(3, &[]))]));
    assert!(state.is_removing(&key("A", "a@x.com")));
}
