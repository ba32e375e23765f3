use chrono::NaiveDate;
use rstest::rstest;
use scheduler_core::view::filter::{is_same_month, is_same_week, week_bounds};
use scheduler_core::{filter_events, Event, EventDraft, FilterMode, WeekStart};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn event(id: i64, title: &str, day: &str) -> Event {
    Event::from_draft(id, EventDraft::new(title, date(day))).unwrap()
}

fn march_fixture() -> Vec<Event> {
    vec![
        event(3, "april", "2024-04-02"),
        event(2, "mid", "2024-03-15"),
        event(1, "first", "2024-03-01"),
    ]
}

fn titles(events: &[Event]) -> Vec<&str> {
    events.iter().map(|event| event.title.as_str()).collect()
}

#[test]
fn month_filter_keeps_same_month_and_year() {
    let visible = filter_events(
        &march_fixture(),
        FilterMode::Month,
        date("2024-03-10"),
        WeekStart::Sunday,
    );
    assert_eq!(titles(&visible), vec!["first", "mid"]);
}

#[test]
fn week_filter_keeps_only_the_week_containing_today() {
    // 2024-03-10 is a Sunday: the Sunday week runs 03-10..=03-16.
    let visible = filter_events(
        &march_fixture(),
        FilterMode::Week,
        date("2024-03-10"),
        WeekStart::Sunday,
    );
    assert_eq!(titles(&visible), vec!["mid"]);

    // The Monday week runs 03-04..=03-10 and holds none of them.
    let visible = filter_events(
        &march_fixture(),
        FilterMode::Week,
        date("2024-03-10"),
        WeekStart::Monday,
    );
    assert!(visible.is_empty());
}

#[test]
fn results_are_ordered_by_date_then_id() {
    let events = vec![
        event(30, "late", "2024-03-20"),
        event(20, "same day b", "2024-03-05"),
        event(10, "same day a", "2024-03-05"),
    ];
    let visible = filter_events(&events, FilterMode::Month, date("2024-03-01"), WeekStart::Sunday);
    assert_eq!(titles(&visible), vec!["same day a", "same day b", "late"]);
}

#[test]
fn filtering_does_not_modify_input() {
    let events = march_fixture();
    let before = events.clone();
    let _ = filter_events(&events, FilterMode::Week, date("2024-03-10"), WeekStart::Sunday);
    assert_eq!(events, before);
}

#[rstest]
#[case("2024-03-01", "2024-03-31", true)]
#[case("2024-03-31", "2024-03-01", true)]
#[case("2024-02-29", "2024-03-01", false)]
#[case("2023-03-15", "2024-03-15", false)]
fn same_month_cases(#[case] day: &str, #[case] today: &str, #[case] expected: bool) {
    assert_eq!(is_same_month(date(day), date(today)), expected);
}

#[rstest]
#[case("2024-03-16", "2024-03-10", WeekStart::Sunday, true)]
#[case("2024-03-17", "2024-03-10", WeekStart::Sunday, false)]
#[case("2024-03-09", "2024-03-10", WeekStart::Sunday, false)]
#[case("2024-03-04", "2024-03-10", WeekStart::Monday, true)]
#[case("2024-03-11", "2024-03-10", WeekStart::Monday, false)]
#[case("2023-12-31", "2024-01-06", WeekStart::Sunday, true)]
fn same_week_cases(
    #[case] day: &str,
    #[case] today: &str,
    #[case] week_start: WeekStart,
    #[case] expected: bool,
) {
    assert_eq!(is_same_week(date(day), date(today), week_start), expected);
}

#[test]
fn week_bounds_cross_year_boundary() {
    let (first, last) = week_bounds(date("2024-01-02"), WeekStart::Monday);
    assert_eq!(first, date("2024-01-01"));
    assert_eq!(last, date("2024-01-07"));

    let (first, last) = week_bounds(date("2024-01-02"), WeekStart::Sunday);
    assert_eq!(first, date("2023-12-31"));
    assert_eq!(last, date("2024-01-06"));
}

#[test]
fn filter_mode_parses_and_defaults_to_month() {
    assert_eq!(FilterMode::default(), FilterMode::Month);
    assert_eq!("Week".parse::<FilterMode>().unwrap(), FilterMode::Week);
    assert!("day".parse::<FilterMode>().is_err());
    assert_eq!(
        FilterMode::Week.empty_message(),
        "No events scheduled for this week."
    );
    assert_eq!(
        FilterMode::Month.empty_message(),
        "No events scheduled for this month."
    );
}
