use chrono::NaiveDate;
use scheduler_core::view::form::{DATE_INVALID, DATE_REQUIRED, TITLE_REQUIRED};
use scheduler_core::{
    EditorState, EventForm, EventStore, FilterMode, MemorySlot, Scheduler, SchedulerConfig,
    StoreError, SubmitError, WeekStart,
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn scheduler() -> (Scheduler<MemorySlot>, MemorySlot) {
    let slot = MemorySlot::default();
    (Scheduler::new(EventStore::open(slot.clone())), slot)
}

#[test]
fn form_validation_reports_every_missing_field() {
    let errors = EventForm::default().validate().unwrap_err();
    assert_eq!(errors.title, Some(TITLE_REQUIRED));
    assert_eq!(errors.date, Some(DATE_REQUIRED));

    let errors = EventForm::new("ok", "2024-02-30").validate().unwrap_err();
    assert_eq!(errors.title, None);
    assert_eq!(errors.date, Some(DATE_INVALID));

    let draft = EventForm::new("  Standup  ", "2024-03-10").validate().unwrap();
    assert_eq!(draft.title, "Standup");
    assert_eq!(draft.date, date("2024-03-10"));
}

#[test]
fn invalid_submission_touches_neither_store_nor_editor() {
    let (mut scheduler, slot) = scheduler();
    let mut editor = scheduler.open_add();
    editor.form.title = "missing date".to_string();
    let before = editor.clone();

    let err = scheduler.submit_editor(&mut editor).unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(ref errors) if errors.date == Some(DATE_REQUIRED)));
    assert_eq!(editor, before);
    assert!(scheduler.store().is_empty());
    assert!(slot.raw().is_none());
}

#[test]
fn open_add_starts_clean() {
    let (scheduler, _) = scheduler();
    let editor = scheduler.open_add();
    assert!(editor.open);
    assert!(editor.form.is_empty());
    assert_eq!(editor.selection, None);
    assert_eq!(editor.heading(), "Add Event");
    assert_eq!(editor.submit_label(), "Save");
}

#[test]
fn add_then_edit_through_editor() {
    let (mut scheduler, _) = scheduler();

    let mut editor = scheduler.open_add();
    editor.form = EventForm::new("Standup", "2024-03-10");
    let created = scheduler.submit_editor(&mut editor).unwrap();
    assert_eq!(editor, EditorState::closed());

    let mut editor = scheduler.open_edit(created.id).unwrap();
    assert_eq!(editor.selection, Some(created.id));
    assert_eq!(editor.form, EventForm::new("Standup", "2024-03-10"));
    assert_eq!(editor.heading(), "Edit Event");
    assert_eq!(editor.submit_label(), "Update");

    editor.form.title = "Standup v2".to_string();
    editor.form.date = "2024-03-11".to_string();
    let updated = scheduler.submit_editor(&mut editor).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(scheduler.store().len(), 1);
    assert_eq!(scheduler.store().list()[0].title, "Standup v2");
    assert!(!editor.open);
    assert_eq!(editor.selection, None);
    assert!(editor.form.is_empty());
}

#[test]
fn open_edit_for_missing_event_returns_none() {
    let (scheduler, _) = scheduler();
    assert!(scheduler.open_edit(12345).is_none());
}

#[test]
fn submit_with_stale_selection_is_not_found() {
    let (mut scheduler, _) = scheduler();
    let created = scheduler
        .submit(&EventForm::new("gone soon", "2024-03-10"), None)
        .unwrap();
    let mut editor = scheduler.open_edit(created.id).unwrap();
    scheduler.delete(created.id).unwrap();

    let err = scheduler.submit_editor(&mut editor).unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Store(StoreError::NotFound(id)) if id == created.id
    ));
    assert!(editor.open);
    assert!(scheduler.store().is_empty());
}

#[test]
fn visible_events_follow_mode_switches() {
    let (mut scheduler, _) = scheduler();
    for (title, day) in [
        ("first", "2024-03-01"),
        ("mid", "2024-03-15"),
        ("april", "2024-04-02"),
    ] {
        scheduler.submit(&EventForm::new(title, day), None).unwrap();
    }
    let today = date("2024-03-10");

    assert_eq!(scheduler.mode(), FilterMode::Month);
    let month: Vec<_> = scheduler
        .visible_events(today)
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(month, vec!["first", "mid"]);

    scheduler.set_mode(FilterMode::Week);
    let week: Vec<_> = scheduler
        .visible_events(today)
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(week, vec!["mid"]);

    assert!(scheduler.visible_events(date("2025-01-01")).is_empty());
    assert_eq!(scheduler.empty_message(), "No events scheduled for this week.");
}

#[test]
fn config_sets_initial_mode_and_week_start() {
    let config = SchedulerConfig {
        default_mode: FilterMode::Week,
        week_start: WeekStart::Monday,
        ..SchedulerConfig::default()
    };
    let scheduler = Scheduler::with_config(EventStore::open(MemorySlot::default()), &config);
    assert_eq!(scheduler.mode(), FilterMode::Week);
    assert_eq!(scheduler.week_start(), WeekStart::Monday);
}

#[test]
fn delete_routes_to_store_and_ignores_unknown_ids() {
    let (mut scheduler, slot) = scheduler();
    let created = scheduler
        .submit(&EventForm::new("Standup", "2024-03-10"), None)
        .unwrap();

    scheduler.delete(999).unwrap();
    assert_eq!(scheduler.store().len(), 1);

    scheduler.delete(created.id).unwrap();
    assert!(scheduler.store().is_empty());
    assert_eq!(slot.raw().as_deref(), Some("[]"));
}
