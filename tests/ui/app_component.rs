use crate::support::{chars, click, ctrl, delayed_context, draw, find, key, screen, task, test_context};
use crossterm::event::{Event, KeyCode, KeyEvent};
use std::time::Duration;
use taskmaster::constants::{
    INFO_NOTHING_SELECTED, PLACEHOLDER_NEW_TASK, SUCCESS_TASKS_COMPLETED, SUCCESS_TASK_CREATED, WARNING_EMPTY_TASK,
};
use taskmaster::icons::IconTheme;
use taskmaster::notify::Severity;
use taskmaster::task::{Category, Priority, TaskId};
use taskmaster::ui::components::FormState;
use taskmaster::ui::core::{Action, Component, EventType, Focus};
use taskmaster::ui::AppComponent;
use tokio::time::timeout;

fn press(app: &mut AppComponent, key_event: KeyEvent) {
    app.handle_event(EventType::Key(key_event));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for k in chars(text) {
        press(app, k);
    }
}

fn sample_app() -> AppComponent {
    AppComponent::with_tasks(
        test_context(),
        vec![task("a", "Alpha"), task("b", "Bravo"), task("c", "Charlie")],
    )
}

fn toast(app: &AppComponent) -> Option<(String, Severity)> {
    app.status_bar()
        .current_toast()
        .map(|toast| (toast.message.clone(), toast.severity))
}

fn task_text(app: &AppComponent, id: &str) -> Option<String> {
    app.tasks()
        .iter()
        .find(|task| task.id == TaskId::new(id))
        .map(|task| task.text.clone())
}

#[test]
fn test_create_flow() {
    let mut app = AppComponent::new(test_context());
    assert_eq!(app.focus(), Focus::List);

    press(&mut app, key(KeyCode::Char('a')));
    assert_eq!(app.focus(), Focus::Form);
    assert!(app.form().is_expanded());

    type_text(&mut app, "  Buy milk ");
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, key(KeyCode::Char(' ')));
    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Enter));
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, key(KeyCode::Char('h')));
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.tasks().len(), 1);
    let created = &app.tasks()[0];
    assert_eq!(created.text, "Buy milk");
    assert_eq!(created.priority(), Priority::High);
    assert_eq!(created.category(), Category::Work);
    assert!(!created.completed);

    assert_eq!(app.form().state(), &FormState::Collapsed);
    assert_eq!(app.form().text(), "");
    assert_eq!(toast(&app), Some((SUCCESS_TASK_CREATED.to_string(), Severity::Success)));
}

#[test]
fn test_new_tasks_go_on_top() {
    let mut app = sample_app();
    app.dispatch(Action::SetFocus(Focus::Form));
    type_text(&mut app, "Newest");
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.tasks().len(), 4);
    assert_eq!(app.tasks()[0].text, "Newest");
    assert_ne!(app.tasks()[0].id, TaskId::new("a"));
}

#[test]
fn test_blank_submission_warns() {
    let mut app = AppComponent::new(test_context());
    app.dispatch(Action::SetFocus(Focus::Form));
    type_text(&mut app, "   ");
    press(&mut app, key(KeyCode::Enter));

    assert!(app.tasks().is_empty());
    assert_eq!(toast(&app), Some((WARNING_EMPTY_TASK.to_string(), Severity::Warning)));
    assert!(!app.form().is_submitting());
}

#[test]
fn test_toggle_and_delete() {
    let mut app = sample_app();

    press(&mut app, key(KeyCode::Char(' ')));
    assert!(app.tasks()[0].completed);
    press(&mut app, key(KeyCode::Char(' ')));
    assert!(!app.tasks()[0].completed);

    press(&mut app, key(KeyCode::Char('j')));
    press(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.tasks().len(), 2);
    assert!(task_text(&app, "b").is_none());
}

#[test]
fn test_inline_edit() {
    let mut app = sample_app();
    press(&mut app, key(KeyCode::Char('e')));
    assert!(app.task_list().is_editing());

    type_text(&mut app, " Team");
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(task_text(&app, "a").as_deref(), Some("Alpha Team"));
    assert!(!app.task_list().is_editing());
}

#[test]
fn test_blank_edit_keeps_text() {
    let mut app = sample_app();
    press(&mut app, key(KeyCode::Char('e')));
    for _ in 0..5 {
        press(&mut app, key(KeyCode::Backspace));
    }
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(task_text(&app, "a").as_deref(), Some("Alpha"));
    // No feedback for a reverted edit
    assert!(toast(&app).is_none());
}

#[test]
fn test_bulk_complete() {
    let mut app = sample_app();
    press(&mut app, key(KeyCode::Char('v')));
    assert!(app.task_list().selection_mode());

    press(&mut app, key(KeyCode::Char(' ')));
    press(&mut app, key(KeyCode::Char('j')));
    press(&mut app, key(KeyCode::Char('j')));
    press(&mut app, key(KeyCode::Char(' ')));
    assert_eq!(app.selected().len(), 2);

    press(&mut app, key(KeyCode::Char('c')));
    let completed: Vec<bool> = app.tasks().iter().map(|task| task.completed).collect();
    assert_eq!(completed, vec![true, false, true]);
    assert!(app.selected().is_empty());
    assert!(app.task_list().selection_mode());
    assert_eq!(toast(&app), Some((SUCCESS_TASKS_COMPLETED.to_string(), Severity::Success)));

    press(&mut app, key(KeyCode::Char('x')));
    assert_eq!(toast(&app), Some((INFO_NOTHING_SELECTED.to_string(), Severity::Info)));
    assert_eq!(app.tasks().len(), 3);
}

#[test]
fn test_bulk_delete_and_leaving_selection_mode() {
    let mut app = sample_app();
    press(&mut app, key(KeyCode::Char('v')));
    press(&mut app, key(KeyCode::Char(' ')));
    press(&mut app, key(KeyCode::Char('j')));
    press(&mut app, key(KeyCode::Char(' ')));
    press(&mut app, key(KeyCode::Char('x')));

    assert_eq!(app.tasks().len(), 1);
    assert_eq!(app.tasks()[0].text, "Charlie");

    press(&mut app, key(KeyCode::Char(' ')));
    assert_eq!(app.selected().len(), 1);
    press(&mut app, key(KeyCode::Esc));
    assert!(!app.task_list().selection_mode());
    assert!(app.selected().is_empty());
}

#[test]
fn test_selection_toggles() {
    let mut app = sample_app();
    app.dispatch(Action::ToggleSelectionMode);
    app.dispatch(Action::SelectTask(TaskId::new("b")));
    assert!(app.task_list().item(&TaskId::new("b")).is_some_and(|item| item.is_selected()));
    app.dispatch(Action::SelectTask(TaskId::new("b")));
    assert!(app.selected().is_empty());
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut app = sample_app();
    press(&mut app, ctrl('c'));
    assert!(app.should_quit());

    let mut app = sample_app();
    app.dispatch(Action::SetFocus(Focus::Form));
    press(&mut app, ctrl('c'));
    assert!(app.should_quit());

    let mut app = sample_app();
    press(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_raw_events_route_through_component() {
    let mut app = sample_app();
    assert_eq!(app.handle_events(Some(Event::Key(key(KeyCode::Char('v'))))), Action::ToggleSelectionMode);
    assert_eq!(app.handle_events(Some(Event::FocusGained)), Action::None);
    assert_eq!(app.handle_events(None), Action::None);
}

#[test]
fn test_icon_theme_cycles() {
    let mut app = sample_app();
    assert_eq!(app.context().icons.theme(), IconTheme::Ascii);
    press(&mut app, key(KeyCode::Char('i')));
    assert_eq!(app.context().icons.theme(), IconTheme::Unicode);
}

#[test]
fn test_full_render() {
    let mut app = sample_app();
    let buffer = draw(100, 30, |f| app.render(f, f.area()));
    let text = screen(&buffer);

    assert!(text.contains(PLACEHOLDER_NEW_TASK));
    assert!(text.contains("Tasks (3)"));
    assert!(text.contains("Charlie"));
    assert!(text.contains("TaskMaster"));
    assert!(text.contains("a: add"));
}

#[test]
fn test_mouse_moves_focus() {
    let mut app = sample_app();
    let buffer = draw(100, 30, |f| app.render(f, f.area()));
    let (col, row) = find(&buffer, PLACEHOLDER_NEW_TASK).expect("form rendered");

    app.handle_event(EventType::Mouse(click(col, row)));
    assert_eq!(app.focus(), Focus::Form);

    let buffer = draw(100, 30, |f| app.render(f, f.area()));
    let (col, row) = find(&buffer, "Bravo").expect("list rendered");
    app.handle_event(EventType::Mouse(click(col, row)));
    assert_eq!(app.focus(), Focus::List);
    assert!(app.tasks()[1].completed);
}

#[test]
fn test_dropdown_border_does_not_reach_the_list() {
    let mut app = sample_app();
    press(&mut app, key(KeyCode::Char('a')));
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, key(KeyCode::Char(' ')));
    assert!(app.form().is_dropdown_open());

    let buffer = draw(100, 30, |f| app.render(f, f.area()));
    let (col, row) = find(&buffer, "Select Category").expect("dropdown rendered");
    app.handle_event(EventType::Mouse(click(col, row)));

    assert_eq!(app.focus(), Focus::Form);
    assert!(app.form().is_dropdown_open());
    assert!(app.tasks().iter().all(|task| !task.completed));
}

#[tokio::test]
async fn test_delayed_creation() {
    let mut app = AppComponent::new(delayed_context());
    app.dispatch(Action::SetFocus(Focus::Form));
    type_text(&mut app, "Later");
    press(&mut app, key(KeyCode::Enter));

    assert!(app.form().is_submitting());
    assert!(app.tasks().is_empty());
    assert_eq!(app.pending_delays(), 1);

    // Input is ignored while the delay runs
    type_text(&mut app, "xyz");
    assert_eq!(app.form().text(), "Later");

    let delivered = timeout(Duration::from_secs(5), app.next_background_action())
        .await
        .expect("delay elapsed");
    assert!(delivered);
    assert_eq!(app.tasks().len(), 1);
    assert_eq!(app.tasks()[0].text, "Later");
    assert!(!app.form().is_expanded());
}

#[tokio::test]
async fn test_deleting_cancels_pending_save() {
    let mut app = AppComponent::with_tasks(delayed_context(), vec![task("a", "Alpha")]);
    press(&mut app, key(KeyCode::Char('e')));
    type_text(&mut app, "!");
    press(&mut app, key(KeyCode::Enter));

    assert!(app.task_list().item(&TaskId::new("a")).is_some_and(|item| item.is_saving()));
    assert_eq!(app.pending_delays(), 1);

    app.dispatch(Action::DeleteTask(TaskId::new("a")));
    assert_eq!(app.pending_delays(), 0);
    assert!(app.tasks().is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(app.process_background_actions(), 0);
}
