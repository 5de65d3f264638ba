use crate::support::{click, draw, find, hover, key, screen, task, test_context};
use crossterm::event::KeyCode;
use std::collections::HashSet;
use taskmaster::constants::EMPTY_LIST;
use taskmaster::task::{Task, TaskId};
use taskmaster::ui::components::TaskListComponent;
use taskmaster::ui::core::{Action, Component, DelayRequest, DelayTarget, Focus};

fn tasks() -> Vec<Task> {
    vec![task("a", "Alpha"), task("b", "Bravo"), task("c", "Charlie")]
}

fn list_with(tasks: &[Task]) -> TaskListComponent {
    let mut list = TaskListComponent::new(&test_context());
    list.set_tasks(tasks, &HashSet::new());
    list.on_focus();
    list
}

#[test]
fn test_navigation_is_clamped() {
    let mut list = list_with(&tasks());
    assert_eq!(list.cursor(), 0);

    list.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(list.cursor(), 0);

    list.handle_key_events(key(KeyCode::Down));
    list.handle_key_events(key(KeyCode::Char('j')));
    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.cursor(), 2);
    assert_eq!(list.get_selected_task().map(|t| t.text.as_str()), Some("Charlie"));

    list.handle_key_events(key(KeyCode::Char('g')));
    assert_eq!(list.cursor(), 0);
    list.handle_key_events(key(KeyCode::Char('G')));
    assert_eq!(list.cursor(), 2);
}

#[test]
fn test_keys_forward_to_cursor_item() {
    let mut list = list_with(&tasks());
    list.handle_key_events(key(KeyCode::Down));

    assert_eq!(
        list.handle_key_events(key(KeyCode::Char(' '))),
        Action::ToggleCompletion(TaskId::new("b"))
    );
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::DeleteTask(TaskId::new("b")));
}

#[test]
fn test_list_level_keys() {
    let mut list = list_with(&tasks());
    assert_eq!(list.handle_key_events(key(KeyCode::Char('a'))), Action::SetFocus(Focus::Form));
    assert_eq!(list.handle_key_events(key(KeyCode::Char('v'))), Action::ToggleSelectionMode);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('i'))), Action::CycleIconTheme);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('q'))), Action::Quit);
    // Bulk keys only mean something while selecting
    assert_eq!(list.handle_key_events(key(KeyCode::Char('x'))), Action::None);
}

#[test]
fn test_selection_mode_keys() {
    let mut list = list_with(&tasks());
    list.set_selection_mode(true);

    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::SelectTask(TaskId::new("a")));
    assert_eq!(list.handle_key_events(key(KeyCode::Char('c'))), Action::CompleteSelected);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('x'))), Action::DeleteSelected);
    assert_eq!(list.handle_key_events(key(KeyCode::Esc)), Action::ToggleSelectionMode);
    assert!(list.items().iter().all(|item| item.selection_mode()));
}

#[test]
fn test_editing_item_owns_keyboard() {
    let mut list = list_with(&tasks());
    list.handle_key_events(key(KeyCode::Char('e')));
    assert!(list.is_editing());

    // 'q' goes into the buffer instead of quitting
    assert_eq!(list.handle_key_events(key(KeyCode::Char('q'))), Action::None);
    assert_eq!(list.item(&TaskId::new("a")).and_then(|i| i.edit_buffer()), Some("Alphaq"));
}

#[test]
fn test_reconciliation_keeps_edit_state() {
    let mut list = list_with(&tasks());
    list.handle_key_events(key(KeyCode::Down));
    list.handle_key_events(key(KeyCode::Char('e')));

    let mut updated = tasks();
    updated.remove(0);
    updated[1].completed = true;
    let selected: HashSet<TaskId> = [TaskId::new("c")].into_iter().collect();
    list.set_tasks(&updated, &selected);

    assert_eq!(list.items().len(), 2);
    assert_eq!(list.item(&TaskId::new("b")).and_then(|i| i.edit_buffer()), Some("Bravo"));
    assert!(list.item(&TaskId::new("c")).is_some_and(|i| i.is_selected() && i.task().completed));
    assert_eq!(list.cursor(), 0);
    assert!(list.is_editing());
}

#[test]
fn test_delay_for_missing_item_is_dropped() {
    let mut list = list_with(&tasks());
    let ghost = DelayTarget::Item(TaskId::new("ghost"));
    let action = list.update(Action::DelayElapsed {
        target: ghost.clone(),
        token: DelayRequest::new(ghost, std::time::Duration::ZERO).token,
    });
    assert_eq!(action, Action::None);
}

#[test]
fn test_empty_state_render() {
    let mut list = list_with(&[]);
    let buffer = draw(60, 6, |f| list.render(f, f.area()));
    let text = screen(&buffer);
    assert!(text.contains("Tasks (0)"));
    assert!(text.contains(EMPTY_LIST));
}

#[test]
fn test_render_title_and_mouse() {
    let mut list = list_with(&tasks());
    list.set_selection_mode(true);
    let mut selected = HashSet::new();
    selected.insert(TaskId::new("b"));
    list.set_tasks(&tasks(), &selected);

    let buffer = draw(60, 10, |f| list.render(f, f.area()));
    assert!(screen(&buffer).contains("Tasks (3) [selecting: 1]"));

    let (col, row) = find(&buffer, "Charlie").expect("item rendered");
    list.handle_mouse_events(hover(col, row));
    assert_eq!(list.handle_mouse_events(click(col, row)), Action::SelectTask(TaskId::new("c")));
    assert_eq!(list.cursor(), 2);
}

#[test]
fn test_scrolls_to_keep_cursor_visible() {
    let many: Vec<Task> = (0..10).map(|i| task(&format!("t{}", i), &format!("Task number {}", i))).collect();
    let mut list = list_with(&many);
    list.handle_key_events(key(KeyCode::End));

    // 8 inner rows hold 4 items
    let buffer = draw(60, 10, |f| list.render(f, f.area()));
    let text = screen(&buffer);
    assert!(text.contains("Task number 9"));
    assert!(!text.contains("Task number 0"));
}
