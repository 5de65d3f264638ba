use crate::support::{chars, click, draw, find, key, local, rows, screen, task, test_context};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use taskmaster::task::{Category, Priority, Task, TaskId};
use taskmaster::ui::components::{ItemMode, TaskListItemComponent};
use taskmaster::ui::core::{Action, Component, DelayRequest, DelayTarget};
use taskmaster::utils::color::{AMBER_600, ROSE_500, ROSE_600, SLATE_400, SLATE_500};

fn item(task: Task) -> TaskListItemComponent {
    TaskListItemComponent::new(task, &test_context())
}

fn id(value: &str) -> TaskId {
    TaskId::new(value)
}

fn save_request(action: Action) -> DelayRequest {
    match action {
        Action::ScheduleDelay(request) => request,
        other => panic!("expected a delay request, got {:?}", other),
    }
}

fn render(item: &mut TaskListItemComponent, width: u16) -> ratatui::buffer::Buffer {
    draw(width, 2, |f| item.render(f, f.area()))
}

#[test]
fn test_checkbox_and_text_toggle_completion() {
    let mut item = item(task("t1", "Buy milk"));
    assert_eq!(item.click_checkbox(), Action::ToggleCompletion(id("t1")));
    assert_eq!(item.click_text(), Action::ToggleCompletion(id("t1")));
    assert_eq!(item.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleCompletion(id("t1")));
}

#[test]
fn test_delete_emits_id() {
    let mut item = item(task("t1", "Buy milk"));
    assert_eq!(item.delete(), Action::DeleteTask(id("t1")));
    assert_eq!(item.handle_key_events(key(KeyCode::Char('d'))), Action::DeleteTask(id("t1")));
}

#[test]
fn test_selection_mode_only_selects() {
    let mut item = item(task("t1", "Buy milk"));
    item.set_selection_mode(true);

    assert_eq!(item.click_checkbox(), Action::SelectTask(id("t1")));
    assert_eq!(item.click_text(), Action::SelectTask(id("t1")));
    assert_eq!(item.click_body(), Action::SelectTask(id("t1")));
    assert_eq!(item.delete(), Action::None);
    assert!(!item.begin_edit());

    // Every mouse hit on the row selects
    let buffer = render(&mut item, 60);
    let (col, row) = find(&buffer, "Buy milk").expect("text rendered");
    assert_eq!(item.handle_mouse_events(click(col, row)), Action::SelectTask(id("t1")));
    assert_eq!(item.handle_mouse_events(click(50, 1)), Action::SelectTask(id("t1")));
}

#[test]
fn test_body_click_outside_selection_mode_does_nothing() {
    let mut item = item(task("t1", "Buy milk"));
    assert_eq!(item.click_body(), Action::None);
}

#[test]
fn test_entering_selection_mode_cancels_edit() {
    let mut item = item(task("t1", "Buy milk"));
    assert!(item.begin_edit());
    item.set_selection_mode(true);
    assert_eq!(item.mode(), &ItemMode::Viewing);
}

#[test]
fn test_edit_saves_trimmed_text_after_delay() {
    let mut item = item(task("t1", "Buy milk"));
    assert!(item.begin_edit());
    assert_eq!(item.edit_buffer(), Some("Buy milk"));

    for _ in 0.."Buy milk".len() {
        item.handle_key_events(key(KeyCode::Backspace));
    }
    for k in chars("  Buy oat milk  ") {
        item.handle_key_events(k);
    }

    let request = save_request(item.handle_key_events(key(KeyCode::Enter)));
    assert_eq!(request.target, DelayTarget::Item(id("t1")));
    assert!(item.is_saving());

    let action = item.update(Action::DelayElapsed {
        target: request.target.clone(),
        token: request.token,
    });
    assert_eq!(
        action,
        Action::EditTask {
            id: id("t1"),
            text: "Buy oat milk".to_string(),
        }
    );
    assert_eq!(item.mode(), &ItemMode::Viewing);
}

#[test]
fn test_blank_edit_reverts_silently() {
    let mut item = item(task("t1", "Buy milk"));
    item.begin_edit();
    item.handle_key_events(key(KeyCode::Home));
    for _ in 0..8 {
        item.handle_key_events(key(KeyCode::Delete));
    }
    for k in chars("   ") {
        item.handle_key_events(k);
    }

    assert_eq!(item.confirm_edit(), Action::None);
    assert_eq!(item.mode(), &ItemMode::Viewing);
    assert_eq!(item.task().text, "Buy milk");
}

#[test]
fn test_escape_cancels_edit() {
    let mut item = item(task("t1", "Buy milk"));
    item.handle_key_events(key(KeyCode::Char('e')));
    assert!(item.is_editing());
    item.handle_key_events(key(KeyCode::Char('!')));
    assert_eq!(item.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert_eq!(item.mode(), &ItemMode::Viewing);
}

#[test]
fn test_saving_ignores_input_and_stale_tokens() {
    let mut item = item(task("t1", "Buy milk"));
    item.begin_edit();
    let request = save_request(item.confirm_edit());

    assert_eq!(item.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    assert_eq!(item.click_checkbox(), Action::None);
    assert_eq!(item.delete(), Action::None);

    let stale = item.update(Action::DelayElapsed {
        target: DelayTarget::Item(id("t1")),
        token: DelayRequest::new(DelayTarget::Item(id("t1")), request.duration).token,
    });
    assert_eq!(stale, Action::None);
    assert!(item.is_saving());

    // Delays for other items pass through untouched
    let other = Action::DelayElapsed {
        target: DelayTarget::Item(id("t2")),
        token: request.token,
    };
    assert_eq!(item.update(other.clone()), other);
    assert!(item.is_saving());
}

#[test]
fn test_completed_task_cannot_be_edited_but_can_be_undone() {
    let mut item = item(task("t1", "Done thing").completed(true));
    assert!(!item.begin_edit());
    assert_eq!(item.undo(), Action::ToggleCompletion(id("t1")));
    assert_eq!(item.handle_key_events(key(KeyCode::Char('u'))), Action::ToggleCompletion(id("t1")));

    let mut open = self::item(task("t2", "Open thing"));
    assert_eq!(open.undo(), Action::None);
}

#[test]
fn test_completed_task_styling() {
    let done = task("t1", "Done thing").with_priority(Priority::High).completed(true);
    let mut item = item(done);

    assert_eq!(item.accent_color(), None);
    assert!(!item.shows_high_priority_badge());

    let buffer = render(&mut item, 60);
    let (col, row) = find(&buffer, "Done thing").expect("text rendered");
    let cell = &buffer[(col, row)];
    assert_eq!(cell.fg, SLATE_500);
    assert!(cell.modifier.contains(ratatui::style::Modifier::CROSSED_OUT));
    assert!(!screen(&buffer).contains("High Priority"));
    // Accent column is left blank
    assert_eq!(buffer[(0, 0)].symbol(), " ");
}

#[test]
fn test_high_priority_badge_and_accent() {
    let mut item = item(task("t1", "Urgent").with_priority(Priority::High));
    assert_eq!(item.accent_color(), Some(ROSE_500));
    assert!(item.shows_high_priority_badge());

    let buffer = render(&mut item, 60);
    assert!(screen(&buffer).contains("! High Priority"));
    assert_eq!(buffer[(0, 0)].symbol(), "|");
    assert_eq!(buffer[(0, 0)].fg, ROSE_500);
}

#[test]
fn test_due_classification() {
    let earlier_today = local(2030, 6, 15, 8, 0).timestamp_millis();
    let later_today = local(2030, 6, 15, 17, 0).timestamp_millis();
    let next_week = local(2030, 6, 22, 9, 0).timestamp_millis();

    let overdue = item(task("a", "a").with_due_date(earlier_today));
    assert!(overdue.is_overdue());
    assert_eq!(overdue.due_color(), ROSE_600);

    let today = item(task("b", "b").with_due_date(later_today));
    assert!(!today.is_overdue());
    assert!(today.is_due_today());
    assert_eq!(today.due_color(), AMBER_600);

    let later = item(task("c", "c").with_due_date(next_week));
    assert!(!later.is_overdue());
    assert!(!later.is_due_today());
    assert_eq!(later.due_color(), SLATE_400);

    let done = item(task("d", "d").with_due_date(earlier_today).completed(true));
    assert!(!done.is_overdue());
    assert!(!done.is_due_today());
    assert_eq!(done.due_color(), SLATE_500);
}

#[test]
fn test_meta_row_shows_category_and_full_due_date() {
    let due = local(2030, 6, 15, 17, 0).timestamp_millis();
    let mut item = item(task("t1", "Gym").with_category(Category::Health).with_due_date(due));

    let buffer = render(&mut item, 60);
    let meta = &rows(&buffer)[1];
    assert!(meta.contains("+ Health"), "meta row: {:?}", meta);
    assert!(meta.contains("Sat, Jun 15, 5:00 PM"), "meta row: {:?}", meta);
}

#[test]
fn test_actions_appear_on_hover_and_respond_to_clicks() {
    let mut item = item(task("t1", "Buy milk"));

    let buffer = render(&mut item, 40);
    assert!(!rows(&buffer)[0].trim_end().ends_with('d'));

    item.set_hovered(true);
    let buffer = render(&mut item, 40);
    let top = &rows(&buffer)[0];
    assert!(top.ends_with(" e  d "), "top row: {:?}", top);

    // Delete sits in the last three columns, edit just before it
    assert_eq!(item.handle_mouse_events(click(38, 0)), Action::DeleteTask(id("t1")));
    assert_eq!(item.handle_mouse_events(click(35, 0)), Action::None);
    assert!(item.is_editing());
}

#[test]
fn test_clicking_text_toggles() {
    let mut item = item(task("t1", "Buy milk"));
    let buffer = draw(40, 2, |f| item.render(f, Rect::new(0, 0, 40, 2)));
    let (col, row) = find(&buffer, "milk").expect("text rendered");
    assert_eq!(item.handle_mouse_events(click(col, row)), Action::ToggleCompletion(id("t1")));
}

#[test]
fn test_set_task_keeps_edit_state() {
    let mut item = item(task("t1", "Buy milk"));
    item.begin_edit();
    item.set_task(task("t1", "Buy milk").with_priority(Priority::Low));
    assert_eq!(item.edit_buffer(), Some("Buy milk"));
    assert_eq!(item.task().priority(), Priority::Low);
}

#[test]
fn test_wide_text_leaves_room_for_actions() {
    let mut item = item(task("t1", &"日本語".repeat(20)));
    item.set_hovered(true);

    let buffer = render(&mut item, 40);
    let top = &rows(&buffer)[0];
    assert!(top.ends_with(" e  d "), "top row: {:?}", top);
    assert!(top.contains('…'), "top row: {:?}", top);
    assert_eq!(item.handle_mouse_events(click(38, 0)), Action::DeleteTask(id("t1")));
}

#[test]
fn test_editing_wide_text_keeps_cursor_on_row() {
    let mut item = item(task("t1", &"日本語".repeat(20)));
    item.begin_edit();

    let mut terminal = ratatui::Terminal::new(ratatui::backend::TestBackend::new(40, 2)).unwrap();
    terminal.draw(|f| item.render(f, f.area())).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    assert!(cursor.x < 40, "cursor at {:?}", cursor);

    let top = &rows(terminal.backend().buffer())[0];
    assert!(top.ends_with(" ok  x "), "top row: {:?}", top);
}
