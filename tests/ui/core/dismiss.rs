use crate::support::{click, hover};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use taskmaster::ui::core::OutsideDismiss;

fn armed(regions: &[Rect]) -> OutsideDismiss {
    let mut dismiss = OutsideDismiss::new();
    dismiss.arm();
    dismiss.set_regions(regions.iter().copied());
    dismiss
}

#[test]
fn test_only_presses_dismiss() {
    let dismiss = armed(&[Rect::new(10, 10, 5, 5)]);
    assert!(dismiss.should_dismiss(&click(0, 0)));
    assert!(!dismiss.should_dismiss(&hover(0, 0)));

    let release = MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert!(!dismiss.should_dismiss(&release));

    let right = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..release
    };
    assert!(dismiss.should_dismiss(&right));
}

#[test]
fn test_rearming_forgets_old_regions() {
    let mut dismiss = armed(&[Rect::new(0, 0, 5, 1)]);
    assert!(dismiss.contains(2, 0));

    dismiss.arm();
    assert!(!dismiss.contains(2, 0));
    assert!(dismiss.is_armed());

    dismiss.disarm();
    assert!(!dismiss.is_armed());
    assert!(!dismiss.should_dismiss(&click(40, 40)));
}

#[test]
fn test_empty_regions_are_ignored() {
    let dismiss = armed(&[Rect::new(3, 3, 0, 4)]);
    assert!(!dismiss.contains(3, 3));
}
