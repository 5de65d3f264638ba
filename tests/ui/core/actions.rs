use std::time::Duration;
use taskmaster::notify::Severity;
use taskmaster::task::TaskId;
use taskmaster::ui::core::{Action, DelayRequest, DelayTarget, Focus};

#[test]
fn test_notify_helpers() {
    assert_eq!(
        Action::warning("careful"),
        Action::Notify {
            message: "careful".to_string(),
            severity: Severity::Warning,
        }
    );
    assert!(matches!(
        Action::success("yay"),
        Action::Notify {
            severity: Severity::Success,
            ..
        }
    ));
    assert!(matches!(Action::info("fyi"), Action::Notify { severity: Severity::Info, .. }));
}

#[test]
fn test_is_none() {
    assert!(Action::None.is_none());
    assert!(!Action::Quit.is_none());
}

#[test]
fn test_default_focus_is_list() {
    assert_eq!(Focus::default(), Focus::List);
}

#[test]
fn test_delay_tokens_are_unique() {
    let first = DelayRequest::new(DelayTarget::EntryForm, Duration::from_millis(500));
    let second = DelayRequest::new(DelayTarget::EntryForm, Duration::from_millis(500));
    assert_ne!(first.token, second.token);
    assert!(second.token.value() > first.token.value());
}

#[test]
fn test_immediate_delay() {
    let target = DelayTarget::Item(TaskId::new("t1"));
    assert!(DelayRequest::new(target.clone(), Duration::ZERO).is_immediate());
    assert!(!DelayRequest::new(target, Duration::from_millis(1)).is_immediate());
}
