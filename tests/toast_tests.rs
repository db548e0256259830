// Host-side tests for the notification slot.
// Timer handles are plain integers standing in for setTimeout ids.

use cursor_panel::core::Toast;

#[test]
fn expire_hides_current_message() {
    let mut toast: Toast<i32> = Toast::new();
    let (g, superseded) = toast.show("hello");
    assert_eq!(superseded, None);
    assert_eq!(toast.arm(g, 1), None);
    assert_eq!(toast.visible_text(), Some("hello"));

    assert!(toast.expire(g));
    assert_eq!(toast.visible_text(), None);
}

#[test]
fn second_message_hands_back_first_timer_and_survives_it() {
    let mut toast: Toast<i32> = Toast::new();
    let (first, _) = toast.show("first");
    assert_eq!(toast.arm(first, 10), None);

    // second call within the first message's 3 s window
    let (second, superseded) = toast.show("second");
    assert_eq!(superseded, Some(10));
    assert_eq!(toast.arm(second, 11), None);

    // had the first timer not been cancelled, it fires here
    assert!(!toast.expire(first));
    assert_eq!(toast.visible_text(), Some("second"));

    // the second message's own timer still hides it
    assert!(toast.expire(second));
    assert_eq!(toast.visible_text(), None);
}

#[test]
fn third_show_only_returns_latest_pending_timer() {
    let mut toast: Toast<i32> = Toast::new();
    let (a, _) = toast.show("a");
    toast.arm(a, 1);
    let (b, stale) = toast.show("b");
    assert_eq!(stale, Some(1));
    toast.arm(b, 2);
    let (_, stale) = toast.show("c");
    assert_eq!(stale, Some(2));
}

#[test]
fn arming_a_superseded_generation_returns_the_timer() {
    let mut toast: Toast<i32> = Toast::new();
    let (old, _) = toast.show("old");
    let (new, _) = toast.show("new");
    assert_eq!(toast.arm(old, 5), Some(5));
    assert_eq!(toast.arm(new, 6), None);
    assert_eq!(toast.visible_text(), Some("new"));
}

#[test]
fn expire_is_idempotent_and_clears_pending_timer() {
    let mut toast: Toast<i32> = Toast::new();
    let (g, _) = toast.show("once");
    toast.arm(g, 3);
    assert!(toast.expire(g));
    assert!(!toast.expire(g));

    // nothing left to cancel after the timer fired
    let (_, superseded) = toast.show("again");
    assert_eq!(superseded, None);
}
