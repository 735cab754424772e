// Host-side tests for the one-shot signal used for renderer-ready and loading-settled.

use gallery_core::OneShot;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn listeners_run_once_with_the_value() {
    let signal: OneShot<u32> = OneShot::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in ["a", "b"] {
        let seen = seen.clone();
        signal.subscribe(move |v| seen.borrow_mut().push((tag, *v)));
    }
    assert!(!signal.has_fired());
    assert!(signal.fire(7));
    assert!(!signal.fire(8));
    assert!(signal.has_fired());
    assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
}

#[test]
fn late_subscriber_runs_immediately() {
    let signal: OneShot<&'static str> = OneShot::new();
    signal.fire("ready");
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    signal.subscribe(move |v| *sink.borrow_mut() = Some(*v));
    assert_eq!(*seen.borrow(), Some("ready"));
}

#[test]
fn listener_may_use_the_signal_it_listens_to() {
    let signal: OneShot<()> = OneShot::new();
    let clone = signal.clone();
    let nested = Rc::new(RefCell::new(false));
    let nested_sink = nested.clone();
    signal.subscribe(move |_| {
        assert!(clone.has_fired());
        let sink = nested_sink.clone();
        clone.subscribe(move |_| *sink.borrow_mut() = true);
    });
    signal.fire(());
    assert!(*nested.borrow());
}
