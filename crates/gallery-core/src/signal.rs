//! One-shot notification for single-threaded, callback-driven code.

use std::cell::RefCell;
use std::rc::Rc;

type Listener<T> = Box<dyn FnOnce(&T)>;

enum State<T> {
    Pending(Vec<Listener<T>>),
    Fired(Rc<T>),
}

/// Fires at most once. Listeners registered after it fired run immediately.
///
/// Clones share the same underlying signal. No borrow is held while a
/// listener runs, so listeners may subscribe to or query the signal.
pub struct OneShot<T> {
    state: Rc<RefCell<State<T>>>,
}

impl<T> Clone for OneShot<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OneShot<T> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State::Pending(Vec::new()))),
        }
    }

    pub fn subscribe(&self, listener: impl FnOnce(&T) + 'static) {
        let fired = match &mut *self.state.borrow_mut() {
            State::Pending(listeners) => {
                listeners.push(Box::new(listener));
                return;
            }
            State::Fired(value) => value.clone(),
        };
        listener(&fired);
    }

    /// Deliver `value` to all listeners. Returns `false` if it had already fired.
    pub fn fire(&self, value: T) -> bool {
        let value = Rc::new(value);
        let listeners = {
            let mut state = self.state.borrow_mut();
            if let State::Fired(_) = &*state {
                return false;
            }
            match std::mem::replace(&mut *state, State::Fired(value.clone())) {
                State::Pending(listeners) => listeners,
                State::Fired(_) => Vec::new(),
            }
        };
        for listener in listeners {
            listener(&value);
        }
        true
    }

    pub fn has_fired(&self) -> bool {
        matches!(&*self.state.borrow(), State::Fired(_))
    }
}
