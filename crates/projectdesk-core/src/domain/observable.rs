//! Observable cells and the read/write accessors the validator works through.
//!
//! A caller may hand the validator either a plain record or an
//! [`Observable`] wrapping one. [`FormSource`] and [`FormSink`] are the only
//! two operations the validator needs; both representations implement them,
//! so the choice is made once, by the type of the argument.

use std::fmt;

use crate::domain::entities::form::{FormErrors, FormProject};

/// Read access to the current value of a record.
pub trait FormSource<T> {
    fn current(&self) -> &T;
}

/// Write access to a record. Every call to `write` is one observable change.
pub trait FormSink<T>: FormSource<T> {
    fn write<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut T);
}

// ── Plain records ────────────────────────────────────────────────────────────

impl FormSource<FormProject> for FormProject {
    fn current(&self) -> &FormProject {
        self
    }
}

impl FormSink<FormProject> for FormProject {
    fn write<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut FormProject),
    {
        apply(self)
    }
}

impl FormSource<FormErrors> for FormErrors {
    fn current(&self) -> &FormErrors {
        self
    }
}

impl FormSink<FormErrors> for FormErrors {
    fn write<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut FormErrors),
    {
        apply(self)
    }
}

// ── Observable cell ──────────────────────────────────────────────────────────

type Observer<T> = Box<dyn FnMut(&T)>;

/// A container holding a current value that notifies its observers,
/// synchronously and in subscription order, after every write.
pub struct Observable<T> {
    value: T,
    observers: Vec<Observer<T>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the whole value.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place.
    pub fn update<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut T),
    {
        apply(&mut self.value);
        self.notify();
    }

    /// Register an observer. It is not called for the current value.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.value);
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T> FormSource<T> for Observable<T> {
    fn current(&self) -> &T {
        self.get()
    }
}

impl<T> FormSink<T> for Observable<T> {
    fn write<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut T),
    {
        self.update(apply)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn observers_see_every_write_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cell = Observable::new(0);

        let log = Rc::clone(&seen);
        cell.subscribe(move |v| log.borrow_mut().push(*v));

        cell.set(1);
        cell.update(|v| *v += 10);
        cell.write(|v| *v *= 2);

        assert_eq!(*seen.borrow(), [1, 11, 22]);
        assert_eq!(*cell.current(), 22);
    }

    #[test]
    fn subscribe_does_not_replay_current_value() {
        let calls = Rc::new(RefCell::new(0));
        let mut cell = Observable::new("x");

        let counter = Rc::clone(&calls);
        cell.subscribe(move |_| *counter.borrow_mut() += 1);

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(cell.observer_count(), 1);
    }

    #[test]
    fn plain_records_write_in_place() {
        let mut errors = FormErrors::default();
        errors.write(|e| e.client = "missing".into());
        assert_eq!(errors.current().client, "missing");
    }
}
