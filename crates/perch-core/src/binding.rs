use std::cell::RefCell;
use std::rc::Rc;

/// Cloneable handle to a caller-owned value. A control never owns the field
/// it steers: the caller keeps a clone, the panel writes through its own.
///
/// Single-threaded by contract; callers must not mutate the same value
/// from another thread without external synchronization.
pub struct Binding<T: 'static>(Rc<RefCell<T>>);

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut());
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
}

pub fn binding<T>(value: T) -> Binding<T> {
    Binding::new(value)
}
