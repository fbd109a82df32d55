use std::{ops::ControlFlow, sync::Arc};

use parking_lot::{Mutex, RwLock};

/// A trait which holds a [`callback`](`Observer::callback`) function that can be used to check an
/// [`Algorithm`](crate::traits::Algorithm)'s [`Status`](crate::traits::Status) during a run.
///
/// Observers are usually shared with the caller through an [`Arc<RwLock<_>>`] so that their
/// contents can be read once the run is over.
pub trait Observer<S> {
    /// A function that is called after every step of an algorithm. Returning
    /// [`ControlFlow::Break`] terminates the run.
    fn callback(&mut self, step: usize, status: &S) -> ControlFlow<()>;
}

impl<S, O: Observer<S>> Observer<S> for Arc<RwLock<O>> {
    fn callback(&mut self, step: usize, status: &S) -> ControlFlow<()> {
        self.write().callback(step, status)
    }
}

impl<S, O: Observer<S>> Observer<S> for Arc<Mutex<O>> {
    fn callback(&mut self, step: usize, status: &S) -> ControlFlow<()> {
        self.lock().callback(step, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StopAfter(usize, usize);
    impl Observer<String> for StopAfter {
        fn callback(&mut self, _step: usize, _status: &String) -> ControlFlow<()> {
            self.1 += 1;
            if self.1 >= self.0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
    }

    #[test]
    fn test_shared_observer_wrappers() {
        let status = String::from("running");
        let rwlock = Arc::new(RwLock::new(StopAfter(2, 0)));
        let mutex = Arc::new(Mutex::new(StopAfter(3, 0)));
        let mut observers: Vec<Box<dyn Observer<String>>> =
            vec![Box::new(rwlock.clone()), Box::new(mutex.clone())];
        let results: Vec<bool> = observers
            .iter_mut()
            .map(|o| o.callback(0, &status).is_break())
            .collect();
        assert_eq!(results, vec![false, false]);
        assert!(observers[0].callback(1, &status).is_break());
        assert!(observers[1].callback(1, &status).is_continue());
        assert_eq!(rwlock.read().1, 2);
        assert_eq!(mutex.lock().1, 2);
    }
}
