use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A single repeating glib timeout. Starting it again removes the one in flight.
#[derive(Default)]
pub struct SettleTimer {
    source: Rc<RefCell<Option<glib::SourceId>>>,
}

impl SettleTimer {
    /// Calls `step` every `interval` until it returns true.
    pub fn start(&self, interval: Duration, mut step: impl FnMut() -> bool + 'static) {
        self.stop();

        let slot = self.source.clone();
        let id = glib::timeout_add_local(interval, move || {
            if step() {
                // glib drops the source on Break
                slot.borrow_mut().take();
                glib::ControlFlow::Break
            } else {
                glib::ControlFlow::Continue
            }
        });
        *self.source.borrow_mut() = Some(id);
    }

    pub fn stop(&self) {
        if let Some(id) = self.source.borrow_mut().take() {
            id.remove();
        }
    }

    pub fn is_running(&self) -> bool {
        self.source.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restart_removes_running_timer() {
        let context = glib::MainContext::default();
        let _owner = context.acquire().unwrap();

        let timer = SettleTimer::default();
        let stale = Rc::new(Cell::new(0));
        let fresh = Rc::new(Cell::new(0));

        let s = stale.clone();
        timer.start(Duration::from_millis(1), move || {
            s.set(s.get() + 1);
            false
        });
        let f = fresh.clone();
        timer.start(Duration::from_millis(1), move || {
            f.set(f.get() + 1);
            f.get() == 3
        });

        while timer.is_running() {
            context.iteration(true);
        }
        assert_eq!(stale.get(), 0);
        assert_eq!(fresh.get(), 3);

        timer.start(Duration::from_secs(60), || false);
        assert!(timer.is_running());
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
    }
}
