use std::cell::RefCell;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub(super) fn clear() {
    LAST_ERROR.with_borrow_mut(|slot| *slot = None);
}

pub(super) fn record(message: impl Into<String>) {
    let message = message.into();
    LAST_ERROR.with_borrow_mut(|slot| *slot = Some(message));
}

/// Returns the diagnostic left by the most recent failed call on this thread.
///
/// Every call to [`new_or_null`](super::new_or_null) clears the slot first,
/// so a successful call leaves `None` behind.
pub fn last_error() -> Option<String> {
    LAST_ERROR.with_borrow(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_then_clear() {
        record("boom");
        assert_eq!(last_error().as_deref(), Some("boom"));
        clear();
        assert_eq!(last_error(), None);
    }

    #[test]
    fn slots_are_per_thread() {
        record("main thread failure");
        let other = std::thread::spawn(last_error).join().unwrap();
        assert_eq!(other, None);
        assert_eq!(last_error().as_deref(), Some("main thread failure"));
    }
}
