//! Boundary guards shared by every `extern "C"` function.

/// Run `$body` (which evaluates to an `i32` status and may `return` one
/// early), converting any panic into `HarmoniaStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(code) => code,
            Err(_) => {
                ::log::error!("panic caught at the C boundary");
                $crate::status::HarmoniaStatus::Panicked as i32
            }
        }
    };
}

/// Lock a mutex inside an `ffi_guard!` body, returning
/// `HarmoniaStatus::InternalError` if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::HarmoniaStatus::InternalError as i32,
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::status::HarmoniaStatus;
    use std::sync::Mutex;

    fn guarded(fail: bool) -> i32 {
        ffi_guard!({
            if fail {
                panic!("boom");
            }
            HarmoniaStatus::Ok as i32
        })
    }

    #[test]
    fn guard_passes_status_through() {
        assert_eq!(guarded(false), HarmoniaStatus::Ok as i32);
    }

    #[test]
    fn guard_converts_panic() {
        assert_eq!(guarded(true), HarmoniaStatus::Panicked as i32);
    }

    #[test]
    fn poisoned_lock_is_internal_error() {
        let m = Mutex::new(0u32);
        let _ = std::panic::catch_unwind(|| {
            let _g = m.lock().unwrap();
            panic!("poison");
        });
        let code = ffi_guard!({
            let _g = ffi_lock!(m);
            HarmoniaStatus::Ok as i32
        });
        assert_eq!(code, HarmoniaStatus::InternalError as i32);
    }
}
