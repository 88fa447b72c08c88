use std::cell::RefCell;
use std::ffi::CString;

use crate::types::IdxStatus;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Store an error message for later retrieval via `idx_last_error`.
///
/// Messages containing an interior NUL are dropped.
pub fn set_last_error(msg: impl Into<String>) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg.into()).ok();
    });
}

/// Record `msg` and return `status`, for early returns at the boundary.
pub fn fail(status: IdxStatus, msg: impl Into<String>) -> IdxStatus {
    set_last_error(msg);
    status
}

/// Take the last error message, leaving `None` in its place.
pub fn take_last_error() -> Option<CString> {
    LAST_ERROR.with(|e| e.borrow_mut().take())
}
