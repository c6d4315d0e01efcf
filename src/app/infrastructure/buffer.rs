use std::ffi::{c_char, c_int, c_void};

use fltk::text::TextBuffer;
use tracing::warn;

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// `TextBuffer::text()` copies FLTK's `malloc()`'d string into a `String` but
/// never frees the original. Every gutter recount reads the whole buffer, so
/// this goes through the FFI directly and frees the copy.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut c_char;
        fn free(ptr: *mut c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer owned by `buf`.
    // Fl_Text_Buffer_text returns a malloc'd, null-terminated copy (or null),
    // which is read once and released with the matching free().
    unsafe {
        let inner = buf.as_ptr() as *mut c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut c_void);
        result
    }
}

/// Called with the inserted and deleted character counts of each change.
type ModifyCb = dyn FnMut(i32, i32);

type ModifyShim = unsafe extern "C" fn(c_int, c_int, c_int, c_int, *const c_char, *mut c_void);

unsafe extern "C" {
    fn Fl_Text_Buffer_add_modify_callback(
        buf: *mut c_void,
        cb: Option<ModifyShim>,
        cb_arg: *mut c_void,
    );
    fn Fl_Text_Buffer_remove_modify_callback(
        buf: *mut c_void,
        cb: Option<ModifyShim>,
        cb_arg: *mut c_void,
    );
}

/// The one C callback every hook registers, so removal can match it by
/// pointer.
///
/// # Safety
///
/// `cb_arg` must be the `Box<ModifyCb>` allocated by `ModifyHook::register`
/// and not yet freed by its `Drop`.
unsafe extern "C" fn modify_shim(
    _pos: c_int,
    inserted: c_int,
    deleted: c_int,
    _restyled: c_int,
    _deleted_text: *const c_char,
    cb_arg: *mut c_void,
) {
    if cb_arg.is_null() {
        warn!("modify callback fired without its closure");
        return;
    }
    // SAFETY: non-null `cb_arg` is the live box described above.
    unsafe {
        let cb = &mut *(cb_arg as *mut Box<ModifyCb>);
        cb(inserted, deleted);
    }
}

/// A buffer modify callback that is unregistered and freed on drop.
///
/// `TextBuffer::add_modify_callback` wraps each closure in a fresh shim, so
/// it can never be removed and outlives its window.
pub struct ModifyHook {
    buffer: TextBuffer,
    data: *mut c_void,
}

impl ModifyHook {
    pub fn register<F>(buffer: &TextBuffer, cb: F) -> Self
    where
        F: FnMut(i32, i32) + 'static,
    {
        let cb: Box<ModifyCb> = Box::new(cb);
        let data = Box::into_raw(Box::new(cb)) as *mut c_void;
        // SAFETY: `data` stays allocated until `drop` removes the callback,
        // and the buffer is kept alive by the clone held in the hook.
        unsafe {
            Fl_Text_Buffer_add_modify_callback(
                buffer.as_ptr() as *mut c_void,
                Some(modify_shim),
                data,
            );
        }
        Self {
            buffer: buffer.clone(),
            data,
        }
    }
}

impl Drop for ModifyHook {
    fn drop(&mut self) {
        // SAFETY: FLTK stops calling the shim once the callback is removed,
        // so the box can be freed right after. `data` is only freed here.
        unsafe {
            Fl_Text_Buffer_remove_modify_callback(
                self.buffer.as_ptr() as *mut c_void,
                Some(modify_shim),
                self.data,
            );
            drop(Box::from_raw(self.data as *mut Box<ModifyCb>));
        }
    }
}
