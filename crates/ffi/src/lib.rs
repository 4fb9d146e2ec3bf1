// ABOUTME: C FFI bindings for the docstats metrics engine.
// ABOUTME: Exposes arena-allocated metrics records to Swift/Kotlin/C consumers.

use std::panic;
use std::ptr;
use std::slice;

use bumpalo::Bump;
use docstats_metrics::{compute_metrics, MetricsRecord};
use docstats_store::decode_text;

/// FFI version constant for ABI compatibility checking.
pub const DOCSTATS_FFI_VERSION: u32 = 1;

/// Returns the FFI ABI version number.
/// Consumers should check this matches their expected version.
#[no_mangle]
pub extern "C" fn docstats_ffi_version() -> u32 {
    DOCSTATS_FFI_VERSION
}

// ----------------------------------------------------------------------------
// Error handling
// ----------------------------------------------------------------------------

/// Error codes matching the C ABI DErrorCode enum.
#[repr(u32)]
pub enum DErrorCode {
    Ok = 0,
    Invalid = 1,
    Internal = 255,
}

/// UTF-8 string slice for FFI. Not null-terminated.
/// Consumer must not mutate or free; memory is owned by the arena or static.
#[derive(Copy, Clone)]
#[repr(C)]
pub struct DString {
    pub data: *const u8,
    pub len: usize,
}

impl DString {
    /// Creates an empty DString with null pointer and zero length.
    pub const fn empty() -> Self {
        DString {
            data: ptr::null(),
            len: 0,
        }
    }

    /// Points at a string that lives for the whole program.
    const fn from_static(s: &'static str) -> Self {
        DString {
            data: s.as_ptr(),
            len: s.len(),
        }
    }
}

impl Default for DString {
    fn default() -> Self {
        Self::empty()
    }
}

/// FFI error struct matching C ABI DError.
#[repr(C)]
pub struct DError {
    pub code: u32,
    pub message: DString,
}

impl DError {
    /// Creates a success (D_OK) error with empty message.
    pub const fn ok() -> Self {
        DError {
            code: DErrorCode::Ok as u32,
            message: DString::empty(),
        }
    }
}

// ----------------------------------------------------------------------------
// DMetricsView - matches C ABI struct
// ----------------------------------------------------------------------------

#[derive(Copy, Clone)]
#[repr(C)]
pub struct DWordCount {
    pub word: DString,
    pub count: u64,
}

#[repr(C)]
pub struct DMetricsView {
    pub total_word_count: u64,
    pub unique_word_count: u64,
    pub average_sentence_length: f64,
    pub flesch_kincaid_grade_level: f64,
    pub top_words: *const DWordCount,
    pub top_words_len: usize,
}

/// Arena holding a metrics record.
/// All allocations for the view live in the bump allocator.
pub struct DMetricsArena {
    #[allow(dead_code)]
    bump: Bump,
    view: *const DMetricsView,
}

// ----------------------------------------------------------------------------
// Helper functions
// ----------------------------------------------------------------------------

/// Copies a string into the arena and returns a DString pointing to it.
fn copy_str_to_arena(bump: &Bump, s: &str) -> DString {
    if s.is_empty() {
        return DString::empty();
    }
    let bytes = bump.alloc_slice_copy(s.as_bytes());
    DString {
        data: bytes.as_ptr(),
        len: bytes.len(),
    }
}

/// Creates a DMetricsView in the arena from a MetricsRecord.
fn make_metrics_view(bump: &Bump, record: &MetricsRecord) -> *const DMetricsView {
    let words = bump.alloc_slice_fill_iter(record.top_10_words.iter().map(|wc| DWordCount {
        word: copy_str_to_arena(bump, &wc.word),
        count: wc.count,
    }));
    let view = bump.alloc(DMetricsView {
        total_word_count: record.total_word_count,
        unique_word_count: record.unique_word_count,
        average_sentence_length: record.average_sentence_length,
        flesch_kincaid_grade_level: record.flesch_kincaid_grade_level,
        top_words: if words.is_empty() {
            ptr::null()
        } else {
            words.as_ptr()
        },
        top_words_len: words.len(),
    });
    view as *const DMetricsView
}

/// Sets out_err to the given code and static message.
/// If out_err is null, this is a no-op.
unsafe fn set_error(out_err: *mut DError, code: DErrorCode, message: &'static str) {
    if !out_err.is_null() {
        (*out_err).code = code as u32;
        (*out_err).message = DString::from_static(message);
    }
}

/// Sets out_err to success (D_OK with empty message).
/// If out_err is null, this is a no-op.
unsafe fn set_success(out_err: *mut DError) {
    if !out_err.is_null() {
        *out_err = DError::ok();
    }
}

// ----------------------------------------------------------------------------
// Metrics FFI functions
// ----------------------------------------------------------------------------

/// Computes metrics for a text document. Returns an arena-allocated record.
///
/// # Arguments
/// * `text` - Document bytes. Invalid UTF-8 sequences are dropped.
/// * `text_len` - Length of text in bytes. May be 0, in which case `text` may be null.
/// * `out_err` - Output error struct (may be null)
///
/// # Returns
/// Pointer to DMetricsArena on success, null on failure.
/// On failure, out_err (if non-null) contains error details.
///
/// # Safety
/// `text` must point to `text_len` readable bytes.
/// Caller must free the returned arena via docstats_free_metrics.
#[no_mangle]
pub unsafe extern "C" fn docstats_compute_metrics(
    text: *const u8,
    text_len: usize,
    out_err: *mut DError,
) -> *mut DMetricsArena {
    if text.is_null() && text_len != 0 {
        set_error(out_err, DErrorCode::Invalid, "text is null but text_len is not zero");
        return ptr::null_mut();
    }

    let bytes: &[u8] = if text_len == 0 {
        &[]
    } else {
        slice::from_raw_parts(text, text_len)
    };

    // Catch panics to avoid unwinding across FFI boundary
    let result = panic::catch_unwind(|| compute_metrics(&decode_text(bytes)));

    match result {
        Ok(record) => {
            let bump = Bump::new();
            let view = make_metrics_view(&bump, &record);
            let arena = Box::new(DMetricsArena { bump, view });
            set_success(out_err);
            Box::into_raw(arena)
        }
        Err(_) => {
            set_error(
                out_err,
                DErrorCode::Internal,
                "internal panic during metrics computation",
            );
            ptr::null_mut()
        }
    }
}

/// Returns a pointer to the DMetricsView inside the arena.
///
/// # Safety
/// The arena pointer must be valid or null.
/// The returned pointer is valid until docstats_free_metrics is called.
#[no_mangle]
pub unsafe extern "C" fn docstats_metrics_result(
    arena: *const DMetricsArena,
) -> *const DMetricsView {
    if arena.is_null() {
        return ptr::null();
    }
    (*arena).view
}

/// Frees the metrics arena and all associated allocations.
///
/// # Safety
/// The arena pointer must have been returned by docstats_compute_metrics.
/// After this call, the arena pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn docstats_free_metrics(arena: *mut DMetricsArena) {
    if !arena.is_null() {
        drop(Box::from_raw(arena));
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use docstats_metrics::WordCount;

    #[test]
    fn test_ffi_version() {
        assert_eq!(docstats_ffi_version(), 1);
    }

    #[test]
    fn test_dstring_empty() {
        let s = DString::empty();
        assert!(s.data.is_null());
        assert_eq!(s.len, 0);
    }

    #[test]
    fn test_copy_str_to_arena() {
        let bump = Bump::new();
        let ds = copy_str_to_arena(&bump, "hello world");
        assert!(!ds.data.is_null());
        assert_eq!(ds.len, 11);
        unsafe {
            let bytes = slice::from_raw_parts(ds.data, ds.len);
            assert_eq!(std::str::from_utf8(bytes).unwrap(), "hello world");
        }
    }

    #[test]
    fn test_copy_empty_str_to_arena() {
        let bump = Bump::new();
        let ds = copy_str_to_arena(&bump, "");
        assert!(ds.data.is_null());
        assert_eq!(ds.len, 0);
    }

    #[test]
    fn test_make_metrics_view() {
        let bump = Bump::new();
        let record = MetricsRecord {
            total_word_count: 3,
            unique_word_count: 2,
            average_sentence_length: 1.5,
            flesch_kincaid_grade_level: -2.0,
            top_10_words: vec![WordCount::new("cat", 2)],
        };
        let view = make_metrics_view(&bump, &record);
        unsafe {
            assert_eq!((*view).total_word_count, 3);
            assert_eq!((*view).unique_word_count, 2);
            assert_eq!((*view).average_sentence_length, 1.5);
            assert_eq!((*view).flesch_kincaid_grade_level, -2.0);
            assert_eq!((*view).top_words_len, 1);
            let first = &*(*view).top_words;
            assert_eq!(first.count, 2);
            assert_eq!(first.word.len, 3);
        }
    }
}
