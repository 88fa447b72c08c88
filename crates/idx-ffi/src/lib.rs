mod context;
mod error;
mod types;

pub use context::*;
pub use error::*;
pub use types::*;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::Path;

use idx_dataset::{
    decode_path, to_flat_buffer, write_ascii, DecodeError, DecoderConfig, MNIST_SIDE_LENGTH,
};

/// Execute a closure that returns an `IdxStatus`, catching any panics
/// and converting them into `IdxStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> IdxStatus + std::panic::UnwindSafe>(f: F) -> IdxStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => fail(IdxStatus::ErrorInternal, "internal panic"),
    }
}

/// Record a decode failure and map it to its status code.
fn decode_failed(err: DecodeError) -> IdxStatus {
    fail(IdxStatus::from(&err), err.to_string())
}

fn out_of_range(index: usize, ds: &IdxDataset) -> IdxStatus {
    fail(
        IdxStatus::ErrorOutOfRange,
        format!("sample index {} out of range for {} samples", index, ds.samples.len()),
    )
}

/// Decode an IDX image file into a new dataset handle.
///
/// `side_length` is the required number of rows and columns per sample;
/// 0 selects the MNIST default of 28. On success, writes a heap-allocated
/// `IdxDataset` pointer into `*ds_out`. The caller must later call
/// `idx_dataset_destroy` to free it. On failure `*ds_out` is left untouched.
#[no_mangle]
pub unsafe extern "C" fn idx_dataset_open(
    path: *const c_char,
    side_length: u32,
    ds_out: *mut *mut IdxDataset,
) -> IdxStatus {
    catch_panic(|| {
        if path.is_null() || ds_out.is_null() {
            return fail(IdxStatus::ErrorInvalidArgument, "null argument");
        }
        let path_str = match unsafe { CStr::from_ptr(path) }.to_str() {
            Ok(s) => s,
            Err(e) => return fail(IdxStatus::ErrorInvalidArgument, format!("invalid path: {}", e)),
        };

        let side_length = match side_length {
            0 => MNIST_SIDE_LENGTH as u32,
            n => n,
        };
        let config = DecoderConfig::new(side_length as usize);

        let samples = match decode_path(Path::new(path_str), &config) {
            Ok(s) => s,
            Err(e) => return decode_failed(e),
        };

        let ds = Box::new(IdxDataset::new(side_length, samples));
        unsafe {
            *ds_out = Box::into_raw(ds);
        }
        IdxStatus::Ok
    })
}

/// Destroy a dataset previously created by `idx_dataset_open`.
///
/// Passing a null pointer is a no-op and returns `IdxStatus::Ok`.
#[no_mangle]
pub unsafe extern "C" fn idx_dataset_destroy(ds: *mut IdxDataset) -> IdxStatus {
    if ds.is_null() {
        return IdxStatus::Ok;
    }
    drop(Box::from_raw(ds));
    IdxStatus::Ok
}

/// Write the number of decoded samples into `*len_out`.
#[no_mangle]
pub unsafe extern "C" fn idx_dataset_len(ds: *const IdxDataset, len_out: *mut usize) -> IdxStatus {
    if ds.is_null() || len_out.is_null() {
        return fail(IdxStatus::ErrorInvalidArgument, "null argument");
    }
    *len_out = (*ds).samples.len();
    IdxStatus::Ok
}

/// Write the side length shared by every sample into `*side_out`.
#[no_mangle]
pub unsafe extern "C" fn idx_dataset_side_length(
    ds: *const IdxDataset,
    side_out: *mut u32,
) -> IdxStatus {
    if ds.is_null() || side_out.is_null() {
        return fail(IdxStatus::ErrorInvalidArgument, "null argument");
    }
    *side_out = (*ds).side_length;
    IdxStatus::Ok
}

/// Copy sample `index` into caller memory as row-major floats.
///
/// `buf` must point to `buf_len` writable floats and `buf_len` must equal
/// `side_length * side_length`; this is the input buffer of a
/// `[side_length, side_length]` tensor.
#[no_mangle]
pub unsafe extern "C" fn idx_sample_copy_buffer(
    ds: *const IdxDataset,
    index: usize,
    buf: *mut f32,
    buf_len: usize,
) -> IdxStatus {
    catch_panic(|| {
        if ds.is_null() || buf.is_null() {
            return fail(IdxStatus::ErrorInvalidArgument, "null argument");
        }
        let ds = unsafe { &*ds };
        let sample = match ds.sample(index) {
            Some(s) => s,
            None => return out_of_range(index, ds),
        };

        let flat = to_flat_buffer(sample);
        if buf_len != flat.len() {
            return fail(
                IdxStatus::ErrorInvalidArgument,
                format!("buffer holds {} floats, sample needs {}", buf_len, flat.len()),
            );
        }

        let out = unsafe { std::slice::from_raw_parts_mut(buf, buf_len) };
        out.copy_from_slice(&flat);
        IdxStatus::Ok
    })
}

/// Render sample `index` as ASCII art, one `\n`-terminated line per row.
///
/// On success, writes a heap-allocated C string into `*output`. The caller
/// must later call `idx_free_string` to free it.
#[no_mangle]
pub unsafe extern "C" fn idx_sample_render(
    ds: *const IdxDataset,
    index: usize,
    output: *mut *mut c_char,
) -> IdxStatus {
    catch_panic(|| {
        if ds.is_null() || output.is_null() {
            return fail(IdxStatus::ErrorInvalidArgument, "null argument");
        }
        let ds = unsafe { &*ds };
        let sample = match ds.sample(index) {
            Some(s) => s,
            None => return out_of_range(index, ds),
        };

        let mut text = Vec::new();
        if let Err(e) = write_ascii(sample, &mut text) {
            return fail(IdxStatus::ErrorInternal, format!("render failed: {}", e));
        }
        match CString::new(text) {
            Ok(c) => {
                unsafe { *output = c.into_raw() };
                IdxStatus::Ok
            }
            Err(e) => fail(IdxStatus::ErrorInternal, format!("output encoding error: {}", e)),
        }
    })
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error, or
/// null if no error has occurred. The caller must free the returned string
/// with `idx_free_string`.
#[no_mangle]
pub extern "C" fn idx_last_error() -> *const c_char {
    match error::take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null(),
    }
}

/// Free a string previously returned by `idx_sample_render` or `idx_last_error`.
#[no_mangle]
pub unsafe extern "C" fn idx_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::ptr;
    use tempfile::NamedTempFile;

    fn idx_file(header: [u32; 4], payload: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for v in header {
            file.write_all(&v.to_be_bytes()).unwrap();
        }
        file.write_all(payload).unwrap();
        file.flush().unwrap();
        file
    }

    fn c_path(file: &NamedTempFile) -> CString {
        CString::new(file.path().to_str().unwrap()).unwrap()
    }

    fn last_error() -> String {
        let p = idx_last_error();
        assert!(!p.is_null());
        let msg = unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string();
        unsafe { idx_free_string(p as *mut c_char) };
        msg
    }

    #[test]
    fn test_open_copy_render_destroy() {
        let file = idx_file([2051, 2, 2, 2], &[0, 255, 0, 0, 1, 2, 3, 4]);
        let path = c_path(&file);
        let mut ds: *mut IdxDataset = ptr::null_mut();

        unsafe {
            assert_eq!(idx_dataset_open(path.as_ptr(), 2, &mut ds), IdxStatus::Ok);
            assert!(!ds.is_null());

            let mut len = 0usize;
            assert_eq!(idx_dataset_len(ds, &mut len), IdxStatus::Ok);
            assert_eq!(len, 2);

            let mut side = 0u32;
            assert_eq!(idx_dataset_side_length(ds, &mut side), IdxStatus::Ok);
            assert_eq!(side, 2);

            let mut buf = [0f32; 4];
            assert_eq!(
                idx_sample_copy_buffer(ds, 1, buf.as_mut_ptr(), buf.len()),
                IdxStatus::Ok
            );
            assert_eq!(buf, [1.0, 2.0, 3.0, 4.0]);

            let mut text: *mut c_char = ptr::null_mut();
            assert_eq!(idx_sample_render(ds, 0, &mut text), IdxStatus::Ok);
            assert_eq!(CStr::from_ptr(text).to_str().unwrap(), "  X \n    \n");
            idx_free_string(text);

            assert_eq!(idx_dataset_destroy(ds), IdxStatus::Ok);
        }
    }

    #[test]
    fn test_open_default_side_length() {
        let file = idx_file([2051, 1, 28, 28], &[1; 784]);
        let path = c_path(&file);
        let mut ds: *mut IdxDataset = ptr::null_mut();
        unsafe {
            assert_eq!(idx_dataset_open(path.as_ptr(), 0, &mut ds), IdxStatus::Ok);
            let mut side = 0u32;
            idx_dataset_side_length(ds, &mut side);
            assert_eq!(side, 28);
            idx_dataset_destroy(ds);
        }
    }

    #[test]
    fn test_side_length_reported_as_opened() {
        let file = idx_file([2051, 1, 3, 3], &[0; 9]);
        let path = c_path(&file);
        let mut ds: *mut IdxDataset = ptr::null_mut();
        unsafe {
            assert_eq!(idx_dataset_open(path.as_ptr(), 3, &mut ds), IdxStatus::Ok);
            assert_eq!((*ds).side_length, 3u32);
            let mut side = 0u32;
            assert_eq!(idx_dataset_side_length(ds, &mut side), IdxStatus::Ok);
            assert_eq!(side, 3);
            idx_dataset_destroy(ds);
        }
    }

    #[test]
    fn test_invalid_side_length_maps_to_invalid_argument() {
        let err = DecodeError::InvalidSideLength { side_length: 0 };
        assert_eq!(IdxStatus::from(&err), IdxStatus::ErrorInvalidArgument);
    }

    #[test]
    fn test_open_errors_map_to_status() {
        let mut ds: *mut IdxDataset = ptr::null_mut();

        let missing = CString::new("/nonexistent/t10k-images.idx3-ubyte").unwrap();
        let status = unsafe { idx_dataset_open(missing.as_ptr(), 0, &mut ds) };
        assert_eq!(status, IdxStatus::ErrorNotFound);
        assert!(last_error().contains("not found"));

        let bad_magic = idx_file([2049, 1, 28, 28], &[0; 784]);
        let path = c_path(&bad_magic);
        let status = unsafe { idx_dataset_open(path.as_ptr(), 0, &mut ds) };
        assert_eq!(status, IdxStatus::ErrorFormat);
        assert!(last_error().contains("2049"));

        let short = idx_file([2051, 2, 28, 28], &[0; 784]);
        let path = c_path(&short);
        let status = unsafe { idx_dataset_open(path.as_ptr(), 0, &mut ds) };
        assert_eq!(status, IdxStatus::ErrorTruncated);
        assert!(last_error().contains("sample 1"));

        assert!(ds.is_null());
    }

    #[test]
    fn test_null_arguments() {
        let mut ds: *mut IdxDataset = ptr::null_mut();
        unsafe {
            assert_eq!(
                idx_dataset_open(ptr::null(), 0, &mut ds),
                IdxStatus::ErrorInvalidArgument
            );
            let mut len = 0usize;
            assert_eq!(
                idx_dataset_len(ptr::null(), &mut len),
                IdxStatus::ErrorInvalidArgument
            );
            assert_eq!(idx_dataset_destroy(ptr::null_mut()), IdxStatus::Ok);
        }
    }

    #[test]
    fn test_copy_buffer_bounds() {
        let file = idx_file([2051, 1, 2, 2], &[1, 2, 3, 4]);
        let path = c_path(&file);
        let mut ds: *mut IdxDataset = ptr::null_mut();
        unsafe {
            assert_eq!(idx_dataset_open(path.as_ptr(), 2, &mut ds), IdxStatus::Ok);

            let mut buf = [0f32; 4];
            assert_eq!(
                idx_sample_copy_buffer(ds, 1, buf.as_mut_ptr(), buf.len()),
                IdxStatus::ErrorOutOfRange
            );
            assert!(last_error().contains("out of range"));

            let mut small = [0f32; 3];
            assert_eq!(
                idx_sample_copy_buffer(ds, 0, small.as_mut_ptr(), small.len()),
                IdxStatus::ErrorInvalidArgument
            );
            assert_eq!(small, [0.0; 3]);

            idx_dataset_destroy(ds);
        }
    }
}
