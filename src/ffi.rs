//! FFI interface for C/C++ interop
//!
//! Provides C-compatible functions for extracting episode metadata from HTML.
//! Results cross the boundary as JSON: `{"feed": "...", "title": "..."}`.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::config::ExtractorConfig;
use crate::episode::Episode;
use crate::error::{ExtractError, Result};
use crate::extractors::extract_feed_with;

/// Result struct returned to the caller
/// Both pointers are owned by Rust and must be freed via free_episode_result
#[repr(C)]
pub struct EpisodeResultFFI {
    /// JSON-serialized Episode (null-terminated), or null on failure
    pub json_ptr: *mut c_char,
    /// Error message if extraction failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract feed URL and title from an episode page.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - Caller must free the result via `free_episode_result`
#[no_mangle]
pub unsafe extern "C" fn extract_episode_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> EpisodeResultFFI {
    extract_episode_with_config_ffi(html_ptr, html_len, ptr::null())
}

/// Extract feed URL and title with a JSON-serialized ExtractorConfig.
///
/// A null `config_json` selects the default configuration.
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - `config_json` must be null or a valid null-terminated C string
/// - Caller must free the result via `free_episode_result`
#[no_mangle]
pub unsafe extern "C" fn extract_episode_with_config_ffi(
    html_ptr: *const c_char,
    html_len: usize,
    config_json: *const c_char,
) -> EpisodeResultFFI {
    let episode = match perform_extraction(html_ptr, html_len, config_json) {
        Ok(episode) => episode,
        Err(e) => return make_error_result(&e.to_string()),
    };

    match serde_json::to_string(&episode) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => EpisodeResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Free an EpisodeResultFFI returned by the extract functions
///
/// # Safety
/// - `result` must have been returned by `extract_episode_ffi` or
///   `extract_episode_with_config_ffi`
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_episode_result(result: EpisodeResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

unsafe fn perform_extraction(
    html_ptr: *const c_char,
    html_len: usize,
    config_json: *const c_char,
) -> Result<Episode> {
    let config = if config_json.is_null() {
        ExtractorConfig::default()
    } else {
        let config_str = CStr::from_ptr(config_json)
            .to_str()
            .map_err(|_| ExtractError::Parse("invalid UTF-8 in config JSON".to_string()))?;
        ExtractorConfig::from_json(config_str)?
    };

    let html = if html_ptr.is_null() || html_len == 0 {
        ""
    } else {
        let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
        std::str::from_utf8(slice)
            .map_err(|e| ExtractError::Parse(format!("invalid UTF-8 in HTML: {}", e)))?
    };

    extract_feed_with(html, &config)
}

fn make_error_result(msg: &str) -> EpisodeResultFFI {
    let error_cstr = CString::new(msg.replace('\0', " ")).unwrap_or_default();
    EpisodeResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
