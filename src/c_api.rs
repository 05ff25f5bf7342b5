// File: src/c_api.rs
// C entry points for embedding the engine in a non-Rust host.
// Strings cross the boundary as NUL-terminated UTF-8 and every string we
// hand out must come back through `transcoder_free_string`.
use crate::config::{default_config_path, TranscoderConfig};
use crate::core::engine::Transcoder;
use crate::core::types::{ConversionRequest, Direction};
use libc::c_char;
use log::{error, info};
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::OnceLock;

static TRANSCODER: OnceLock<Transcoder> = OnceLock::new();

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Ok,
    Invalid,
    Error,
}

#[derive(Serialize)]
struct Reply {
    status: Status,
    output: String,
}

fn engine() -> &'static Transcoder {
    TRANSCODER.get_or_init(|| {
        let config = default_config_path()
            .map(|path| {
                TranscoderConfig::load_or_default(&path).unwrap_or_else(|e| {
                    error!("Failed to load config {}: {}", path.display(), e);
                    TranscoderConfig::default()
                })
            })
            .unwrap_or_default();
        Transcoder::new(config)
    })
}

/// Borrows a C string. Null or non-UTF-8 pointers read as `None`.
unsafe fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    // Interior NULs cannot be represented; replace rather than fail.
    let s = if s.contains('\0') { s.replace('\0', "\u{FFFD}") } else { s };
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

fn to_json(reply: &Reply) -> String {
    serde_json::to_string(reply)
        .unwrap_or_else(|_| r#"{"status":"error","output":"serialization failed"}"#.to_string())
}

fn convert_to_reply(scheme: &str, sub_mode: &str, direction: &str, text: &str) -> Reply {
    let outcome = direction
        .parse::<Direction>()
        .and_then(|direction| engine().convert(&ConversionRequest::new(scheme, sub_mode, direction, text)));
    match outcome {
        Ok(Ok(output)) => Reply { status: Status::Ok, output },
        Ok(Err(invalid)) => Reply { status: Status::Invalid, output: invalid.to_string() },
        Err(e) => {
            error!("Conversion request rejected: {}", e);
            Reply { status: Status::Error, output: e.to_string() }
        }
    }
}

/// Builds the shared engine. Safe to call more than once.
#[no_mangle]
pub extern "C" fn transcoder_init() -> bool {
    let result = catch_unwind(|| {
        let schemes = engine().list_schemes().len();
        info!("Transcoder initialized with {} schemes", schemes);
    });
    if result.is_err() {
        error!("A panic occurred during transcoder initialization");
    }
    result.is_ok()
}

/// Returns a JSON object `{"status": "ok" | "invalid" | "error", "output": ...}`.
///
/// # Safety
/// Each argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn transcoder_convert(
    scheme: *const c_char,
    sub_mode: *const c_char,
    direction: *const c_char,
    text: *const c_char,
) -> *mut c_char {
    let args = (read_str(scheme), read_str(sub_mode), read_str(direction), read_str(text));
    let reply = catch_unwind(AssertUnwindSafe(|| match args {
        (Some(scheme), Some(sub_mode), Some(direction), Some(text)) => {
            convert_to_reply(scheme, sub_mode, direction, text)
        }
        _ => Reply {
            status: Status::Error,
            output: "arguments must be non-null UTF-8 strings".to_string(),
        },
    }))
    .unwrap_or_else(|_| {
        error!("Panic in transcoder_convert");
        Reply { status: Status::Error, output: "internal error".to_string() }
    });
    into_c_string(to_json(&reply))
}

/// # Safety
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn transcoder_supports_decoding(scheme: *const c_char, sub_mode: *const c_char) -> bool {
    match (read_str(scheme), read_str(sub_mode)) {
        (Some(scheme), Some(sub_mode)) => {
            catch_unwind(|| engine().supports_decoding(scheme, sub_mode)).unwrap_or(false)
        }
        _ => false,
    }
}

/// Scheme descriptors as a JSON array.
#[no_mangle]
pub extern "C" fn transcoder_list_schemes() -> *mut c_char {
    let json = catch_unwind(|| serde_json::to_string(&engine().list_schemes()))
        .map_err(|_| error!("Panic in transcoder_list_schemes"))
        .ok()
        .and_then(Result::ok)
        .unwrap_or_else(|| "[]".to_string());
    into_c_string(json)
}

/// # Safety
/// `s` must be null or a pointer returned by this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn transcoder_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

