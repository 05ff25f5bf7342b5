use std::ffi::{CStr, CString};
use std::ptr;
use transcode_core::c_api::{
    transcoder_convert, transcoder_free_string, transcoder_init, transcoder_list_schemes,
    transcoder_supports_decoding,
};

fn convert(scheme: &str, mode: &str, direction: &str, text: &str) -> serde_json::Value {
    let args = [scheme, mode, direction, text].map(|s| CString::new(s).unwrap());
    unsafe {
        let raw = transcoder_convert(args[0].as_ptr(), args[1].as_ptr(), args[2].as_ptr(), args[3].as_ptr());
        assert!(!raw.is_null());
        let json = CStr::from_ptr(raw).to_str().unwrap().to_owned();
        transcoder_free_string(raw);
        serde_json::from_str(&json).unwrap()
    }
}

#[test]
fn init_is_repeatable() {
    assert!(transcoder_init());
    assert!(transcoder_init());
}

#[test]
fn convert_reports_status() {
    let reply = convert("morse", "text", "encode", "sos");
    assert_eq!(reply["status"], "ok");
    assert_eq!(reply["output"], "... --- ...");

    let reply = convert("binary", "number", "encode", "3.14");
    assert_eq!(reply["status"], "invalid");
    assert_eq!(reply["output"], "Please enter a valid, whole, non-negative number!");

    let reply = convert("braille", "braille2_contractions", "decode", "⠏");
    assert_eq!(reply["status"], "error");

    let reply = convert("morse", "text", "backwards", "sos");
    assert_eq!(reply["status"], "error");
}

#[test]
fn null_arguments_are_rejected() {
    let text = CString::new("hi").unwrap();
    unsafe {
        let raw = transcoder_convert(ptr::null(), text.as_ptr(), text.as_ptr(), text.as_ptr());
        let json = CStr::from_ptr(raw).to_str().unwrap().to_owned();
        transcoder_free_string(raw);
        assert!(json.contains("\"error\""));

        assert!(!transcoder_supports_decoding(ptr::null(), text.as_ptr()));
        transcoder_free_string(ptr::null_mut());
    }
}

#[test]
fn capability_and_listing() {
    let braille = CString::new("braille").unwrap();
    let contractions = CString::new("braille2_contractions").unwrap();
    let braille1 = CString::new("braille1").unwrap();
    unsafe {
        assert!(!transcoder_supports_decoding(braille.as_ptr(), contractions.as_ptr()));
        assert!(transcoder_supports_decoding(braille.as_ptr(), braille1.as_ptr()));

        let raw = transcoder_list_schemes();
        let listing: serde_json::Value = serde_json::from_str(CStr::from_ptr(raw).to_str().unwrap()).unwrap();
        transcoder_free_string(raw);
        assert_eq!(listing.as_array().map(Vec::len), Some(4));
    }
}
