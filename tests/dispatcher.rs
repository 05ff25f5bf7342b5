use std::sync::Arc;
use std::thread;
use transcode_core::{
    ConversionRequest, Direction, MatchStrategy, TranscodeError, Transcoder, TranscoderConfig, ValidationError,
};

fn ok(s: &str) -> Result<Result<String, ValidationError>, TranscodeError> {
    Ok(Ok(s.to_string()))
}

#[test]
fn concrete_scenarios() {
    let engine = Transcoder::default();
    let run = |scheme: &str, mode: &str, direction: Direction, text: &str| {
        engine.convert(&ConversionRequest::new(scheme, mode, direction, text))
    };

    assert_eq!(run("morse", "text", Direction::Encode, "hello"), ok(".... . .-.. .-.. ---"));
    assert_eq!(run("morse", "text", Direction::Decode, ".... . .-.. .-.. ---"), ok("hello"));
    assert_eq!(run("binary", "number", Direction::Encode, "10"), ok("00001010"));
    assert_eq!(run("binary", "number", Direction::Decode, "1010"), ok("10"));
    assert_eq!(run("hex", "number", Direction::Encode, "255"), ok("FF"));
    assert_eq!(run("hex", "number", Direction::Decode, "FF"), ok("255"));
    assert_eq!(run("braille", "braille1", Direction::Encode, "hello"), ok("⠓⠑⠇⠇⠕"));
    assert_eq!(run("braille", "braille1", Direction::Decode, "⠓⠑⠇⠇⠕"), ok("hello"));
}

#[test]
fn braille2_punctuation_boundary_is_lossy_but_keeps_case() {
    let engine = Transcoder::default();
    let encoded = engine
        .convert(&ConversionRequest::encode("braille", "braille2", "Hello, World!"))
        .unwrap()
        .unwrap();
    assert_eq!(encoded, "⠠⠓⠑⠇⠇⠕⠂⠀⠠⠺⠕⠗⠇⠙⠖");

    let decoded = engine
        .convert(&ConversionRequest::decode("braille", "braille2", &encoded))
        .unwrap()
        .unwrap();
    assert!(decoded.starts_with("Hello"));
    assert!(decoded.contains("World"));
}

#[test]
fn validation_failures_come_back_as_data() {
    let engine = Transcoder::default();
    let cases = [
        ("binary", "number", Direction::Encode, "3.14", ValidationError::InvalidNumber),
        ("hex", "number", Direction::Encode, "-5", ValidationError::InvalidNumber),
        ("binary", "number", Direction::Decode, "1021", ValidationError::InvalidBinary),
        ("binary", "text", Direction::Decode, "abc", ValidationError::InvalidBinary),
        ("hex", "number", Direction::Decode, "xyz", ValidationError::InvalidHex),
        ("hex", "text", Direction::Decode, "4G", ValidationError::InvalidHex),
    ];
    for (scheme, mode, direction, text, expected) in cases {
        let out = engine.convert(&ConversionRequest::new(scheme, mode, direction, text));
        assert_eq!(out, Ok(Err(expected)), "{scheme}:{mode} {direction} {text:?}");
    }
}

#[test]
fn dispatcher_errors() {
    let engine = Transcoder::default();
    assert_eq!(
        engine.convert(&ConversionRequest::encode("semaphore", "text", "hi")),
        Err(TranscodeError::UnknownScheme("semaphore".into()))
    );
    assert_eq!(
        engine.convert(&ConversionRequest::encode("binary", "octal", "hi")),
        Err(TranscodeError::UnknownSubMode { scheme: "binary".into(), sub_mode: "octal".into() })
    );
    assert_eq!(
        engine.convert(&ConversionRequest::decode("braille", "braille2_contractions", "⠏")),
        Err(TranscodeError::NoDecoder {
            scheme: "braille".into(),
            sub_mode: "braille2_contractions".into()
        })
    );
    assert!(!engine.supports_decoding("braille", "braille2_contractions"));
    assert_eq!("sideways".parse::<Direction>(), Err(TranscodeError::UnknownDirection("sideways".into())));
    assert_eq!("DECODE".parse::<Direction>(), Ok(Direction::Decode));
}

#[test]
fn contractions_follow_the_configured_strategy() {
    let sequential = Transcoder::default();
    let longest = Transcoder::new(TranscoderConfig {
        contraction_strategy: MatchStrategy::LongestMatch,
        ..TranscoderConfig::default()
    });
    let request = ConversionRequest::encode("braille", "braille2_contractions", "either");
    assert_eq!(sequential.convert(&request), ok("⠑⠭⠓⠑⠗"));
    assert_eq!(longest.convert(&request), ok("⠑⠊"));
}

#[test]
fn scheme_listing_serializes() {
    let engine = Transcoder::default();
    let json = serde_json::to_value(engine.list_schemes()).unwrap();
    assert_eq!(json[0]["id"], "morse");
    assert_eq!(json[0]["title"], "Morse Code Converter");
    assert_eq!(json[1]["sub_modes"][1]["id"], "number");
    assert_eq!(json[3]["sub_modes"][2]["decodable"], false);
}

#[test]
fn shared_across_threads() {
    let engine = Arc::new(Transcoder::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let n = (i * 1000).to_string();
                let encoded = engine
                    .convert(&ConversionRequest::encode("hex", "number", n.clone()))
                    .unwrap()
                    .unwrap();
                let decoded = engine
                    .convert(&ConversionRequest::decode("hex", "number", encoded))
                    .unwrap()
                    .unwrap();
                assert_eq!(decoded, n);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
