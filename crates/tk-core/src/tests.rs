use crate::*;

// ========== Case ==========

#[test]
fn test_english_upper_lower() {
    assert_eq!(case::to_upper("Hello World!"), "HELLO WORLD!");
    assert_eq!(case::to_lower("Hello World!"), "hello world!");
}

#[test]
fn test_english_upper_expands() {
    assert_eq!(case::to_upper("straße"), "STRASSE");
}

#[test]
fn test_english_dotted_i() {
    assert_eq!(CaseLocale::English.to_upper("i"), "I");
    assert_eq!(CaseLocale::English.to_lower("I"), "i");
}

#[test]
fn test_turkic_dotted_i() {
    assert_eq!(CaseLocale::Turkic.to_upper("istanbul"), "İSTANBUL");
    assert_eq!(CaseLocale::Turkic.to_lower("ISPARTA"), "ısparta");
    assert_eq!(CaseLocale::Turkic.to_lower("İZMİR"), "izmir");
    assert_eq!(CaseLocale::Turkic.to_upper("ılık"), "ILIK");
}

#[test]
fn test_push_upper() {
    let mut out = String::new();
    CaseLocale::English.push_upper(&mut out, 'a');
    CaseLocale::English.push_upper(&mut out, 'ß');
    CaseLocale::Turkic.push_upper(&mut out, 'i');
    CaseLocale::English.push_upper(&mut out, '!');
    assert_eq!(out, "ASSİ!");
}

#[test]
fn test_default_locale() {
    assert_eq!(CaseLocale::default(), CaseLocale::English);
}

// ========== Config ==========

#[test]
fn test_config_default() {
    let config = TextKitConfig::default();
    assert_eq!(config.read.buffer_size, config::DEFAULT_READ_BUFFER);
    assert_eq!(config.read.on_error, ReadErrorPolicy::Empty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_json_partial() {
    let config = TextKitConfig::from_json(r#"{"case":{"locale":"turkic"}}"#).unwrap();
    assert_eq!(config.case.locale, CaseLocale::Turkic);
    assert_eq!(config.read, ReadConfig::default());
}

#[test]
fn test_config_from_json_full() {
    let json = r#"{"case":{"locale":"english"},"read":{"buffer_size":64,"on_error":"propagate"}}"#;
    let config = TextKitConfig::from_json(json).unwrap();
    assert_eq!(config.read.buffer_size, 64);
    assert_eq!(config.read.on_error, ReadErrorPolicy::Propagate);
}

#[test]
fn test_config_zero_buffer_rejected() {
    let err = TextKitConfig::from_json(r#"{"read":{"buffer_size":0}}"#).unwrap_err();
    assert!(matches!(err, TkError::InvalidArgument(_)));
}

#[test]
fn test_config_bad_json() {
    let err = TextKitConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, TkError::Serialization(_)));
}

#[test]
fn test_config_serde_roundtrip() {
    let config = TextKitConfig {
        case: CaseConfig { locale: CaseLocale::Turkic },
        read: ReadConfig { buffer_size: 8, on_error: ReadErrorPolicy::Propagate },
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(TextKitConfig::from_json(&json).unwrap(), config);
}

// ========== Errors ==========

#[test]
fn test_error_display() {
    let err = TkError::InvalidHexDigit { position: 3, found: 'z' };
    assert_eq!(err.to_string(), "Invalid hex digit 'z' at position 3");
    assert_eq!(TkError::OddHexLength(5).to_string(), "Odd hex length: 5");
}

#[test]
fn test_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: TkError = io.into();
    assert!(matches!(err, TkError::Read(_)));
}
