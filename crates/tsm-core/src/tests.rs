use crate::*;
use crate::reserved::{is_reserved, RESERVED_WORDS};

// ========== Section ==========

fn special() -> Vec<String> {
    MinimizerConfig::default().special_sections
}

#[test]
fn test_section_from_header() {
    assert_eq!(Section::from_header(">D 48", &special()), Some(Section::Declaration));
    assert_eq!(Section::from_header(">B", &special()), Some(Section::Other("B".into())));
    assert_eq!(Section::from_header(">WS", &special()), Some(Section::Special("W".into())));
    assert_eq!(Section::from_header(">W", &special()), Some(Section::Special("W".into())));
}

#[test]
fn test_section_code_is_one_character() {
    assert_eq!(Section::from_header(">Wx", &special()), Some(Section::Special("W".into())));
    assert_eq!(Section::from_header(">WM", &special()), Some(Section::Special("W".into())));
    assert_eq!(Section::from_header(">Bxy", &special()), Some(Section::Other("B".into())));
    assert_eq!(Section::from_header(">", &special()), Some(Section::Other(String::new())));
}

#[test]
fn test_section_not_header() {
    assert_eq!(Section::from_header("a=1", &special()), None);
    assert_eq!(Section::from_header(" >B", &special()), None);
}

#[test]
fn test_section_transition_keeps_state() {
    let s = Section::Other("B".into());
    assert_eq!(s.transition("x=1", &special()), s);
    assert!(s.transition(">W", &special()).is_special());
}

#[test]
fn test_section_display() {
    assert_eq!(Section::Declaration.to_string(), ">D");
    assert_eq!(Section::Other("T".into()).to_string(), ">T");
}

// ========== Identifier kinds ==========

#[test]
fn test_kind_from_prefix() {
    assert_eq!(IdentifierKind::from_prefix("p"), IdentifierKind::Permanent);
    assert_eq!(IdentifierKind::from_prefix("m"), IdentifierKind::Array);
    assert_eq!(IdentifierKind::from_prefix("x"), IdentifierKind::Variable);
}

// ========== Aggressiveness ==========

#[test]
fn test_aggressiveness_bounds() {
    assert!(Aggressiveness::new(5).is_ok());
    assert!(matches!(Aggressiveness::new(6), Err(MinimizeError::InvalidAggressiveness(6))));
}

#[test]
fn test_aggressiveness_layers() {
    let zero = Aggressiveness::new(0).unwrap();
    assert!(!zero.strips_whitespace());
    let two = Aggressiveness::new(2).unwrap();
    assert!(two.strips_after_keywords());
    assert!(two.strips_digit_keyword_gap());
    assert!(!two.compacts_print_lines());
    let four = Aggressiveness::new(4).unwrap();
    assert!(four.compacts_print_lines());
    assert!(!four.renames_print_lines());
    assert!(Aggressiveness::new(5).unwrap().renames_print_lines());
}

// ========== Reserved words ==========

#[test]
fn test_reserved_sorted() {
    assert!(RESERVED_WORDS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_reserved_lookup() {
    assert!(is_reserved("s"));
    assert!(is_reserved("pwmN"));
    assert!(is_reserved("upsecs"));
    assert!(!is_reserved("a"));
    assert!(!is_reserved("counter"));
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let cfg = MinimizerConfig::default();
    assert_eq!(cfg.aggressiveness.level(), 1);
    assert_eq!(cfg.max_name_len, 3);
    assert_eq!(cfg.limits.max_output_bytes, 2560);
    assert_eq!(cfg.limits.max_variables, 50);
    assert_eq!(cfg.limits.max_permanent, 12);
}

#[test]
fn test_config_partial_json() {
    let cfg = MinimizerConfig::from_json(r#"{"aggressiveness": 3, "extra_reserved": ["c"]}"#).unwrap();
    assert_eq!(cfg.aggressiveness.level(), 3);
    assert!(cfg.is_reserved("c"));
    assert!(cfg.is_reserved("s"));
    assert_eq!(cfg.special_sections, vec!["W".to_string()]);
}

#[test]
fn test_config_rejects_bad_level() {
    assert!(MinimizerConfig::from_json(r#"{"aggressiveness": 9}"#).is_err());
}

#[test]
fn test_config_rejects_zero_name_len() {
    let err = MinimizerConfig::from_json(r#"{"max_name_len": 0}"#).unwrap_err();
    assert!(matches!(err, MinimizeError::InvalidConfig(_)));
}

#[test]
fn test_config_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tsm.json");
    std::fs::write(&path, r#"{"limits": {"max_variables": 10}}"#).unwrap();
    let cfg = MinimizerConfig::load(&path).unwrap();
    assert_eq!(cfg.limits.max_variables, 10);
    assert_eq!(cfg.limits.max_permanent, 12);
}

#[test]
fn test_config_load_missing_file() {
    let err = MinimizerConfig::load("/nonexistent/tsm.json").unwrap_err();
    assert!(matches!(err, MinimizeError::Io(_)));
}
