use crate::output::timestamped_path;
use crate::report::{self, DictPrint, Report};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tsm_core::{Aggressiveness, ReportLimits};
use tsm_minimizer::{MinimizeResult, Minimizer, Warning};

const SCRIPT: &str = ">D\np:counter=0\nname=\"x\"\n>B\ncounter = counter + 1\n";

fn minimized() -> MinimizeResult {
    Minimizer::with_aggressiveness(Aggressiveness::new(1).unwrap())
        .minimize(SCRIPT)
        .unwrap()
}

// ========== Output naming ==========

#[test]
fn test_timestamped_path() {
    let now = NaiveDate::from_ymd_opt(2023, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 5)
        .unwrap();
    let path = timestamped_path(Path::new("dir/script.txt"), now);
    assert_eq!(path, PathBuf::from("dir/script_2023_01_15-10_30_05.txt"));
}

#[test]
fn test_timestamped_path_no_extension() {
    let now = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let path = timestamped_path(Path::new("script"), now);
    assert_eq!(path, PathBuf::from("script_2024_12_31-23_59_59"));
}

// ========== Warnings ==========

#[test]
fn test_no_warnings_for_small_script() {
    assert!(minimized().warnings(&ReportLimits::default()).is_empty());
}

#[test]
fn test_all_warnings() {
    let limits = ReportLimits {
        max_output_bytes: 4,
        max_variables: 1,
        max_permanent: 0,
    };
    let warnings = minimized().warnings(&limits);
    assert_eq!(
        warnings,
        vec![
            Warning::OutputTooLarge { limit: 4 },
            Warning::TooManyVariables { limit: 1 },
            Warning::TooManyPermanent { limit: 0 },
        ]
    );
    assert_eq!(warnings[0].to_string(), "Script is longer than 4 byte!");
}

// ========== Report ==========

fn render(dict: DictPrint) -> String {
    let result = minimized();
    Report {
        input: Path::new("in.txt"),
        output: Path::new("out.txt"),
        result: &result,
    }
    .render(dict, &ReportLimits::default())
}

#[test]
fn test_report_stats() {
    let text = render(DictPrint::None);
    assert!(text.starts_with("INPUT\nFile: in.txt\n"));
    assert!(text.contains(&format!("File Size: {} byte\n", SCRIPT.len())));
    assert!(text.contains("Variable Count: 2\n"));
    assert!(text.contains("String Count: 1\n"));
    assert!(text.contains("Permanent Variable Count: 1\n"));
    assert!(text.contains("File: out.txt\n"));
    assert!(text.contains("Reduction Rate: "));
    assert!(!text.contains("->"));
}

#[test]
fn test_report_dictionary_with_stats() {
    let text = render(DictPrint::WithStats);
    assert!(text.contains("INPUT"));
    assert!(text.ends_with("counter -> a\nname -> b\n"));
}

#[test]
fn test_report_dictionary_only() {
    assert_eq!(render(DictPrint::Only), "a\tcounter\nb\tname\n");
}

#[test]
fn test_dict_print_levels() {
    assert_eq!(DictPrint::from(0), DictPrint::None);
    assert_eq!(DictPrint::from(1), DictPrint::WithStats);
    assert_eq!(DictPrint::from(2), DictPrint::Only);
}

#[test]
fn test_tool_info() {
    let info = report::tool_info();
    assert!(info.contains(env!("CARGO_PKG_VERSION")));
    assert!(info.contains("License: MIT"));
    assert!(info.contains("tasmota-minimizer testscript.txt"));
}
