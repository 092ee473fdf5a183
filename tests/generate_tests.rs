//! End-to-end generation tests.
//!
//! Each test writes a build-context JSON to a scratch directory, runs the
//! generator, and checks the artifacts the way the completion engine would
//! read them back.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use ycmgen::{
    BuildContext, Error, FlagsBundle, Generator, OutputLayout, EXTRA_CONF_FILE, FLAGS_FILE,
    MARKER_FILE,
};

fn write_context(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("build_context.json");
    fs::write(&path, json).unwrap();
    path
}

fn generate(tmp: &TempDir, json: &str) -> std::path::PathBuf {
    let input = write_context(tmp.path(), json);
    let context = BuildContext::load(input).unwrap();
    let out_dir = tmp.path().join("gen");
    Generator::new(&context, OutputLayout::new(&out_dir, tmp.path()))
        .generate()
        .unwrap();
    out_dir
}

// =============================================================================
// Flags bundle output
// =============================================================================

mod flags_output {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_includes_defines_and_flags_are_prefixed() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(
            &tmp,
            r#"{
                "dependencies": [
                    {
                        "name": "boost",
                        "includedirs": ["/opt/boost/include"],
                        "defines": ["BOOST_ALL_NO_LIB"],
                        "cxxflags": ["-pthread"]
                    },
                    {
                        "name": "zlib",
                        "includedirs": ["/opt/zlib/include"],
                        "defines": [],
                        "cxxflags": []
                    }
                ]
            }"#,
        );

        let text = fs::read_to_string(out_dir.join(FLAGS_FILE)).unwrap();
        let bundle: FlagsBundle = serde_json::from_str(&text).unwrap();

        assert_eq!(
            bundle.includes,
            vec!["-isystem/opt/boost/include", "-isystem/opt/zlib/include"]
        );
        assert_eq!(bundle.defines, vec!["-DBOOST_ALL_NO_LIB"]);
        assert_eq!(bundle.flags, vec!["-pthread"]);
    }

    #[test]
    fn test_zero_dependencies_yield_empty_lists() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(&tmp, "{}");

        let text = fs::read_to_string(out_dir.join(FLAGS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "includes": [], "defines": [], "flags": [] })
        );
    }

    #[test]
    fn test_duplicates_are_kept_verbatim() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(
            &tmp,
            r#"{
                "dependencies": [
                    { "includedirs": ["/shared/include"] },
                    { "includedirs": ["/shared/include"] }
                ]
            }"#,
        );

        let text = fs::read_to_string(out_dir.join(FLAGS_FILE)).unwrap();
        let bundle: FlagsBundle = serde_json::from_str(&text).unwrap();
        assert_eq!(
            bundle.includes,
            vec!["-isystem/shared/include", "-isystem/shared/include"]
        );
    }
}

// =============================================================================
// Completion script output
// =============================================================================

mod script_output {
    use super::*;

    #[test]
    fn test_cppstd_and_version_are_substituted() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(
            &tmp,
            r#"{ "settings": { "compiler": { "cppstd": "17", "version": "12.3" } } }"#,
        );

        let script = fs::read_to_string(out_dir.join(EXTRA_CONF_FILE)).unwrap();
        assert!(script.contains("'--std=c++17',"));
        assert!(script.contains("\"-I/usr/include/c++/12\""));
    }

    #[test]
    fn test_gnu_standard_maps_to_gnu_flag() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(
            &tmp,
            r#"{ "settings": { "compiler": { "cppstd": "gnu17" } } }"#,
        );

        let script = fs::read_to_string(out_dir.join(EXTRA_CONF_FILE)).unwrap();
        assert!(script.contains("'--std=gnu++17',"));
    }

    #[test]
    fn test_absent_settings_default_quietly() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(&tmp, "{}");

        let script = fs::read_to_string(out_dir.join(EXTRA_CONF_FILE)).unwrap();
        assert!(script.contains("'--std=c++14',"));
        assert!(script.contains("\"-I/usr/include/c++/\""));
    }

    #[test]
    fn test_script_is_self_contained_python() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(&tmp, "{}");

        let script = fs::read_to_string(out_dir.join(EXTRA_CONF_FILE)).unwrap();
        // No leftover substitution points.
        assert!(!script.contains("{{"));
        // The per-file entry point YCM calls.
        assert!(script.contains("def Settings( filename, **kwargs ):"));
        // The script must agree with the generator about artifact names.
        assert!(script.contains(MARKER_FILE));
        assert!(script.contains(FLAGS_FILE));
    }
}

// =============================================================================
// Marker file
// =============================================================================

mod marker_file {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_marker_points_at_existing_absolute_dir() {
        let tmp = TempDir::new().unwrap();
        let out_dir = generate(&tmp, "{}");

        let marker = fs::read_to_string(tmp.path().join(MARKER_FILE)).unwrap();
        assert_eq!(marker, out_dir.display().to_string());

        let recorded = Path::new(&marker);
        assert!(recorded.is_absolute());
        assert!(recorded.join(FLAGS_FILE).exists());
    }

    #[test]
    fn test_marker_is_single_line_without_newline() {
        let tmp = TempDir::new().unwrap();
        generate(&tmp, "{}");

        let marker = fs::read_to_string(tmp.path().join(MARKER_FILE)).unwrap();
        assert!(!marker.contains('\n'));
    }
}

// =============================================================================
// Input handling
// =============================================================================

mod input_handling {
    use super::*;

    #[test]
    fn test_missing_input_is_a_read_error() {
        let err = BuildContext::load("/nonexistent/build_context.json").unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_malformed_input_is_a_json_error() {
        let tmp = TempDir::new().unwrap();
        let input = write_context(tmp.path(), "not json");
        let err = BuildContext::load(input).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
