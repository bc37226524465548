use std::fs;
use std::path::{Path, PathBuf};

use copywith_fixer::config::{load_markers, resolve_markers};
use copywith_fixer::fileio::{backup_path, fix_file, write_atomic};
use copywith_fixer::{rewrite_document, Error, Markers, RewriteOptions};
use tempfile::TempDir;

const LEGACY: &str = "void next() {
  ref.read(onboardingProvider.notifier).update((state) {
    final newState = OnboardingData();
    newState.name = state.name;
    newState.age = 10;
    return newState;
  });
}
";

const FIXED: &str = "void next() {
  ref.read(onboardingProvider.notifier).update((state) {
    return state.copyWith(
      age: 10,
    );
  });
}
";

// Helper to create a source file inside a temp dir
fn create_source(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("onboarding_screen.dart");
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn write_config(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("markers.json");
    fs::write(&path, json).expect("Failed to write config");
    path
}

#[cfg(test)]
mod fileio_tests {
    use super::*;

    #[test]
    fn test_fix_file_writes_backup_and_result() {
        let dir = TempDir::new().unwrap();
        let path = create_source(&dir, LEGACY);

        let outcome = fix_file(&path, &Markers::default(), &RewriteOptions::default(), false)
            .expect("fix should succeed");

        assert!(outcome.written);
        assert_eq!(outcome.report.blocks_converted, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), FIXED);

        let backup = outcome.backup.expect("backup should be written");
        assert_eq!(backup, backup_path(&path));
        assert_eq!(fs::read_to_string(&backup).unwrap(), LEGACY);
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = create_source(&dir, LEGACY);

        let outcome = fix_file(&path, &Markers::default(), &RewriteOptions::default(), true)
            .expect("dry run should succeed");

        assert!(!outcome.written);
        assert_eq!(outcome.report.blocks_converted, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY);
        assert!(!backup_path(&path).exists(), "Dry run must not write a backup");
    }

    #[test]
    fn test_already_fixed_file_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = create_source(&dir, FIXED);

        let outcome = fix_file(&path, &Markers::default(), &RewriteOptions::default(), false)
            .expect("fix should succeed");

        assert!(!outcome.written);
        assert!(outcome.backup.is_none());
        assert!(outcome.report.is_complete());
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn test_stale_backup_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = create_source(&dir, LEGACY);
        fs::write(backup_path(&path), "stale").unwrap();

        fix_file(&path, &Markers::default(), &RewriteOptions::default(), false).unwrap();
        assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), LEGACY);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.dart");

        let err = fix_file(&path, &Markers::default(), &RewriteOptions::default(), false)
            .expect_err("missing file must fail");
        assert!(matches!(err, Error::InputUnavailable { .. }), "got {:?}", err);
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("lib/screens/a.dart")),
            PathBuf::from("lib/screens/a.dart.backup")
        );
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = create_source(&dir, "old");

        write_atomic(&path, "new").expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");

        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "Temp file should have been renamed away");
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            &dir,
            r#"{
                "start": "ref.read(settingsProvider.notifier).update((state) {",
                "initializer": "final newState = SettingsData();"
            }"#,
        );

        let markers = load_markers(&config).expect("config should load");
        assert_eq!(markers.initializer, "final newState = SettingsData();");
        assert_eq!(markers.terminator, Markers::default().terminator);
        assert_eq!(markers.builder, "copyWith");

        let input = "ref.read(settingsProvider.notifier).update((state) {
  final newState = SettingsData();
  newState.darkMode = true;
  return newState;
});";
        let out = rewrite_document(input, &markers, &RewriteOptions::default());
        assert_eq!(out.report.blocks_converted, 1);
        assert!(out.text.contains("    darkMode: true,"));

        // The default markers do not recognize the settings block.
        let untouched = rewrite_document(input, &Markers::default(), &RewriteOptions::default());
        assert_eq!(untouched.text, input);
    }

    #[test]
    fn test_custom_names_used_in_output() {
        let markers = Markers {
            assignee: "next".to_string(),
            prior: "prev".to_string(),
            builder: "rebuild".to_string(),
            start: "store.update((prev) {".to_string(),
            initializer: "final next = Model();".to_string(),
            terminator: "return next;".to_string(),
            ..Markers::default()
        };
        markers.validate().expect("markers are valid");

        let input = "store.update((prev) {
  final next = Model();
  next.a = prev.a;
  next.b = 2;
  return next;
});";
        let out = rewrite_document(input, &markers, &RewriteOptions::default());
        assert_eq!(
            out.text,
            "store.update((prev) {\n  return prev.rebuild(\n    b: 2,\n  );\n});"
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, r#"{ "startMarker": "x" }"#);

        let err = load_markers(&config).expect_err("unknown field must fail");
        assert!(matches!(err, Error::Config { .. }), "got {:?}", err);
    }

    #[test]
    fn test_non_identifier_name_rejected() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, r#"{ "prior": "old state" }"#);

        let err = load_markers(&config).expect_err("bad name must fail");
        assert!(matches!(err, Error::InvalidMarkers(_)), "got {:?}", err);
    }

    #[test]
    fn test_empty_marker_rejected() {
        let markers = Markers {
            closing: "  ".to_string(),
            ..Markers::default()
        };
        assert!(markers.validate().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let err = load_markers(&dir.path().join("none.json")).expect_err("must fail");
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_no_config_means_defaults() {
        assert_eq!(resolve_markers(None).unwrap(), Markers::default());
    }
}
