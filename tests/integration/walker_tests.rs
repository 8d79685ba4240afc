//! End-to-end tests for project discovery, classification and CSV output
//!
//! Each test builds a small decompiled-app corpus in a temp directory.

use droidres::report::{format_row, header};
use droidres::{Config, CsvReporter, ProjectRecord, ProjectWalker, WalkOptions};
use std::path::Path;

const LAYOUT_MAIN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    android:orientation="vertical">
    <FrameLayout android:id="@+id/content">
        <TextView android:text="@string/welcome" android:textSize="18sp" />
    </FrameLayout>
</LinearLayout>
"#;

const STRINGS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_name">Bank</string>
    <string name="welcome">Welcome</string>
</resources>
"#;

const FADE: &str = r#"<alpha xmlns:android="http://schemas.android.com/apk/res/android"
    android:fromAlpha="0.0" android:toAlpha="1.0" />"#;

/// Create a file (and its parent directories) under `root`
fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent directories");
    std::fs::write(&path, contents).expect("Failed to write file");
}

fn scan(root: &Path) -> Vec<ProjectRecord> {
    ProjectWalker::new(root, &WalkOptions::default())
        .expect("Failed to open corpus")
        .collect()
}

#[test]
fn test_reference_project_row() {
    let corpus = tempfile::tempdir().unwrap();
    write(corpus.path(), "app/res/layout/main.xml", LAYOUT_MAIN);
    write(corpus.path(), "app/res/values/strings.xml", STRINGS);
    write(corpus.path(), "app/res/anim/fade.xml", FADE);

    let records = scan(corpus.path());
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.layout_count(), 1);
    assert_eq!(record.string_count(), 2);
    assert_eq!(record.xml_anim_file_count, 1);

    let folder = corpus.path().join("app").display().to_string();
    assert_eq!(record.folder, folder);
    assert_eq!(
        format_row(record, 1),
        format!("\"{}\",1,1,0,0,0,0,0,1,2.0,2,3.0,3,3.0,3,2,0,0,0", folder)
    );
}

#[test]
fn test_project_without_res() {
    let corpus = tempfile::tempdir().unwrap();
    write(corpus.path(), "app/smali/com/example/Main.smali", ".class public Lcom/example/Main;");
    write(corpus.path(), "app/apktool.yml", "version: 2.9.0");

    let records = scan(corpus.path());
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.drawable_density_folder_count, 0);
    assert_eq!(record.value_locale_folder_count, 0);
    assert!(format_row(record, 0).ends_with(",0,0.0,0,0.0,0,0.0,0,0,0,0,0"));
}

#[test]
fn test_locale_strings_are_deduplicated() {
    let corpus = tempfile::tempdir().unwrap();
    write(
        corpus.path(),
        "app/res/values-en/strings.xml",
        r#"<resources><string name="app_name">Bank</string></resources>"#,
    );
    write(
        corpus.path(),
        "app/res/values-fr/strings.xml",
        r#"<resources><string name="app_name">Banque</string></resources>"#,
    );

    let records = scan(corpus.path());
    let record = &records[0];

    assert_eq!(record.string_count(), 1);
    assert_eq!(record.value_locale_folder_count, 2);
}

#[test]
fn test_styles_are_collected() {
    let corpus = tempfile::tempdir().unwrap();
    write(
        corpus.path(),
        "app/res/values/styles.xml",
        r#"<resources>
            <style name="AppTheme" parent="Theme.AppCompat.Light"/>
            <style name="AppTheme.NoActionBar"/>
        </resources>"#,
    );
    write(
        corpus.path(),
        "app/res/values-v21/styles.xml",
        r#"<resources><style name="AppTheme"/></resources>"#,
    );

    let records = scan(corpus.path());
    assert_eq!(records[0].style_count(), 2);
}

#[test]
fn test_manifest_and_unknown_are_never_classified() {
    let corpus = tempfile::tempdir().unwrap();
    // Both would count as layouts if they reached the classifier
    write(corpus.path(), "app/res/layout/AndroidManifest.xml", "<LinearLayout/>");
    write(corpus.path(), "app/unknown/res/layout/ghost.xml", "<LinearLayout/>");
    write(corpus.path(), "app/AndroidManifest.xml", "<manifest/>");
    write(corpus.path(), "app/res/layout/real.xml", "<LinearLayout/>");

    let mut walker = ProjectWalker::new(corpus.path(), &WalkOptions::default()).unwrap();
    let records: Vec<_> = walker.by_ref().collect();

    assert_eq!(records[0].layout_count(), 1);
    assert_eq!(walker.stats().files_classified, 1);
}

#[test]
fn test_malformed_layout_is_skipped() {
    let corpus = tempfile::tempdir().unwrap();
    write(corpus.path(), "app/res/layout/broken.xml", "<LinearLayout><Button></LinearLayout>");
    write(corpus.path(), "app/res/layout/good.xml", LAYOUT_MAIN);
    write(corpus.path(), "app/res/drawable/bg.xml", "<layer-list/>");

    let mut walker = ProjectWalker::new(corpus.path(), &WalkOptions::default()).unwrap();
    let records: Vec<_> = walker.by_ref().collect();

    let record = &records[0];
    assert_eq!(record.layout_count(), 1);
    assert!(record.layouts.keys().all(|k| !k.ends_with("broken.xml")));
    assert_eq!(record.xml_drawable_file_count, 1);
    assert_eq!(walker.stats().parse_failures, 1);
}

#[test]
fn test_priority_order_in_a_real_tree() {
    let corpus = tempfile::tempdir().unwrap();
    write(corpus.path(), "app/res/drawable/ic_back.xml", "<vector><path/></vector>");
    write(corpus.path(), "app/res/drawable/btn.xml", "<selector><item/></selector>");
    write(corpus.path(), "app/res/drawable/card.xml", "<layer-list><item/></layer-list>");
    write(corpus.path(), "app/res/menu/main.xml", "<menu><item/></menu>");
    write(corpus.path(), "app/res/xml/prefs.xml", "<PreferenceScreen/>");
    write(corpus.path(), "app/res/values/dimens.xml", "<resources/>");
    write(corpus.path(), "app/res/values/colors.xml", "<resources/>");
    write(corpus.path(), "app/res/values/public.xml", "<resources/>");

    let records = scan(corpus.path());
    let record = &records[0];

    assert_eq!(record.xml_drawable_file_count, 1);
    assert_eq!(record.layout_count(), 0);
    assert_eq!(record.string_count(), 0);
    assert_eq!(record.xml_color_file_count, 0);
}

#[test]
fn test_projects_are_independent() {
    let corpus = tempfile::tempdir().unwrap();
    write(corpus.path(), "a/res/anim/one.xml", "<set/>");
    write(corpus.path(), "a/res/anim/two.xml", "<set/>");
    write(corpus.path(), "a/res/drawable-hdpi/x.xml", "<bitmap/>");
    write(corpus.path(), "b/res/transition/t.xml", "<fade/>");
    write(corpus.path(), "stray.xml", "<LinearLayout/>");

    let records = scan(corpus.path());
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].xml_anim_file_count, 2);
    assert_eq!(records[0].xml_drawable_file_count, 1);
    assert_eq!(records[0].drawable_density_folder_count, 1);
    assert_eq!(records[0].xml_transition_file_count, 0);

    assert_eq!(records[1].xml_anim_file_count, 0);
    assert_eq!(records[1].xml_transition_file_count, 1);
    assert_eq!(records[1].drawable_density_folder_count, 0);
}

#[test]
fn test_run_writes_csv() {
    let corpus = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write(corpus.path(), "one/res/layout/main.xml", LAYOUT_MAIN);
    write(corpus.path(), "two/res/values/strings.xml", STRINGS);
    write(corpus.path(), "three/res/layout/broken.xml", "<FrameLayout>");

    let output = out_dir.path().join("metrics.csv");
    let config = Config {
        input: Some(corpus.path().to_path_buf()),
        output: Some(output.clone()),
        label: 0,
        max_projects: Some(2),
        ..Config::default()
    };

    let summary = droidres::run(&config).unwrap();
    assert_eq!(summary.projects_analyzed, 2);
    assert_eq!(summary.rows_written, 2);
    // "three" holds the broken layout
    assert_eq!(summary.parse_failures, 1);

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], header());
    // Projects are visited in name order: "one", "three", "two"
    assert!(lines[1].contains("one\",0,"));
    assert!(lines[2].contains("three\",0,"));
}

#[test]
fn test_deeply_nested_layout_does_not_stop_the_run() {
    let corpus = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let deep = format!("{}{}", "<a>".repeat(20_000), "</a>".repeat(20_000));
    write(corpus.path(), "a_app/res/layout/deep.xml", &deep);
    write(corpus.path(), "a_app/res/layout/main.xml", LAYOUT_MAIN);
    write(corpus.path(), "b_app/res/anim/x.xml", FADE);

    let output = out_dir.path().join("metrics.csv");
    let config = Config {
        input: Some(corpus.path().to_path_buf()),
        output: Some(output.clone()),
        ..Config::default()
    };

    let summary = droidres::run(&config).unwrap();
    assert_eq!(summary.rows_written, 2);
    assert_eq!(summary.parse_failures, 1);

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    // Only main.xml is measured
    assert!(lines[1].contains("a_app\",1,0,0,0,0,0,0,1,2.0,2,"));
    assert!(lines[2].contains("b_app\",1,1,"));
}

#[test]
fn test_run_rejects_missing_input() {
    let out_dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: Some(out_dir.path().join("missing")),
        output: Some(out_dir.path().join("metrics.csv")),
        ..Config::default()
    };

    let err = droidres::run(&config).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_reporter_streams_walker_output() {
    let corpus = tempfile::tempdir().unwrap();
    for name in ["p1", "p2", "p3"] {
        write(corpus.path(), &format!("{}/res/anim/a.xml", name), "<set/>");
    }

    let walker = ProjectWalker::new(corpus.path(), &WalkOptions::default()).unwrap();
    let mut reporter = CsvReporter::new(Vec::new(), 1, 2).unwrap();
    for record in walker {
        reporter.write_record(&record).unwrap();
    }
    let bytes = reporter.finish().unwrap();

    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().skip(1).all(|line| line.contains("\",1,1,")));
}
