//! End-to-end export scenarios: real PNG files under a temp directory

use std::fs;
use std::path::{Path, PathBuf};

use dialkit_pipeline::{
    run_export, AssetEntry, ExportManifest, PipelineError, ADAPTIVE_PADDING,
};

const TEST_SVG: &str = r##"
    <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64">
        <rect x="0" y="0" width="64" height="64" fill="#667eea"/>
        <circle cx="32" cy="32" r="24" fill="white"/>
    </svg>
"##;

fn temp_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dialkit-export-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn decode(path: &Path) -> image::RgbaImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("decoding {}: {e}", path.display()))
        .to_rgba8()
}

#[test]
fn procedural_table_writes_expected_pngs() {
    let root = temp_root("procedural");
    let entries = vec![
        AssetEntry::procedural("small", 48, "small.png"),
        AssetEntry::procedural("large", 192, "nested/large.png"),
    ];

    let summary = run_export(&root, &entries, None).unwrap();
    assert_eq!(summary.attempted(), 2);
    assert_eq!(summary.written(), 2);
    assert!(summary.all_ok());

    for (file, size) in [("small.png", 48u32), ("nested/large.png", 192)] {
        let img = decode(&root.join(file));
        assert_eq!(img.dimensions(), (size, size));
        // opaque pixels near the center (the white dot, at least)
        let c = size / 2;
        assert_eq!(img.get_pixel(c, c)[3], 255);
    }
}

#[test]
fn missing_vector_source_aborts_before_any_write() {
    let root = temp_root("missing-source");
    let entries = vec![
        AssetEntry::procedural("small", 48, "small.png"),
        AssetEntry::vector("icon", 64, "icon.png"),
    ];

    let err = run_export(&root, &entries, Some(Path::new("/nonexistent/app_icon.svg")))
        .unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(
        err,
        PipelineError::Svg(dialkit_svg::SvgError::MissingSource(_))
    ));
    // nothing was written, not even the procedural entry
    assert!(!root.exists());
}

#[test]
fn corrupt_entry_fails_in_isolation() {
    let root = temp_root("isolated-failure");
    let entries = vec![
        AssetEntry::procedural("good-a", 48, "a.png"),
        AssetEntry::procedural("broken", 0, "broken.png"),
        AssetEntry::procedural("good-b", 72, "b.png"),
    ];

    let summary = run_export(&root, &entries, None).unwrap();
    assert_eq!(summary.attempted(), 3);
    assert_eq!(summary.written(), 2);
    assert_eq!(summary.failed(), 1);

    let failed: Vec<_> = summary.entries.iter().filter(|e| !e.ok()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].name, "broken");
    assert!(!root.join("broken.png").exists());

    assert_eq!(decode(&root.join("a.png")).dimensions(), (48, 48));
    assert_eq!(decode(&root.join("b.png")).dimensions(), (72, 72));
}

#[test]
fn vector_table_renders_and_builds_foreground() {
    let root = temp_root("vector");
    fs::create_dir_all(&root).unwrap();
    let svg_path = root.join("app_icon.svg");
    fs::write(&svg_path, TEST_SVG).unwrap();

    let entries = vec![
        AssetEntry::vector("base", 256, "out/app_icon.png"),
        AssetEntry::adaptive_foreground(
            "foreground",
            1024,
            "out/app_icon_foreground.png",
            ADAPTIVE_PADDING,
        ),
    ];

    let summary = run_export(&root, &entries, Some(&svg_path)).unwrap();
    assert!(summary.all_ok());

    let base = decode(&root.join("out/app_icon.png"));
    assert_eq!(base.dimensions(), (256, 256));
    assert_eq!(base.get_pixel(128, 128)[3], 255);

    let fg = decode(&root.join("out/app_icon_foreground.png"));
    assert_eq!(fg.dimensions(), (1024, 1024));
    // safe-zone band stays transparent
    assert_eq!(fg.get_pixel(10, 10)[3], 0);
    assert_eq!(fg.get_pixel(512, 100)[3], 0);
    // interior carries content
    assert!(fg.get_pixel(512, 512)[3] > 0);
}

#[test]
fn manifest_round_trip_drives_export() {
    let root = temp_root("manifest");
    fs::create_dir_all(&root).unwrap();
    let manifest_path = root.join("Dialkit.toml");
    fs::write(
        &manifest_path,
        r#"
        [[asset]]
        name = "tiny"
        size = 16
        path = "tiny.png"
        source = "procedural"
        "#,
    )
    .unwrap();

    let manifest = ExportManifest::load(&manifest_path).unwrap();
    let summary = run_export(&root, &manifest.into_entries(), None).unwrap();
    assert!(summary.all_ok());
    assert_eq!(decode(&root.join("tiny.png")).dimensions(), (16, 16));
}
