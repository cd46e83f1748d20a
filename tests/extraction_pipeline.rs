use std::fs;
use std::path::Path;

use tempfile::tempdir;

use codeharvest::{extract, DatasetTable, HarvestError, RunContext};

fn fixed_context(output_root: &Path) -> RunContext {
    RunContext::with_timestamp(output_root, "2024_06_15_1200")
}

/// Scenario from the pipeline contract: `a.py` and `c/d.md` are
/// extracted in discovery order, the binary `b.png` never appears.
#[test]
fn end_to_end_extraction_filters_and_indexes() {
    let source = tempdir().unwrap();
    let root = source.path();
    fs::create_dir_all(root.join("c")).unwrap();
    fs::write(root.join("a.py"), "x=1\n").unwrap();
    fs::write(root.join("b.png"), [0x89u8, 0x50, 0x4E, 0x47, 0x00]).unwrap();
    fs::write(root.join("c/d.md"), "# t").unwrap();

    let output = tempdir().unwrap();
    let ctx = fixed_context(output.path());
    let report = extract(root, &ctx).unwrap();
    assert_eq!(report.records, 2);
    assert_eq!(report.checkpoint, ctx.checkpoint_path());
    assert!(report.checkpoint.is_file());

    let table = DatasetTable::from_checkpoint(&report.checkpoint).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.indices, vec![0, 1]);
    assert!(table.file_paths[0].ends_with("a.py"));
    assert!(table.file_paths[1].ends_with("d.md"));
    assert_eq!(table.contents[0], "x=1\n");
    assert_eq!(table.contents[1], "# t");
    for path in &table.file_paths {
        assert!(!path.contains("b.png"));
    }
}

#[test]
fn checkpoint_lands_in_timestamped_run_directory() {
    let source = tempdir().unwrap();
    fs::write(source.path().join("only.py"), "pass\n").unwrap();

    let output = tempdir().unwrap();
    let ctx = fixed_context(output.path());
    extract(source.path(), &ctx).unwrap();

    let expected = output
        .path()
        .join("2024_06_15_1200")
        .join("dataset_2024_06_15_1200.csv");
    assert!(expected.is_file());
}

#[test]
fn checkpoint_preserves_awkward_file_content() {
    let source = tempdir().unwrap();
    let tricky = "fn main() {\n    println!(\"a,b\");\r\n}\n";
    fs::write(source.path().join("weird.md"), tricky).unwrap();

    let output = tempdir().unwrap();
    let ctx = fixed_context(output.path());
    let report = extract(source.path(), &ctx).unwrap();

    let table = DatasetTable::from_checkpoint(&report.checkpoint).unwrap();
    assert_eq!(table.contents[0], tricky);
}

#[test]
fn missing_root_fails_before_writing_anything() {
    let output = tempdir().unwrap();
    let ctx = fixed_context(output.path());
    let err = extract(Path::new("/definitely/not/here"), &ctx).unwrap_err();
    assert!(matches!(err, HarvestError::InvalidRoot { .. }));
    assert!(!ctx.run_dir().exists());
}

#[test]
fn undecodable_accepted_file_fails_the_run() {
    let source = tempdir().unwrap();
    fs::write(source.path().join("ok.py"), "x=1\n").unwrap();
    fs::write(source.path().join("rogue.md"), [0xC0u8, 0x00, 0xFF]).unwrap();

    let output = tempdir().unwrap();
    let ctx = fixed_context(output.path());
    let err = extract(source.path(), &ctx).unwrap_err();
    assert!(matches!(
        err,
        HarvestError::Decode { path } if path.ends_with("rogue.md")
    ));
}
