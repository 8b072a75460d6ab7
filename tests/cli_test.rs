// Writing sketches to disk through the command line interface

use clap::Parser;
use lathe_sketch::{cli::Arguments, profile::ProfileConfig};

fn run(args: &[&str]) -> lathe_sketch::Result<()> {
    let mut full = vec!["lathe-sketch"];
    full.extend_from_slice(args);
    Arguments::try_parse_from(full)
        .expect("arguments should parse")
        .run()
}

#[test]
fn test_ring_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ring.svg");

    run(&["ring", "--segments", "12", "-o", path.to_str().unwrap()]).expect("ring should render");

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert_eq!(svg.matches("<polygon").count(), 12, "One trapezoid per segment");
    // Two axes
    assert_eq!(svg.matches("<line").count(), 2);
}

#[test]
fn test_profile_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("bowl.json");
    let out_path = dir.path().join("profile.svg");
    let config = ProfileConfig::default();
    std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    run(&[
        "profile",
        "--config",
        config_path.to_str().unwrap(),
        "--output",
        out_path.to_str().unwrap(),
    ])
    .expect("profile should render");

    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(svg.matches("<rect").count(), 1 + 2 * config.rings.len());
    assert!(svg.contains(r#"x="131.25""#), "Base should sit on the axis: {}", svg);
}

#[test]
fn test_missing_config_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = run(&["profile", "--config", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, lathe_sketch::Error::Io(_)), "got {:?}", err);
}
