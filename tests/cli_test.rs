use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hello-basics"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_run_without_arguments_prints_four_lines() {
    let output = binary().output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Hello, World!",
            "Sum of numbers [1, 2, 3, 4, 5]: 15",
            "First 5 square numbers: [0, 1, 4, 9, 16]",
            "Person details: {'name': 'Alice', 'age': 30, 'city': 'Python Land'}",
        ]
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = binary().arg("--verbose").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 4);
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_invalid_config_exits_with_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[squares]\ncount = 20000\n").unwrap();

    let output = binary().arg("--config").arg(temp_file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("squares.count"));
}

#[test]
fn test_missing_config_is_critical() {
    let output = binary()
        .args(["--config", "/definitely/not/here.toml"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_sum_overflow_exits_with_computation_code() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[summation]\nnumbers = [9223372036854775807, 1]\n")
        .unwrap();

    let output = binary().arg("-c").arg(temp_file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("overflowed"));
}
