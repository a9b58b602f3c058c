use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fb-demo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_missing_device_exits_with_status_one() {
    let output = run_demo(&["--device", "/nonexistent/fb0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("cannot open framebuffer device /nonexistent/fb0"), "{}", stderr);
    assert!(stderr.contains("Make sure /nonexistent/fb0 exists"), "{}", stderr);
}

#[test]
fn test_quiet_failure_still_reports_on_stderr() {
    let output = run_demo(&["--quiet", "--device", "/nonexistent/fb0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("cannot open framebuffer device"), "{}", stderr);
}

#[test]
fn test_bad_arguments_are_rejected() {
    let output = run_demo(&["--poll-ms", "0"]);
    assert_ne!(output.status.code(), Some(0));
}
