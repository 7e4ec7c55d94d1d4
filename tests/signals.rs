#![cfg(target_os = "linux")]

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use myshell::parse::{scan_redirection, CommandStatus};
use myshell::process::{signal, LaunchOutcome, Launcher};

fn launch(args: &[&str]) -> LaunchOutcome {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let mut status = CommandStatus::new(Path::new("/opt/myshell/myshell"));
    scan_redirection(&args, &mut status);
    Launcher::new().launch(&args, &status).unwrap()
}

fn ignored_mask(status: &str) -> u64 {
    let line = status
        .lines()
        .find(|line| line.starts_with("SigIgn:"))
        .unwrap();
    u64::from_str_radix(line["SigIgn:".len()..].trim(), 16).unwrap()
}

fn bit(signum: libc::c_int) -> u64 {
    1 << (signum - 1)
}

// Signal dispositions are process-wide, so everything runs in one test.
#[test]
fn test_shell_signal_setup() {
    signal::suppress_for_shell().unwrap();

    let own = ignored_mask(&fs::read_to_string("/proc/self/status").unwrap());
    assert_ne!(own & bit(libc::SIGINT), 0);
    assert_ne!(own & bit(libc::SIGCHLD), 0);

    let start = Instant::now();
    let background = launch(&["sleep", "0.5", "&"]);
    assert!(matches!(background, LaunchOutcome::Background(_)));
    assert!(start.elapsed() < Duration::from_millis(400));

    let start = Instant::now();
    let foreground = launch(&["sleep", "0.3"]);
    assert_eq!(foreground, LaunchOutcome::Reaped);
    assert!(start.elapsed() >= Duration::from_millis(250));

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("status.txt");
    let outcome = launch(&[
        "grep",
        "SigIgn",
        "/proc/self/status",
        ">",
        output.to_str().unwrap(),
    ]);
    assert_eq!(outcome, LaunchOutcome::Reaped);

    let child = ignored_mask(&fs::read_to_string(&output).unwrap());
    assert_eq!(child & bit(libc::SIGINT), 0);
    assert_eq!(child & bit(libc::SIGCHLD), 0);
}
