// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/cli_test.rs
// Version: 1.0.0
//
// This file runs the miner binary end to end and checks stdout and the
// process exit status.
//
// Tree Location:
// - tests/cli_test.rs (binary tests)
// - Depends on: commit-miner, tempfile

#[cfg(test)]
mod tests {
    use commit_miner::core::commit_digest;
    use std::io::Write;
    use std::process::{Command, Output, Stdio};

    fn run_miner(args: &[&str], stdin: &[u8]) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_miner"))
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start miner binary");
        // The miner may exit before reading stdin on invocation errors
        if let Some(mut input) = child.stdin.take() {
            let _ = input.write_all(stdin);
        }
        child.wait_with_output().expect("Failed to wait for miner")
    }

    #[test]
    fn test_solved_run_writes_payload_and_nonce() {
        let output = run_miner(&["ffffffffffffffffffffffffffffffffffffffff", "1", "5"], b"hello");

        assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        let stdout = output.stdout;
        assert_eq!(stdout.len(), 15, "Payload plus 10 nonce bytes expected");
        assert_eq!(&stdout[..5], b"hello");
        assert_eq!(stdout[5], b'A', "Single worker tag");
        assert!(stdout[6..14].iter().all(|b| (b' '..=b'~').contains(b)));
        assert_eq!(stdout[14], b'\n');

        let digest = commit_digest(b"hello", &stdout[5..]);
        assert_ne!(digest, [0xff; 20], "Digest must be strictly below the all-0xff target");
    }

    #[test]
    fn test_unreachable_target_exits_with_no_solution() {
        let output = run_miner(&["0", "2", "0.2"], b"hello");
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty(), "Nothing should be written without a solution");
        assert!(String::from_utf8_lossy(&output.stderr).contains("No solution found"));
    }

    #[test]
    fn test_missing_arguments_exit_with_usage_error() {
        let output = run_miner(&["ff"], b"hello");
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_invalid_target_exits_before_search() {
        let output = run_miner(&["not-hex", "1", "1"], b"hello");
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_payload_from_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"tree abc\n\nfrom a file\n").unwrap();
        file.flush().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let output = run_miner(&["--input", &path, "ff", "2", "5"], b"");
        assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        assert!(output.stdout.starts_with(b"tree abc\n\nfrom a file\n"));
        assert_eq!(output.stdout.len(), 22 + 10);
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let payload = vec![b'x'; 5000];
        let output = run_miner(&["ff", "1", "1"], &payload);
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial binary test implementation.
