use std::io::Write;
use std::process::{Command, Stdio};

fn run_binary(args: &[&str], input: &[u8]) -> (String, bool) {
    let exe = env!("CARGO_BIN_EXE_console_chess");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn console_chess binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        output.status.success(),
    )
}

#[test]
fn session_plays_to_king_capture() {
    let input = b"y\ne2\ne4\nf7\nf5\nd1\nh5\ng7\ng6\nh5\ng6\na7\na6\ng6\ne8\nn\n";
    let (stdout, ok) = run_binary(&["--clear-lines=0", "--glyphs=ascii"], input);

    assert!(ok);
    assert!(stdout.contains("Ready for a game? y/n"));
    assert!(stdout.contains("Please enter the piece to move."));
    assert!(stdout.contains("Game over. White wins."));
    assert!(!stdout.contains("Could not make move"));
    // Final board: the queen stands on e8.
    assert!(stdout.contains("8 r n b q Q b n r 8"));
}

#[test]
fn session_reprompts_bad_input() {
    let (stdout, ok) = run_binary(&["--clear-lines", "0"], b"y\nj1\ne2\ne5\n");

    assert!(ok);
    assert!(stdout.contains("Invalid input. Please enter a valid chess coordinate."));
    assert!(stdout.contains("Could not make move, please enter a new move."));
}

#[test]
fn session_declined_exits_cleanly() {
    let (stdout, ok) = run_binary(&[], b"n\n");
    assert!(ok);
    assert_eq!(stdout.trim(), "Ready for a game? y/n");
}

#[test]
fn help_lists_options() {
    let (stdout, ok) = run_binary(&["--help"], b"");
    assert!(ok);
    assert!(stdout.contains("--glyphs"));
    assert!(stdout.contains("--clear-lines"));
}

#[test]
fn bad_option_fails() {
    let (stdout, ok) = run_binary(&["--speed=9"], b"");
    assert!(!ok);
    assert!(stdout.is_empty());
}
