//! Driver tests against real child processes.

use mvn_color::colorize::ansi;
use mvn_color::tty::ForcedTerminal;
use mvn_color::{ColorMode, Colorizer, Driver, Invocation};
use std::ffi::OsString;
use std::path::PathBuf;

fn sh(script: &str) -> Invocation {
    Invocation::new(
        PathBuf::from("/bin/sh"),
        vec![OsString::from("-c"), OsString::from(script)],
    )
}

fn run(invocation: &Invocation) -> (String, i32) {
    let mut out = Vec::new();
    let code = invocation
        .run_colorized(&Colorizer::new(), &mut out)
        .expect("run tool");
    (String::from_utf8(out).expect("utf-8 output"), code)
}

#[test]
fn long_output_keeps_line_order() {
    let (out, code) = run(&sh("i=0; while [ $i -lt 2000 ]; do echo \"line $i\"; i=$((i+1)); done"));

    assert_eq!(code, 0);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2000);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("line {}{}", i, ansi::RESET));
    }
}

#[test]
fn output_without_final_newline() {
    let (out, code) = run(&sh("printf '[INFO] done'"));

    assert_eq!(code, 0);
    assert_eq!(out, "\x1b[36m[INFO]\x1b[0m done\x1b[0m");
}

#[test]
fn arguments_reach_the_tool_verbatim() {
    let invocation = Invocation::new(
        PathBuf::from("/bin/sh"),
        vec![
            OsString::from("-c"),
            OsString::from("printf '%s|' \"$@\""),
            OsString::from("sh"),
            OsString::from("-Dname=a b"),
            OsString::from("--color=x"),
        ],
    );

    let (out, _) = run(&invocation);

    assert_eq!(out, "-Dname=a b|--color=x|\x1b[0m");
}

#[test]
fn exit_codes_pass_through() {
    for code in [0, 1, 2, 42, 255] {
        let (_, actual) = run(&sh(&format!("exit {}", code)));
        assert_eq!(actual, code);
    }
}

#[test]
fn forced_terminal_decides_auto_mode() {
    let on = Driver::with_terminal(Box::new(ForcedTerminal(true)), false);
    let off = Driver::with_terminal(Box::new(ForcedTerminal(false)), false);
    let no_color = Driver::with_terminal(Box::new(ForcedTerminal(true)), true);

    assert!(on.should_colorize(ColorMode::Auto));
    assert!(!off.should_colorize(ColorMode::Auto));
    assert!(!no_color.should_colorize(ColorMode::Auto));
    assert!(no_color.should_colorize(ColorMode::Always));
}
