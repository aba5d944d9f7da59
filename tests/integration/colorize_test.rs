//! Colorizer behavior on realistic Maven lines.

use mvn_color::colorize::ansi;
use mvn_color::colorize::rules::{Banner, Rule};
use mvn_color::{colorize, Colorizer};
use proptest::prelude::*;

/// Make markers and tabs readable in snapshots.
fn visible(line: &str) -> String {
    line.replace('\x1b', "\\e").replace('\t', "\\t")
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn snapshot_warn_tag() {
    insta::assert_snapshot!(visible(&colorize("[WARN] disk low")), @r"\e[33m[WARN]\e[0m disk low\e[0m");
}

#[test]
fn snapshot_plugin_marker() {
    insta::assert_snapshot!(
        visible(&colorize("[INFO] --- maven-surefire-plugin:2.22.2:test (default-test) @ demo ---")),
        @r"\e[36m[INFO]\e[0m \e[36m--- maven-surefire-plugin:2.22.2:test (default-test) @ demo ---\e[0m\e[0m"
    );
}

#[test]
fn snapshot_failing_test_summary() {
    insta::assert_snapshot!(
        visible(&colorize("[ERROR] Tests run: 3, Failures: 1, Errors: 0, Skipped: 1, Time elapsed: 0.051 s <<< FAILURE! - in demo.AppTest")),
        @r"\e[31m[ERROR]\e[0m \e[1;32mTests run: 3\e[0m, Failures: \e[1;31m1\e[0m, Errors: \e[1;31m0\e[0m, Skipped: \e[1;33m1\e[0m, Time elapsed: \e[1;36m0.051\e[0m s <<< FAILURE! - in demo.AppTest\e[0m"
    );
}

#[test]
fn snapshot_native_method_frame() {
    insta::assert_snapshot!(
        visible(&colorize("\tat java.base/jdk.internal.reflect.NativeMethodAccessorImpl.invoke0(Native Method)")),
        @r"\e[1;31m\tat \e[0mjava.base/jdk.internal.reflect.NativeMethodAccessorImpl.\e[32minvoke0\e[0m(\e[31mNative Method\e[0m)\e[0m"
    );
}

#[test]
fn snapshot_reactor_failure() {
    insta::assert_snapshot!(
        visible(&colorize("[INFO] demo ....... FAILURE [  1.204 s]")),
        @r"\e[36m[INFO]\e[0m demo ....... \e[1;31mFAILURE [  1.204 s]\e[0m\e[0m"
    );
}

#[test]
fn snapshot_total_time() {
    insta::assert_snapshot!(
        visible(&colorize("[INFO] Total time:  1.532 s")),
        @r"\e[36m[INFO]\e[0m Total time:  \e[36m1.532 s\e[0m\e[0m"
    );
}

#[test]
fn snapshot_several_exceptions() {
    insta::assert_snapshot!(
        visible(&colorize("[WARNING] Caught java.lang.NullPointerException and IOException")),
        @r"\e[33m[WARNING]\e[0m Caught java.lang.\e[1;31mNullPointerException\e[0m and \e[1;31mIOException\e[0m\e[0m"
    );
}

// ============================================================================
// Documented examples
// ============================================================================

#[test]
fn test_summary_counter_colors() {
    let out = colorize("Tests run: 5, Failures: 1, Errors: 0, Skipped: 2");
    assert!(out.contains(&format!("{}Tests run: 5{}", ansi::BOLD_GREEN, ansi::RESET)));
    assert!(out.contains(&format!("Failures: {}", ansi::wrap(ansi::BOLD_RED, "1"))));
    assert!(out.contains(&format!("Errors: {}", ansi::wrap(ansi::BOLD_RED, "0"))));
    assert!(out.contains(&format!("Skipped: {}", ansi::wrap(ansi::BOLD_YELLOW, "2"))));
}

#[test]
fn build_success_line() {
    assert_eq!(
        colorize("BUILD SUCCESS"),
        format!("{}{}", ansi::wrap(ansi::BOLD_GREEN, "BUILD SUCCESS"), ansi::RESET)
    );
}

#[test]
fn stack_frame_components() {
    let out = colorize("\tat com.example.Foo.bar(Foo.java:42)");
    assert!(out.starts_with(&ansi::wrap(ansi::BOLD_RED, "\tat ")));
    assert!(out.contains(&format!("{}com.example.Foo.", ansi::RESET)));
    assert!(out.contains(&ansi::wrap(ansi::GREEN, "bar")));
    assert!(out.contains(&format!("({}", ansi::wrap(ansi::RED, "Foo"))));
    assert!(out.contains(&format!("{})", ansi::wrap(ansi::CYAN, "42"))));
    assert!(!out.contains("$5"));
}

#[test]
fn exception_name_only() {
    assert_eq!(
        colorize("Caught java.lang.NullPointerException here"),
        format!(
            "Caught java.lang.{} here{}",
            ansi::wrap(ansi::BOLD_RED, "NullPointerException"),
            ansi::RESET
        )
    );
}

#[test]
fn dash_rule_glued_to_level_tag() {
    let dashes = "-".repeat(60);
    assert_eq!(
        colorize(&format!("[INFO]{}", dashes)),
        format!(
            "{}{}{}",
            ansi::wrap(ansi::CYAN, "[INFO]"),
            ansi::wrap(ansi::BOLD_GREEN, &dashes),
            ansi::RESET
        )
    );
}

#[test]
fn custom_rule_set_runs_in_order() {
    let colorizer = Colorizer::with_rules(vec![Box::new(Banner)]);
    let out = colorizer.colorize("[ERROR] T E S T S\n");
    assert_eq!(out, "[ERROR] \x1b[1;32mT E S T S\x1b[0m\x1b[0m\n");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn colorizing_only_inserts_markers(line in r"[^\x1b\r\n]{0,120}") {
        let out = colorize(&line);
        prop_assert_eq!(ansi::strip(&out).into_owned(), line);
    }

    #[test]
    fn unrecognized_lines_only_gain_reset(line in r"[a-z ,.:]{0,80}") {
        prop_assert_eq!(colorize(&line), format!("{}{}", line, ansi::RESET));
    }

    #[test]
    fn banner_rule_does_not_rewrap(n in 50usize..200, prefix in r"[a-z\[\] ]{0,20}") {
        let line = format!("{}{}", prefix, "-".repeat(n));
        let once = Banner.apply(&line).into_owned();
        prop_assert_eq!(Banner.apply(&once).into_owned(), once.clone());
        prop_assert_eq!(once.matches(ansi::BOLD_GREEN).count(), 1);
    }

    #[test]
    fn line_terminator_is_preserved(line in r"[^\x1b\r\n]{0,60}") {
        let out = colorize(&format!("{}\n", line));
        let want = format!("{}\n", ansi::RESET);
        prop_assert!(out.ends_with(&want));
    }
}
