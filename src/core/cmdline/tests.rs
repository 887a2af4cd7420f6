// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for command-line tokenization and building.

use super::{
    ArgumentSplit, CommandLine, join_arguments, quote_argument, split_arguments,
    split_command_line, split_first_argument,
};

// =============================================================================
// Argument Tokenizer
// =============================================================================

#[test]
fn test_quoted_first_argument() {
    assert_eq!(
        split_first_argument(r#""C:\app.exe" --flag value"#),
        "--flag value"
    );
}

#[test]
fn test_unquoted_first_argument() {
    assert_eq!(split_first_argument("app.exe --flag"), "--flag");
}

#[test]
fn test_empty_input() {
    assert_eq!(split_first_argument(""), "");
    assert_eq!(split_first_argument(" \t\r\n "), "");
}

#[test]
fn test_only_first_argument() {
    assert_eq!(split_first_argument("app.exe"), "");
    assert_eq!(split_first_argument(r#""C:\Program Files\app.exe""#), "");
    assert_eq!(split_first_argument("  app.exe   \t"), "");
}

#[test]
fn test_unterminated_quote_consumes_everything() {
    let split = split_command_line(r#""C:\app.exe --flag value"#);
    assert_eq!(split.first, r#""C:\app.exe --flag value"#);
    assert_eq!(split.remainder, "");
}

#[test]
fn test_escaped_quote_inside_first_argument() {
    let split = split_command_line(r#""C:\odd\"name.exe" rest"#);
    assert_eq!(split.first, r#""C:\odd\"name.exe""#);
    assert_eq!(split.remainder, "rest");
}

#[test]
fn test_trailing_backslash_escapes_closing_quote() {
    // The backslash swallows the quote, so the token never closes.
    let split = split_command_line(r#""C:\dir\" --flag"#);
    assert_eq!(split.remainder, "");
}

#[test]
fn test_leading_and_trailing_whitespace() {
    let split = split_command_line("\r\n\t app.exe \t  a   b \r\n");
    assert_eq!(split.first, "app.exe");
    assert_eq!(split.remainder, "a   b");
}

#[test]
fn test_text_after_closing_quote_is_remainder() {
    let split = split_command_line(r#""app.exe"--flag"#);
    assert_eq!(split.first, r#""app.exe""#);
    assert_eq!(split.remainder, "--flag");
}

#[test]
fn test_remainder_keeps_inner_quoting() {
    assert_eq!(
        split_first_argument(r#"shim.exe "a b" c\"d  'e'"#),
        r#""a b" c\"d  'e'"#
    );
}

#[test]
fn test_resplit_preserves_first_argument_boundary() {
    let inputs = [
        r#""C:\Program Files\shim.exe"   --flag  "x y""#,
        "shim.exe\t-a -b",
        r#"  "C:\a\"b.exe"c d"#,
        "shim.exe",
        "",
    ];

    for raw in inputs {
        let split = split_command_line(raw);
        let rejoined = format!("{} {}", split.first, split.remainder);
        let again = split_command_line(&rejoined);
        assert_eq!(again, split, "re-split of {rejoined:?} changed the boundary");
    }
}

#[test]
fn test_has_remainder() {
    assert!(ArgumentSplit::parse("a b").has_remainder());
    assert!(!ArgumentSplit::parse("a").has_remainder());
}

// =============================================================================
// Command Line Builder
// =============================================================================

#[test]
fn test_build_without_remainder() {
    let line = CommandLine::build(r"C:\t.exe", "");
    assert_eq!(line.as_str_with_nul(), "\"C:\\t.exe\"\0");
    assert_eq!(line.as_str(), r#""C:\t.exe""#);
}

#[test]
fn test_build_with_remainder() {
    let line = CommandLine::build(r"C:\Tools\real app.exe", "--flag value");
    insta::assert_snapshot!(line.to_string(), @r#""C:\Tools\real app.exe" --flag value"#);
    assert!(line.as_str_with_nul().ends_with('\0'));
}

#[test]
fn test_build_normalizes_control_characters() {
    let line = CommandLine::build("C:\\t\tx.exe", "a\tb\r\nc");
    assert_eq!(line.as_str(), "\"C:\\t x.exe\" a b  c");
}

#[test]
fn test_build_from_raw() {
    let line = CommandLine::from_raw(r"D:\real.exe", r#""C:\shim.exe"  -v   "some file" "#);
    assert_eq!(line.as_str(), r#""D:\real.exe" -v   "some file""#);
}

#[test]
fn test_from_raw_without_arguments_has_no_trailing_space() {
    let line = CommandLine::from_raw(r"D:\real.exe", r#""C:\shim.exe"   "#);
    assert_eq!(line.as_str_with_nul(), "\"D:\\real.exe\"\0");
}

#[test]
fn test_into_wide_is_nul_terminated() {
    let wide = CommandLine::build("a.exe", "b").into_wide();
    assert_eq!(wide.last(), Some(&0));
    assert_eq!(String::from_utf16_lossy(&wide[..wide.len() - 1]), r#""a.exe" b"#);
}

// =============================================================================
// Argument splitting and quoting
// =============================================================================

#[test]
fn test_split_arguments() {
    assert_eq!(
        split_arguments(r#"--flag "two words" C:\plain\path "esc\"aped" """#),
        vec!["--flag", "two words", r"C:\plain\path", "esc\"aped", ""]
    );
}

#[test]
fn test_split_arguments_adjacent_quotes_join_token() {
    assert_eq!(split_arguments(r#"a"b c"d e"#), vec!["ab cd", "e"]);
}

#[test]
fn test_quote_argument() {
    assert_eq!(quote_argument("plain"), "plain");
    assert_eq!(quote_argument(r"C:\dir\file"), r"C:\dir\file");
    assert_eq!(quote_argument(""), r#""""#);
    assert_eq!(quote_argument(r"C:\a b\"), r#""C:\\a b\\""#);
    assert_eq!(quote_argument(r#"say "hi""#), r#""say \"hi\"""#);
}

#[test]
fn test_join_then_split_restores_arguments() {
    let args = [
        r"C:\Program Files\shim.exe",
        "--name",
        "value with spaces",
        "",
        r#"quote"inside"#,
        r"trailing\",
    ];
    let line = join_arguments(args);
    assert_eq!(split_arguments(&line), args);
}

#[test]
fn test_joined_line_tokenizes_first_argument() {
    let line = join_arguments([r"C:\Program Files\shim.exe", "-x", "y z"]);
    assert_eq!(split_first_argument(&line), r#"-x "y z""#);
}
