//! REPL tests.
//!
//! Drive `run_repl` with in-memory input and check the exact transcript:
//! prompt, one token per line, and a clean exit at end of input.

use monkeyc::commands::run_repl;
use monkeyc::config::CliConfig;
use pretty_assertions::assert_eq;

fn transcript(input: &[u8], config: &CliConfig) -> String {
    let mut output = Vec::new();
    let result = run_repl(input, &mut output, config);
    assert!(result.is_ok(), "repl failed: {result:?}");
    String::from_utf8_lossy(&output).into_owned()
}

#[test]
fn echoes_tokens_per_line() {
    let out = transcript(b"let five = 5;\n", &CliConfig::default());
    assert_eq!(
        out,
        concat!(
            ">> ",
            "Let(\"let\")\n",
            "Identifier(\"five\")\n",
            "Assign(\"=\")\n",
            "Integer(\"5\")\n",
            "Semicolon(\";\")\n",
            ">> \n",
        )
    );
}

#[test]
fn empty_input_prints_one_prompt() {
    assert_eq!(transcript(b"", &CliConfig::default()), ">> \n");
}

#[test]
fn blank_lines_print_nothing() {
    assert_eq!(transcript(b"\n   \n", &CliConfig::default()), ">> >> >> \n");
}

#[test]
fn each_line_gets_a_fresh_scanner() {
    let out = transcript(b"10 ==\n= 10\n", &CliConfig::default());
    assert_eq!(
        out,
        ">> Integer(\"10\")\nEqual(\"==\")\n>> Assign(\"=\")\nInteger(\"10\")\n>> \n"
    );
}

#[test]
fn last_line_without_newline_is_scanned() {
    let out = transcript(b"!=", &CliConfig::default());
    assert_eq!(out, ">> NotEqual(\"!=\")\n>> \n");
}

#[test]
fn illegal_and_non_utf8_bytes_are_echoed() {
    let out = transcript(b"@ \xff\n", &CliConfig::default());
    assert_eq!(out, ">> Illegal(\"@\")\nIllegal(\"\\xff\")\n>> \n");
}

#[test]
fn spans_and_custom_prompt() {
    let config = CliConfig {
        prompt: "monkey> ".to_string(),
        show_spans: true,
        ..CliConfig::default()
    };
    let out = transcript(b"fn(x)\n", &config);
    assert_eq!(
        out,
        concat!(
            "monkey> ",
            "Function(\"fn\") @ 0..2\n",
            "LParen(\"(\") @ 2..3\n",
            "Identifier(\"x\") @ 3..4\n",
            "RParen(\")\") @ 4..5\n",
            "monkey> \n",
        )
    );
}

#[test]
fn crlf_line_endings_are_whitespace() {
    let out = transcript(b"true\r\nfalse\r\n", &CliConfig::default());
    assert_eq!(out, ">> True(\"true\")\n>> False(\"false\")\n>> \n");
}
