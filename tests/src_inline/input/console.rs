use std::io::Cursor;

use super::*;
use crate::input::validate::parse_count;

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, out) = console.into_parts();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_ask_strips_line_terminator() {
    let mut c = console("hello\r\nworld\n");
    assert_eq!(c.ask("> ").unwrap(), "hello");
    assert_eq!(c.ask("> ").unwrap(), "world");
    assert_eq!(output(c), "> > ");
}

#[test]
fn test_ask_last_line_without_newline() {
    let mut c = console("tail");
    assert_eq!(c.ask("? ").unwrap(), "tail");
}

#[test]
fn test_ask_reports_eof() {
    let mut c = console("");
    let err = c.ask("Enter the number of students: ").unwrap_err();
    match err {
        InputError::UnexpectedEof { prompt } => {
            assert_eq!(prompt, "Enter the number of students:")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ask_until_reprompts_with_message() {
    let mut c = console("abc\n0\n3\n");
    let n = c.ask_until("N: ", parse_count).unwrap();
    assert_eq!(n, 3);
    assert_eq!(
        output(c),
        "N: Invalid input. Please enter a valid integer.\n\
         N: Please enter a positive number greater than 0.\n\
         N: "
    );
}

#[test]
fn test_ask_until_propagates_eof_after_rejections() {
    let mut c = console("abc\n");
    let err = c.ask_until("N: ", parse_count).unwrap_err();
    assert!(matches!(err, InputError::UnexpectedEof { .. }));
}

#[test]
fn test_say_and_emit() {
    let mut c = console("");
    c.say("line").unwrap();
    c.emit("\nblock\n").unwrap();
    assert_eq!(output(c), "line\n\nblock\n");
}
