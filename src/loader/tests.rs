use crate::error::Error;
use crate::loader::{parse_line, parse_program};
use std::io::Cursor;

#[test]
fn loader_print8() {
    let source = "\
# print8.ls8: Print the number 8 on the screen

10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";

    assert_eq!(
        parse_program(Cursor::new(source)).unwrap(),
        vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 1]
    );
}

#[test]
fn loader_whitespace_and_comments() {
    let source = "  00000001  \n\n   # nothing here\n\t11111111#trailing\n";

    assert_eq!(parse_program(Cursor::new(source)).unwrap(), vec![1, 0xFF]);
}

#[test]
fn loader_empty() {
    assert_eq!(parse_program(Cursor::new("")).unwrap(), Vec::<u8>::new());
    assert_eq!(
        parse_program(Cursor::new("# just a comment\n\n")).unwrap(),
        Vec::<u8>::new()
    );
}

#[test]
fn loader_malformed_line() {
    let source = "00000001\n\n00000002 # not binary\n";

    match parse_program(Cursor::new(source)) {
        Err(Error::Format { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text, "00000002 # not binary");
        }
        other => panic!("expected a format error, got {:?}", other),
    }
}

#[test]
fn loader_rejects_signs_and_words() {
    assert!(matches!(
        parse_program(Cursor::new("+0001\n")),
        Err(Error::Format { line: 1, .. })
    ));
    assert!(matches!(
        parse_program(Cursor::new("LDI\n")),
        Err(Error::Format { line: 1, .. })
    ));
}

#[test]
fn loader_rejects_values_over_a_byte() {
    assert!(matches!(
        parse_program(Cursor::new("00000001\n100000000\n")),
        Err(Error::Format { line: 2, .. })
    ));
}

#[test]
fn loader_single_lines() {
    assert_eq!(parse_line(1, "00101010").unwrap(), Some(42));
    assert_eq!(parse_line(1, "   # only a comment").unwrap(), None);
    assert_eq!(parse_line(1, "").unwrap(), None);

    match parse_line(12, " 0b1010 # prefixed ") {
        Err(Error::Format { line, text }) => {
            assert_eq!(line, 12);
            assert_eq!(text, "0b1010 # prefixed");
        }
        other => panic!("expected a format error, got {:?}", other),
    }
}
