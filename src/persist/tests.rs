#![cfg(test)]

use std::io::Cursor;

use super::*;

#[test]
fn test_i32_round_trip() {
    let mut buf = Vec::new();
    for value in [0, 1, -1, 42, i32::MIN, i32::MAX] {
        write_i32(&mut buf, value).expect("writing to a Vec should not fail");
    }
    assert_eq!(buf.len(), 24, "Each i32 should occupy exactly 4 bytes.");
    assert_eq!(&buf[..4], &[0, 0, 0, 0], "Encoding should be little-endian.");
    assert_eq!(&buf[4..8], &[1, 0, 0, 0], "Encoding should be little-endian.");

    let mut reader = Cursor::new(buf);
    for expected in [0, 1, -1, 42, i32::MIN, i32::MAX] {
        assert_eq!(
            read_i32(&mut reader).expect("reading written values should not fail"),
            expected,
            "Values should round-trip exactly."
        );
    }
}

#[test]
fn test_short_read_is_io_error() {
    let mut reader = Cursor::new(vec![1_u8, 2]);
    let err = read_i32(&mut reader).expect_err("a 2 byte reader cannot hold an i32");
    assert!(err.is_io(), "A short read should surface as an I/O error.");
}

#[test]
fn test_negative_count_rejected() {
    let mut buf = Vec::new();
    write_i32(&mut buf, -5).expect("writing to a Vec should not fail");

    let err = read_count(&mut Cursor::new(buf)).expect_err("-5 is not a valid count");
    assert!(
        err.is_negative_count(),
        "A negative count should be reported as malformed data, not I/O failure."
    );
}

#[test]
fn test_record_round_trip() {
    let mut buf = Vec::new();
    write_record(&mut buf, "hello").expect("writing to a Vec should not fail");
    write_record(&mut buf, "").expect("empty records are valid");
    write_record(&mut buf, "däta").expect("multi-byte UTF-8 is valid");

    let mut reader = Cursor::new(buf);
    assert_eq!(read_record(&mut reader).expect("record should read back"), "hello");
    assert_eq!(read_record(&mut reader).expect("record should read back"), "");
    assert_eq!(read_record(&mut reader).expect("record should read back"), "däta");
}

#[test]
fn test_invalid_utf8_record_rejected() {
    let mut buf = Vec::new();
    write_count(&mut buf, 2).expect("writing to a Vec should not fail");
    buf.extend([0xFF, 0xFE]);

    let err = read_record(&mut Cursor::new(buf)).expect_err("0xFF 0xFE is not UTF-8");
    assert!(err.is_utf_8(), "Non-UTF-8 record bytes should be malformed data.");
}

#[test]
fn test_count_line_round_trip() {
    let mut buf = Vec::new();
    write_count_line(&mut buf, 17).expect("writing to a Vec should not fail");
    assert_eq!(buf, b"17\n");

    assert_eq!(
        read_count_line(&mut Cursor::new(buf)).expect("count line should parse"),
        17
    );

    let err = read_count_line(&mut Cursor::new(b"pear\n".to_vec()))
        .expect_err("a word is not a count");
    assert!(err.is_parse(), "A non-numeric count line should be malformed data.");
}
