//! Line reader with universal newlines.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and each is yielded as a
/// single `\n`. A final line without a terminator is yielded as is, so
/// `"h"` and `"h\n"` still differ.
pub struct RawLines<R> {
    reader: R,
    /// Last line ended in `\r`; a leading `\n` belongs to it
    pending_cr: bool,
    done: bool,
}

impl<R: BufRead> RawLines<R> {
    /// Wrap a buffered reader
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending_cr: false,
            done: false,
        }
    }

    fn read_line_bytes(&mut self, line: &mut Vec<u8>) -> io::Result<()> {
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if available.is_empty() {
                return Ok(());
            }

            if self.pending_cr {
                self.pending_cr = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    line.extend_from_slice(&available[..end]);
                    line.push(b'\n');
                    self.pending_cr = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        if let Err(err) = self.read_line_bytes(&mut line) {
            self.done = true;
            return Some(Err(err));
        }
        if line.is_empty() {
            self.done = true;
            return None;
        }

        match String::from_utf8(line) {
            Ok(line) => Some(Ok(line)),
            Err(err) => {
                self.done = true;
                Some(Err(io::Error::new(io::ErrorKind::InvalidData, err)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn collect(input: &[u8]) -> Vec<io::Result<String>> {
        RawLines::new(Cursor::new(input.to_vec())).collect()
    }

    fn collect_ok(input: &[u8]) -> Vec<String> {
        collect(input).into_iter().map(Result::unwrap).collect()
    }

    #[test]
    fn test_lf_lines() {
        assert_eq!(collect_ok(b"a\nb\nc"), vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn test_crlf_becomes_lf() {
        assert_eq!(collect_ok(b"h\r\n0.5 a b\r\n"), vec!["h\n", "0.5 a b\n"]);
    }

    #[test]
    fn test_lone_cr_ends_line() {
        assert_eq!(
            collect_ok(b"h\n0.5 a b\r0.6 c d\n"),
            vec!["h\n", "0.5 a b\n", "0.6 c d\n"]
        );
    }

    #[test]
    fn test_mixed_terminators() {
        assert_eq!(
            collect_ok(b"a\r\rb\r\n\nc\r"),
            vec!["a\n", "\n", "b\n", "\n", "c\n"]
        );
    }

    #[test]
    fn test_crlf_split_across_buffer_refills() {
        // Capacity 1 forces the \r and \n into separate fill_buf calls
        let reader = BufReader::with_capacity(1, Cursor::new(b"ab\r\ncd\r\n".to_vec()));
        let lines: Vec<String> = RawLines::new(reader).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["ab\n", "cd\n"]);
    }

    #[test]
    fn test_unterminated_last_line_kept() {
        assert_eq!(collect_ok(b"h"), vec!["h"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_blank_lines_are_yielded() {
        assert_eq!(collect_ok(b"\n\n"), vec!["\n", "\n"]);
    }

    #[test]
    fn test_invalid_utf8_is_error_then_stops() {
        let results = collect(b"\xff\xfe\nok\n");
        assert_eq!(results.len(), 1);
        let err = results.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
