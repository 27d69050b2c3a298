//! The line-by-line load state machine.
//!
//! [`load`] reads a [`BufRead`] to the end and assigns every parsed entry
//! into a [`LoadTarget`]. The machine has two states:
//!
//! - **Normal**: lines have their trailing comment removed and are split
//!   into a pair; lines that do not split are skipped. A backslash in the
//!   value switches to buffering.
//! - **Buffering**: the line is comment- and continuation-stripped and
//!   appended, without a separator, to the value of the key that started the
//!   continuation. A line without a backslash returns to normal.
//!
//! Blank and full-comment lines are ignored in both states, so they neither
//! end a continuation nor contribute to it.
//!
//! Bytes that are not valid UTF-8 (e.g. Latin-1 files) are replaced with
//! U+FFFD rather than failing the load. Reaching the end of input in either
//! state is not an error; whatever was accumulated stays assigned.

use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

use tracing::{debug, warn};

use crate::classify::{continuation_index, is_blank_or_comment, strip_continuation, strip_trailing_comment};
use crate::error::FormatResult;
use crate::extract::split_pair;

/// Destination for loaded entries.
///
/// Loading merges: keys already present and absent from the input are left
/// alone, keys present in both are overwritten.
pub trait LoadTarget {
    /// Current stored value for `key`, used when appending continuations.
    fn current_value(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn assign(&mut self, key: &str, value: String);
}

impl LoadTarget for BTreeMap<String, String> {
    fn current_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn assign(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

impl LoadTarget for HashMap<String, String> {
    fn current_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn assign(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

/// Summary of a completed load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Physical lines read, including a final unterminated one.
    pub lines: usize,
    /// `key=value` lines assigned (continuation lines not counted).
    pub entries: usize,
    /// Content lines dropped because they did not form a pair.
    pub skipped: usize,
    /// The input ended while a continuation was still open.
    pub unterminated_continuation: bool,
}

/// Per-load state. Created fresh by every [`load`] call.
#[derive(Debug, Default)]
struct LoadState {
    buffering: bool,
    last_key: String,
}

impl LoadState {
    fn process_line<T>(&mut self, raw: &str, number: usize, target: &mut T, report: &mut LoadReport)
    where
        T: LoadTarget + ?Sized,
    {
        if is_blank_or_comment(raw) {
            return;
        }

        if self.buffering {
            self.continue_value(raw, target);
            return;
        }

        let (key, value) = match split_pair(strip_trailing_comment(raw)) {
            Ok(pair) => pair,
            Err(err) => {
                debug!(line = number, error = %err, "skipping malformed line");
                report.skipped += 1;
                return;
            }
        };
        let value = value.unwrap_or_default();

        if continuation_index(value).is_some() {
            self.buffering = true;
            self.last_key = key.to_string();
        }

        target.assign(key, strip_continuation(value).to_string());
        report.entries += 1;
    }

    fn continue_value<T>(&mut self, raw: &str, target: &mut T)
    where
        T: LoadTarget + ?Sized,
    {
        let content = strip_trailing_comment(raw);
        if continuation_index(content).is_none() {
            self.buffering = false;
        }

        let mut value = target.current_value(&self.last_key).unwrap_or_default();
        value.push_str(strip_continuation(content));
        target.assign(&self.last_key, value);
    }
}

/// Read `reader` to the end, assigning every entry into `target`.
///
/// Malformed lines are skipped and counted in [`LoadReport::skipped`]. Only a
/// read failure aborts the load; entries assigned before the failure remain
/// in `target`.
pub fn load<R, T>(reader: &mut R, target: &mut T) -> FormatResult<LoadReport>
where
    R: BufRead + ?Sized,
    T: LoadTarget + ?Sized,
{
    let mut state = LoadState::default();
    let mut report = LoadReport::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        report.lines += 1;
        let line = String::from_utf8_lossy(&buf);
        state.process_line(&line, report.lines, target, &mut report);
    }

    if state.buffering {
        warn!(key = %state.last_key, "input ended inside a continuation");
        report.unterminated_continuation = true;
    }

    debug!(
        lines = report.lines,
        entries = report.entries,
        skipped = report.skipped,
        "properties loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    use crate::error::FormatError;

    fn load_str(input: &str) -> (BTreeMap<String, String>, LoadReport) {
        let mut map = BTreeMap::new();
        let report = load(&mut Cursor::new(input), &mut map).unwrap();
        (map, report)
    }

    /// Yields `data` and then fails every subsequent read.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk on fire")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn simple_pairs() {
        let (map, report) = load_str("a=1\nb = two\n  c  =  three  \n");
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "two");
        assert_eq!(map["c"], "three");
        assert_eq!(report.lines, 3);
        assert_eq!(report.entries, 3);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn final_line_without_terminator() {
        let (map, report) = load_str("a=1\nlast=value");
        assert_eq!(map["last"], "value");
        assert_eq!(report.lines, 2);
    }

    #[test]
    fn crlf_input() {
        let (map, _) = load_str("a=1\r\nb=2\r\n");
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "2");
    }

    #[test]
    fn comments_and_blanks_are_ignored() {
        let (map, report) = load_str("# header\n\n   \n! bang\nkey=value\n#other=1\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map["key"], "value");
        assert_eq!(report.skipped, 0);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn trailing_comment_is_stripped() {
        let (map, _) = load_str("port = 8080 # default\nname=demo!x\n");
        assert_eq!(map["port"], "8080");
        assert_eq!(map["name"], "demo");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let (map, report) = load_str("notapair\na=1\n=nokey\n");
        assert_eq!(map.len(), 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn empty_value_loads_as_empty_string() {
        let (map, _) = load_str("empty=\n");
        assert_eq!(map["empty"], "");
    }

    #[test]
    fn continuation_concatenates_literally() {
        let (map, report) = load_str("a=foo\\\nbar\n");
        assert_eq!(map["a"], "foobar");
        assert!(!report.unterminated_continuation);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn continuation_keeps_space_before_marker() {
        let (map, _) = load_str("greeting=hello \\\n   world\n");
        assert_eq!(map["greeting"], "hello world");
    }

    #[test]
    fn multi_line_continuation() {
        let (map, _) = load_str("list=a,\\\nb,\\\nc\nnext=1\n");
        assert_eq!(map["list"], "a,b,c");
        assert_eq!(map["next"], "1");
    }

    #[test]
    fn continuation_line_comment_is_stripped() {
        let (map, _) = load_str("a=x\\\ny # tail\n");
        assert_eq!(map["a"], "xy");
    }

    #[test]
    fn continuation_line_looking_like_pair_is_content() {
        let (map, _) = load_str("a=x\\\nb=y\n");
        assert_eq!(map["a"], "xb=y");
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn comment_line_inside_continuation_is_ignored() {
        let (map, report) = load_str("a=foo\\\n# note\nbar\n");
        assert_eq!(map["a"], "foobar");
        assert_eq!(report.skipped, 0);
        assert!(!report.unterminated_continuation);
    }

    #[test]
    fn blank_line_inside_continuation_is_ignored() {
        let (map, report) = load_str("a=x\\\n\n   \n! bang\ny\nb=z\n");
        assert_eq!(map["a"], "xy");
        assert_eq!(map["b"], "z");
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn open_continuation_at_eof_keeps_accumulated_value() {
        let (map, report) = load_str("a=foo\\\nbar\\");
        assert_eq!(map["a"], "foobar");
        assert!(report.unterminated_continuation);
    }

    #[test]
    fn later_assignment_overwrites() {
        let (map, report) = load_str("k=1\nk=2\n");
        assert_eq!(map["k"], "2");
        assert_eq!(report.entries, 2);
    }

    #[test]
    fn load_merges_into_existing_entries() {
        let mut map = HashMap::new();
        map.insert("kept".to_string(), "old".to_string());
        map.insert("k".to_string(), "old".to_string());
        load(&mut Cursor::new("k=new\n"), &mut map).unwrap();
        assert_eq!(map["kept"], "old");
        assert_eq!(map["k"], "new");
    }

    #[test]
    fn read_error_aborts_load() {
        let reader = FailingReader {
            data: Cursor::new(b"a=1\n".to_vec()),
        };
        let mut reader = BufReader::new(reader);
        let mut map = BTreeMap::new();

        let err = load(&mut reader, &mut map).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
        assert_eq!(map["a"], "1");
    }

    #[test]
    fn latin1_bytes_do_not_abort_load() {
        let mut map = BTreeMap::new();
        let report = load(&mut Cursor::new(b"name=caf\xe9\nport=8080\n".to_vec()), &mut map).unwrap();
        assert_eq!(report.entries, 2);
        assert_eq!(map["name"], "caf\u{fffd}");
        assert_eq!(map["port"], "8080");
    }
}
