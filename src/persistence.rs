//! Reading and writing the decimal form of a list
//!
//! Input is a single line holding a decimal number. Read failures of any
//! kind (missing file, I/O error, malformed number) produce an empty list.
//! [`DigitList::save_list`] swallows write failures; use
//! [`DigitList::write_decimal`] to observe them.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::{Context, DigitList};


impl DigitList {
    /// Build ternary list from the first line of `reader`
    pub fn from_reader<R: BufRead>(reader: R) -> DigitList {
        DigitList::from_reader_with_context(reader, &Context::default())
    }

    /// Build list in `ctx.base()` from the first line of `reader`
    pub fn from_reader_with_context<R: BufRead>(mut reader: R, ctx: &Context) -> DigitList {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(_) => DigitList::from_decimal_str_with_context(&line, ctx),
            Err(err) => {
                debug!(error = %err, "could not read decimal input");
                DigitList::new()
            }
        }
    }

    /// Build ternary list from the decimal number stored in `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> DigitList {
        DigitList::from_file_with_context(path, &Context::default())
    }

    /// Build list in `ctx.base()` from the decimal number stored in `path`
    pub fn from_file_with_context<P: AsRef<Path>>(path: P, ctx: &Context) -> DigitList {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => DigitList::from_reader_with_context(BufReader::new(file), ctx),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "could not open decimal input");
                DigitList::new()
            }
        }
    }

    /// Write the decimal form of the value to `writer`
    ///
    /// An empty list writes nothing.
    ///
    pub fn write_decimal<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_decimal_string().as_bytes())?;
        writer.flush()
    }

    /// Replace the contents of `path` with the decimal form of the value
    ///
    /// Failures are logged and otherwise ignored.
    ///
    pub fn save_list<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        let result = File::create(path).and_then(|file| self.write_decimal(file));
        if let Err(err) = result {
            warn!(path = %path.display(), error = %err, "could not save decimal output");
        }
    }
}


#[cfg(test)]
mod test_persistence {
    use super::*;
    use crate::DigitSequence;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn reads_first_line() {
        let list = DigitList::from_reader(Cursor::new("100\n12345\n"));
        assert_eq!(list.to_string(), "10201");
    }

    #[test]
    fn reads_trimmed_line() {
        let list = DigitList::from_reader(Cursor::new("  27  \r\n"));
        assert_eq!(list.to_string(), "1000");
    }

    #[test]
    fn reader_degrades_to_empty() {
        for input in ["", "\n100", "abc\n", "0\n", "-4"].iter() {
            let list = DigitList::from_reader(Cursor::new(*input));
            assert!(list.is_empty(), "{:?}", input);
        }
    }

    #[test]
    fn invalid_utf8_is_empty() {
        let list = DigitList::from_reader(Cursor::new(vec![0xff, 0xfe, b'1']));
        assert!(list.is_empty());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number.txt");

        let decimal = "98765432109876543210987654321";
        fs::write(&path, format!("{}\n", decimal)).unwrap();

        let list = DigitList::from_file(&path);
        assert_eq!(list.base(), 3);
        assert_eq!(list.to_decimal_string(), decimal);

        let out = dir.path().join("out.txt");
        list.change_scale().save_list(&out);
        assert_eq!(fs::read_to_string(&out).unwrap(), decimal);
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number.txt");
        fs::write(&path, "some much longer previous content").unwrap();

        DigitList::from(5u8).save_list(&path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "5");
    }

    #[test]
    fn save_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        DigitList::new().save_list(&path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let list = DigitList::from_file(dir.path().join("does-not-exist"));
        assert!(list.is_empty());
    }

    #[test]
    fn directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DigitList::from_file(dir.path()).is_empty());
    }

    #[test]
    fn save_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        DigitList::from(5u8).save_list(&path);
        assert!(!path.exists());
    }

    #[test]
    fn write_decimal_to_buffer() {
        let mut buf = Vec::new();
        DigitList::from_decimal_str("100").write_decimal(&mut buf).unwrap();
        assert_eq!(buf, b"100");
    }

    #[test]
    fn from_file_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number.txt");
        fs::write(&path, "64").unwrap();
        let ctx = Context::new(8, 3).unwrap();
        let list = DigitList::from_file_with_context(&path, &ctx);
        assert_eq!(list.to_string(), "100");
        assert_eq!(list.base(), 8);
    }
}
