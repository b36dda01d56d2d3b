use std::io::{ErrorKind, Read};

use bytes::{Buf, Bytes, BytesMut};
use tracing::debug;

use crate::config::Terminator;
use crate::error::{RecordError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// One input record, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub payload: Bytes,
    /// False for trailing data that hit end of stream before a terminator.
    pub terminated: bool,
}

/// Splits any `Read` stream into terminator-delimited records.
pub struct RecordReader<T> {
    inner: T,
    buf: BytesMut,
    terminator: Terminator,
    eof: bool,
}

impl<T: Read> RecordReader<T> {
    /// Create a reader that splits records on `terminator`.
    pub fn new(inner: T, terminator: Terminator) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            terminator,
            eof: false,
        }
    }

    /// Read the next record (blocking).
    ///
    /// Returns `Ok(None)` once the stream is exhausted. Unterminated trailing
    /// bytes come back as a final record with `terminated == false`.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        let delimiter = self.terminator.byte();
        let mut scanned = 0usize;
        loop {
            if let Some(offset) = self.buf[scanned..].iter().position(|&b| b == delimiter) {
                let payload = self.buf.split_to(scanned + offset).freeze();
                self.buf.advance(1);
                return Ok(Some(Record {
                    payload,
                    terminated: true,
                }));
            }
            scanned = self.buf.len();

            if self.eof {
                if self.buf.is_empty() {
                    return Ok(None);
                }
                debug!(len = self.buf.len(), "end of stream inside a record");
                let payload = self.buf.split().freeze();
                return Ok(Some(Record {
                    payload,
                    terminated: false,
                }));
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(RecordError::Io(err)),
            };

            if read == 0 {
                debug!("end of input stream");
                self.eof = true;
            } else {
                self.buf.extend_from_slice(&chunk[..read]);
            }
        }
    }

    /// The terminator records are split on.
    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read> Iterator for RecordReader<T> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn payloads(input: &[u8], terminator: Terminator) -> Vec<(Vec<u8>, bool)> {
        RecordReader::new(Cursor::new(input.to_vec()), terminator)
            .map(|record| {
                let record = record.unwrap();
                (record.payload.to_vec(), record.terminated)
            })
            .collect()
    }

    #[test]
    fn splits_lines() {
        assert_eq!(
            payloads(b"one\ntwo\n", Terminator::Newline),
            vec![(b"one".to_vec(), true), (b"two".to_vec(), true)]
        );
    }

    #[test]
    fn empty_lines_are_records() {
        assert_eq!(
            payloads(b"\n\nx\n", Terminator::Newline),
            vec![(vec![], true), (vec![], true), (b"x".to_vec(), true)]
        );
    }

    #[test]
    fn unterminated_tail_is_flagged() {
        assert_eq!(
            payloads(b"one\ntail", Terminator::Newline),
            vec![(b"one".to_vec(), true), (b"tail".to_vec(), false)]
        );
    }

    #[test]
    fn empty_stream_has_no_records() {
        assert!(payloads(b"", Terminator::Newline).is_empty());
        assert!(payloads(b"", Terminator::Nul).is_empty());
    }

    #[test]
    fn nul_mode_keeps_newlines_in_records() {
        assert_eq!(
            payloads(b"a\nb\0c\0", Terminator::Nul),
            vec![(b"a\nb".to_vec(), true), (b"c".to_vec(), true)]
        );
    }

    #[test]
    fn newline_mode_keeps_nul_bytes_in_records() {
        assert_eq!(
            payloads(b"a\0b\n", Terminator::Newline),
            vec![(b"a\0b".to_vec(), true)]
        );
    }

    #[test]
    fn record_larger_than_initial_buffer() {
        let mut input = vec![b'z'; 3 * READ_CHUNK_SIZE + 17];
        input.push(b'\n');
        let records = payloads(&input, Terminator::Newline);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0.len(), 3 * READ_CHUNK_SIZE + 17);
    }

    #[test]
    fn partial_read_handling() {
        let byte_reader = ByteByByteReader {
            bytes: b"slow\nread\n".to_vec(),
            pos: 0,
        };
        let mut reader = RecordReader::new(byte_reader, Terminator::Newline);

        assert_eq!(reader.read_record().unwrap().unwrap().payload.as_ref(), b"slow");
        assert_eq!(reader.read_record().unwrap().unwrap().payload.as_ref(), b"read");
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn interrupted_read_retries() {
        let reader = FailOnceThenData {
            kind: ErrorKind::Interrupted,
            failed: false,
            data: Cursor::new(b"ok\n".to_vec()),
        };
        let mut records = RecordReader::new(reader, Terminator::Newline);
        let record = records.read_record().unwrap().unwrap();
        assert_eq!(record.payload.as_ref(), b"ok");
    }

    #[test]
    fn read_error_propagates() {
        let reader = FailOnceThenData {
            kind: ErrorKind::BrokenPipe,
            failed: false,
            data: Cursor::new(b"ok\n".to_vec()),
        };
        let mut records = RecordReader::new(reader, Terminator::Newline);
        let err = records.read_record().unwrap_err();
        assert!(matches!(err, RecordError::Io(e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn accessors_and_into_inner() {
        let reader = RecordReader::new(Cursor::new(Vec::<u8>::new()), Terminator::Nul);
        assert_eq!(reader.terminator(), Terminator::Nul);
        let _ = reader.get_ref();
        let _inner = reader.into_inner();
    }

    #[derive(Debug)]
    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct FailOnceThenData {
        kind: ErrorKind,
        failed: bool,
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailOnceThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(std::io::Error::from(self.kind));
            }
            self.data.read(buf)
        }
    }
}
