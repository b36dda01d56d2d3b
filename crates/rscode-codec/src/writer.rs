use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::codec::Transcoder;
use crate::error::{RecordError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Transcodes records and writes them, terminated, to any `Write` stream.
///
/// Every record is flushed as soon as it is written.
pub struct RecordWriter<T> {
    inner: T,
    buf: BytesMut,
    transcoder: Transcoder,
}

impl<T: Write> RecordWriter<T> {
    pub fn new(inner: T, transcoder: Transcoder) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            transcoder,
        }
    }

    /// Transcode `record`, write it with its terminator and flush.
    pub fn write_record(&mut self, record: &[u8]) -> Result<()> {
        self.buf.clear();
        self.transcoder.transcode(record, &mut self.buf);

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(RecordError::OutputClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }
    }

    pub fn transcoder(&self) -> &Transcoder {
        &self.transcoder
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
