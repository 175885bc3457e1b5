//! # Byte Sources
//!
//! The stream boundary consumed by the varint and array decoders.
//!
//! A [`ByteSource`] is any sequential, forward-only reader of bytes. Sources
//! backed by memory also report how many bytes remain, which lets the array
//! reader reject a length prefix that overruns the source before it allocates.

use crate::error::{CodecError, Result};
use bytes::{Buf, Bytes, BytesMut};
use std::io::{self, Cursor, Read};

/// Sequential byte reader used by the decoders.
pub trait ByteSource {
    /// Read one byte, or `None` at end of data.
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Fill `buf` completely or fail with [`CodecError::StreamExhausted`].
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Number of bytes left, when the source knows it.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact(buf)
    }

    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }
}

impl ByteSource for &[u8] {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let data = *self;
        match data.split_first() {
            Some((&byte, rest)) => {
                *self = rest;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let data = *self;
        if data.len() < buf.len() {
            // Consume what is there so the cursor matches a short read
            *self = &data[data.len()..];
            return Err(CodecError::StreamExhausted);
        }
        let (head, rest) = data.split_at(buf.len());
        buf.copy_from_slice(head);
        *self = rest;
        Ok(())
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let pos = self.position();
        let byte = usize::try_from(pos)
            .ok()
            .and_then(|p| self.get_ref().as_ref().get(p).copied());
        if byte.is_some() {
            self.set_position(pos + 1);
        }
        Ok(byte)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        Read::read_exact(self, buf).map_err(map_read_error)
    }

    fn remaining(&self) -> Option<usize> {
        let len = self.get_ref().as_ref().len();
        let pos = usize::try_from(self.position()).unwrap_or(usize::MAX);
        Some(len.saturating_sub(pos))
    }
}

impl ByteSource for Bytes {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.has_remaining().then(|| self.get_u8()))
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if Buf::remaining(self) < buf.len() {
            self.advance(Buf::remaining(self));
            return Err(CodecError::StreamExhausted);
        }
        self.copy_to_slice(buf);
        Ok(())
    }

    fn remaining(&self) -> Option<usize> {
        Some(Buf::remaining(self))
    }
}

impl ByteSource for BytesMut {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.has_remaining().then(|| self.get_u8()))
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if Buf::remaining(self) < buf.len() {
            self.advance(Buf::remaining(self));
            return Err(CodecError::StreamExhausted);
        }
        self.copy_to_slice(buf);
        Ok(())
    }

    fn remaining(&self) -> Option<usize> {
        Some(Buf::remaining(self))
    }
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`] of unknown length.
///
/// Unexpected EOF maps to [`CodecError::StreamExhausted`]; every other I/O
/// failure is surfaced as [`CodecError::Io`]. Interrupted reads are retried.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CodecError::Io(e)),
            }
        }
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(map_read_error)
    }
}

fn map_read_error(e: io::Error) -> CodecError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        CodecError::StreamExhausted
    } else {
        CodecError::Io(e)
    }
}
