//! Shared handle to a readable byte stream.
//!
//! Response bodies arrive as readers, not buffers. `ValueStream` lets a
//! reader travel inside a [`Value`](crate::Value) while staying cloneable:
//! clones share the same underlying reader, and draining consumes it for
//! every holder.

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;

use parking_lot::Mutex;

/// A cloneable handle to a `Read` source carried inside a dynamic value.
///
/// Draining blocks for as long as the underlying reader blocks; no timeout
/// is imposed here.
#[derive(Clone)]
pub struct ValueStream {
    inner: Arc<Mutex<Box<dyn Read + Send>>>,
}

impl ValueStream {
    /// Wrap a reader into a shared stream handle.
    pub fn new<R: Read + Send + 'static>(reader: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(reader))),
        }
    }

    /// Read the stream to exhaustion and return the raw bytes.
    pub fn drain_to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut reader = self.inner.lock();
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the stream to exhaustion and return its contents as text.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn drain_to_string(&self) -> io::Result<String> {
        let bytes = self.drain_to_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Whether two handles share the same underlying reader.
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ValueStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueStream(..)")
    }
}

// Identity equality: a stream has no observable content until drained.
impl PartialEq for ValueStream {
    fn eq(&self, other: &Self) -> bool {
        self.same_handle(other)
    }
}

impl Eq for ValueStream {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_to_string() {
        let stream = ValueStream::new("hello body".as_bytes());
        assert_eq!(stream.drain_to_string().unwrap(), "hello body");
    }

    #[test]
    fn test_drain_consumes_for_all_clones() {
        let stream = ValueStream::new("once".as_bytes());
        let copy = stream.clone();
        assert_eq!(stream.drain_to_bytes().unwrap(), b"once");
        assert_eq!(copy.drain_to_bytes().unwrap(), b"");
    }

    #[test]
    fn test_equality_is_identity() {
        let a = ValueStream::new("x".as_bytes());
        let b = ValueStream::new("x".as_bytes());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
