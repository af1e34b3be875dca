use load_status::prelude::*;
use std::io::{self, Cursor, Read};

/// Mock ResourceSource serving in-memory bytes
pub struct MockResourceSource {
    bytes: Vec<u8>,
    size_hint: Option<u64>,
}

#[allow(dead_code)]
impl MockResourceSource {
    /// Source whose size hint matches its content
    pub fn sized(bytes: Vec<u8>) -> Self {
        let size_hint = Some(bytes.len() as u64);
        Self { bytes, size_hint }
    }

    /// Source without a size hint
    pub fn without_hint(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            size_hint: None,
        }
    }

    /// Source announcing a size different from its content
    pub fn with_hint(bytes: Vec<u8>, size_hint: u64) -> Self {
        Self {
            bytes,
            size_hint: Some(size_hint),
        }
    }
}

impl ResourceSource for MockResourceSource {
    fn describe(&self) -> String {
        "mock".to_string()
    }

    fn open(&self) -> Result<OpenedResource> {
        Ok(OpenedResource::new(
            Box::new(Cursor::new(self.bytes.clone())),
            self.size_hint,
        ))
    }
}

/// Mock ResourceSource whose stream breaks after `good_bytes`
pub struct FailingResourceSource {
    pub good_bytes: usize,
    pub size_hint: Option<u64>,
}

struct FailingReader {
    remaining: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionAborted,
                "connection aborted",
            ));
        }
        let n = self.remaining.min(buf.len());
        buf[..n].fill(0);
        self.remaining -= n;
        Ok(n)
    }
}

impl ResourceSource for FailingResourceSource {
    fn describe(&self) -> String {
        "failing-mock".to_string()
    }

    fn open(&self) -> Result<OpenedResource> {
        Ok(OpenedResource::new(
            Box::new(FailingReader {
                remaining: self.good_bytes,
            }),
            self.size_hint,
        ))
    }
}
