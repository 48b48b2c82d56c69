//! Minimal single-disk ZIP writer using the "stored" method.
//!
//! Layout:
//!
//! ```text
//! [local header + data] * n
//! [central directory header] * n
//! [end of central directory]
//! ```
//!
//! All integers are little-endian. Sizes are written twice (compressed and
//! uncompressed) and are always equal since nothing is compressed.

use crate::crc32::crc32;
use crate::dos_time::DosDateTime;

pub const LOCAL_HEADER_SIGNATURE: u32 = 0x0403_4B50;
pub const CENTRAL_HEADER_SIGNATURE: u32 = 0x0201_4B50;
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4B50;

/// "Version needed to extract" and "version made by": 2.0.
const VERSION: u16 = 20;
const METHOD_STORED: u16 = 0;

const LOCAL_HEADER_LEN: usize = 30;
const CENTRAL_HEADER_LEN: usize = 46;
const END_RECORD_LEN: usize = 22;

/// One file in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    pub path: String,
    pub data: Vec<u8>,
}

impl ZipEntry {
    pub fn new(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }
}

/// An ordered list of entries, serialized in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ZipArchive {
    entries: Vec<ZipEntry>,
}

impl ZipArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: ZipEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Serialize the archive, stamping every entry with `modified`.
    ///
    /// No ZIP64 support: entries and the archive must stay under 4 GiB and
    /// 65535 entries. Larger inputs are logged and produce a corrupt archive.
    #[must_use]
    pub fn to_bytes(&self, modified: DosDateTime) -> Vec<u8> {
        let capacity: usize = self
            .entries
            .iter()
            .map(|e| LOCAL_HEADER_LEN + CENTRAL_HEADER_LEN + 2 * e.path.len() + e.data.len())
            .sum::<usize>()
            + END_RECORD_LEN;

        let mut local = Vec::with_capacity(capacity);
        let mut central = Vec::new();

        for entry in &self.entries {
            let name = entry.path.as_bytes();
            let crc = crc32(&entry.data);
            let size = len_u32(entry.data.len(), "entry size");
            let name_len = len_u16(name.len(), "file name length");
            let offset = len_u32(local.len(), "local header offset");

            put_u32(&mut local, LOCAL_HEADER_SIGNATURE);
            put_u16(&mut local, VERSION);
            put_u16(&mut local, 0); // flags
            put_u16(&mut local, METHOD_STORED);
            put_u16(&mut local, modified.time);
            put_u16(&mut local, modified.date);
            put_u32(&mut local, crc);
            put_u32(&mut local, size);
            put_u32(&mut local, size);
            put_u16(&mut local, name_len);
            put_u16(&mut local, 0); // extra field length
            local.extend_from_slice(name);
            local.extend_from_slice(&entry.data);

            put_u32(&mut central, CENTRAL_HEADER_SIGNATURE);
            put_u16(&mut central, VERSION); // made by
            put_u16(&mut central, VERSION); // needed
            put_u16(&mut central, 0);
            put_u16(&mut central, METHOD_STORED);
            put_u16(&mut central, modified.time);
            put_u16(&mut central, modified.date);
            put_u32(&mut central, crc);
            put_u32(&mut central, size);
            put_u32(&mut central, size);
            put_u16(&mut central, name_len);
            put_u16(&mut central, 0); // extra
            put_u16(&mut central, 0); // comment
            put_u16(&mut central, 0); // disk number
            put_u16(&mut central, 0); // internal attributes
            put_u32(&mut central, 0); // external attributes
            put_u32(&mut central, offset);
            central.extend_from_slice(name);
        }

        let count = len_u16(self.entries.len(), "entry count");
        let central_size = len_u32(central.len(), "central directory size");
        let central_offset = len_u32(local.len(), "central directory offset");

        let mut out = local;
        out.extend_from_slice(&central);
        put_u32(&mut out, END_OF_CENTRAL_DIRECTORY_SIGNATURE);
        put_u16(&mut out, 0); // this disk
        put_u16(&mut out, 0); // disk with central directory
        put_u16(&mut out, count);
        put_u16(&mut out, count);
        put_u32(&mut out, central_size);
        put_u32(&mut out, central_offset);
        put_u16(&mut out, 0); // comment length
        out
    }
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

// Fields saturate past the classic ZIP limits (no ZIP64). The archive is
// unreadable once that happens.
fn len_u16(len: usize, field: &'static str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| {
        tracing::warn!(field, len, limit = u16::MAX, "ZIP field overflow, archive will be corrupt");
        u16::MAX
    })
}

fn len_u32(len: usize, field: &'static str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| {
        tracing::warn!(field, len, limit = u32::MAX, "ZIP field overflow, archive will be corrupt");
        u32::MAX
    })
}
