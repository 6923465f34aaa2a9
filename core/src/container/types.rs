//! container/types.rs
//! Named buffers, configuration, and the parsed container view.

use bytes::Bytes;

use crate::constants::NAME_BUFFER_INDEX;
use crate::headers::{Endianness, Header};
use crate::layout::ByteRange;
use crate::names::decode_names;
use crate::parallelism::ParallelismProfile;
use crate::telemetry::LayoutStats;
use crate::types::BfastError;

/// A name plus a contiguous run of bytes. Anything the encoder can pack.
pub trait NamedBytes {
    fn name(&self) -> &str;
    fn bytes(&self) -> &[u8];
}

/// Owned named buffer. `data` is reference-counted, so buffers produced by
/// `unpack_owned` share the input allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBuffer {
    pub name: String,
    pub data: Bytes,
}

impl NamedBuffer {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self { name: name.into(), data: data.into() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn view(&self) -> NamedBufferView<'_> {
        NamedBufferView { name: &self.name, data: &self.data }
    }
}

impl NamedBytes for NamedBuffer {
    fn name(&self) -> &str {
        &self.name
    }
    fn bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Borrowed named buffer: a view into a decoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedBufferView<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
}

impl NamedBufferView<'_> {
    /// Copy name and bytes out of the underlying stream.
    pub fn to_owned_buffer(&self) -> NamedBuffer {
        NamedBuffer::new(self.name, Bytes::copy_from_slice(self.data))
    }
}

impl NamedBytes for NamedBufferView<'_> {
    fn name(&self) -> &str {
        self.name
    }
    fn bytes(&self) -> &[u8] {
        self.data
    }
}

impl<N: AsRef<str>, D: AsRef<[u8]>> NamedBytes for (N, D) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }
    fn bytes(&self) -> &[u8] {
        self.1.as_ref()
    }
}

/// Encoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackConfig {
    /// Byte order of every multi-byte field. `Swapped` targets readers of the
    /// opposite endianness.
    pub endianness: Endianness,
    /// How the buffer copy step is spread over threads.
    pub parallelism: ParallelismProfile,
}

impl PackConfig {
    pub fn new(endianness: Endianness, parallelism: ParallelismProfile) -> Self {
        Self { endianness, parallelism }
    }

    pub fn single_threaded() -> Self {
        Self {
            endianness: Endianness::Same,
            parallelism: ParallelismProfile::single_threaded(),
        }
    }
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpackConfig {
    /// Also reject occupied buffers that do not begin on an aligned offset.
    pub strict_alignment: bool,
}

impl UnpackConfig {
    pub fn strict() -> Self {
        Self { strict_alignment: true }
    }
}

/// A validated BFAST stream: header, ranges, and one zero-copy slice per range.
///
/// `buffers[0]` is the name buffer; data buffers follow. Nothing is mutated
/// after parsing, so a container can be shared and read concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfastContainer<'a> {
    pub(crate) header: Header,
    pub(crate) endianness: Endianness,
    pub(crate) ranges: Vec<ByteRange>,
    pub(crate) buffers: Vec<&'a [u8]>,
}

impl<'a> BfastContainer<'a> {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// All ranges, name buffer first.
    pub fn ranges(&self) -> &[ByteRange] {
        &self.ranges
    }

    /// All buffers, name buffer first.
    pub fn raw_buffers(&self) -> &[&'a [u8]] {
        &self.buffers
    }

    pub fn name_buffer(&self) -> &'a [u8] {
        self.buffers[NAME_BUFFER_INDEX]
    }

    /// Data buffers only (buffers 1..N).
    pub fn data_buffers(&self) -> &[&'a [u8]] {
        &self.buffers[NAME_BUFFER_INDEX + 1..]
    }

    /// Number of data buffers (name buffer excluded).
    pub fn len(&self) -> usize {
        self.buffers.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Data buffer `index` (0-based, name buffer excluded). O(1).
    pub fn buffer(&self, index: usize) -> Option<&'a [u8]> {
        self.data_buffers().get(index).copied()
    }

    /// Names of the data buffers, in order.
    pub fn names(&self) -> Result<Vec<&'a str>, BfastError> {
        decode_names(self.name_buffer(), self.len())
    }

    /// Data buffers zipped with their names.
    pub fn named_buffers(&self) -> Result<Vec<NamedBufferView<'a>>, BfastError> {
        let names = self.names()?;
        Ok(names
            .into_iter()
            .zip(self.data_buffers().iter().copied())
            .map(|(name, data)| NamedBufferView { name, data })
            .collect())
    }

    /// First data buffer called `name`.
    pub fn get(&self, name: &str) -> Result<Option<&'a [u8]>, BfastError> {
        let names = self.names()?;
        Ok(names
            .iter()
            .position(|n| *n == name)
            .and_then(|i| self.buffer(i)))
    }

    /// Byte accounting up to `data_end`.
    pub fn stats(&self) -> LayoutStats {
        LayoutStats::from_ranges(&self.ranges, self.header.data_start, self.header.data_end)
    }
}
