//! container/builder.rs
//!
//! Incremental construction of a container.
//!
//! The builder only collects buffers. Header and layout are derived from the
//! current buffer list on every call, so there is no cached state to go stale.

use bytes::Bytes;

use crate::container::encode::{pack_into, pack_with, plan_layout};
use crate::container::types::{NamedBuffer, PackConfig};
use crate::headers::{Endianness, Header};
use crate::layout::LayoutPlan;
use crate::types::BfastError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BfastBuilder {
    buffers: Vec<NamedBuffer>,
}

impl BfastBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a buffer. `name` must not contain NUL.
    pub fn add(&mut self, name: impl Into<String>, data: impl Into<Bytes>) -> &mut Self {
        self.buffers.push(NamedBuffer::new(name, data));
        self
    }

    /// Consuming variant of [`add`](Self::add) for chained construction.
    pub fn with(mut self, name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.add(name, data);
        self
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn buffers(&self) -> &[NamedBuffer] {
        &self.buffers
    }

    pub fn plan(&self) -> Result<LayoutPlan, BfastError> {
        plan_layout(&self.buffers)
    }

    /// Header the current buffer list would be written with (same-endian).
    pub fn header(&self) -> Result<Header, BfastError> {
        Ok(self.plan()?.header(Endianness::Same))
    }

    pub fn needed_size(&self) -> Result<u64, BfastError> {
        Ok(self.plan()?.needed_size())
    }

    pub fn pack(&self) -> Vec<u8> {
        self.pack_with(&PackConfig::default())
    }

    pub fn pack_with(&self, config: &PackConfig) -> Vec<u8> {
        pack_with(&self.buffers, config)
    }

    pub fn pack_into(&self, dst: &mut [u8], config: &PackConfig) -> Result<usize, BfastError> {
        pack_into(&self.buffers, dst, config)
    }

    /// Freeze into the owned buffer list.
    pub fn into_buffers(self) -> Vec<NamedBuffer> {
        self.buffers
    }
}
