//! Test utilities and mock types for Neurite development.
//!
//! Provides a mock implementation of the core access traits
//! ([`ParamReader`], [`ParamWriter`]) and standard network configs in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use neurite_core::{FieldRole, ParamReader, ParamWriter, UnitAddr};

/// Mock parameter store.
///
/// Backed by a `HashMap<(UnitAddr, FieldRole), Vec<f64>>`. Pre-populate
/// fields with [`set_field`](MockParamStore::set_field) before passing it to
/// code written against the access traits; inspect results with
/// [`get_field`](MockParamStore::get_field).
#[derive(Debug, Default)]
pub struct MockParamStore {
    fields: HashMap<(UnitAddr, FieldRole), Vec<f64>>,
}

impl MockParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a field.
    pub fn set_field(&mut self, addr: UnitAddr, role: FieldRole, data: Vec<f64>) {
        self.fields.insert((addr, role), data);
    }

    /// Add a zero-filled field of `len` elements.
    pub fn add_field(&mut self, addr: UnitAddr, role: FieldRole, len: usize) {
        self.fields.insert((addr, role), vec![0.0; len]);
    }

    pub fn get_field(&self, addr: UnitAddr, role: FieldRole) -> Option<&[f64]> {
        self.fields.get(&(addr, role)).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ParamReader for MockParamStore {
    fn read(&self, addr: UnitAddr, role: FieldRole) -> Option<&[f64]> {
        self.get_field(addr, role)
    }
}

impl ParamWriter for MockParamStore {
    fn write(&mut self, addr: UnitAddr, role: FieldRole) -> Option<&mut [f64]> {
        self.fields.get_mut(&(addr, role)).map(|v| v.as_mut_slice())
    }
}

/// Copy every field named in `roles` for `addr` from one store to another.
///
/// Returns the number of fields copied. A field missing on either side, or
/// with mismatched lengths, is skipped.
pub fn copy_fields<R, W>(src: &R, dst: &mut W, addr: UnitAddr, roles: &[FieldRole]) -> usize
where
    R: ParamReader + ?Sized,
    W: ParamWriter + ?Sized,
{
    let mut copied = 0;
    for &role in roles {
        let (Some(from), Some(to)) = (src.read(addr, role), dst.write(addr, role)) else {
            continue;
        };
        if from.len() == to.len() {
            to.copy_from_slice(from);
            copied += 1;
        }
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_reads_what_was_set() {
        let addr = UnitAddr::new(0, 1, 0);
        let mut store = MockParamStore::new();
        store.set_field(addr, FieldRole::Weights, vec![1.0, 2.0]);
        assert_eq!(store.read(addr, FieldRole::Weights), Some(&[1.0, 2.0][..]));
        assert_eq!(store.read(addr, FieldRole::Bias), None);
    }

    #[test]
    fn mock_write_mutates_in_place() {
        let addr = UnitAddr::new(0, 1, 0);
        let mut store = MockParamStore::new();
        store.add_field(addr, FieldRole::DeltaBias, 1);
        store.write(addr, FieldRole::DeltaBias).unwrap()[0] = 3.5;
        assert_eq!(store.get_field(addr, FieldRole::DeltaBias), Some(&[3.5][..]));
    }

    #[test]
    fn copy_skips_missing_and_mismatched() {
        let addr = UnitAddr::new(0, 1, 0);
        let mut src = MockParamStore::new();
        src.set_field(addr, FieldRole::Bias, vec![0.5]);
        src.set_field(addr, FieldRole::Weights, vec![1.0, 2.0]);
        let mut dst = MockParamStore::new();
        dst.add_field(addr, FieldRole::Bias, 1);
        dst.add_field(addr, FieldRole::Weights, 3);

        let n = copy_fields(
            &src,
            &mut dst,
            addr,
            &[FieldRole::Bias, FieldRole::Weights, FieldRole::M],
        );
        assert_eq!(n, 1);
        assert_eq!(dst.get_field(addr, FieldRole::Bias), Some(&[0.5][..]));
    }
}
