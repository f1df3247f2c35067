//! The contiguous backing store of a parameter region.
//!
//! A [`Segment`] is a fixed-size `Vec<f64>` with bump allocation. It is
//! sized once at construction and never grows; running out of room is the
//! caller's signal that the capacity plan was wrong.

/// A single contiguous memory segment with bump allocation.
#[derive(Debug)]
pub struct Segment {
    /// Backing storage. Allocated to full capacity at creation.
    data: Vec<f64>,
    /// Bump pointer: next free position (in f64 elements).
    cursor: usize,
}

impl Segment {
    /// Create a new zero-filled segment with the given capacity (in f64
    /// elements).
    pub fn new(capacity: u32) -> Self {
        Self {
            data: vec![0.0; capacity as usize],
            cursor: 0,
        }
    }

    /// Bump-allocate `len` f64 elements from this segment.
    ///
    /// Returns `Some((offset, &mut [f64]))` where `offset` is the starting
    /// position within this segment, or `None` if there is insufficient
    /// remaining capacity. The returned range is zero-filled.
    pub fn alloc(&mut self, len: u32) -> Option<(u32, &mut [f64])> {
        let new_cursor = self.cursor.checked_add(len as usize)?;
        if new_cursor > self.data.len() {
            return None;
        }
        let offset = self.cursor as u32;
        let slice = &mut self.data[self.cursor..new_cursor];
        self.cursor = new_cursor;
        slice.fill(0.0);
        Some((offset, slice))
    }

    /// Shared slice over `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past the allocated region.
    pub fn slice(&self, range: std::ops::Range<usize>) -> &[f64] {
        &self.data[..self.cursor][range]
    }

    /// Mutable slice over `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past the allocated region.
    pub fn slice_mut(&mut self, range: std::ops::Range<usize>) -> &mut [f64] {
        &mut self.data[..self.cursor][range]
    }

    /// Everything allocated so far, in allocation order.
    pub fn allocated(&self) -> &[f64] {
        &self.data[..self.cursor]
    }

    /// Mutable view of everything allocated so far.
    pub fn allocated_mut(&mut self) -> &mut [f64] {
        &mut self.data[..self.cursor]
    }

    /// Number of f64 elements currently allocated.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total capacity in f64 elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Remaining free capacity in f64 elements.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_alloc_returns_zeroed_data() {
        let mut seg = Segment::new(1024);
        let (offset, data) = seg.alloc(10).unwrap();
        assert_eq!(offset, 0);
        assert_eq!(data.len(), 10);
        assert!(data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn segment_sequential_alloc() {
        let mut seg = Segment::new(1024);
        let (off1, _) = seg.alloc(100).unwrap();
        let (off2, _) = seg.alloc(200).unwrap();
        assert_eq!(off1, 0);
        assert_eq!(off2, 100);
        assert_eq!(seg.used(), 300);
        assert_eq!(seg.remaining(), 724);
    }

    #[test]
    fn segment_alloc_fails_when_full() {
        let mut seg = Segment::new(100);
        assert!(seg.alloc(100).is_some());
        assert!(seg.alloc(1).is_none());
        assert_eq!(seg.used(), 100);
    }

    #[test]
    fn zero_length_alloc_succeeds_on_full_segment() {
        let mut seg = Segment::new(4);
        seg.alloc(4).unwrap();
        let (offset, data) = seg.alloc(0).unwrap();
        assert_eq!(offset, 4);
        assert!(data.is_empty());
    }

    #[test]
    fn segment_slice_reads_written_data() {
        let mut seg = Segment::new(1024);
        let (offset, data) = seg.alloc(5).unwrap();
        data[0] = 1.0;
        data[4] = 5.0;

        let start = offset as usize;
        let read = seg.slice(start..start + 5);
        assert_eq!(read[0], 1.0);
        assert_eq!(read[4], 5.0);
    }

    #[test]
    #[should_panic]
    fn slice_past_cursor_panics() {
        let mut seg = Segment::new(100);
        seg.alloc(10).unwrap();
        let _ = seg.slice(5..20);
    }

    #[test]
    fn memory_bytes_counts_full_capacity() {
        let seg = Segment::new(64);
        assert_eq!(seg.memory_bytes(), 64 * 8);
    }
}
