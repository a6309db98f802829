//! Period intersection

use tempus_core::Moment;

use crate::{Period, PeriodError};

impl<M: Moment> Period<M> {
    /// Overlap of this period with every other period that overlaps it
    ///
    /// Bounds narrow as each overlapping period is folded in; periods that
    /// miss the running bounds are skipped. `Ok(None)` means nothing
    /// overlapped, which is distinct from a zero-length overlap.
    pub fn intersect<'a, I>(&self, others: I) -> Result<Option<Period<M>>, PeriodError>
    where
        I: IntoIterator<Item = &'a Period<M>>,
        M: 'a,
    {
        let mut start = &self.start;
        let mut end = &self.end;
        let mut overlapped = 0usize;

        for other in others {
            if other.end < *start || other.start > *end {
                continue;
            }
            start = start.max(&other.start);
            end = end.min(&other.end);
            overlapped += 1;
        }

        if overlapped == 0 {
            tracing::debug!(period = ?self, "no intersection");
            return Ok(None);
        }

        tracing::debug!(start = ?start, end = ?end, overlapped, "intersection computed");
        Period::new(start.clone(), end.clone()).map(Some)
    }
}
