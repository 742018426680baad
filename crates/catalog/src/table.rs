use crate::{Course, IndexError, chain::Chain};

/// Bucket count used when the caller does not pick one.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Hash table mapping numeric course identifiers to courses, with
/// collisions chained off each bucket in insertion order.
///
/// The bucket count is fixed at construction and never changes; the table
/// neither resizes nor rehashes, so long chains are the price of a small
/// table, not a trigger for growth. Records are only ever added; there is
/// no removal.
#[derive(Debug)]
pub struct CourseIndex {
    buckets: Vec<Chain>,
    items: usize,
}

impl Default for CourseIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseIndex {
    /// Creates an index with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: (0..DEFAULT_BUCKET_COUNT).map(|_| Chain::new()).collect(),
            items: 0,
        }
    }

    /// Creates an index with `count` buckets, all empty.
    ///
    /// Fails with [`IndexError::InvalidConfiguration`] when `count` is
    /// zero: every identifier needs a bucket to land in.
    pub fn with_buckets(count: usize) -> Result<Self, IndexError> {
        if count == 0 {
            return Err(IndexError::InvalidConfiguration);
        }
        Ok(Self {
            buckets: (0..count).map(|_| Chain::new()).collect(),
            items: 0,
        })
    }

    /// Returns the number of records in the index
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, or "slots" of the index
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts a course under its identifier.
    ///
    /// A record whose identifier is already present replaces the old one in
    /// place, keeping its chain position, and hands the old record back. Any
    /// other record is appended at the tail of its bucket's chain, so
    /// colliding identifiers coexist in insertion order.
    ///
    /// Fails with [`IndexError::UnhashableIdentifier`] before touching any
    /// bucket if the identifier has no numeric value.
    pub fn insert(&mut self, course: Course) -> Result<Option<Course>, IndexError> {
        let k = self.key_for(&course.id)?;
        match self.buckets[k].find_mut(&course.id) {
            Some(slot) => Ok(Some(std::mem::replace(slot, course))),
            None => {
                self.buckets[k].push_back(course);
                self.items += 1;
                Ok(None)
            }
        }
    }

    /// Looks up a course by its exact identifier string.
    ///
    /// Matching is string equality, not numeric equality: "007" and "7"
    /// share a bucket but are different courses. `Ok(None)` is the normal
    /// "not found" outcome, not an error; only an identifier that cannot
    /// be hashed fails.
    pub fn search(&self, id: &str) -> Result<Option<&Course>, IndexError> {
        let k = self.key_for(id)?;
        Ok(self.buckets[k].find(id))
    }

    /// Every record in the table, sorted by identifier.
    ///
    /// Buckets are visited in index order and chains head to tail, then the
    /// collected records are sorted lexicographically on the identifier
    /// string, so "10" lists before "2". The table itself is not touched.
    pub fn list_all(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> =
            self.buckets.iter().flat_map(|chain| chain.iter()).collect();
        courses.sort_by(|a, b| a.id.cmp(&b.id));
        courses
    }

    // [private]

    fn hash(id: &str) -> Result<u64, IndexError> {
        id.parse()
            .map_err(|_| IndexError::UnhashableIdentifier { id: id.into() })
    }

    /// Bucket index for an identifier: its numeric value modulo the bucket
    /// count.
    fn key_for(&self, id: &str) -> Result<usize, IndexError> {
        Ok((Self::hash(id)? % self.buckets.len() as u64) as usize)
    }
}
