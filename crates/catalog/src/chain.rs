use crate::Course;

/// One bucket's collision chain: an owned-node singly linked list holding
/// every course that hashed to the same bucket, in the order the courses
/// were first inserted.
pub(crate) struct Chain {
    head: Option<Box<ChainNode>>,
    len: usize,
}

struct ChainNode {
    course: Course,
    next: Option<Box<ChainNode>>,
}

impl Chain {
    /// Creates an empty chain, the state of a bucket nothing has hashed to.
    pub(crate) const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends a course behind the current tail, so traversal order stays
    /// insertion order.
    pub(crate) fn push_back(&mut self, course: Course) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(ChainNode { course, next: None }));
        self.len += 1;
    }

    /// First course whose identifier equals `id`, scanning head to tail.
    pub(crate) fn find(&self, id: &str) -> Option<&Course> {
        self.iter().find(|course| course.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Course> {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            if node.course.id == id {
                return Some(&mut node.course);
            }
            cur = &mut node.next;
        }
        None
    }

    // [adapters]

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// [iterators]

pub(crate) struct Iter<'a> {
    current: Option<&'a ChainNode>,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            None => None,
            Some(node) => {
                self.current = node.next.as_deref();
                self.len -= 1;
                Some(&node.course)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> Iter<'a> {
    fn new(chain: &'a Chain) -> Self {
        Self {
            current: chain.head.as_deref(),
            len: chain.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Chain;
    use crate::course;

    #[test]
    fn push_back_keeps_insertion_order() {
        let mut chain = Chain::new();
        assert!(chain.is_empty());

        for i in 0..10 {
            let id = format!("{}", i * 10);
            chain.push_back(course!(id, format!("course {i}")));
        }
        assert_eq!(chain.len(), 10);

        for (i, course) in chain.iter().enumerate() {
            assert_eq!(course.id, format!("{}", i * 10));
        }
    }

    #[test]
    fn find() {
        let mut chain = Chain::new();
        assert_eq!(chain.find("100"), None);

        chain.push_back(course!("100", "Intro"));
        chain.push_back(course!("200", "Data Structures", "100"));

        assert_eq!(chain.find("100"), Some(&course!("100", "Intro")));
        assert_eq!(
            chain.find("200"),
            Some(&course!("200", "Data Structures", "100"))
        );
        assert_eq!(chain.find("300"), None);
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut chain = Chain::new();
        chain.push_back(course!("100", "Intro"));
        chain.push_back(course!("200", "Data Structures"));

        let slot = chain.find_mut("200").unwrap();
        slot.title = "Data Structures and Algorithms".into();

        assert_eq!(
            chain.find("200").unwrap().title,
            "Data Structures and Algorithms"
        );
        // the edit must not disturb its neighbours
        assert_eq!(chain.find("100"), Some(&course!("100", "Intro")));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn iter_size_hint_tracks_remaining() {
        let mut chain = Chain::new();
        chain.push_back(course!("1", "a"));
        chain.push_back(course!("2", "b"));

        let mut iter = chain.iter();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        assert_eq!(iter.size_hint(), (1, Some(1)));
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
    }

    #[test]
    fn dropping_a_long_chain_does_not_recurse() {
        use super::ChainNode;

        // a naive recursive drop blows the stack well below this length;
        // built by hand-prepending because push_back's tail walk would make
        // the setup quadratic
        let mut chain = Chain::new();
        for i in 0..100_000 {
            chain.head = Some(Box::new(ChainNode {
                course: course!(format!("{i}"), "filler"),
                next: chain.head.take(),
            }));
            chain.len += 1;
        }
        assert_eq!(chain.len(), 100_000);
        drop(chain);
    }

    #[test]
    fn debug_lists_every_course() {
        let mut chain = Chain::new();
        chain.push_back(course!("7", "Sevens"));
        let rendered = format!("{chain:?}");
        assert!(rendered.contains("Sevens"), "got {rendered}");
    }
}
