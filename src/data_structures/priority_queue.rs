/// A (priority, value) pair stored in the heap
#[derive(Debug, Clone)]
struct HeapEntry<P, T> {
    priority: P,
    value: T,
}

/// A binary min-heap keyed by priority, used as the frontier of shortest path searches.
///
/// Entries live in a dense zero-indexed vector: the parent of `i` is
/// `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`. Lower priorities
/// are extracted first. Values are opaque to the heap.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<P, T>
where
    P: Ord,
{
    entries: Vec<HeapEntry<P, T>>,
}

impl<P, T> MinPriorityQueue<P, T>
where
    P: Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue { entries: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.entries.first().map(|entry| (&entry.priority, &entry.value))
    }

    /// Inserts a value with the given priority. O(log n).
    pub fn insert(&mut self, priority: P, value: T) {
        self.entries.push(HeapEntry { priority, value });
        self.shift_up(self.entries.len() - 1);
    }

    /// Removes and returns the value with the lowest priority, or `None` when empty
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract_min_entry().map(|(_, value)| value)
    }

    /// Like [`extract_min`](Self::extract_min) but also hands back the priority
    pub fn extract_min_entry(&mut self) -> Option<(P, T)> {
        if self.entries.is_empty() {
            return None;
        }

        // The last entry takes the root's slot
        let root = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.shift_down(0);
        }

        Some((root.priority, root.value))
    }

    /// Checks that every node's priority is <= both of its children's.
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.entries.len())
            .all(|i| self.entries[parent(i)].priority <= self.entries[i].priority)
    }

    fn shift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.entries[parent].priority <= self.entries[index].priority {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    fn shift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }

            // Ties between the children go to the right child
            let right = right_child(index);
            let child = if right < len && self.entries[right].priority <= self.entries[left].priority {
                right
            } else {
                left
            };

            if self.entries[child].priority >= self.entries[index].priority {
                break;
            }
            self.entries.swap(child, index);
            index = child;
        }
    }
}

impl<P, T> Default for MinPriorityQueue<P, T>
where
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, T> From<Vec<(P, T)>> for MinPriorityQueue<P, T>
where
    P: Ord,
{
    /// Builds a heap from unordered pairs in O(n) by sifting down every internal node.
    fn from(pairs: Vec<(P, T)>) -> Self {
        let mut queue = MinPriorityQueue {
            entries: pairs
                .into_iter()
                .map(|(priority, value)| HeapEntry { priority, value })
                .collect(),
        };
        for index in (0..queue.entries.len() / 2).rev() {
            queue.shift_down(index);
        }
        queue
    }
}

impl<P, T> FromIterator<(P, T)> for MinPriorityQueue<P, T>
where
    P: Ord,
{
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut queue = MinPriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<P, T> Extend<(P, T)> for MinPriorityQueue<P, T>
where
    P: Ord,
{
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.insert(priority, value);
        }
    }
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities<T>(queue: &MinPriorityQueue<u32, T>) -> Vec<u32> {
        queue.entries.iter().map(|entry| entry.priority).collect()
    }

    #[test]
    fn index_arithmetic() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(left_child(2), 5);
        assert_eq!(right_child(2), 6);
    }

    #[test]
    fn insert_sifts_up_to_root() {
        let mut queue = MinPriorityQueue::new();
        queue.insert(100, 'X');
        queue.insert(90, 'Y');
        queue.insert(80, 'Z');
        queue.insert(70, 'W');

        assert_eq!(priorities(&queue), vec![70, 80, 90, 100]);
        assert!(queue.satisfies_heap_property());
    }

    #[test]
    fn equal_priority_does_not_swap_on_insert() {
        let mut queue = MinPriorityQueue::new();
        queue.insert(5, "first");
        queue.insert(5, "second");
        assert_eq!(queue.peek(), Some((&5, &"first")));
    }

    #[test]
    fn shift_down_prefers_right_child_on_tie() {
        // root 9 with two children of priority 1
        let mut queue = MinPriorityQueue {
            entries: vec![
                HeapEntry { priority: 9, value: "root" },
                HeapEntry { priority: 1, value: "left" },
                HeapEntry { priority: 1, value: "right" },
            ],
        };
        queue.shift_down(0);
        assert_eq!(queue.entries[0].value, "right");
        assert_eq!(queue.entries[2].value, "root");
    }

    #[test]
    fn extract_moves_last_entry_to_root() {
        let mut queue: MinPriorityQueue<u32, u32> = [(1, 1), (2, 2), (3, 3), (4, 4)]
            .into_iter()
            .collect();
        assert_eq!(queue.extract_min_entry(), Some((1, 1)));
        assert_eq!(priorities(&queue), vec![2, 4, 3]);
        assert!(queue.satisfies_heap_property());
    }

    #[test]
    fn heapify_from_vec() {
        let queue = MinPriorityQueue::from(vec![(5, 'e'), (3, 'c'), (4, 'd'), (1, 'a'), (2, 'b')]);
        assert!(queue.satisfies_heap_property());
        assert_eq!(queue.peek(), Some((&1, &'a')));
    }
}
