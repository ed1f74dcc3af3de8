use crate::utils::{child_indices, parent_index};
use crate::Patient;
use log::{debug, trace};
use std::fmt;
use std::iter::FromIterator;

/// A min-heap of patients keyed on urgency.
///
/// The heap lives in a flat `Vec`: the children of slot `i` are at `2i + 1`
/// and `2i + 2`, and every parent's urgency is no greater than its children's.
/// Patients with equal urgency come out in no particular order.
#[derive(Debug, Clone, Default)]
pub struct TriageQueue {
    data: Vec<Patient>,
}

impl TriageQueue {
    pub fn new() -> Self {
        TriageQueue { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TriageQueue {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate over the queued patients in storage order, which is not
    /// urgency order beyond the first element.
    pub fn iter(&self) -> std::slice::Iter<'_, Patient> {
        self.data.iter()
    }

    pub fn insert(&mut self, name: impl Into<String>, urgency: i64) {
        self.push(Patient::new(name, urgency));
    }

    pub fn push(&mut self, patient: Patient) {
        debug!("Queueing {}", patient);
        self.data.push(patient);
        self.sift_up(self.data.len() - 1);
        self.check_consistency();
    }

    /// The most urgent patient, without removing it.
    pub fn peek(&self) -> Option<&Patient> {
        self.data.first()
    }

    /// Remove and return the most urgent patient.
    pub fn extract_min(&mut self) -> Option<Patient> {
        if self.data.len() <= 1 {
            let patient = self.data.pop()?;
            debug!("Serving {}", patient);
            return Some(patient);
        }
        // Move the last patient to the root, then let it sink.
        let patient = self.data.swap_remove(0);
        self.sift_down(0);
        self.check_consistency();
        debug!("Serving {}", patient);
        Some(patient)
    }

    /// Drain the queue, returning patients from most to least urgent.
    pub fn into_sorted_vec(mut self) -> Vec<Patient> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(patient) = self.extract_min() {
            sorted.push(patient);
        }
        sorted
    }

    /// Check the heap invariant over every parent/child pair.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|index| match parent_index(index) {
            Some(parent) => self.data[parent].urgency <= self.data[index].urgency,
            None => true,
        })
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = parent_index(index) {
            if self.data[index].urgency >= self.data[parent].urgency {
                break;
            }
            trace!("sift up: {} -> {}", index, parent);
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.data.len();
        loop {
            let (left, right) = child_indices(index);
            let mut smallest = index;
            if left < size && self.data[left].urgency < self.data[smallest].urgency {
                smallest = left;
            }
            if right < size && self.data[right].urgency < self.data[smallest].urgency {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            trace!("sift down: {} -> {}", index, smallest);
            self.data.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn check_consistency(&self) {
        debug_assert!(self.is_valid_heap());
    }

    #[cfg(not(any(test, feature = "consistency_check")))]
    #[inline]
    fn check_consistency(&self) {}
}

impl Extend<Patient> for TriageQueue {
    fn extend<I: IntoIterator<Item = Patient>>(&mut self, iter: I) {
        for patient in iter {
            self.push(patient);
        }
    }
}

impl FromIterator<Patient> for TriageQueue {
    fn from_iter<I: IntoIterator<Item = Patient>>(iter: I) -> Self {
        let mut queue = TriageQueue::new();
        queue.extend(iter);
        queue
    }
}

impl fmt::Display for TriageQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return writeln!(f, "Queue is empty.");
        }
        writeln!(f, "Current Queue:")?;
        for patient in &self.data {
            writeln!(f, "- {}", patient)?;
        }
        Ok(())
    }
}
