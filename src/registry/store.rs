//! In-Memory Student Store
//!
//! A process-lifetime map from student id to record. No persistence, no
//! deletion, no in-place mutation: a conflicting insert is rejected and the
//! existing record stays untouched.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::types::Student;
use super::validate::ValidationError;

pub struct StudentStore {
    students: DashMap<i64, Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
        }
    }

    /// Inserts a record, rejecting a duplicate id.
    ///
    /// The check-then-insert runs under the entry lock, so the uniqueness
    /// guarantee holds even with concurrent handlers. The validator already
    /// checks for conflicts; the store re-guarantees it.
    pub fn insert(&self, student: Student) -> Result<(), ValidationError> {
        match self.students.entry(student.id) {
            Entry::Occupied(_) => Err(ValidationError::Conflict(student.id)),
            Entry::Vacant(slot) => {
                slot.insert(student);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<Student> {
        self.students.get(&id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.students.contains_key(&id)
    }

    /// All records. Iteration order is unspecified.
    pub fn list_all(&self) -> Vec<Student> {
        self.students
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
