// Clip registry - Ordered in-memory collection of session clips

use std::collections::VecDeque;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Most-recent-first collection of clip records
///
/// Records are only ever inserted at the head or have their status changed;
/// nothing is removed.
#[derive(Debug, Default)]
pub struct ClipRegistry {
    clips: VecDeque<ClipRecord>,
}

impl ClipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record ahead of every existing one
    pub fn insert_front(&mut self, record: ClipRecord) {
        self.clips.push_front(record);
    }

    pub fn get(&self, id: ClipId) -> Option<&ClipRecord> {
        self.clips.iter().find(|clip| clip.id == id)
    }

    /// Move one record to `next`, returning the status it left
    pub fn transition(&mut self, id: ClipId, next: ClipStatus) -> Result<ClipStatus, DomainError> {
        let clip = self
            .clips
            .iter_mut()
            .find(|clip| clip.id == id)
            .ok_or(DomainError::ClipNotFound(id))?;

        let current = clip.status;
        if !current.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                id,
                from: current,
                to: next,
            });
        }

        clip.status = next;
        Ok(current)
    }

    /// Cloned view of all records, newest first
    pub fn snapshot(&self) -> Vec<ClipRecord> {
        self.clips.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
