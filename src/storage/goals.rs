//! Goal repository for JSON storage
//!
//! Manages loading and saving savings goals to goals.json. Goals keep
//! creation order; new goals are appended.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ZenithError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable goal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<Goal>,
}

/// Repository for savings goals
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<Vec<Goal>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk, keeping file order
    pub fn load(&self) -> Result<(), ZenithError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.goals;
        Ok(())
    }

    /// Save goals to disk in their stored order
    pub fn save(&self) -> Result<(), ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = GoalData { goals: data.clone() };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append a goal
    pub fn insert(&self, goal: Goal) -> Result<(), ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(goal);
        Ok(())
    }

    /// Replace a stored goal with an updated copy; returns whether it existed
    pub fn update(&self, goal: Goal) -> Result<bool, ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(slot) = data.iter_mut().find(|g| g.id == goal.id) {
            *slot = goal;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Delete a goal; returns whether anything was removed.
    /// Deleting an absent id is a no-op, not an error.
    pub fn delete(&self, id: GoalId) -> Result<bool, ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|g| g.id != id);
        Ok(data.len() < before)
    }

    /// Get a goal by id
    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|g| g.id == id).cloned())
    }

    /// Get all goals in creation order
    pub fn get_all(&self) -> Result<Vec<Goal>, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Resolve a user-supplied id string (full UUID or short display form)
    pub fn find_id(&self, id_str: &str) -> Result<Option<GoalId>, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|g| g.id.matches(id_str)).map(|g| g.id))
    }

    /// Count goals
    pub fn count(&self) -> Result<usize, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
