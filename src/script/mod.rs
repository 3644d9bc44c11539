//! Dispatch scripts: a fixed list of actions and snapshot points.
//!
//! A script file is a JSON array of steps:
//!
//! ```json
//! [
//!   { "dispatch": { "type": "CREATE_POLICY", "payload": { "name": "Alex", "amount": 20 } } },
//!   "snapshot"
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::company::{create_claim, create_policy_with_premium, delete_policy, InsuranceAction};
use crate::redux::{Reducer, Store};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Send one action to the store.
    Dispatch(InsuranceAction),
    /// Emit the current state.
    Snapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The demo run: one round, a snapshot, two more rounds, a snapshot.
    ///
    /// A round is: Alex buys a policy, claims 100, then cancels.
    pub fn demo(policy_premium: i64) -> Self {
        let round = || {
            [
                Step::Dispatch(create_policy_with_premium("Alex", policy_premium)),
                Step::Dispatch(create_claim("Alex", 100)),
                Step::Dispatch(delete_policy("Alex")),
            ]
        };

        let mut steps = Vec::with_capacity(11);
        steps.extend(round());
        steps.push(Step::Snapshot);
        steps.extend(round());
        steps.extend(round());
        steps.push(Step::Snapshot);
        Self { steps }
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|e| ScriptError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let script: Script =
            serde_json::from_str(&content).map_err(|e| ScriptError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), steps = script.steps.len(), "Script loaded");
        Ok(script)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Play the script against `store`, calling `on_snapshot` at each
    /// snapshot step.
    ///
    /// A script without any snapshot step gets one after its last action.
    /// Returns the number of snapshots taken.
    pub fn run<R, E, F>(&self, store: &mut Store<R>, mut on_snapshot: F) -> Result<usize, E>
    where
        R: Reducer<Action = InsuranceAction>,
        F: FnMut(&R::State) -> Result<(), E>,
    {
        let mut snapshots = 0;
        for step in &self.steps {
            match step {
                Step::Dispatch(action) => {
                    store.dispatch(action);
                }
                Step::Snapshot => {
                    on_snapshot(store.state())?;
                    snapshots += 1;
                }
            }
        }

        if snapshots == 0 {
            on_snapshot(store.state())?;
            snapshots = 1;
        }

        Ok(snapshots)
    }
}
