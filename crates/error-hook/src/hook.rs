//! Hooks observe entries of particular levels as they are logged

use crate::entry::Entry;
use crate::error::HookError;
use crate::level::Level;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

mod error_hook;

pub use error_hook::{ErrorHook, WriteCallback, DEFAULT_LEVELS};

/// An extension point called back by a [`Logger`](crate::Logger) for every entry whose level
/// is one of [`levels`](Hook::levels).
pub trait Hook: Send + Sync {
    /// The levels this hook should be fired for
    fn levels(&self) -> &[Level];

    /// Handles a single entry.
    fn fire(&self, entry: &Entry) -> Result<(), HookError>;
}

/// Hooks registered per level
#[derive(Default, Clone)]
pub struct LevelHooks {
    hooks: HashMap<Level, Vec<Arc<dyn Hook>>>,
}

impl LevelHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the hook under every level it reports
    pub fn add(&mut self, hook: Arc<dyn Hook>) {
        for level in hook.levels() {
            self.hooks.entry(*level).or_default().push(hook.clone());
        }
    }

    /// The hooks registered for a level, in registration order
    pub fn hooks_for(&self, level: Level) -> &[Arc<dyn Hook>] {
        self.hooks.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fires every hook registered for the level, stopping at the first failure
    pub fn fire(&self, level: Level, entry: &Entry) -> Result<(), HookError> {
        for hook in self.hooks_for(level) {
            hook.fire(entry)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.values().all(Vec::is_empty)
    }
}

impl Debug for LevelHooks {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.hooks.iter().map(|(level, hooks)| (level, hooks.len())))
            .finish()
    }
}
