use crate::drains::Drain;
use crate::event::Event;
use crate::level::Level;
use crate::marker::Marker;
use crate::tree::{EventTree, NodeId, TreeNode};
use anyhow::{Context, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Builds an `EventTree` out of a stream of events.
///
/// The caret is the stack of currently open scopes, its bottom is always the
/// root. A BEGIN event becomes a new node under the caret top and is pushed,
/// an END event is recorded under the scope it closes and pops it, anything
/// else is appended to the caret top.
///
/// Not synchronized. Use one collector per logical flow of execution, or wrap
/// it in a `SharedCollector`.
pub struct TreeCollector {
    tree: EventTree,
    caret: Vec<NodeId>,
    drains: Vec<Box<dyn Drain + Send>>,
}

impl TreeCollector {
    pub fn new() -> Self {
        let tree = EventTree::new();
        let root = tree.root_id();
        Self {
            tree,
            caret: vec![root],
            drains: vec![],
        }
    }

    /// Events logged through the `Drain` interface are also forwarded here.
    pub fn add_drain(&mut self, drain: Box<dyn Drain + Send>) {
        self.drains.push(drain);
    }

    pub fn submit(&mut self, event: Event) {
        let top = self.current();
        if event.is_begin() {
            let node = self.tree.add_node(top, event);
            self.caret.push(node);
        } else if event.is_end() {
            self.tree.add_event(top, event);
            self.retreat();
        } else {
            self.tree.add_event(top, event);
        }
    }

    /// Move the caret one level up. An unmatched END leaves the caret at the root.
    pub fn retreat(&mut self) {
        if self.caret.len() > 1 {
            self.caret.pop();
        }
    }

    pub fn current(&self) -> NodeId {
        self.caret
            .last()
            .copied()
            .unwrap_or_else(|| self.tree.root_id())
    }

    pub fn caret(&self) -> &[NodeId] {
        &self.caret
    }

    /// Number of scopes that are still open.
    pub fn depth(&self) -> usize {
        self.caret.len() - 1
    }

    pub fn tree(&self) -> &EventTree {
        &self.tree
    }

    pub fn root(&self) -> &TreeNode {
        self.tree.root()
    }

    pub fn into_tree(self) -> EventTree {
        self.tree
    }

    /// Runs `f` inside a BEGIN/END pair. If `f` fails the END event carries
    /// the error and the error gets the scope name as context.
    pub fn scope<F, T>(&mut self, level: Level, template: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.begin(level, template, vec![]);
        let result = f(self);
        let error = result.as_ref().err().map(|e| Arc::new(copy_chain(e)));
        self.log_event(Event::with_error(
            Some(Marker::end()),
            level,
            template,
            vec![],
            error,
        ));
        result.with_context(|| format!("[Scope] {}", template))
    }
}

// anyhow::Error isn't Clone, so the chain is rebuilt message by message.
fn copy_chain(error: &anyhow::Error) -> anyhow::Error {
    let mut messages = error.chain().map(|e| e.to_string()).collect::<Vec<_>>();
    let innermost = messages.pop().unwrap_or_default();
    messages
        .into_iter()
        .rev()
        .fold(anyhow::anyhow!(innermost), |e, message| e.context(message))
}

impl Default for TreeCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Drain for TreeCollector {
    fn log_event(&mut self, event: Event) {
        for drain in &mut self.drains {
            drain.log_event(event.clone());
        }
        self.submit(event);
    }
}

/// A `TreeCollector` behind a mutex, for when several threads log into the
/// same tree. Submissions are serialized but BEGIN/END pairs from different
/// threads still interleave on the one caret.
#[derive(Clone, Default)]
pub struct SharedCollector(Arc<Mutex<TreeCollector>>);

impl SharedCollector {
    pub fn new() -> Self {
        Self::default()
    }

    // A drain that panicked mid-event leaves the tree consistent (the event
    // just isn't recorded), so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, TreeCollector> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_tree<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&EventTree) -> T,
    {
        f(self.lock().tree())
    }

    pub fn with_collector<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut TreeCollector) -> T,
    {
        f(&mut self.lock())
    }
}

impl From<TreeCollector> for SharedCollector {
    fn from(collector: TreeCollector) -> Self {
        Self(Arc::new(Mutex::new(collector)))
    }
}

impl Drain for SharedCollector {
    fn log_event(&mut self, event: Event) {
        self.lock().log_event(event);
    }
}
