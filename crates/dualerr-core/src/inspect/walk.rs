//! Bounded depth-first traversal of a cause graph

use crate::error::{Cause, InternalError, WrapError};
use std::collections::{HashMap, HashSet};
use std::error::Error as StdError;
use tracing::warn;

/// Borrowed node of a cause graph
pub type ErrorRef<'a> = &'a (dyn StdError + 'static);

/// Direct causes of `err`.
///
/// Wrap and structured errors expose every cause; shared causes are looked
/// through; any other error falls back to its `source()`.
pub fn direct_causes(err: ErrorRef<'_>) -> Vec<ErrorRef<'_>> {
    if let Some(wrap) = err.downcast_ref::<WrapError>() {
        return borrow_all(wrap.causes());
    }
    if let Some(internal) = err.downcast_ref::<InternalError>() {
        return borrow_all(internal.causes());
    }
    if let Some(inner) = err.downcast_ref::<Cause>() {
        return vec![&**inner as ErrorRef<'_>];
    }
    err.source().into_iter().collect()
}

fn borrow_all(causes: &[Cause]) -> Vec<ErrorRef<'_>> {
    causes.iter().map(|c| &**c as ErrorRef<'_>).collect()
}

/// Address of a graph node, used to recognise shared causes
type NodeKey = *const (dyn StdError + 'static);

/// Preorder iterator over a cause graph.
///
/// Causes are visited in declaration order. A node reachable through several
/// wrappers is yielded once but expanded from the shallowest path that reaches
/// it, so nothing within `max_depth` edges of the root is lost to a deeper
/// path seen first.
pub struct Walk<'a> {
    stack: Vec<(ErrorRef<'a>, usize)>,
    depths: HashMap<NodeKey, usize>,
    cut: HashSet<NodeKey>,
    max_depth: usize,
    prune: Option<fn(ErrorRef<'_>) -> bool>,
    reported: bool,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(root: ErrorRef<'a>, max_depth: usize) -> Self {
        Self {
            stack: vec![(root, 0)],
            depths: HashMap::new(),
            cut: HashSet::new(),
            max_depth,
            prune: None,
            reported: false,
        }
    }

    /// Yield nodes matching `prune` without descending into them
    pub(crate) fn pruned(mut self, prune: fn(ErrorRef<'_>) -> bool) -> Self {
        self.prune = Some(prune);
        self
    }

    /// Whether some causes were skipped because of the depth bound.
    ///
    /// Only final once the walk is exhausted.
    pub fn truncated(&self) -> bool {
        !self.cut.is_empty()
    }

    fn expand(&mut self, node: ErrorRef<'a>, key: NodeKey, depth: usize) {
        if self.prune.is_some_and(|prune| prune(node)) {
            return;
        }

        let children = direct_causes(node);
        if depth < self.max_depth {
            self.cut.remove(&key);
            self.stack
                .extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        } else if !children.is_empty() {
            self.cut.insert(key);
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = ErrorRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            let key = node as NodeKey;
            let first_visit = match self.depths.get(&key) {
                Some(&seen) if seen <= depth => continue,
                Some(_) => false,
                None => true,
            };
            self.depths.insert(key, depth);
            self.expand(node, key, depth);

            if first_visit {
                return Some(node);
            }
        }

        if self.truncated() && !self.reported {
            self.reported = true;
            warn!(
                max_depth = self.max_depth,
                skipped = self.cut.len(),
                "Cause graph exceeds inspection depth, deeper causes skipped"
            );
        }
        None
    }
}
