use std::collections::HashMap;

use crate::text;

use super::prelude::*;

const PREVIEW_CHARS: usize = 50;

/// One choice in the "reply to" selector: an entry id labeled with a
/// short preview of its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyOption {
    pub target: Id,
    pub label: String,
}

/// Rebuilds the reply forest from a flat snapshot of a day's entries.
///
/// An entry whose parent id is missing from the snapshot becomes a root
/// instead of an error; partial loads must still render. Roots are
/// ordered by ascending creation time, a pending timestamp counting as
/// the epoch. Children keep the order of the input sequence (the caller
/// passes entries ascending by creation time; replies are not
/// re-sorted). The asymmetry between root and child ordering is
/// inherited behavior and must stay.
pub fn build_forest(entries: Vec<Entry>) -> Vec<TreeNode> {
    let index: HashMap<&Id, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (&entry.id, i))
        .collect();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        match entry.parent.as_ref().and_then(|parent| index.get(parent)) {
            Some(&parent) => children[parent].push(i),
            None => roots.push(i),
        }
    }
    roots.sort_by_key(|&i| creation_millis(&entries[i]));
    roots
        .iter()
        .map(|&root| assemble(root, &entries, &children))
        .collect()
}

fn creation_millis(entry: &Entry) -> i64 {
    entry.created_at.map_or(0, Timestamp::as_millis)
}

// Entries that are part of a parent cycle are unreachable from any root
// and silently drop out, exactly like unreachable nodes in the web view.
fn assemble(i: usize, entries: &[Entry], children: &[Vec<usize>]) -> TreeNode {
    TreeNode {
        entry: entries[i].clone(),
        children: children[i]
            .iter()
            .map(|&child| assemble(child, entries, children))
            .collect(),
    }
}

/// Pre-order flattening of a forest. Parent links survive, so feeding
/// the result back into [`build_forest`] reproduces the forest.
pub fn flatten(forest: &[TreeNode]) -> Vec<Entry> {
    let mut flat = Vec::new();
    for node in forest {
        collect(node, &mut flat);
    }
    flat
}

fn collect(node: &TreeNode, into: &mut Vec<Entry>) {
    into.push(node.entry.clone());
    for child in &node.children {
        collect(child, into);
    }
}

/// Reply-target options for the entry form: one option per node in
/// pre-order, labeled with a truncated text preview.
pub fn reply_options(forest: &[TreeNode]) -> Vec<ReplyOption> {
    flatten(forest)
        .into_iter()
        .map(|entry| ReplyOption {
            label: text::preview(&entry.text, PREVIEW_CHARS),
            target: entry.id,
        })
        .collect()
}
