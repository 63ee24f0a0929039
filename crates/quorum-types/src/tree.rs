//! Reply thread assembly.
//!
//! Repositories only ever return flat lists of replies. Callers that want the
//! nested shape run the list through `build_reply_tree`, which does no I/O.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::Reply;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyNode {
    pub reply: Reply,
    pub children: Vec<ReplyNode>,
}

impl ReplyNode {
    /// Number of replies in this subtree, including this one.
    pub fn reply_count(&self) -> usize {
        1 + self.children.iter().map(ReplyNode::reply_count).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(ReplyNode::depth).max().unwrap_or(0)
    }
}

/// Build a forest from a flat list of replies.
///
/// Roots are replies with no parent, or whose parent is not in `replies`.
/// Siblings keep their relative input order. Replies caught in a parent cycle
/// never reach a root and are dropped.
pub fn build_reply_tree(replies: Vec<Reply>) -> Vec<ReplyNode> {
    let present: HashSet<i64> = replies.iter().map(|r| r.id).collect();

    let mut roots = Vec::new();
    let mut children: HashMap<i64, Vec<Reply>> = HashMap::new();
    for reply in replies {
        match reply.parent_id {
            Some(parent) if present.contains(&parent) => {
                children.entry(parent).or_default().push(reply)
            }
            _ => roots.push(reply),
        }
    }

    roots
        .into_iter()
        .map(|reply| attach(reply, &mut children))
        .collect()
}

fn attach(reply: Reply, children: &mut HashMap<i64, Vec<Reply>>) -> ReplyNode {
    let kids = children.remove(&reply.id).unwrap_or_default();
    ReplyNode {
        children: kids.into_iter().map(|r| attach(r, children)).collect(),
        reply,
    }
}
