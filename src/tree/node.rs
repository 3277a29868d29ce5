use std::cmp::Ordering;

/// An owned, possibly empty, subtree
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(super) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// Walk down from `link` and return the slot that holds `key`, or the empty
/// slot where it would be inserted
pub(super) fn slot_mut<'a, K: Ord, V>(
    mut link: &'a mut Link<K, V>,
    key: &K,
) -> &'a mut Link<K, V> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };
        match ordering {
            Ordering::Equal => return link,
            Ordering::Less => {
                if let Some(node) = link {
                    link = &mut node.left;
                }
            }
            Ordering::Greater => {
                if let Some(node) = link {
                    link = &mut node.right;
                }
            }
        }
    }
}

/// Shared-reference counterpart of `slot_mut`, returning the node holding `key`
pub(super) fn search<'a, K: Ord, V>(
    mut link: &'a Link<K, V>,
    key: &K,
) -> Option<&'a Node<K, V>> {
    while let Some(node) = link {
        link = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Remove the node in `slot` (if any) and return its key and value.
/// With two children, the in-order successor is detached from the right
/// subtree and its contents are moved into the node, which stays in place
pub(super) fn unlink<K, V>(slot: &mut Link<K, V>) -> Option<(K, V)> {
    let mut node = slot.take()?;
    match (node.left.take(), node.right.take()) {
        (None, right) => *slot = right,
        (left, None) => *slot = left,
        (left, Some(right)) => {
            let (rest, successor) = detach_min(right);
            let Node { key, value, .. } = *successor;
            let old_key = std::mem::replace(&mut node.key, key);
            let old_value = std::mem::replace(&mut node.value, value);
            node.left = left;
            node.right = rest;
            *slot = Some(node);
            return Some((old_key, old_value));
        }
    }
    let Node { key, value, .. } = *node;
    Some((key, value))
}

/// Split the leftmost node off `root`.
/// Return the remaining subtree and the detached node, whose left link is empty
fn detach_min<K, V>(mut root: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    let mut link = &mut root.left;
    while link.as_deref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    match link.take() {
        Some(mut min) => {
            *link = min.right.take();
            (Some(root), min)
        }
        // `root` itself is the minimum
        None => {
            let rest = root.right.take();
            (rest, root)
        }
    }
}

/// Number of nodes on the longest root-to-leaf path
pub(super) fn height<K, V>(root: &Link<K, V>) -> usize {
    let mut max = 0;
    let mut pending: Vec<(&Node<K, V>, usize)> =
        root.as_deref().map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = pending.pop() {
        max = max.max(depth);
        for child in [&node.left, &node.right].iter() {
            if let Some(child) = child.as_deref() {
                pending.push((child, depth + 1));
            }
        }
    }
    max
}

/// Free a subtree without recursing, so degenerate trees can't overflow the stack
pub(super) fn drop_link<K, V>(root: &mut Link<K, V>) {
    let mut pending: Vec<Box<Node<K, V>>> = root.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
