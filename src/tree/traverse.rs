use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Minimal view of a graph that can be walked upward and downward.
///
/// Trees implement this with their parent link and child list. Any other
/// structure exposing the same two hooks gets [`distance`] and
/// [`path_between`] for free, including ones that contain back-edges.
pub trait Traversable {
    type Node: Copy + Eq + Hash;

    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;

    fn children_of(&self, node: Self::Node) -> &[Self::Node];
}

/// Number of edges on the path from `from` to `to`.
///
/// Returns `Some(0)` when both are the same node and `None` when no path
/// exists (the nodes belong to disconnected trees). `None` takes the place
/// of a `-1` distance.
pub fn distance<G: Traversable + ?Sized>(graph: &G, from: G::Node, to: G::Node) -> Option<usize> {
    path_between(graph, from, to).map(|path| path.len() - 1)
}

/// Node sequence connecting `from` and `to`, listed from `to` back to `from`.
///
/// Each step may move to the parent or into any child. Every node is
/// expanded at most once, so the walk terminates even if the graph contains
/// cycles. On a tree the discovered path is the unique simple path.
pub fn path_between<G: Traversable + ?Sized>(
    graph: &G,
    from: G::Node,
    to: G::Node,
) -> Option<Vec<G::Node>> {
    // predecessor of each visited node on the way from `from`
    let mut came_from: HashMap<G::Node, Option<G::Node>> = HashMap::new();
    let mut queue = VecDeque::new();
    came_from.insert(from, None);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(Some(prev)) = came_from.get(&cursor) {
                path.push(*prev);
                cursor = *prev;
            }
            return Some(path);
        }

        let neighbours = graph
            .parent_of(current)
            .into_iter()
            .chain(graph.children_of(current).iter().copied());
        for next in neighbours {
            if !came_from.contains_key(&next) {
                came_from.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    None
}
