use tracing::trace;

/// Iterative-deepening DFS: depth-limited searches with the limit raised one
/// level per round until the goal is found or `max_depth` is exhausted.
/// Returns the path from `start` to `goal` and the depth limit at which it
/// was found. The visited set tracks the current path only, so a node may be
/// re-expanded through a shorter route in a later round.
pub fn iterative_deepening(
    adj: &[Vec<usize>],
    start: usize,
    goal: usize,
    max_depth: usize,
) -> Option<(Vec<usize>, usize)> {
    for limit in 0..=max_depth {
        trace!(limit, "deepening round");
        let mut on_path = vec![false; adj.len()];
        let mut path = Vec::new();
        if depth_limited(adj, start, goal, limit, 0, &mut on_path, &mut path) {
            return Some((path, limit));
        }
    }
    None
}

fn depth_limited(
    adj: &[Vec<usize>],
    node: usize,
    goal: usize,
    limit: usize,
    depth: usize,
    on_path: &mut [bool],
    path: &mut Vec<usize>,
) -> bool {
    if depth > limit {
        return false;
    }

    path.push(node);
    if node == goal {
        return true;
    }
    on_path[node] = true;

    for &next in &adj[node] {
        if !on_path[next]
            && depth_limited(adj, next, goal, limit, depth + 1, on_path, path)
        {
            return true;
        }
    }

    path.pop();
    on_path[node] = false;
    false
}
