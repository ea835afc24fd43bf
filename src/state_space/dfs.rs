use std::collections::HashSet;
use std::hash::Hash;

/// Depth-limited DFS over an implicit state space. Cycle avoidance tracks
/// the current path only, so the same state may be revisited on a different
/// branch. Returns the first path found, not necessarily the shortest.
pub fn dfs<S, G, F>(start: S, is_goal: G, successors: F, depth_limit: usize) -> Option<Vec<S>>
where
    S: Eq + Hash + Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<S>,
{
    let mut on_path = HashSet::new();
    let mut path = Vec::new();
    if visit(&start, &is_goal, &successors, depth_limit, &mut on_path, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn visit<S, G, F>(
    state: &S,
    is_goal: &G,
    successors: &F,
    depth_left: usize,
    on_path: &mut HashSet<S>,
    path: &mut Vec<S>,
) -> bool
where
    S: Eq + Hash + Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<S>,
{
    path.push(state.clone());
    if is_goal(state) {
        return true;
    }
    if depth_left == 0 {
        path.pop();
        return false;
    }

    on_path.insert(state.clone());
    for next in successors(state) {
        if !on_path.contains(&next)
            && visit(&next, is_goal, successors, depth_left - 1, on_path, path)
        {
            on_path.remove(state);
            return true;
        }
    }
    on_path.remove(state);
    path.pop();
    false
}
