use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Breadth-first search over an implicit state space. Returns the shortest
/// path (in moves) from `start` to the first state satisfying `is_goal`.
pub fn bfs<S, G, F>(start: S, is_goal: G, successors: F) -> Option<Vec<S>>
where
    S: Eq + Hash + Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<S>,
{
    if is_goal(&start) {
        return Some(vec![start]);
    }

    let mut parent: HashMap<S, S> = HashMap::new();
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        for next in successors(&state) {
            if !seen.insert(next.clone()) {
                continue;
            }
            parent.insert(next.clone(), state.clone());
            if is_goal(&next) {
                return Some(reconstruct(next, &parent));
            }
            queue.push_back(next);
        }
    }
    None
}

fn reconstruct<S: Eq + Hash + Clone>(goal: S, parent: &HashMap<S, S>) -> Vec<S> {
    let mut path = vec![goal];
    let mut current = path[0].clone();
    while let Some(prev) = parent.get(&current) {
        path.push(prev.clone());
        current = prev.clone();
    }
    path.reverse();
    path
}
