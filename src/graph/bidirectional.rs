use std::collections::VecDeque;

/// Shortest path on an undirected graph by running BFS from both ends and
/// alternating frontier expansions until they meet.
pub fn bidirectional_search(adj: &[Vec<usize>], start: usize, goal: usize) -> Option<Vec<usize>> {
    if start == goal {
        return Some(vec![start]);
    }
    if start >= adj.len() || goal >= adj.len() {
        return None;
    }

    // parent[node] = Some(predecessor) once discovered; the start/goal nodes
    // are their own roots, marked with None while still "discovered".
    let mut forward_parent: Vec<Option<Option<usize>>> = vec![None; adj.len()];
    let mut backward_parent: Vec<Option<Option<usize>>> = vec![None; adj.len()];
    forward_parent[start] = Some(None);
    backward_parent[goal] = Some(None);

    let mut forward_queue = VecDeque::from([start]);
    let mut backward_queue = VecDeque::from([goal]);
    let mut forward_turn = true;

    while !forward_queue.is_empty() && !backward_queue.is_empty() {
        let meet = if forward_turn {
            expand(adj, &mut forward_queue, &mut forward_parent, &backward_parent)
        } else {
            expand(adj, &mut backward_queue, &mut backward_parent, &forward_parent)
        };
        forward_turn = !forward_turn;

        if let Some(meeting) = meet {
            return Some(join_paths(meeting, &forward_parent, &backward_parent));
        }
    }
    None
}

/// Expands one full frontier level; returns a node seen from both sides.
fn expand(
    adj: &[Vec<usize>],
    queue: &mut VecDeque<usize>,
    parent: &mut [Option<Option<usize>>],
    other_parent: &[Option<Option<usize>>],
) -> Option<usize> {
    for _ in 0..queue.len() {
        let node = queue.pop_front()?;
        for &next in &adj[node] {
            if parent[next].is_none() {
                parent[next] = Some(Some(node));
                if other_parent[next].is_some() {
                    return Some(next);
                }
                queue.push_back(next);
            }
        }
    }
    None
}

fn join_paths(
    meeting: usize,
    forward_parent: &[Option<Option<usize>>],
    backward_parent: &[Option<Option<usize>>],
) -> Vec<usize> {
    let mut path = Vec::new();

    let mut node = Some(meeting);
    while let Some(n) = node {
        path.push(n);
        node = forward_parent[n].flatten();
    }
    path.reverse();

    let mut node = backward_parent[meeting].flatten();
    while let Some(n) = node {
        path.push(n);
        node = backward_parent[n].flatten();
    }
    path
}
