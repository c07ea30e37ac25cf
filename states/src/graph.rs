use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first is the start node, last is the end node
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph between state slots.
///
/// An edge `from -> to` means `to` is derived from `from`, so a change to
/// `from` makes `to` stale.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    nodes: BTreeSet<Node>,
    edges: Vec<(Node, Node)>,

    downstream_cache: BTreeMap<Node, Vec<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            edges: Vec::new(),
            downstream_cache: BTreeMap::new(),
        }
    }

    /// Registers a node that may have no edges.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    /// Declares that `to` is derived from `from`.
    pub fn add_edge(&mut self, from: Node, to: Node) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.edges.push((from, to));
        self.downstream_cache.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Orders every node so that each one comes after all of its inputs.
    ///
    /// Ties are broken by `Ord`, so the result is deterministic.
    pub fn topological_order(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> =
            self.nodes.iter().map(|node| (*node, 0)).collect();
        for node in &self.nodes {
            for next in self.direct_successors(*node)? {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree += 1;
                }
            }
        }

        let mut order = Vec::with_capacity(self.nodes.len());
        while !in_degree.is_empty() {
            let Some(node) = in_degree
                .iter()
                .find(|(_, degree)| **degree == 0)
                .map(|(node, _)| *node)
            else {
                let remaining: Vec<Node> = in_degree.keys().copied().collect();
                let route = self.find_cycle(&remaining).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route }));
            };

            in_degree.remove(&node);
            for next in self.direct_successors(node)? {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                }
            }
            order.push(node);
        }

        Ok(order)
    }

    /// Every node transitively derived from `node`, excluding `node` itself
    /// unless it sits on a cycle.
    pub fn downstream(&mut self, node: Node) -> &[Node] {
        if !self.downstream_cache.contains_key(&node) {
            let collected = self.collect_downstream(node);
            self.downstream_cache.insert(node, collected);
        }
        self.downstream_cache
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn direct_successors(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, to) in &self.edges {
            if *from == node && !collected.insert(*to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![node, *to],
                }));
            }
        }

        Ok(collected)
    }

    fn collect_downstream(&self, node: Node) -> Vec<Node> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for (from, to) in &self.edges {
                // the seen check also keeps a cyclic graph from looping forever
                if *from == current && seen.insert(*to) {
                    queue.push_back(*to);
                }
            }
        }

        seen.into_iter().collect()
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        let successors = |node: Node| {
            self.edges
                .iter()
                .filter(move |(from, to)| *from == node && nodes.contains(to))
                .map(|(_, to)| *to)
                .collect::<Vec<_>>()
                .into_iter()
        };

        let mut visited = BTreeSet::new();
        let mut on_path = BTreeSet::new();
        let mut path = Vec::new();
        let mut stack = Vec::new();

        for &start in nodes {
            if !visited.insert(start) {
                continue;
            }
            stack.push((start, successors(start)));
            on_path.insert(start);
            path.push(start);

            while let Some((current, next)) = stack.last_mut() {
                match next.next() {
                    Some(neighbor) if on_path.contains(&neighbor) => {
                        let pos = path.iter().position(|n| *n == neighbor)?;
                        let mut cycle = path[pos..].to_vec();
                        cycle.push(neighbor);
                        return Some(cycle);
                    }
                    Some(neighbor) => {
                        if visited.insert(neighbor) {
                            on_path.insert(neighbor);
                            path.push(neighbor);
                            stack.push((neighbor, successors(neighbor)));
                        }
                    }
                    None => {
                        let done = *current;
                        stack.pop();
                        on_path.remove(&done);
                        path.pop();
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph<u32> {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(1, 3);
        graph
    }

    #[test]
    fn topological_order_puts_inputs_first() {
        let graph = chain();
        assert_eq!(graph.topological_order().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn isolated_nodes_are_ordered() {
        let mut graph = chain();
        graph.add_node(0);
        graph.add_node(9);
        assert_eq!(graph.topological_order().unwrap(), vec![0, 1, 2, 3, 9]);
        assert_eq!(graph.len(), 5);
    }

    #[test]
    fn downstream_is_transitive() {
        let mut graph = chain();
        graph.add_edge(4, 3);
        assert_eq!(graph.downstream(1), &[2, 3]);
        assert_eq!(graph.downstream(2), &[3]);
        assert_eq!(graph.downstream(4), &[3]);
        assert!(graph.downstream(3).is_empty());
    }

    #[test]
    fn downstream_cache_is_reset_by_new_edges() {
        let mut graph = chain();
        assert_eq!(graph.downstream(3), &[] as &[u32]);
        graph.add_edge(3, 5);
        assert_eq!(graph.downstream(1), &[2, 3, 5]);
    }

    #[test]
    fn duplicate_edge_error_msg() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);

        match graph.topological_order() {
            Err(TopologyError::DuplicateEdge(route)) => {
                assert_eq!(format!("{route:?}"), "1 -> 2");
                let err = TopologyError::DuplicateEdge(route).to_string();
                assert!(err.contains("Duplicate edge detected"));
                assert!(err.contains("from 1 to 2"));
            }
            other => panic!("Expected DuplicateEdge error, got {other:?}"),
        }
    }

    #[test]
    fn cycle_error_msg() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);

        match graph.topological_order() {
            Err(TopologyError::CycleDetected(route)) => {
                let nodes = route.nodes();
                assert_eq!(nodes.first(), nodes.last());
                assert_eq!(nodes.len(), 4);

                let err = TopologyError::CycleDetected(route).to_string();
                assert!(err.contains("Cycle detected"));
                assert!(err.contains("->"));
            }
            other => panic!("Expected CycleDetected error, got {other:?}"),
        }
    }
}
