//
//  cycles.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

use super::SchemaRegistry;
use crate::types::{TypeKind, TypeRef};

/// Find input objects that reference each other only through non-null,
/// non-list fields. Such types can never be instantiated.
///
/// Each cycle starts at its earliest-registered member and follows the actual
/// field references back to it (`["A", "C", "B", "A"]`).
pub(crate) fn input_object_cycles(schema: &SchemaRegistry) -> Vec<Vec<String>> {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

    for ty in schema.types() {
        if ty.kind() == TypeKind::InputObject {
            nodes.insert(ty.name(), graph.add_node(ty.name()));
        }
    }

    for ty in schema.types() {
        let Some(&from) = nodes.get(ty.name()) else {
            continue;
        };
        for field in ty.input_fields() {
            if let TypeRef::NonNull(inner) = field.ty() {
                if let TypeRef::Named(target) = inner.as_ref() {
                    if let Some(&to) = nodes.get(target.as_str()) {
                        graph.update_edge(from, to, ());
                    }
                }
            }
        }
    }

    let order: HashMap<&str, usize> = schema
        .types()
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name(), i))
        .collect();

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .filter_map(|scc| {
            let start = scc
                .iter()
                .copied()
                .min_by_key(|&idx| order.get(graph[idx]).copied().unwrap_or(usize::MAX))?;
            let members: HashSet<NodeIndex> = scc.into_iter().collect();
            let path = cycle_through(&graph, start, &members);
            Some(path.into_iter().map(|idx| graph[idx].to_string()).collect())
        })
        .collect();

    cycles.sort_by_key(|cycle| order.get(cycle[0].as_str()).copied().unwrap_or(usize::MAX));
    cycles
}

/// Shortest path from `start` back to itself, staying inside `members`.
fn cycle_through(
    graph: &DiGraph<&str, ()>,
    start: NodeIndex,
    members: &HashSet<NodeIndex>,
) -> Vec<NodeIndex> {
    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(node) {
            if !members.contains(&next) {
                continue;
            }
            if next == start {
                let mut path = vec![start, node];
                let mut current = node;
                while let Some(&prev) = parent.get(&current) {
                    path.push(prev);
                    current = prev;
                }
                path.reverse();
                return path;
            }
            if !parent.contains_key(&next) {
                parent.insert(next, node);
                queue.push_back(next);
            }
        }
    }

    vec![start, start]
}
