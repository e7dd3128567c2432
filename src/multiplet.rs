//! Multiplet synthesis (component C9): connected components of size >= 3
//! over the undirected graph of `Pair` records.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::ids::BaseIndex;
use crate::record::{Multiplet, PairKind, PairRecord};

pub fn synthesize(records: &[PairRecord]) -> Vec<Multiplet> {
    let mut adjacency: HashMap<BaseIndex, Vec<&PairRecord>> = HashMap::new();
    for record in records.iter().filter(|r| r.kind == PairKind::Pair) {
        adjacency.entry(record.i).or_default().push(record);
        adjacency.entry(record.j).or_default().push(record);
    }

    let mut visited: HashSet<BaseIndex> = HashSet::new();
    let mut multiplets = Vec::new();

    let mut nodes: Vec<BaseIndex> = adjacency.keys().copied().collect();
    nodes.sort();

    for &start in &nodes {
        if visited.contains(&start) {
            continue;
        }
        let component = collect_component(start, &adjacency, &mut visited);
        if component.len() < 3 {
            continue;
        }
        let mut indices = component.clone();
        indices.sort();
        let text = render_text(&indices, &adjacency);
        multiplets.push(Multiplet { indices, text });
    }

    multiplets.sort_by(|a, b| a.indices.cmp(&b.indices));
    multiplets
}

fn collect_component(
    start: BaseIndex,
    adjacency: &HashMap<BaseIndex, Vec<&PairRecord>>,
    visited: &mut HashSet<BaseIndex>,
) -> Vec<BaseIndex> {
    let mut stack = vec![start];
    let mut component = Vec::new();
    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        component.push(node);
        if let Some(edges) = adjacency.get(&node) {
            for edge in edges {
                let neighbour = if edge.i == node { edge.j } else { edge.i };
                if !visited.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
        }
    }
    component
}

/// Canonical `"i: X-Y (edges)"` lines, one per member, joined by `+`
/// (SPEC_FULL §4.8). Each member's line lists every edge it participates
/// in within the component, in `(i,j)` order.
fn render_text(indices: &[BaseIndex], adjacency: &HashMap<BaseIndex, Vec<&PairRecord>>) -> String {
    let member_set: BTreeMap<BaseIndex, ()> = indices.iter().map(|&i| (i, ())).collect();

    let mut lines = Vec::new();
    for &member in indices {
        let mut edges = Vec::new();
        if let Some(records) = adjacency.get(&member) {
            let mut sorted: Vec<&&PairRecord> = records
                .iter()
                .filter(|r| member_set.contains_key(&r.i) && member_set.contains_key(&r.j))
                .collect();
            sorted.sort_by_key(|r| (r.i, r.j));
            for record in sorted {
                let other = if record.i == member { record.j } else { record.i };
                let lw = record.lw.as_deref().unwrap_or("?/?");
                edges.push(format!("{other}({lw})"));
            }
        }
        lines.push(format!("{member}: {}", edges.join(",")));
    }
    lines.join("+")
}
