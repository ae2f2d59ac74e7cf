//! The `Graph` container.
//!
//! Storage is slot based: removed nodes and edges leave a tombstone so that the insertion order of
//! the survivors never changes. Adjacency is kept per node as lists of edge slots, so incident-edge
//! queries cost O(degree) instead of a scan over every edge.

mod edge_key;
mod entries;

pub mod alg;

pub use edge_key::EdgeKey;

use edge_key::EdgeKeyView;
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Allow several edges between the same ordered pair, told apart by their name.
    pub multigraph: bool,
}

#[derive(Debug, Clone)]
pub struct Graph<N, E, G = ()> {
    options: GraphOptions,
    graph_label: G,

    nodes: Vec<Option<NodeEntry<N>>>,
    node_index: HashMap<String, usize>,
    live_nodes: usize,

    edges: Vec<Option<EdgeEntry<E>>>,
    edge_index: HashMap<EdgeKey, usize>,
    live_edges: usize,
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            live_nodes: 0,
            edges: Vec::new(),
            edge_index: HashMap::default(),
            live_edges: 0,
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    // Nodes

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts `id` or replaces its label. Replacing keeps the original position in node order.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&slot) = self.node_index.get(id.as_str()) {
            if let Some(entry) = self.nodes[slot].as_mut() {
                entry.label = label;
            }
            return self;
        }
        let slot = self.nodes.len();
        self.nodes.push(Some(NodeEntry::new(id.clone(), label)));
        self.node_index.insert(id, slot);
        self.live_nodes += 1;
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.has_node(&id) {
            return self;
        }
        self.set_node(id, N::default())
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        let slot = *self.node_index.get(id)?;
        self.nodes[slot].as_ref().map(|n| &n.label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        let slot = *self.node_index.get(id)?;
        self.nodes[slot].as_mut().map(|n| &mut n.label)
    }

    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().flatten().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes().map(str::to_string).collect()
    }

    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&str, &N),
    {
        for n in self.nodes.iter().flatten() {
            f(&n.id, &n.label);
        }
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for n in self.nodes.iter_mut().flatten() {
            f(&n.id, &mut n.label);
        }
    }

    /// Removes `id` and every edge incident to it.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(slot) = self.node_index.remove(id) else {
            return false;
        };
        let Some(entry) = self.nodes[slot].take() else {
            return false;
        };
        self.live_nodes -= 1;

        let mut incident: Vec<usize> = entry.out_edges.clone();
        incident.extend(entry.in_edges.iter().copied());
        incident.sort_unstable();
        incident.dedup();
        for edge_slot in incident {
            self.remove_edge_slot(edge_slot);
        }
        true
    }

    // Edges

    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().flatten().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges().cloned().collect()
    }

    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        for e in self.edges.iter().flatten() {
            f(&e.key, &e.label);
        }
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    /// Inserts an edge (creating missing endpoints) or replaces the label of an existing one.
    ///
    /// Names are dropped on non-multigraphs, so at most one edge exists per ordered pair there.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        let name = if self.options.multigraph {
            name.map(Into::into)
        } else {
            None
        };
        let key = EdgeKey { v, w, name };

        if let Some(&slot) = self.edge_index.get(&key) {
            if let (Some(label), Some(entry)) = (label, self.edges[slot].as_mut()) {
                entry.label = label;
            }
            return self;
        }

        self.ensure_node(key.v.clone());
        self.ensure_node(key.w.clone());
        let v_slot = self.node_index[key.v.as_str()];
        let w_slot = self.node_index[key.w.as_str()];

        let slot = self.edges.len();
        if let Some(n) = self.nodes[v_slot].as_mut() {
            n.out_edges.push(slot);
        }
        if let Some(n) = self.nodes[w_slot].as_mut() {
            n.in_edges.push(slot);
        }
        self.edge_index.insert(key.clone(), slot);
        self.edges.push(Some(EdgeEntry {
            key,
            label: label.unwrap_or_default(),
        }));
        self.live_edges += 1;
        self
    }

    pub fn set_edge_key(&mut self, key: EdgeKey, label: E) -> &mut Self {
        self.set_edge_named(key.v, key.w, key.name, Some(label))
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    fn view<'a>(&self, v: &'a str, w: &'a str, name: Option<&'a str>) -> EdgeKeyView<'a> {
        let name = if self.options.multigraph { name } else { None };
        EdgeKeyView { v, w, name }
    }

    fn slot_of(&self, view: EdgeKeyView<'_>) -> Option<usize> {
        self.edge_index.get(&view).copied()
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.slot_of(self.view(v, w, name)).is_some()
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        let slot = self.slot_of(self.view(v, w, name))?;
        self.edges[slot].as_ref().map(|e| &e.label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str, name: Option<&str>) -> Option<&mut E> {
        let slot = self.slot_of(self.view(v, w, name))?;
        self.edges[slot].as_mut().map(|e| &mut e.label)
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge(&key.v, &key.w, key.name.as_deref())
    }

    pub fn edge_mut_by_key(&mut self, key: &EdgeKey) -> Option<&mut E> {
        let slot = self.slot_of(key.view())?;
        self.edges[slot].as_mut().map(|e| &mut e.label)
    }

    pub fn remove_edge(&mut self, v: &str, w: &str, name: Option<&str>) -> bool {
        let Some(slot) = self.slot_of(self.view(v, w, name)) else {
            return false;
        };
        self.remove_edge_slot(slot)
    }

    pub fn remove_edge_key(&mut self, key: &EdgeKey) -> bool {
        self.remove_edge(&key.v, &key.w, key.name.as_deref())
    }

    fn remove_edge_slot(&mut self, slot: usize) -> bool {
        let Some(entry) = self.edges[slot].take() else {
            return false;
        };
        self.edge_index.remove(&entry.key);
        self.live_edges -= 1;
        for (id, outgoing) in [(&entry.key.v, true), (&entry.key.w, false)] {
            let Some(&n_slot) = self.node_index.get(id.as_str()) else {
                continue;
            };
            if let Some(n) = self.nodes[n_slot].as_mut() {
                let list = if outgoing {
                    &mut n.out_edges
                } else {
                    &mut n.in_edges
                };
                list.retain(|&s| s != slot);
            }
        }
        true
    }

    // Adjacency

    fn incident(&self, v: &str, outgoing: bool) -> impl Iterator<Item = &EdgeEntry<E>> {
        let list: &[usize] = self
            .node_index
            .get(v)
            .and_then(|&slot| self.nodes[slot].as_ref())
            .map(|n| {
                if outgoing {
                    n.out_edges.as_slice()
                } else {
                    n.in_edges.as_slice()
                }
            })
            .unwrap_or(&[]);
        list.iter().filter_map(|&slot| self.edges[slot].as_ref())
    }

    /// Edges leaving `v`, optionally restricted to those entering `w`.
    pub fn out_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        self.incident(v, true)
            .filter(|e| w.is_none_or(|w| e.key.w == w))
            .map(|e| e.key.clone())
            .collect()
    }

    /// Edges entering `v`, optionally restricted to those leaving `u`.
    pub fn in_edges(&self, v: &str, u: Option<&str>) -> Vec<EdgeKey> {
        self.incident(v, false)
            .filter(|e| u.is_none_or(|u| e.key.v == u))
            .map(|e| e.key.clone())
            .collect()
    }

    /// Every edge touching `v`, outgoing first. A self-loop is reported once.
    pub fn node_edges(&self, v: &str) -> Vec<EdgeKey> {
        let mut out = self.out_edges(v, None);
        out.extend(
            self.incident(v, false)
                .filter(|e| !e.key.is_self_loop())
                .map(|e| e.key.clone()),
        );
        out
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in self.incident(v, true) {
            if !out.contains(&e.key.w.as_str()) {
                out.push(&e.key.w);
            }
        }
        out
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in self.incident(v, false) {
            if !out.contains(&e.key.v.as_str()) {
                out.push(&e.key.v);
            }
        }
        out
    }

    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        let mut out = self.predecessors(v);
        for w in self.successors(v) {
            if !out.contains(&w) {
                out.push(w);
            }
        }
        out
    }

    /// Nodes without incoming edges, in node order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .flatten()
            .filter(|n| n.in_edges.is_empty())
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Nodes without outgoing edges, in node order.
    pub fn sinks(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .flatten()
            .filter(|n| n.out_edges.is_empty())
            .map(|n| n.id.as_str())
            .collect()
    }
}
