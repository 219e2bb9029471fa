use tilestar_core::Point;

/// Index of a node inside a search arena or a returned [`Path`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

/// A step along a route discovered by the search engine.
///
/// The engine fills in the coordinate, parent link, cumulative overlay weight
/// and step count. The strategy assigns the priority weight and may keep any
/// per-node data in the payload; the engine never looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<T = ()> {
    pub(crate) coord: Point,
    pub(crate) parent: Option<NodeId>,
    pub(crate) priority_weight: i32,
    pub(crate) cumulative_overlay_weight: i32,
    pub(crate) steps_traveled: i32,
    pub(crate) payload: T,
}

impl<T: Default> PathNode<T> {
    /// A parentless node sitting on a tile of the given overlay weight.
    pub(crate) fn root(coord: Point, tile_weight: i32) -> Self {
        Self {
            coord,
            parent: None,
            priority_weight: 0,
            cumulative_overlay_weight: tile_weight,
            steps_traveled: 0,
            payload: T::default(),
        }
    }

    /// A candidate one step beyond `parent`.
    pub(crate) fn child(
        parent_id: NodeId,
        parent: &PathNode<T>,
        coord: Point,
        tile_weight: i32,
    ) -> Self {
        Self {
            coord,
            parent: Some(parent_id),
            priority_weight: 0,
            cumulative_overlay_weight: parent.cumulative_overlay_weight + tile_weight,
            steps_traveled: parent.steps_traveled + 1,
            payload: T::default(),
        }
    }
}

impl<T> PathNode<T> {
    /// The tile this node stands on.
    #[inline]
    pub fn coord(&self) -> Point {
        self.coord
    }

    /// The node this one was reached from, if any.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Priority assigned by the strategy; lower is expanded first.
    #[inline]
    pub fn priority_weight(&self) -> i32 {
        self.priority_weight
    }

    /// Sum of the overlay weights of every tile from the root to this node.
    #[inline]
    pub fn cumulative_overlay_weight(&self) -> i32 {
        self.cumulative_overlay_weight
    }

    /// Number of moves from the root to this node.
    #[inline]
    pub fn steps_traveled(&self) -> i32 {
        self.steps_traveled
    }

    /// Strategy-owned per-node data.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Set the frontier priority. Strategies call this from
    /// [`Strategy::weigh`](crate::Strategy::weigh).
    #[inline]
    pub fn set_priority_weight(&mut self, weight: i32) {
        self.priority_weight = weight;
    }

    /// Mutable access to the payload. Only the first route to reach a tile
    /// writes it; a later, cheaper route keeps what is already there.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A finished route handed back to the caller.
///
/// Only the nodes on the route are kept. Node 0 is the terminal node, each
/// node's parent is the next one and the last node is the root. Walking the
/// parents from [`terminal`](Path::terminal) therefore visits the whole
/// route, which for the built-in strategies runs source to target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathRepr<T>")
)]
pub struct Path<T = ()> {
    pub(crate) nodes: Vec<PathNode<T>>,
}

/// Unchecked wire form of a [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRepr<T> {
    nodes: Vec<PathNode<T>>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<PathRepr<T>> for Path<T> {
    type Error = &'static str;

    fn try_from(repr: PathRepr<T>) -> Result<Self, Self::Error> {
        let nodes = repr.nodes;
        if nodes.is_empty() {
            return Err("path has no nodes");
        }
        let last = nodes.len() - 1;
        for (i, node) in nodes.iter().enumerate() {
            if node.parent != (i < last).then_some(NodeId(i + 1)) {
                return Err("path node is not linked to its successor");
            }
        }
        Ok(Self { nodes })
    }
}

impl<T> Path<T> {
    /// Extract the chain ending at `terminal` from a search arena, dropping
    /// every node that is not on it.
    pub(crate) fn from_arena(arena: Vec<PathNode<T>>, terminal: NodeId) -> Self {
        let mut chain = Vec::new();
        let mut cur = Some(terminal);
        while let Some(id) = cur {
            chain.push(id.0);
            cur = arena[id.0].parent;
        }

        let mut slots: Vec<Option<PathNode<T>>> = arena.into_iter().map(Some).collect();
        let nodes = chain
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect();
        Self::from_chain(nodes)
    }

    /// Wrap nodes already in terminal-to-root order, rewriting their parent
    /// links to match.
    pub(crate) fn from_chain(mut nodes: Vec<PathNode<T>>) -> Self {
        let last = nodes.len().saturating_sub(1);
        for (i, node) in nodes.iter_mut().enumerate() {
            node.parent = (i < last).then_some(NodeId(i + 1));
        }
        Self { nodes }
    }

    /// The node the search stopped on.
    pub fn terminal(&self) -> &PathNode<T> {
        &self.nodes[0]
    }

    /// The parentless end of the route.
    pub fn root(&self) -> &PathNode<T> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&PathNode<T>> {
        self.nodes.get(id.0)
    }

    /// The parent of `node`, or `None` for the root.
    pub fn parent_of(&self, node: &PathNode<T>) -> Option<&PathNode<T>> {
        node.parent.and_then(|id| self.get(id))
    }

    /// Iterate from the terminal node to the root.
    pub fn iter(&self) -> std::slice::Iter<'_, PathNode<T>> {
        self.nodes.iter()
    }

    /// Coordinates from the terminal node to the root.
    pub fn points(&self) -> Vec<Point> {
        self.nodes.iter().map(|n| n.coord).collect()
    }

    /// Number of nodes on the route, both ends included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a path holds at least its terminal node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of moves along the route.
    pub fn total_steps(&self) -> i32 {
        self.terminal().steps_traveled
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a PathNode<T>;
    type IntoIter = std::slice::Iter<'a, PathNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let root: PathNode = PathNode::root(Point::new(1, 1), 3);
        let child = PathNode::child(NodeId(0), &root, Point::new(1, 2), 4);
        let path = Path::from_chain(vec![child, root]);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(serde_json::from_str::<Path>(r#"{"nodes":[]}"#).is_err());
    }

    #[test]
    fn broken_links_are_rejected() {
        let root: PathNode = PathNode::root(Point::new(0, 0), 0);
        let child = PathNode::child(NodeId(0), &root, Point::new(0, 1), 0);
        // Parent of node 0 must be node 1, not node 0.
        let bad = Path { nodes: vec![child, root] };
        let json = serde_json::to_string(&bad).unwrap();
        assert!(serde_json::from_str::<Path>(&json).is_err());
    }
}
