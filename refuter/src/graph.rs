//! Resolution graph in Graphviz DOT format.

use core::fmt::{self, Display};
use hashbrown::HashMap;
use petgraph::dot::Dot;
use petgraph::graph::{self, NodeIndex};
use refute::{Clause, Observer};

#[derive(Debug)]
enum Node {
    /// negation of the query
    Goal(Clause),
    Clause(Clause),
    Contradiction,
}

impl Node {
    fn attributes(&self) -> &'static str {
        match self {
            Self::Goal(_) => "shape = doublecircle, color = blue",
            Self::Clause(_) => "",
            Self::Contradiction => "shape = star, color = red",
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Goal(cl) | Self::Clause(cl) => cl.fmt(f),
            Self::Contradiction => write!(f, "{{}}"),
        }
    }
}

/// Graph with an edge from both parents of a resolution step to the resolvent.
///
/// Edges are labelled with the number of the step that created them.
#[derive(Debug)]
pub struct Graph {
    graph: graph::Graph<Node, usize>,
    nodes: HashMap<Clause, NodeIndex>,
    goal: Clause,
    steps: usize,
}

impl Graph {
    pub fn new(goal: Clause) -> Self {
        Self {
            graph: graph::Graph::new(),
            nodes: HashMap::new(),
            goal,
            steps: 0,
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    fn node(&mut self, cl: &Clause) -> NodeIndex {
        if let Some(idx) = self.nodes.get(cl) {
            return *idx;
        }
        let node = if cl.is_empty() {
            Node::Contradiction
        } else if *cl == self.goal {
            Node::Goal(cl.clone())
        } else {
            Node::Clause(cl.clone())
        };
        let idx = self.graph.add_node(node);
        self.nodes.insert(cl.clone(), idx);
        idx
    }

    /// Render the graph in DOT format.
    pub fn dot(&self) -> String {
        Dot::with_attr_getters(
            &self.graph,
            &[],
            &|_, _| String::new(),
            &|_, (_, node)| node.attributes().to_string(),
        )
        .to_string()
    }
}

impl Observer for Graph {
    fn resolved(&mut self, target: &Clause, matched: &Clause, resolvent: &Clause) {
        self.steps += 1;
        let to = self.node(resolvent);
        for parent in [matched, target] {
            let from = self.node(parent);
            self.graph.add_edge(from, to, self.steps);
        }
    }
}
