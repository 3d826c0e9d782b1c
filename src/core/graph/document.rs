//! Graph document: an ordered list of DOT statements
//!
//! Text stored in statements is already DOT-safe (backslashes and quotes escaped);
//! rendering only wraps it in quotes and attribute syntax.

use std::fmt::{self, Write};

/// Graph-level attributes written at the top of every family chart
pub const GRAPH_HEADER: &[&str] = &[
    "rankdir=TB;",
    "bgcolor=white;",
    "margin=0.1;",
    "pad=0.1;",
    "ranksep=0.3;",
    "nodesep=0.2;",
    "node [shape=box, style=\"filled,rounded\", fontname=\"Arial\", fontsize=10, fixedsize=false, margin=0.1];",
    "edge [color=black, penwidth=1.5];",
];

/// Style class attached to tree-connection nodes (targeted by the HTML page CSS)
pub const TREE_CONNECTION_CLASS: &str = "tree-connection";

/// A person node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStatement {
    /// Node identifier
    pub id: String,
    /// Label, lines separated by `\n`
    pub label: String,
    /// Fill color name
    pub fill_color: String,
    /// Triple border and bold font
    pub emphasized: bool,
    /// Clickable link, opened in a new tab
    pub url: Option<String>,
    /// SVG class attribute
    pub class: Option<String>,
}

/// One statement of the family graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `// comment`
    Comment(String),
    /// Empty line
    Blank,
    /// Person node
    Node(NodeStatement),
    /// `{rank=same; "a"; "b"};`
    SameRank {
        /// First spouse
        a: String,
        /// Second spouse
        b: String,
    },
    /// Undirected dashed spouse edge that doesn't affect ranking
    Marriage {
        /// First spouse
        a: String,
        /// Second spouse
        b: String,
        /// Marriage info label
        label: Option<String>,
    },
    /// Parent to child edge
    Parent {
        /// Father or mother
        parent: String,
        /// Child
        child: String,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) => write!(f, "// {text}"),
            Self::Blank => Ok(()),
            Self::Node(node) => {
                write!(
                    f,
                    "\"{}\" [label=\"{}\", fillcolor=\"{}\", style=\"filled,rounded\"",
                    node.id, node.label, node.fill_color
                )?;
                if node.emphasized {
                    write!(f, ", peripheries=3, fontname=\"Arial Bold\"")?;
                }
                if let Some(url) = &node.url {
                    write!(f, ", URL=\"{url}\", target=\"_blank\"")?;
                }
                write!(f, ", tooltip=\"\"")?;
                if let Some(class) = &node.class {
                    write!(f, ", class=\"{class}\"")?;
                }
                write!(f, "];")
            }
            Self::SameRank { a, b } => write!(f, "{{rank=same; \"{a}\"; \"{b}\"}};"),
            Self::Marriage { a, b, label } => {
                write!(
                    f,
                    "\"{a}\" -> \"{b}\" [dir=none, color=black, style=dashed, constraint=false"
                )?;
                if let Some(label) = label {
                    write!(f, ", label=\"{label}\", fontsize=10, fontcolor=black")?;
                }
                write!(f, "];")
            }
            Self::Parent { parent, child } => write!(f, "\"{parent}\" -> \"{child}\";"),
        }
    }
}

/// A complete family graph, built once per input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDocument {
    name: String,
    statements: Vec<Statement>,
}

impl GraphDocument {
    /// Empty `digraph` with the given graph name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statements: Vec::new(),
        }
    }

    /// Append a statement
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Statements in output order
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of person nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.count(|s| matches!(s, Statement::Node(_)))
    }

    /// Number of same-rank constraints
    #[must_use]
    pub fn rank_count(&self) -> usize {
        self.count(|s| matches!(s, Statement::SameRank { .. }))
    }

    /// Number of spouse edges
    #[must_use]
    pub fn marriage_count(&self) -> usize {
        self.count(|s| matches!(s, Statement::Marriage { .. }))
    }

    /// Number of parent to child edges
    #[must_use]
    pub fn parent_edge_count(&self) -> usize {
        self.count(|s| matches!(s, Statement::Parent { .. }))
    }

    fn count(&self, pred: impl Fn(&Statement) -> bool) -> usize {
        self.statements.iter().filter(|s| pred(s)).count()
    }

    /// Render to DOT text
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "digraph {} {{", self.name);
        for attr in GRAPH_HEADER {
            let _ = writeln!(output, "    {attr}");
        }
        output.push('\n');

        for statement in &self.statements {
            if *statement == Statement::Blank {
                output.push('\n');
            } else {
                let _ = writeln!(output, "    {statement}");
            }
        }

        output.push_str("}\n");
        output
    }
}

impl fmt::Display for GraphDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dot())
    }
}
