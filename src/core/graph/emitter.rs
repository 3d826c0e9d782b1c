//! Graph emitter: turns person records into a family [`GraphDocument`]
//!
//! Output order is fixed: all nodes, then marriages, then parent edges. Each pass
//! walks the records in input order, so the same input always yields the same text.

use crate::core::graph::document::{GraphDocument, NodeStatement, Statement, TREE_CONNECTION_CLASS};
use crate::core::graph::palette::GenerationPalette;
use crate::core::graph::resolver::{escape_dot_string, marriage_label, resolve_id, FieldResolver};
use crate::core::models::{Field, MarriageRegistry, PersonRecord};

/// Graph name used for every family chart
pub const GRAPH_NAME: &str = "family_tree";

/// Builds family graph documents
#[derive(Debug, Clone, Copy)]
pub struct GraphEmitter<'a> {
    resolver: FieldResolver<'a>,
}

impl<'a> GraphEmitter<'a> {
    /// Create an emitter coloring nodes with `palette`
    #[must_use]
    pub const fn new(palette: &'a GenerationPalette) -> Self {
        Self {
            resolver: FieldResolver::new(palette),
        }
    }

    /// Build the document for one record sequence
    ///
    /// Records without an identifier are skipped in every pass.
    #[must_use]
    pub fn emit(&self, records: &[PersonRecord]) -> GraphDocument {
        let mut doc = GraphDocument::new(GRAPH_NAME);

        self.emit_nodes(records, &mut doc);

        doc.push(Statement::Blank);
        doc.push(Statement::Comment(
            "Marriage relationships and rank constraints".to_string(),
        ));
        let pairs = Self::emit_marriages(records, &mut doc);

        doc.push(Statement::Blank);
        doc.push(Statement::Comment("Parent-child relationships".to_string()));
        Self::emit_parentage(records, &mut doc);

        crate::debug!(
            "Emitted {} nodes, {pairs} marriages, {} parent edges",
            doc.node_count(),
            doc.parent_edge_count()
        );
        doc
    }

    fn emit_nodes(&self, records: &[PersonRecord], doc: &mut GraphDocument) {
        let mut skipped = 0usize;
        for record in records {
            let Some(person) = self.resolver.resolve(record) else {
                skipped += 1;
                continue;
            };

            doc.push(Statement::Node(NodeStatement {
                id: escape_dot_string(&person.id),
                label: person.label(),
                fill_color: person.fill_color.to_string(),
                emphasized: person.has_tree_connection,
                url: person.url,
                class: person
                    .has_tree_connection
                    .then(|| TREE_CONNECTION_CLASS.to_string()),
            }));
        }

        if skipped > 0 {
            crate::warn!("Skipped {skipped} record(s) without a Person_ID");
        }
    }

    /// One rank constraint and one edge per unordered spouse pair, first occurrence wins
    fn emit_marriages(records: &[PersonRecord], doc: &mut GraphDocument) -> usize {
        let mut registry = MarriageRegistry::new();

        for record in records {
            let (Some(person_id), Some(spouse_id)) =
                (record.id(), resolve_id(record, Field::SpouseId))
            else {
                continue;
            };

            if !registry.register(person_id, &spouse_id) {
                continue;
            }

            let a = escape_dot_string(person_id);
            let b = escape_dot_string(&spouse_id);
            doc.push(Statement::SameRank {
                a: a.clone(),
                b: b.clone(),
            });
            doc.push(Statement::Marriage {
                a,
                b,
                label: marriage_label(record),
            });
        }

        registry.len()
    }

    fn emit_parentage(records: &[PersonRecord], doc: &mut GraphDocument) {
        for record in records {
            let Some(child) = record.id() else {
                continue;
            };
            let child = escape_dot_string(child);

            for parent_field in [Field::FatherId, Field::MotherId] {
                if let Some(parent) = resolve_id(record, parent_field) {
                    doc.push(Statement::Parent {
                        parent: escape_dot_string(&parent),
                        child: child.clone(),
                    });
                }
            }
        }
    }
}

impl Default for GraphEmitter<'static> {
    fn default() -> Self {
        Self::new(&crate::core::graph::palette::DEFAULT_PALETTE)
    }
}
