//! Compiled boolean query tree.
//!
//! This is the output handed to the execution engine: boolean groups of
//! required, prohibited and optional clauses over field-weighted leaves.

use std::fmt;

use serde::Serialize;

/// How a clause participates in its enclosing boolean group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// The clause must match.
    Required,
    /// The clause must not match.
    Prohibited,
    /// The clause may match and then contributes to the score.
    Optional,
}

impl Requirement {
    /// Prefix used by the classic boolean query syntax.
    fn prefix(self) -> &'static str {
        match self {
            Self::Required => "+",
            Self::Prohibited => "-",
            Self::Optional => "",
        }
    }
}

/// A subquery together with its requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    /// The subquery.
    pub query: QueryTree,
    /// How the subquery participates in the group.
    pub requirement: Requirement,
}

impl Clause {
    /// Creates a required clause.
    pub fn required(query: QueryTree) -> Self {
        Self {
            query,
            requirement: Requirement::Required,
        }
    }

    /// Creates a prohibited clause.
    pub fn prohibited(query: QueryTree) -> Self {
        Self {
            query,
            requirement: Requirement::Prohibited,
        }
    }

    /// Creates an optional clause.
    pub fn optional(query: QueryTree) -> Self {
        Self {
            query,
            requirement: Requirement::Optional,
        }
    }
}

/// A compiled query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryTree {
    /// Exact match of one term in one field.
    Term {
        /// Field to match in.
        field: String,
        /// Normalized term.
        text: String,
        /// Relevance multiplier.
        boost: f32,
    },

    /// Pattern match of one term in one field; `?` matches one character,
    /// `*` any run of characters.
    Wildcard {
        /// Field to match in.
        field: String,
        /// Wildcard pattern, not normalized.
        pattern: String,
        /// Relevance multiplier.
        boost: f32,
    },

    /// Ordered, adjacent match of a term sequence in one field.
    Phrase {
        /// Field to match in.
        field: String,
        /// Normalized terms, in order.
        terms: Vec<String>,
        /// Relevance multiplier.
        boost: f32,
    },

    /// Boolean combination of clauses.
    Boolean {
        /// The combined clauses.
        clauses: Vec<Clause>,
    },
}

impl QueryTree {
    /// Creates a boolean group from clauses.
    pub fn boolean(clauses: Vec<Clause>) -> Self {
        Self::Boolean { clauses }
    }

    /// Combines subqueries as optional alternatives: any one may match.
    pub fn any(queries: impl IntoIterator<Item = Self>) -> Self {
        Self::boolean(queries.into_iter().map(Clause::optional).collect())
    }

    /// Returns the clauses of a boolean group, or an empty slice for a leaf.
    pub fn clauses(&self) -> &[Clause] {
        match self {
            Self::Boolean { clauses } => clauses,
            Self::Term { .. } | Self::Wildcard { .. } | Self::Phrase { .. } => &[],
        }
    }

    /// Counts the leaves of the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Boolean { clauses } => clauses.iter().map(|c| c.query.leaf_count()).sum(),
            Self::Term { .. } | Self::Wildcard { .. } | Self::Phrase { .. } => 1,
        }
    }

    /// Formats the tree in classic boolean query syntax.
    ///
    /// Produces output like `+(title:java^5 contents:java) -contents:swing`.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Term { field, text, boost } => format!("{field}:{text}{}", fmt_boost(*boost)),
            Self::Wildcard {
                field,
                pattern,
                boost,
            } => format!("{field}:{pattern}{}", fmt_boost(*boost)),
            Self::Phrase {
                field,
                terms,
                boost,
            } => format!("{field}:\"{}\"{}", terms.join(" "), fmt_boost(*boost)),
            Self::Boolean { clauses } => clauses
                .iter()
                .map(|clause| {
                    let inner = clause.query.to_query_string();
                    let inner = if matches!(clause.query, Self::Boolean { .. }) {
                        format!("({inner})")
                    } else {
                        inner
                    };
                    format!("{}{inner}", clause.requirement.prefix())
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Formats the tree as an indented structure.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Term { field, text, boost } => {
                writeln!(f, "{prefix}Term({field}:{text:?}, boost={boost})")
            }
            Self::Wildcard {
                field,
                pattern,
                boost,
            } => writeln!(f, "{prefix}Wildcard({field}:{pattern:?}, boost={boost})"),
            Self::Phrase {
                field,
                terms,
                boost,
            } => writeln!(f, "{prefix}Phrase({field}:{terms:?}, boost={boost})"),
            Self::Boolean { clauses } => {
                writeln!(f, "{prefix}Boolean")?;
                for clause in clauses {
                    writeln!(f, "{prefix}  {:?}", clause.requirement)?;
                    clause.query.fmt_tree(f, indent + 2)?;
                }
                Ok(())
            }
        }
    }
}

/// Renders a boost suffix, omitting the neutral boost of 1.
fn fmt_boost(boost: f32) -> String {
    if boost == 1.0 {
        String::new()
    } else {
        format!("^{boost}")
    }
}

impl fmt::Display for QueryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
