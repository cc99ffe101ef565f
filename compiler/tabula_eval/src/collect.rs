//! Analysis passes over an expression, each a post-order [`Visitor`].
//!
//! - [`VariableCollector`]: the distinct variable names, sorted.
//! - [`SubexpressionCollector`]: distinct nodes by canonical text, first
//!   occurrence wins.
//! - [`OperatorCounter`]: every operator node, duplicates included.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use tabula_ir::{Expr, ExprKind, Visitor};

use crate::errors::CapacityError;

/// Most variables a truth table can enumerate.
pub const MAX_VARIABLES: usize = 31;

/// Collects the names of all variables reachable from a root.
#[derive(Debug, Default)]
pub struct VariableCollector {
    names: BTreeSet<String>,
}

impl VariableCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_names(self) -> BTreeSet<String> {
        self.names
    }
}

impl Visitor<'_> for VariableCollector {
    fn visit(&mut self, expr: &Expr) {
        if let ExprKind::Variable(name) = expr.kind() {
            if !self.names.contains(name) {
                self.names.insert(name.clone());
            }
        }
    }
}

/// Distinct variable names of `expr` in lexicographic order.
pub fn collect_variables(expr: &Expr) -> BTreeSet<String> {
    let mut collector = VariableCollector::new();
    expr.traverse(&mut collector);
    collector.into_names()
}

/// Reject variable sets a table cannot enumerate.
///
/// # Errors
///
/// Returns [`CapacityError`] if there are more than [`MAX_VARIABLES`] names.
pub fn check_capacity(names: &BTreeSet<String>) -> Result<(), CapacityError> {
    check_count(names.len())
}

pub(crate) fn check_count(found: usize) -> Result<(), CapacityError> {
    if found > MAX_VARIABLES {
        return Err(CapacityError {
            found,
            max: MAX_VARIABLES,
        });
    }
    Ok(())
}

/// Keeps each node whose canonical text has not been seen yet.
///
/// Two nodes are the same subexpression exactly when they render to the
/// same text, so `a | b` and `b | a` are distinct.
#[derive(Debug, Default)]
pub struct SubexpressionCollector<'ast> {
    seen: FxHashSet<&'ast str>,
    nodes: Vec<&'ast Expr>,
}

impl<'ast> SubexpressionCollector<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_nodes(self) -> Vec<&'ast Expr> {
        self.nodes
    }
}

impl<'ast> Visitor<'ast> for SubexpressionCollector<'ast> {
    fn visit(&mut self, expr: &'ast Expr) {
        if self.seen.insert(expr.render()) {
            self.nodes.push(expr);
        }
    }
}

/// Distinct subexpressions of `expr`, atoms included, in first-occurrence
/// post-order. The root is always last.
pub fn collect_subexpressions(expr: &Expr) -> Vec<&Expr> {
    let mut collector = SubexpressionCollector::new();
    expr.traverse(&mut collector);
    collector.into_nodes()
}

/// Distinct operator subexpressions of `expr`: the table's formula columns.
pub fn collect_operators(expr: &Expr) -> Vec<&Expr> {
    let mut nodes = collect_subexpressions(expr);
    nodes.retain(|node| node.is_operator());
    nodes
}

/// Counts operator nodes, every occurrence.
#[derive(Debug, Default)]
pub struct OperatorCounter {
    count: usize,
}

impl OperatorCounter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Visitor<'_> for OperatorCounter {
    fn visit(&mut self, expr: &Expr) {
        if expr.is_operator() {
            self.count += 1;
        }
    }
}

/// Number of operator nodes in `expr`, without deduplication.
pub fn count_operators(expr: &Expr) -> usize {
    let mut counter = OperatorCounter::default();
    expr.traverse(&mut counter);
    counter.count()
}
