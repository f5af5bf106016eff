//! Edge triples yielded by [`Graph::edges`](super::Graph::edges).

use super::Cost;

/// One non-empty matrix cell, translated to labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub cost: Cost,
}

impl<'a> Edge<'a> {
    pub fn new(source: &'a str, target: &'a str, cost: Cost) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }

    pub fn to_owned_triple(&self) -> (String, String, Cost) {
        (self.source.to_string(), self.target.to_string(), self.cost)
    }
}

impl<'a> From<Edge<'a>> for (&'a str, &'a str, Cost) {
    fn from(e: Edge<'a>) -> Self {
        (e.source, e.target, e.cost)
    }
}
