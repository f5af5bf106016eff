//! Build a graph one step at a time from compact edge specifications.
//!
//! Accepted specifications (whitespace around tokens is ignored):
//!
//! | spec     | meaning                                  |
//! |----------|------------------------------------------|
//! | `a`      | vertex `a`, no edges                     |
//! | `a-b`    | undirected edge with the default cost    |
//! | `a>b`    | directed edge `a` to `b`, default cost   |
//! | `a-b:10` | undirected edge with cost 10             |
//! | `a>b:10` | directed edge with cost 10               |
//!
//! [`Script::from_specs`] binds the distinct labels to slots in sorted order, then queues the
//! edges in input order. Front-ends pop and apply one [`Step`] at a time so they can show the
//! graph growing.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, GraphOptions};

/// One queued mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    BindVertex {
        slot: usize,
        label: String,
    },
    SetEdge {
        source: String,
        target: String,
        cost: Option<Cost>,
        directed: bool,
    },
    RemoveEdge {
        source: String,
        target: String,
    },
    UnbindVertex {
        label: String,
    },
}

impl Step {
    pub fn apply(&self, graph: &mut Graph) -> Result<()> {
        match self {
            Step::BindVertex { slot, label } => graph.bind_vertex(*slot, label.as_str()),
            Step::SetEdge {
                source,
                target,
                cost,
                directed,
            } => graph.set_edge_with(source, target, *cost, *directed),
            Step::RemoveEdge { source, target } => graph.remove_edge(source, target).map(|_| ()),
            Step::UnbindVertex { label } => graph.unbind_vertex(label),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::BindVertex { slot, label } => write!(f, "bind {label} @ {slot}"),
            Step::SetEdge {
                source,
                target,
                cost,
                directed,
            } => {
                let arrow = if *directed { '>' } else { '-' };
                write!(f, "set {source}{arrow}{target}")?;
                if let Some(cost) = cost {
                    write!(f, ":{cost}")?;
                }
                Ok(())
            }
            Step::RemoveEdge { source, target } => write!(f, "remove {source}-{target}"),
            Step::UnbindVertex { label } => write!(f, "unbind {label}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Spec {
    Vertex(String),
    Edge {
        source: String,
        target: String,
        cost: Option<Cost>,
        directed: bool,
    },
}

fn parse_label(raw: &str, spec: &str) -> Result<String> {
    let label = raw.trim();
    if label.is_empty() || label.contains(['-', '>', ':']) {
        return Err(Error::InvalidSpec {
            spec: spec.to_string(),
        });
    }
    Ok(label.to_string())
}

fn parse_spec(spec: &str) -> Result<Spec> {
    let invalid = || Error::InvalidSpec {
        spec: spec.to_string(),
    };

    let (body, cost) = match spec.split_once(':') {
        Some((body, cost)) => {
            let cost = cost.trim().parse::<Cost>().map_err(|_| invalid())?;
            (body, Some(cost))
        }
        None => (spec, None),
    };

    let (pair, directed) = match body.split_once('>') {
        Some(pair) => (Some(pair), true),
        None => (body.split_once('-'), false),
    };
    match pair {
        Some((v, w)) => Ok(Spec::Edge {
            source: parse_label(v, spec)?,
            target: parse_label(w, spec)?,
            cost,
            directed,
        }),
        None if cost.is_none() => Ok(Spec::Vertex(parse_label(body, spec)?)),
        None => Err(invalid()),
    }
}

/// A FIFO queue of [`Step`]s plus the steps already applied.
#[derive(Debug, Clone, Default)]
pub struct Script {
    capacity: usize,
    pending: VecDeque<Step>,
    history: Vec<Step>,
}

impl Script {
    /// Parses `specs` into bind steps followed by edge steps.
    ///
    /// With `directed` set, `a-b` specs are queued as directed edges as well.
    pub fn from_specs<I, S>(specs: I, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = specs
            .into_iter()
            .map(|s| parse_spec(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let mut labels: BTreeSet<&str> = BTreeSet::new();
        for spec in &parsed {
            match spec {
                Spec::Vertex(label) => {
                    labels.insert(label);
                }
                Spec::Edge { source, target, .. } => {
                    labels.insert(source);
                    labels.insert(target);
                }
            }
        }

        let mut pending: VecDeque<Step> = labels
            .iter()
            .enumerate()
            .map(|(slot, label)| Step::BindVertex {
                slot,
                label: label.to_string(),
            })
            .collect();
        let capacity = pending.len();

        for spec in parsed {
            if let Spec::Edge {
                source,
                target,
                cost,
                directed: arrow,
            } = spec
            {
                pending.push_back(Step::SetEdge {
                    source,
                    target,
                    cost,
                    directed: directed || arrow,
                });
            }
        }

        Ok(Self {
            capacity,
            pending,
            history: Vec::new(),
        })
    }

    /// Number of distinct labels named by the specifications.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// An empty graph sized for this script.
    pub fn graph(&self) -> Graph {
        Graph::new(self.capacity)
    }

    pub fn graph_with(&self, options: GraphOptions) -> Result<Graph> {
        Graph::with_options(self.capacity, options)
    }

    pub fn push(&mut self, step: Step) {
        self.pending.push_back(step);
    }

    pub fn pending(&self) -> impl Iterator<Item = &Step> {
        self.pending.iter()
    }

    pub fn history(&self) -> &[Step] {
        &self.history
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Applies the next pending step. A failing step stays at the front of the queue.
    pub fn step(&mut self, graph: &mut Graph) -> Result<Option<&Step>> {
        let Some(next) = self.pending.pop_front() else {
            return Ok(None);
        };
        if let Err(err) = next.apply(graph) {
            tracing::debug!(step = %next, error = %err, "script step failed");
            self.pending.push_front(next);
            return Err(err);
        }
        self.history.push(next);
        Ok(self.history.last())
    }

    /// Applies every pending step, stopping at the first failure. Returns how many ran.
    pub fn run(&mut self, graph: &mut Graph) -> Result<usize> {
        let mut applied = 0usize;
        while self.step(graph)?.is_some() {
            applied += 1;
        }
        Ok(applied)
    }
}
