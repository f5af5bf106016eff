use crate::graph::Cost;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid vertex capacity: {capacity}")]
    InvalidCapacity { capacity: i128 },

    #[error("slot {slot} is out of range for capacity {capacity}")]
    SlotOutOfRange { slot: usize, capacity: usize },

    #[error("unknown vertex: {label}")]
    UnknownVertex { label: String },

    #[error("cannot bind `{label}` to slot {slot}: {conflict}")]
    DuplicateBinding {
        slot: usize,
        label: String,
        conflict: BindingConflict,
    },

    #[error("cost {cost} is reserved for \"no edge\"")]
    ReservedCost { cost: Cost },

    #[error("invalid edge specification: {spec:?}")]
    InvalidSpec { spec: String },

    #[error("matrix row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot multiply: left operand has {left_cols} columns, right operand has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    #[error("product cell ({row}, {col}) overflows a 64-bit cost")]
    Overflow { row: usize, col: usize },

    #[error("graph lock poisoned by a panicking writer")]
    Poisoned,
}

/// Why a vertex binding was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingConflict {
    #[error("slot already holds `{label}`")]
    SlotTaken { label: String },

    #[error("label already bound to slot {slot}")]
    LabelBound { slot: usize },
}

impl Error {
    pub(crate) fn unknown_vertex(label: &str) -> Self {
        Self::UnknownVertex {
            label: label.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
