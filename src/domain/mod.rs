// Domain layer: wire-level entity models. No behavior beyond serde.

pub mod model;
