// Domain layer: the ledger tree and the ports the core talks through.

pub mod model;
pub mod ports;
