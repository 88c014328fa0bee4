// EN: src/cli/handlers/mod.rs

// One module per thing the binary can do once the matrix is known.

pub mod generate;
pub mod list;
