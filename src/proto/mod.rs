// plasma.rs is generated from types.proto; regenerate with `cargo run --bin proto_gen`.
pub mod plasma;
