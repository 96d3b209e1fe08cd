pub mod evaluator;
pub mod oxigraph_adapter;
pub mod verification;
