//! Read model over the output of the external resolver.
//!
//! Every identifier in this tree carries its bound declaration and every
//! expression its static type; the analyzer relies on those two guarantees
//! and nothing else. Nothing here is ever mutated; evaluation works on
//! copies made by `eval::EvalExpr::from_resolved`.

pub mod declaration;
pub mod expression;
pub mod ids;
pub mod position;
pub mod ty;
