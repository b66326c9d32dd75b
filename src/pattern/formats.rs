//! Output formats for tokens and parse trees
//!
//! Each format is a plain function over the parse tree; [`processor`] maps format
//! strings onto them.
//!
//! [`processor`]: crate::pattern::processor

pub mod position;
pub mod tag;
pub mod treeviz;

pub use position::{format_at_position, nodes_at};
pub use tag::serialize_tag;
pub use treeviz::to_treeviz_str;
