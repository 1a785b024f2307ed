//! Element tree for rendered documentation pages.
//!
//! Pages arrive as HTML produced by an upstream markdown renderer. This crate
//! reads them into a mutable [`TreeNode`] tree that post-processing passes
//! rewrite in place, and writes the tree back out.
//!
//! # Example
//!
//! ```
//! use docpost_tree::{HtmlParser, HtmlSerializer};
//!
//! let mut tree = HtmlParser::new().parse("<p>Hello</p>");
//! tree.children[0].add_class("lead");
//! let html = HtmlSerializer::new().serialize(&tree);
//! assert_eq!(html, r#"<p class="lead">Hello</p>"#);
//! ```

mod node;
mod parser;
mod serializer;

pub use node::{Descendants, Placement, TreeNode, VOID_ELEMENTS, is_void_element};
pub use parser::{DOCTYPE_ATTR, HtmlParser, ROOT_TAG};
pub use serializer::HtmlSerializer;
