//! Heading-driven section tabifier.
//!
//! Markdown has no syntax for tabbed panels, so pages mark them up with
//! headings instead: a level-2 or level-3 heading followed by several
//! level-4 headings, each introducing one alternative (one language, one
//! platform, ...). After the page is rendered, [`Tabifier`] rewrites each
//! such run into a tab widget: a label list with one link per level-4
//! heading and a panel list holding the content that followed each heading.
//!
//! # Usage
//!
//! ```
//! use docpost_tabs::{NoBehavior, Tabifier};
//! use docpost_tree::{HtmlParser, HtmlSerializer};
//!
//! let html = r#"<h2 id="install">Install</h2>
//! <h4 id="macos">macOS</h4>
//! <p>Install with Homebrew.</p>
//! <h4 id="linux">Linux</h4>
//! <p>Install with apt.</p>
//! "#;
//!
//! let mut tree = HtmlParser::new().parse(html);
//! let outcome = Tabifier::default().tabify(&mut tree, &mut NoBehavior);
//! let output = HtmlSerializer::new().serialize(&tree);
//!
//! assert_eq!(outcome.groups, 1);
//! assert!(output.contains(r##"<a href="#macos" role="tab""##));
//! assert!(output.contains(r#"id="tab-linux-content""#));
//! ```

mod behavior;
mod boundary;
mod options;
mod tabifier;

pub use behavior::{NoBehavior, RecordBehavior, TabBehavior};
pub use boundary::{heading_level, is_boundary, is_rule};
pub use options::TabsOptions;
pub use tabifier::{Tabifier, TabifyOutcome};
