/*!
# lltree - Log Event Tree

**lltree** collects a stream of leveled log events into a tree that follows
the nesting of the operations that produced them.

Events are logged through the `Drain` interface. An event whose marker
carries the `begin` tag opens a scope: it becomes a node of the tree and every
following event nests under it until an event with the `end` tag closes the
scope. The `end` event itself is recorded as the last child of the scope it
closes. Unmatched `end` events never move above the root.

Example

```
use lltree::{args, Drain, Level, TreeCollector};
use lltree::drains::stdout::TimestampFormat;

let mut collector = TreeCollector::new();
collector.begin(Level::Info, "install {}", args!["serde"]);
collector.debug("resolving", vec![]);
collector.warn("retrying {}", args![2, anyhow::anyhow!("timed out")]);
collector.end(Level::Info, "install {}", args!["serde"]);

let tree = collector.tree();
assert_eq!(tree.root().children().len(), 1);
let rendered = lltree::render_tree(tree, TimestampFormat::None);
assert_eq!(rendered.lines().count(), 4);
```

 */
#![allow(clippy::new_without_default)]

pub mod argument;
pub mod collector;
pub mod drains;
pub mod event;
pub mod level;
pub mod marker;
pub mod render;
pub mod tree;
pub mod uniq_id;
pub mod utils;


pub use argument::{Argument, EventError};
pub use collector::{SharedCollector, TreeCollector};
pub use drains::stdout::StdoutDrain;
pub use drains::Drain;
pub use event::Event;
pub use level::Level;
pub use marker::Marker;
pub use render::render_tree;
pub use tree::{Child, Entry, EventTree, NodeId, TreeNode, Walk, WalkEntry};
pub use uniq_id::UniqID;
