use crate::test_drain::TestDrain;
use anyhow::Result;
use k9::*;
use lltree::drains::stdout::TimestampFormat;
use lltree::utils::strip_ansi;
use lltree::{args, render_tree, Drain, Entry, Level, Marker, SharedCollector, TreeCollector};

fn setup() -> (TreeCollector, TestDrain) {
    let test_drain = TestDrain::new();
    let mut c = TreeCollector::new();
    c.add_drain(Box::new(test_drain.clone()));
    (c, test_drain)
}

#[test]
fn flat_stream_and_tree_agree() -> Result<()> {
    let (mut c, test_drain) = setup();

    c.begin(Level::Info, "build {}", args!["app"]);
    c.debug("compiling {} crates", args![12]);
    c.log(
        Some(Marker::parse("secret #dontprint")),
        Level::Trace,
        "token {}",
        args!["abc"],
    );
    c.end(Level::Info, "build {}", args!["app"]);

    assert_equal!(
        test_drain.to_string(),
        "\
[ ] INFO  build {} [app]
[ ] DEBUG compiling {} crates [12]
[ ] INFO  build {} [app]
"
        .to_string()
    );

    // the tree keeps events the drain chose not to print
    assert_equal!(
        strip_ansi(&render_tree(c.tree(), TimestampFormat::Redacted))?,
        "\
[ ] INFO  build {} [app]
├ [ ] DEBUG compiling {} crates [12]
├ [ ] TRACE token {} [abc]
╰ [ ] INFO  build {} [app]"
            .to_string()
    );
    Ok(())
}

#[test]
fn preorder_walk_visits_scope_before_its_events() {
    let (mut c, _) = setup();
    c.begin(Level::Info, "A", vec![]);
    c.info("X", vec![]);
    c.begin(Level::Info, "B", vec![]);
    c.info("Y", vec![]);
    c.end(Level::Info, "B'", vec![]);
    c.info("Z", vec![]);
    c.end(Level::Info, "A'", vec![]);

    let walked = c
        .tree()
        .walk()
        .map(|entry| {
            let prefix = match entry.item {
                Entry::Node(..) => "+",
                Entry::Event(_) => "-",
            };
            let name = entry.item.event().map_or("", |e| e.template());
            format!("{}{}{}", "  ".repeat(entry.depth), prefix, name)
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_equal!(
        walked,
        "\
+A
  -X
  +B
    -Y
    -B'
  -Z
  -A'"
        .to_string()
    );
}

#[tokio::test]
async fn shared_collector_across_tasks() -> Result<()> {
    let shared = SharedCollector::new();

    let handles = (0..8)
        .map(|task| {
            let mut shared = shared.clone();
            tokio::spawn(async move {
                for i in 0..10 {
                    shared.info("task {} event {}", args![task, i]);
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.await?;
    }

    let (children, depth) = shared.with_collector(|c| (c.root().children().len(), c.depth()));
    assert_equal!(children, 80);
    assert_equal!(depth, 0);
    Ok(())
}
