use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Set when the hierarchical span tree should replace flat log lines.
const TREE_ENV: &str = "CALC_LOG_TREE";

/// Initialize the tracing subscriber once per process.
///
/// Does nothing unless `RUST_LOG` is set, so the calculator stays quiet by
/// default. With `CALC_LOG_TREE` set, spans print as an indented tree:
///
/// ```text
/// RUST_LOG=calc_eval=trace CALC_LOG_TREE=1 calc eval 3 4 +
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os(TREE_ENV).is_some();

        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(flat_layer)
            .with(tree_layer)
            .init();
    });
}
