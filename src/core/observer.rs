use crate::core::score::format_display_score;
use crate::domain::model::CartEntry;
use crate::domain::ports::CartObserver;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Logs every cart change; the CLI's stand-in for a re-rendering screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl CartObserver for LoggingObserver {
    fn cart_changed(&self, snapshot: &[CartEntry], aggregate_score: f64) {
        tracing::info!(
            "🛒 Cart updated: {} item(s), overall {}",
            snapshot.len(),
            format_display_score(aggregate_score)
        );
    }
}

/// 通知所有觀察者；單一觀察者 panic 不影響購物車或其他觀察者
pub(crate) fn notify_observers(
    observers: &[Arc<dyn CartObserver>],
    snapshot: &[CartEntry],
    aggregate_score: f64,
) {
    for observer in observers {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            observer.cart_changed(snapshot, aggregate_score)
        }));
        if outcome.is_err() {
            tracing::error!("❌ Cart observer panicked; notification skipped");
        }
    }
}
