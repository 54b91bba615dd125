//! Trailing-edge debouncing for the live amount input.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::compat;

/// Quiet period before a typed amount is converted.
pub const AMOUNT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Collapses bursts of calls into the last one.
///
/// Every call to [`Debouncer::settle`] supersedes the ones still waiting, so
/// only the call that sees a full quiet period resolves to `true`.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Waits out the quiet period. Returns `false` if a newer call arrived
    /// in the meantime.
    pub async fn settle(&self) -> bool {
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);

        compat::sleep(self.delay).await;

        self.generation.get() == ticket
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(AMOUNT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tokio::time::sleep;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_last_value() {
        let debouncer = Debouncer::default();
        let amount = RefCell::new(String::new());
        let fired = RefCell::new(Vec::new());

        let edit = |delay_ms: u64, value: &'static str| {
            let debouncer = debouncer.clone();
            let amount = &amount;
            let fired = &fired;
            async move {
                sleep(Duration::from_millis(delay_ms)).await;
                *amount.borrow_mut() = value.to_string();
                if debouncer.settle().await {
                    fired.borrow_mut().push(amount.borrow().clone());
                }
            }
        };

        tokio::join!(edit(0, "1"), edit(100, "12"), edit(250, "125"));

        assert_eq!(*fired.borrow(), ["125"]);
    }

    #[tokio::test(start_paused = true)]
    async fn separated_edits_each_fire() {
        let debouncer = Debouncer::default();

        assert!(debouncer.settle().await);
        sleep(Duration::from_millis(10)).await;
        assert!(debouncer.settle().await);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_the_full_quiet_period() {
        let debouncer = Debouncer::default();
        let start = tokio::time::Instant::now();

        assert!(debouncer.settle().await);

        assert!(start.elapsed() >= AMOUNT_DEBOUNCE);
    }
}
