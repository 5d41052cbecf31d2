// Parser tracing
// BEGIN/END lines for each parse routine at `trace` level

use std::cell::Cell;

const INDENT: &str = "    ";

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Logs `BEGIN <routine>` when created and `END <routine>` when dropped,
/// indented by nesting depth.
#[must_use]
pub(crate) struct Trace {
    routine: &'static str,
}

impl Trace {
    pub(crate) fn begin(routine: &'static str) -> Self {
        let depth = DEPTH.with(|d| {
            d.set(d.get() + 1);
            d.get()
        });
        log::trace!("{}BEGIN {}", INDENT.repeat(depth - 1), routine);
        Self { routine }
    }
}

impl Drop for Trace {
    fn drop(&mut self) {
        let depth = DEPTH.with(|d| d.get());
        log::trace!("{}END {}", INDENT.repeat(depth.saturating_sub(1)), self.routine);
        DEPTH.with(|d| d.set(depth.saturating_sub(1)));
    }
}
