/// Holds what one run acquires: the mapped file `S`, the window with its
/// surface `D`, and the event loop `L`. Whatever has been acquired is
/// released once, file first, then display, then event loop, whether the
/// run ends normally or startup fails halfway.
pub struct Session<S, D, L> {
    pub source: Option<S>,
    pub display: Option<D>,
    pub event_loop: Option<L>,
}

impl<S, D, L> Session<S, D, L> {
    pub fn new() -> Self {
        Self {
            source: None,
            display: None,
            event_loop: None,
        }
    }

    /// All three resources, once everything is acquired.
    pub fn parts(&mut self) -> Option<(&mut S, &mut D, &mut L)> {
        match (&mut self.source, &mut self.display, &mut self.event_loop) {
            (Some(source), Some(display), Some(event_loop)) => Some((source, display, event_loop)),
            _ => None,
        }
    }

    pub fn release(&mut self) {
        drop(self.source.take());
        drop(self.display.take());
        drop(self.event_loop.take());
    }
}

impl<S, D, L> Drop for Session<S, D, L> {
    fn drop(&mut self) {
        self.release();
    }
}
