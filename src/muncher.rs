use log::debug;

use crate::{cursor::BitCursor, renderer::BitRenderer, source::FileSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// Everything one rendering session needs: the mapped file, the renderer
/// walking through it, and whether the session is still live.
pub struct Muncher {
    source: FileSource,
    renderer: BitRenderer,
    state: State,
}

impl Muncher {
    pub fn new(source: FileSource) -> Self {
        Self {
            source,
            renderer: BitRenderer::new(),
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn cursor(&self) -> BitCursor {
        self.renderer.cursor()
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// Paints the next run of bits into `frame`. Does nothing once stopped.
    pub fn frame(&mut self, frame: &mut [u8]) {
        if self.state == State::Running {
            self.renderer.draw(&self.source, frame);
        }
    }

    /// Moves to `Stopped`. Returns `true` only for the call that made the
    /// transition.
    pub fn stop(&mut self) -> bool {
        if self.state == State::Stopped {
            return false;
        }
        let cursor = self.renderer.cursor();
        debug!(
            "stopping at {:?} (byte {:#04x})",
            cursor,
            self.source.byte_at(cursor.byte_index)
        );
        self.state = State::Stopped;
        true
    }
}
