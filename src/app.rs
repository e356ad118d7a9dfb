use std::path::Path;

use log::debug;
use winit::{
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
};
use winit_input_helper::WinitInputHelper;

use crate::{
    display::{self, Display, DisplayMode},
    error::{MuncherError, MuncherResult},
    muncher::Muncher,
    session::Session,
    source::FileSource,
};

/// Maps `path`, opens the display and renders until a quit signal arrives.
///
/// Everything acquired lives in a `Session`, which releases the file
/// mapping first, then the surface and window, then the event loop.
pub fn run(path: &Path, mode: DisplayMode) -> MuncherResult<()> {
    let mut session = Session::new();
    session.source = Some(Muncher::new(FileSource::open(path)?));
    let event_loop = session.event_loop.insert(display::event_loop()?);
    session.display = Some(Display::open(event_loop, mode)?);

    let failure = session
        .parts()
        .and_then(|(muncher, display, event_loop)| pump(muncher, display, event_loop));

    session.release();
    debug!("teardown complete");

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Runs the event loop until quit. Returns the error that ended it, if any.
fn pump(
    muncher: &mut Muncher,
    display: &mut Display,
    event_loop: &mut EventLoop<()>,
) -> Option<MuncherError> {
    let Display { pixels, window } = display;
    let mut input = WinitInputHelper::new();
    let mut failure = None;

    event_loop.run_return(|event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            if let Err(e) = pixels.render() {
                debug!("pixels.render() failed: {}", e);
                failure = Some(MuncherError::Present(e));
                muncher.stop();
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                if muncher.stop() {
                    debug!("quit requested for {}", muncher.source().path().display());
                }
                *control_flow = ControlFlow::Exit;
                return;
            }

            // The buffer keeps its size; only the presentation is scaled.
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            muncher.frame(pixels.get_frame());
            window.request_redraw();
        }
    });

    debug!("{:?} with cursor at {:?}", muncher.state(), muncher.cursor());
    failure
}
