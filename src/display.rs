use std::{any::Any, panic};

use log::info;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::error::{MuncherError, MuncherResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Fullscreen,
    Windowed,
}

impl DisplayMode {
    pub fn from_windowed_flag(windowed: bool) -> Self {
        if windowed {
            DisplayMode::Windowed
        } else {
            DisplayMode::Fullscreen
        }
    }
}

pub const TITLE: &str = "Bit muncher";
pub const WINDOWED_WIDTH: u32 = 640;
pub const WINDOWED_HEIGHT: u32 = 480;

/// A window and the pixel surface drawing into it. Fields drop in
/// declaration order, so the surface goes before its window.
pub struct Display {
    pub pixels: Pixels,
    pub window: Window,
}

impl Display {
    pub fn open(event_loop: &EventLoop<()>, mode: DisplayMode) -> MuncherResult<Self> {
        let window = open_window(event_loop, mode)?;
        let pixels = attach_surface(&window)?;
        Ok(Self { pixels, window })
    }
}

/// Connects to the windowing system. winit reports a missing backend by
/// panicking, so the panic is caught and turned into `DisplayInit`.
pub fn event_loop() -> MuncherResult<EventLoop<()>> {
    quietly(EventLoop::new)
}

fn quietly<T>(init: impl FnOnce() -> T + panic::UnwindSafe) -> MuncherResult<T> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(init);
    panic::set_hook(hook);
    result.map_err(|payload| MuncherError::DisplayInit(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "no display backend available".to_string()
    }
}

pub fn open_window(event_loop: &EventLoop<()>, mode: DisplayMode) -> MuncherResult<Window> {
    let windowed = PhysicalSize::new(WINDOWED_WIDTH, WINDOWED_HEIGHT);
    let builder = WindowBuilder::new().with_title(TITLE);
    let builder = match mode {
        DisplayMode::Windowed => builder.with_inner_size(windowed).with_resizable(false),
        DisplayMode::Fullscreen => {
            let monitor = event_loop.primary_monitor();
            let size = monitor.as_ref().map_or(windowed, |m| m.size());
            builder
                .with_inner_size(size)
                .with_fullscreen(Some(Fullscreen::Borderless(monitor)))
        }
    };

    builder
        .build(event_loop)
        .map_err(|e| MuncherError::DisplayInit(e.to_string()))
}

/// Creates a pixel buffer covering the window one to one.
pub fn attach_surface(window: &Window) -> MuncherResult<Pixels> {
    let size = window.inner_size();
    if size.width == 0 || size.height == 0 {
        return Err(MuncherError::DisplayInit(format!(
            "window has no area ({}x{})",
            size.width, size.height
        )));
    }

    let surface_texture = SurfaceTexture::new(size.width, size.height, window);
    let pixels = Pixels::new(size.width, size.height, surface_texture)
        .map_err(|e| MuncherError::DisplayInit(e.to_string()))?;
    info!(
        "surface {}x{} ({} pixels per frame)",
        size.width,
        size.height,
        size.width as u64 * size.height as u64
    );
    Ok(pixels)
}
