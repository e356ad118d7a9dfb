mod app;
mod cursor;
mod display;
mod error;
mod muncher;
mod renderer;
mod session;
mod source;

use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;

use display::DisplayMode;

#[derive(Debug, StructOpt)]
#[structopt(name = "bit-muncher", about = "Play a file bit by bit.")]
struct Opt {
    /// File to render
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Use a 640x480 window instead of going full-screen
    #[structopt(long)]
    windowed: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let mode = DisplayMode::from_windowed_flag(opt.windowed);
    app::run(&opt.input, mode).with_context(|| format!("rendering {}", opt.input.display()))
}
