use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use macroquad::prelude::*;
use tracing::{Level, info, warn};

use tile_life::{
    Algorithm, Canvas, Flow, PaintSink, World,
    application::NullSink,
    input::{self, logical_lines},
    rendering, ui,
};

/// Toroidal tile automaton driven by a line-oriented command protocol.
///
/// Input: number of rows, number of columns, then one command per line
/// until `quit`. A line ending in `&` continues on the next line.
#[derive(Parser)]
#[command(name = "tile_life", about = "Tile-based Game of Life")]
struct Args {
    /// Run without a window and print the final grid
    #[arg(long)]
    headless: bool,

    /// Read input from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Evolution stepper: serial or parallel
    #[arg(long, default_value = "parallel")]
    algorithm: Algorithm,

    /// Largest cell size in pixels
    #[arg(long, default_value_t = 16.0)]
    cell_size: f32,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn open_input(script: Option<&PathBuf>) -> Result<Box<dyn BufRead + Send>> {
    Ok(match script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

/// First two logical lines are the grid's rows and columns
fn read_dimensions(lines: &mut impl Iterator<Item = String>) -> Result<(usize, usize)> {
    let mut next = |field: &'static str| -> Result<usize> {
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("input ended before the number of {field}"))?;
        Ok(input::parse_dimension(field, &line)?)
    };
    let rows = next("rows")?;
    let cols = next("cols")?;
    Ok((rows, cols))
}

/// Apply one line, logging rejections; returns the flow and any error text
fn apply<S: PaintSink>(world: &mut World<S>, line: &str) -> (Flow, Option<String>) {
    match world.process_command(line) {
        Ok(flow) => (flow, None),
        Err(err) => {
            warn!(%err, line, "command rejected");
            (Flow::Continue, Some(err.to_string()))
        }
    }
}

fn run_headless(args: &Args) -> Result<()> {
    let mut lines = logical_lines(open_input(args.script.as_ref())?);
    let (rows, cols) = read_dimensions(&mut lines)?;
    let mut world = World::new(rows, cols, NullSink)?.with_algorithm(args.algorithm);
    info!(rows, cols, "world created");

    for line in lines {
        if apply(&mut world, &line).0 == Flow::Quit {
            break;
        }
    }

    print!("{}", world.illustrate()?);
    world.close();
    Ok(())
}

async fn run_gui(mut world: World<Canvas>, commands: Receiver<String>, max_cell_size: f32) {
    let mut last_error: Option<String> = None;

    'frames: loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        let pending: Vec<String> = commands
            .try_iter()
            .chain(input::keyboard_commands().into_iter().map(str::to_owned))
            .chain(input::button_commands(&buttons, mouse_pos).into_iter().map(str::to_owned))
            .collect();

        for line in pending {
            let (flow, err) = apply(&mut world, &line);
            if err.is_some() {
                last_error = err;
            }
            if flow == Flow::Quit {
                break 'frames;
            }
        }

        clear_background(BLACK);
        let (rows, cols) = world.dimensions();
        let cell_size = rendering::fitted_cell_size(rows, cols, max_cell_size);
        rendering::draw_canvas(world.sink(), cell_size);
        rendering::draw_controls(&world, &buttons, last_error.as_deref(), mouse_pos);

        next_frame().await;
    }

    world.close();
    info!("window closed");
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    if args.headless {
        return run_headless(&args);
    }

    let commands = input::spawn_reader(open_input(args.script.as_ref())?);
    let (rows, cols) = read_dimensions(&mut commands.iter())?;
    let world = World::new(rows, cols, Canvas::new())?.with_algorithm(args.algorithm);
    info!(rows, cols, "world created");

    let conf = Conf {
        window_title: format!("Tile Life - {rows}x{cols}"),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    };
    let max_cell_size = args.cell_size;
    macroquad::Window::from_config(conf, run_gui(world, commands, max_cell_size));
    Ok(())
}
