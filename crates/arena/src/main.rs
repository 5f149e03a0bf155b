//! Arena map generator
//!
//! Prints a generated arena as text or JSON, or opens an interactive
//! terminal preview where a key press regenerates the map.

mod app;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use arena_core::{GeneratorConfig, MapGenerator, MapResult, MapRng};

use crate::app::App;

/// Procedural arena generator
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(author, version, about = "Generate tactical-shooter arena maps", long_about = None)]
struct Args {
    /// JSON configuration file (missing fields use defaults)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Random seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Grid width in blocks
    #[arg(short = 'W', long = "width")]
    width: Option<i32>,

    /// Grid height in blocks
    #[arg(short = 'H', long = "height")]
    height: Option<i32>,

    /// Skip the central room
    #[arg(long = "no-room")]
    no_room: bool,

    /// Allow cover anywhere on corridors, not only at edges and junctions
    #[arg(long = "no-edge-gating")]
    no_edge_gating: bool,

    /// Keep duplicate zone registry entries (each one rolls for cover)
    #[arg(long = "keep-duplicates")]
    keep_duplicates: bool,

    /// Print a JSON summary instead of the text grid
    #[arg(long = "json")]
    json: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "dump-config")]
    dump_config: bool,

    /// Interactive preview (r regenerates, c toggles cover, q quits)
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Load the configuration file, then apply flag overrides
    fn build_config(&self) -> MapResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.no_room {
            config.room.enabled = false;
        }
        if self.no_edge_gating {
            config.edge_gating = false;
        }
        if self.keep_duplicates {
            config.dedup_registry = false;
        }
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> MapRng {
        self.seed.map_or_else(MapRng::from_entropy, MapRng::new)
    }
}

fn main() -> MapResult<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.build_config()?;

    if args.dump_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    let rng = args.rng();
    info!("seed {}", rng.seed());
    let mut generator = MapGenerator::new(config, rng);

    if args.interactive {
        return run_interactive(generator);
    }

    let map = generator.regenerate()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&map.summary())?);
    } else {
        println!("{}", map.render_ascii(true));
    }

    Ok(())
}

/// Run the terminal preview until the user quits
fn run_interactive(generator: MapGenerator) -> MapResult<()> {
    let mut app = App::new(generator)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> MapResult<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
