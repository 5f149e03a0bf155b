//! Interactive map preview state and rendering

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use arena_core::map::{BlockType, GeneratedMap, GridPos, ObjectKind};
use arena_core::{MapGenerator, MapResult, S_COVER};

/// Actions the preview understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Regenerate,
    ToggleCovers,
    Quit,
}

/// Terminal colour for a block type
pub fn block_color(typ: BlockType) -> Color {
    match typ {
        BlockType::Floor => Color::DarkGray,
        BlockType::Wall => Color::Gray,
        BlockType::Spawn => Color::Green,
        BlockType::Site => Color::Red,
        BlockType::Main => Color::Cyan,
        BlockType::Link => Color::Blue,
        BlockType::Room => Color::Magenta,
        BlockType::Road => Color::LightCyan,
        BlockType::Neutral => Color::LightMagenta,
        BlockType::Empty | BlockType::None => Color::Reset,
    }
}

pub struct App {
    generator: MapGenerator,
    show_covers: bool,
    should_quit: bool,
    message: String,
}

impl App {
    /// Create the preview and run the first pass
    pub fn new(mut generator: MapGenerator) -> MapResult<Self> {
        generator.regenerate()?;
        Ok(Self {
            generator,
            show_covers: true,
            should_quit: false,
            message: String::from("r: regenerate  c: toggle cover  q: quit"),
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn show_covers(&self) -> bool {
        self.show_covers
    }

    pub fn map(&self) -> Option<&GeneratedMap> {
        self.generator.map()
    }

    /// Translate a terminal event into a command
    pub fn handle_event(&self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Regenerate),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ToggleCovers),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Regenerate => {
                self.message = match self.generator.regenerate() {
                    Ok(map) => format!("pass {} generated", map.generation),
                    Err(e) => format!("regeneration failed: {}", e),
                };
            }
            Command::ToggleCovers => {
                self.show_covers = !self.show_covers;
                let state = if self.show_covers { "on" } else { "off" };
                self.message = format!("cover markers {}", state);
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn map_lines(&self, map: &GeneratedMap) -> Vec<Line<'static>> {
        let covered: Vec<GridPos> = if self.show_covers() {
            map.covers().map(|o| o.cell).collect()
        } else {
            Vec::new()
        };

        (0..map.grid.height())
            .map(|z| {
                let spans: Vec<Span<'static>> = (0..map.grid.width())
                    .map(|x| {
                        let typ = map.grid.block_type(x, z).unwrap_or_default();
                        if covered.contains(&GridPos::new(x, z)) {
                            Span::styled(
                                S_COVER.to_string(),
                                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            let style = Style::default().fg(block_color(typ));
                            Span::styled(typ.symbol().to_string(), style)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn status_lines(&self, map: &GeneratedMap) -> Vec<Line<'static>> {
        vec![
            Line::from(format!(
                "seed {}  pass {}  {}x{}  objects {} (walls {}, cover {})  zones {}",
                map.seed,
                map.generation,
                map.grid.width(),
                map.grid.height(),
                map.object_count(),
                map.count_objects(ObjectKind::WallCopy),
                map.count_objects(ObjectKind::Cover),
                map.zones.len(),
            )),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let Some(map) = self.map() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(map.grid.height() as u16 + 2), // Map + border
                Constraint::Length(4),                         // Status + border
            ])
            .split(frame.area());

        let map_widget = Paragraph::new(self.map_lines(map))
            .block(Block::default().borders(Borders::ALL).title(" arena "));
        frame.render_widget(map_widget, chunks[0]);

        let status = Paragraph::new(self.status_lines(map))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::GeneratorConfig;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(MapGenerator::with_seed(GeneratorConfig::default(), 42)).unwrap()
    }

    #[test]
    fn test_key_bindings() {
        let app = app();
        assert_eq!(app.handle_event(key(KeyCode::Char('r'))), Some(Command::Regenerate));
        assert_eq!(app.handle_event(key(KeyCode::Char('c'))), Some(Command::ToggleCovers));
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(app.handle_event(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(app.handle_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_regenerate_advances_pass() {
        let mut app = app();
        assert_eq!(app.map().map(|m| m.generation), Some(1));
        app.execute(Command::Regenerate);
        assert_eq!(app.map().map(|m| m.generation), Some(2));
    }

    #[test]
    fn test_toggle_and_quit() {
        let mut app = app();
        assert!(app.show_covers());
        app.execute(Command::ToggleCovers);
        assert!(!app.show_covers());
        assert!(!app.should_quit());
        app.execute(Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_map_lines_match_grid() {
        let app = app();
        let map = app.map().unwrap();
        let lines = app.map_lines(map);
        assert_eq!(lines.len(), map.grid.height() as usize);
        assert!(lines.iter().all(|l| l.spans.len() == map.grid.width() as usize));
    }
}
