//! `tilelay preview`: interactive terminal preview.
//!
//! The layout is drawn on a Braille canvas, so each terminal cell is a 2 x 4
//! grid of dots and the viewport handed to the layout engine is measured in
//! dots. Any change to the inputs or the terminal size recomputes the whole
//! sequence from scratch.

use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, Borders, List, ListItem, ListState, Paragraph, Wrap,
    },
};
use tracing::debug;

use tilelay::{DrawSequence, LayoutError, Pattern, Plane, Unit, Viewport};

use super::common::{compute_guarded, parse_pattern, Refusal, RequestArgs};

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_PER_CELL: (f64, f64) = (2.0, 4.0);
/// Padding around the plane, in dots.
const CANVAS_PADDING: f64 = 2.0;
/// Step sizes for the focused dimension, in meters.
const FINE_STEP: f64 = 0.1;
const COARSE_STEP: f64 = 1.0;

/// Starting plane and unit when neither flags nor a request file set them.
const DEFAULT_PLANE: Plane = Plane { width: 4.0, height: 3.0 };
const DEFAULT_UNIT: Unit = Unit { width: 0.6, length: 1.2 };

#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

pub fn cmd_preview(args: &PreviewArgs) -> Result<()> {
    let request = args.request.resolve_or(Some((DEFAULT_PLANE, DEFAULT_UNIT)))?;
    let pattern = parse_pattern(&request.pattern)?;
    let mut app = App::new(request.plane, request.unit, pattern);

    let mut terminal = TerminalGuard::enter()?;
    run_app(&mut terminal.terminal, &mut app)
}

// ============ Terminal ============

/// Raw mode plus alternate screen, undone on drop so every exit path
/// (including `?` and panics unwinding through here) restores the terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout())) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore();
                Err(e)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        let _ = self.terminal.show_cursor();
    }
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============ App state ============

/// Which dimension the arrow keys adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    PlaneWidth,
    PlaneHeight,
    UnitWidth,
    UnitLength,
}

impl Field {
    const ALL: [Field; 4] = [
        Field::PlaneWidth,
        Field::PlaneHeight,
        Field::UnitWidth,
        Field::UnitLength,
    ];

    fn label(&self) -> &'static str {
        match self {
            Field::PlaneWidth => " Plane W ",
            Field::PlaneHeight => " Plane H ",
            Field::UnitWidth => " Unit W ",
            Field::UnitLength => " Unit L ",
        }
    }

    fn next(self) -> Field {
        let i = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(i + 1) % Field::ALL.len()]
    }
}

/// Application state for the preview TUI.
struct App {
    plane: Plane,
    unit: Unit,
    /// Current pattern selection
    pattern_state: ListState,
    /// All available patterns
    patterns: Vec<Pattern>,
    /// Which dimension is focused
    focus: Field,
    /// Latest computation; a refusal means nothing is drawn
    result: Result<DrawSequence, Refusal>,
    /// Viewport the latest result was computed for
    viewport: Option<Viewport>,
    /// Inputs changed since the last computation
    dirty: bool,
    /// Last computation time
    gen_time_ms: f64,
    /// Should exit
    should_quit: bool,
}

impl App {
    fn new(plane: Plane, unit: Unit, pattern: Pattern) -> Self {
        let patterns = Pattern::all().to_vec();
        let mut pattern_state = ListState::default();
        pattern_state.select(patterns.iter().position(|p| *p == pattern));

        Self {
            plane,
            unit,
            pattern_state,
            patterns,
            focus: Field::PlaneWidth,
            result: Err(LayoutError::DegenerateGeometry(tilelay::Degeneracy::ViewportWidth).into()),
            viewport: None,
            dirty: true,
            gen_time_ms: 0.0,
            should_quit: false,
        }
    }

    fn selected_pattern(&self) -> Pattern {
        self.pattern_state
            .selected()
            .and_then(|i| self.patterns.get(i).copied())
            .unwrap_or(Pattern::Straight)
    }

    /// Recompute when the inputs or the canvas size changed.
    fn refresh(&mut self, viewport: Viewport) {
        if !self.dirty && self.viewport == Some(viewport) {
            return;
        }

        let start = Instant::now();
        self.result = compute_guarded(&self.plane, &self.unit, self.selected_pattern(), &viewport);
        self.gen_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.viewport = Some(viewport);
        self.dirty = false;

        debug!(
            pattern = %self.selected_pattern(),
            drawn = self.result.as_ref().map(|s| s.len()).unwrap_or(0),
            ms = self.gen_time_ms,
            "preview recomputed"
        );
    }

    fn next_pattern(&mut self) {
        let i = match self.pattern_state.selected() {
            Some(i) => (i + 1) % self.patterns.len(),
            None => 0,
        };
        self.pattern_state.select(Some(i));
        self.dirty = true;
    }

    fn prev_pattern(&mut self) {
        let i = match self.pattern_state.selected() {
            Some(i) => {
                if i == 0 { self.patterns.len() - 1 } else { i - 1 }
            }
            None => 0,
        };
        self.pattern_state.select(Some(i));
        self.dirty = true;
    }

    fn focused_value(&mut self) -> &mut f64 {
        match self.focus {
            Field::PlaneWidth => &mut self.plane.width,
            Field::PlaneHeight => &mut self.plane.height,
            Field::UnitWidth => &mut self.unit.width,
            Field::UnitLength => &mut self.unit.length,
        }
    }

    /// Nudge the focused dimension. Zero is reachable so the degenerate
    /// message can be seen, but nothing goes negative.
    fn adjust_setting(&mut self, delta: f64) {
        let value = self.focused_value();
        *value = (((*value + delta) * 100.0).round() / 100.0).max(0.0);
        self.dirty = true;
    }

    fn value(&self, field: Field) -> f64 {
        match field {
            Field::PlaneWidth => self.plane.width,
            Field::PlaneHeight => self.plane.height,
            Field::UnitWidth => self.unit.width,
            Field::UnitLength => self.unit.length,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.prev_pattern(),
            KeyCode::Down | KeyCode::Char('j') => self.next_pattern(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust_setting(-FINE_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.adjust_setting(FINE_STEP),
            KeyCode::Char('[') => self.adjust_setting(-COARSE_STEP),
            KeyCode::Char(']') => self.adjust_setting(COARSE_STEP),
            _ => {}
        }
    }
}

/// Viewport in Braille dots for a canvas area.
fn canvas_viewport(area: Rect) -> Viewport {
    Viewport::new(
        f64::from(area.width) * DOTS_PER_CELL.0,
        f64::from(area.height) * DOTS_PER_CELL.1,
        CANVAS_PADDING,
    )
}

// ============ Event loop ============

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Resize(..) => app.dirty = true,
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(main_layout[0]);

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(top_layout[0]);

    // Canvas size decides the viewport, so recompute before drawing
    let canvas_block = Block::default()
        .title(format!(" {} ", app.selected_pattern().metadata().description))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let canvas_area = canvas_block.inner(top_layout[1]);
    app.refresh(canvas_viewport(canvas_area));

    // Pattern list
    let items: Vec<ListItem> = app.patterns.iter().map(|p| ListItem::new(p.name())).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Patterns ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");
    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.pattern_state.clone());

    // Stats panel
    let stats = match &app.result {
        Ok(seq) => Paragraph::new(format!(
            "Units: {}\nScale: {:.1} dots/m\nGen: {:.2}ms",
            seq.len(),
            seq.transform.scale,
            app.gen_time_ms
        ))
        .style(Style::default().fg(Color::White)),
        Err(e) => Paragraph::new(format!("Nothing to draw:\n{e}"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true }),
    };
    let stats = stats.block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(stats, sidebar_layout[1]);

    // Layout canvas
    frame.render_widget(canvas_block, top_layout[1]);
    if let (Ok(seq), Some(viewport)) = (&app.result, app.viewport) {
        frame.render_widget(layout_canvas(seq, viewport), canvas_area);
    }

    // Settings row
    let mut constraints = vec![Constraint::Ratio(1, 6); Field::ALL.len()];
    constraints.push(Constraint::Ratio(2, 6));
    let settings_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(main_layout[1]);

    for (i, field) in Field::ALL.iter().enumerate() {
        let style = if *field == app.focus {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let text = Paragraph::new(format!("{:.2} m", app.value(*field)))
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().title(field.label()).borders(Borders::ALL).border_style(style));
        frame.render_widget(text, settings_layout[i]);
    }

    let help = Paragraph::new("↑↓ pattern  ←→ [] adjust  Tab field  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, settings_layout[Field::ALL.len()]);
}

/// Canvas that paints the plane outline, then every unit in order.
///
/// Canvas y grows upward, so screen-space rectangles are flipped against the
/// viewport height.
fn layout_canvas(seq: &DrawSequence, viewport: Viewport) -> impl Widget + '_ {
    let flip = move |y: f64, height: f64| viewport.height - y - height;

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.width])
        .y_bounds([0.0, viewport.height])
        .paint(move |ctx| {
            let t = &seq.transform;
            ctx.draw(&Rectangle {
                x: t.x0,
                y: flip(t.y0, t.height()),
                width: t.width(),
                height: t.height(),
                color: Color::Red,
            });
            ctx.layer();

            for rect in seq {
                ctx.draw(&Rectangle {
                    x: rect.x(),
                    y: flip(rect.y(), rect.height()),
                    width: rect.width(),
                    height: rect.height(),
                    color: Color::Yellow,
                });
            }
        })
}
