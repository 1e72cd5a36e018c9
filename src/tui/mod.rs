//! TUI interface — ratatui panels: rhythm controls, movement visualization,
//! analysis and practice guide.
//!
//! The App struct is the composition root: it owns the playback state, the
//! beat clock, and the tone emitter, and drives the single-threaded event
//! loop. State mutates only inside the tick handler and the user-action
//! handler, which run to completion one at a time.

pub mod keybindings;
pub mod layout;
pub mod status;
pub mod theme;

pub use keybindings::{map_key, Action};
pub use layout::{DetailTab, FocusPanel};
pub use status::{AudioStatus, StatusInfo};

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::analysis::{self, Expression, MovementQuality};
use crate::audio::ToneEmitter;
use crate::catalog::{Catalog, GenreRecord};
use crate::clock::BeatClock;
use crate::motion::{self, CurveFamily, MarkerShape, MotionFrame};

/// Tempo slider bounds in BPM.
pub const TEMPO_MIN: f64 = 60.0;
pub const TEMPO_MAX: f64 = 180.0;

/// Intensity slider bounds.
pub const INTENSITY_MAX: u8 = 100;

/// Input poll timeout — keeps beat timing responsive at 180 BPM.
const POLL_INTERVAL_MS: u64 = 16;

/// The main TUI application state.
pub struct App {
    pub catalog: Catalog,
    pub tempo_bpm: f64,
    pub intensity: u8,
    pub selected: usize,
    pub is_playing: bool,
    pub current_beat: u8,
    pub muted: bool,
    pub focus: FocusPanel,
    pub detail_tab: DetailTab,
    pub help_visible: bool,
    pub status: StatusInfo,
    pub should_quit: bool,
    pub theme: theme::Theme,
    clock: BeatClock,
    tone: ToneEmitter,
    available_themes: Vec<theme::Theme>,
}

impl App {
    /// Create the app over a catalog with initial slider values.
    ///
    /// `genre_id` falls back to the first catalog entry on a lookup miss —
    /// the startup flag is best-effort, not an error path.
    pub fn new(
        catalog: Catalog,
        tempo_bpm: f64,
        intensity: u8,
        genre_id: Option<&str>,
        muted: bool,
    ) -> Self {
        let tempo_bpm = tempo_bpm.clamp(TEMPO_MIN, TEMPO_MAX);
        let intensity = intensity.min(INTENSITY_MAX);
        let selected = genre_id
            .and_then(|id| catalog.position(id))
            .unwrap_or(0);
        let clock = BeatClock::new(tempo_bpm);
        let status = StatusInfo {
            bpm: tempo_bpm,
            intensity,
            audio: if muted {
                AudioStatus::Muted
            } else {
                AudioStatus::Idle
            },
            ..Default::default()
        };
        Self {
            catalog,
            tempo_bpm,
            intensity,
            selected,
            is_playing: false,
            current_beat: 1,
            muted,
            focus: FocusPanel::Controls,
            detail_tab: DetailTab::Analysis,
            help_visible: false,
            status,
            should_quit: false,
            theme: theme::load_theme(),
            clock,
            tone: ToneEmitter::new(),
            available_themes: theme::all_builtins(),
        }
    }

    /// The selected genre record. `selected` is kept in bounds, so this is
    /// only `None` for an empty catalog.
    pub fn selected_genre(&self) -> Option<&GenreRecord> {
        self.catalog.at(self.selected)
    }

    /// Process an action.
    pub fn handle_action(&mut self, action: Action) {
        self.handle_action_at(action, Instant::now());
    }

    /// Process an action at an explicit instant (injected for tests).
    pub fn handle_action_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePlayback => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.clock.start(now);
                } else {
                    self.clock.stop();
                    self.tone.hush();
                }
            }
            Action::AdjustTempo(delta) => {
                let tempo = (self.tempo_bpm + f64::from(delta)).clamp(TEMPO_MIN, TEMPO_MAX);
                self.tempo_bpm = tempo;
                // Rebuilds the armed deadline while running — the new
                // interval takes effect on the next tick.
                self.clock.set_bpm(tempo, now);
            }
            Action::AdjustIntensity(delta) => {
                self.intensity = self
                    .intensity
                    .saturating_add_signed(delta.clamp(-100, 100) as i8)
                    .min(INTENSITY_MAX);
            }
            Action::SelectGenre(index) => {
                if index < self.catalog.len() {
                    self.selected = index;
                }
            }
            Action::NextGenre => {
                if !self.catalog.is_empty() {
                    self.selected = (self.selected + 1) % self.catalog.len();
                }
            }
            Action::PrevGenre => {
                if !self.catalog.is_empty() {
                    self.selected =
                        (self.selected + self.catalog.len() - 1) % self.catalog.len();
                }
            }
            Action::ToggleTab => self.detail_tab = self.detail_tab.toggle(),
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::CycleTheme => {
                self.theme = theme::cycle_theme(&self.theme, &self.available_themes);
            }
            Action::ToggleMute => {
                self.muted = !self.muted;
                if self.muted {
                    self.tone.hush();
                }
            }
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::Escape => self.help_visible = false,
        }
    }

    /// Poll the beat clock. On a tick: advance the published beat, request
    /// a tone, and surface any one-shot audio error.
    pub fn tick_clock(&mut self, now: Instant) {
        if let Some(tick) = self.clock.poll(now) {
            if !self.muted {
                self.tone.emit();
            }
            self.current_beat = tick.beat;
            if let Some(err) = self.tone.take_error() {
                self.status.warning = Some(err.to_string());
            }
        }
    }

    /// Refresh the status-bar snapshot from current state.
    fn refresh_status(&mut self) {
        self.status.bpm = self.tempo_bpm;
        self.status.beat = self.current_beat;
        self.status.is_playing = self.is_playing;
        self.status.intensity = self.intensity;
        self.status.genre_name = self
            .selected_genre()
            .map(|g| g.name.clone())
            .unwrap_or_default();
        self.status.audio = if self.muted {
            AudioStatus::Muted
        } else if self.tone.is_silent() {
            AudioStatus::Failed
        } else {
            match self.tone.device_name() {
                Some(name) => AudioStatus::Connected(name.to_string()),
                None => AudioStatus::Idle,
            }
        };
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.refresh_status();
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(0)])
            .split(chunks[0]);

        self.draw_controls(frame, columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        self.draw_visualization(frame, right[0]);
        self.draw_detail(frame, right[1]);
        self.draw_status(frame, chunks[1]);

        if self.help_visible {
            self.draw_help(frame, size);
        }
    }

    fn panel_border(&self, panel: FocusPanel) -> Style {
        if self.focus == panel {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        }
    }

    fn draw_controls(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let block = Block::default()
            .title(Span::styled(
                " Rhythm Controls ",
                Style::default().fg(theme.title),
            ))
            .borders(Borders::ALL)
            .border_style(self.panel_border(FocusPanel::Controls));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // tempo label
                Constraint::Length(1), // tempo gauge
                Constraint::Length(1), // optimal hint
                Constraint::Length(1), // intensity label
                Constraint::Length(1), // intensity gauge
                Constraint::Length(1), // spacer
                Constraint::Length(1), // beat boxes
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // genre list
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tempo ", Style::default().fg(theme.text)),
                Span::styled(
                    format!("{:.0} BPM", self.tempo_bpm),
                    Style::default()
                        .fg(theme.gauge_tempo)
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            rows[0],
        );
        let tempo_ratio = (self.tempo_bpm - TEMPO_MIN) / (TEMPO_MAX - TEMPO_MIN);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme.gauge_tempo))
                .ratio(tempo_ratio.clamp(0.0, 1.0))
                .label(""),
            rows[1],
        );
        let optimal = self
            .selected_genre()
            .map(|g| format!("recommended: {:.0} BPM", g.tempo_range.optimal))
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(optimal).style(Style::default().fg(theme.text_dim)),
            rows[2],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Intensity ", Style::default().fg(theme.text)),
                Span::styled(
                    format!("{}%", self.intensity),
                    Style::default()
                        .fg(theme.gauge_intensity)
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            rows[3],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme.gauge_intensity))
                .ratio(f64::from(self.intensity) / f64::from(INTENSITY_MAX))
                .label(""),
            rows[4],
        );

        // Beat boxes: the active beat lights up only while playing.
        let mut beat_spans = Vec::new();
        for beat in 1u8..=4 {
            let style = if self.is_playing && beat == self.current_beat {
                Style::default()
                    .fg(theme.beat_active)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme.beat_idle)
            };
            beat_spans.push(Span::styled(format!(" {beat} "), style));
            beat_spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(beat_spans)), rows[6]);

        let items: Vec<ListItem> = self
            .catalog
            .genres()
            .iter()
            .enumerate()
            .map(|(i, genre)| {
                let marker = if i == self.selected { "> " } else { "  " };
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.border_focused)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{marker}{}. {}", i + 1, genre.name),
                    style,
                )))
            })
            .collect();
        frame.render_widget(List::new(items), rows[8]);
    }

    fn draw_visualization(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let genre_id = self
            .selected_genre()
            .map(|g| g.id.clone())
            .unwrap_or_default();
        let motion_frame =
            motion::render(&genre_id, self.tempo_bpm, self.is_playing, self.current_beat);
        let curve_color = match CurveFamily::from_id(&genre_id) {
            Some(CurveFamily::Classical) => theme.curve_classical,
            Some(CurveFamily::HipHop) => theme.curve_hiphop,
            Some(CurveFamily::Contemporary) => theme.curve_contemporary,
            Some(CurveFamily::Latin) => theme.curve_latin,
            None => theme.text_dim,
        };

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title(Span::styled(
                        " Movement Patterns ",
                        Style::default().fg(theme.title),
                    ))
                    .borders(Borders::ALL)
                    .border_style(self.panel_border(FocusPanel::Visualization)),
            )
            .x_bounds([0.0, motion::CANVAS_WIDTH])
            .y_bounds([0.0, motion::CANVAS_HEIGHT])
            .paint(|ctx| paint_motion_frame(ctx, &motion_frame, curve_color, theme));
        frame.render_widget(canvas, area);
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let title = format!(" {} (c to switch) ", self.detail_tab.title());
        let block = Block::default()
            .title(Span::styled(title, Style::default().fg(theme.title)))
            .borders(Borders::ALL)
            .border_style(self.panel_border(FocusPanel::Detail));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(genre) = self.selected_genre() else {
            return;
        };

        let lines = match self.detail_tab {
            DetailTab::Analysis => self.analysis_lines(genre),
            DetailTab::Cultural => self.cultural_lines(genre),
        };
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            inner,
        );
    }

    fn analysis_lines(&self, genre: &GenreRecord) -> Vec<Line<'static>> {
        let theme = &self.theme;
        let quality = MovementQuality::from_tempo(self.tempo_bpm);
        let expression = Expression::from_intensity(self.intensity);
        let guide = analysis::practice_guide(self.tempo_bpm, self.intensity, genre);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Current tempo ({:.0} BPM) suggests ", self.tempo_bpm),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    quality.phrase().to_string(),
                    Style::default().fg(theme.gauge_tempo),
                ),
                Span::styled(".", Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("Intensity level ({}%) indicates ", self.intensity),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    expression.phrase().to_string(),
                    Style::default().fg(theme.gauge_intensity),
                ),
                Span::styled(" expression.", Style::default().fg(theme.text)),
            ]),
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "Practice Guide: {} — {} level",
                    genre.name,
                    guide.skill.label()
                ),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        if guide.below_min {
            lines.push(Line::from(Span::styled(
                format!("! recommended minimum tempo: {:.0} BPM", genre.tempo_range.min),
                Style::default().fg(theme.warn),
            )));
        }
        if guide.above_max {
            lines.push(Line::from(Span::styled(
                format!("! recommended maximum tempo: {:.0} BPM", genre.tempo_range.max),
                Style::default().fg(theme.warn),
            )));
        }

        lines.push(Line::default());
        lines.push(section_header("Tempo practice", theme));
        for rec in guide.tempo_recommendations {
            lines.push(bullet(rec, theme));
        }

        lines.push(section_header("Level training", theme));
        for focus in guide.skill.focus() {
            lines.push(bullet(focus, theme));
        }

        lines.push(section_header("Style focus", theme));
        for step in &guide.style_focus {
            lines.push(bullet(&format!("Practice {step}"), theme));
        }

        lines.push(section_header("Technical elements", theme));
        for element in &genre.technical_elements {
            lines.push(bullet(element, theme));
        }

        lines
    }

    fn cultural_lines(&self, genre: &GenreRecord) -> Vec<Line<'static>> {
        let theme = &self.theme;
        vec![
            section_header("Cultural background", theme),
            Line::from(Span::styled(
                genre.cultural_context.clone(),
                Style::default().fg(theme.text),
            )),
            Line::default(),
            section_header("Emotional expression", theme),
            Line::from(Span::styled(
                genre.emotional_expression.clone(),
                Style::default().fg(theme.text),
            )),
            Line::default(),
            section_header("Music style", theme),
            Line::from(Span::styled(
                genre.music_style.clone(),
                Style::default().fg(theme.text),
            )),
        ]
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let playback_style = Style::default()
            .fg(if self.status.is_playing {
                theme.play
            } else {
                theme.stop
            })
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(format!(" {} ", self.status.playback_display()), playback_style),
            Span::raw(format!(
                " BPM:{:.0} | beat {} | {} | INT:{}% ",
                self.status.bpm,
                self.status.beat_display(),
                self.status.genre_name,
                self.status.intensity,
            )),
            Span::styled(
                format!(" {} ", self.status.audio_display()),
                Style::default().fg(match self.status.audio {
                    AudioStatus::Connected(_) => theme.play,
                    AudioStatus::Failed => theme.stop,
                    _ => theme.text_dim,
                }),
            ),
        ];
        if let Some(warning) = &self.status.warning {
            spans.push(Span::styled(
                format!(" ⚠ {warning} "),
                Style::default().fg(theme.warn),
            ));
        }
        spans.push(Span::styled(
            " ? help ",
            Style::default().fg(theme.text_dim),
        ));

        let paragraph = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.status_bg).fg(theme.status_fg));
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let entries = keybindings::help_entries();
        let height = (entries.len() + 4) as u16;
        let popup = centered_rect(46, height, area);
        frame.render_widget(Clear, popup);

        let mut lines = vec![Line::default()];
        for (keys, desc) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<16}"),
                    Style::default().fg(theme.border_focused),
                ),
                Span::styled(*desc, Style::default().fg(theme.text)),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", Style::default().fg(theme.title)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused));
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = map_key(key, self.help_visible) {
                            self.handle_action(action);
                        }
                    }
                }
            }

            self.tick_clock(Instant::now());
        }
        Ok(())
    }
}

fn section_header(text: &str, theme: &theme::Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("{text}:"),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: &str, theme: &theme::Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("  • {text}"),
        Style::default().fg(theme.text),
    ))
}

/// Paint a motion frame onto the canvas. The frame's y axis points down
/// (screen convention); the canvas y axis points up, so y is flipped.
fn paint_motion_frame(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    frame: &MotionFrame,
    curve_color: ratatui::style::Color,
    theme: &theme::Theme,
) {
    let flip = |y: f64| motion::CANVAS_HEIGHT - y;

    for guide in &frame.guides {
        let color = if guide.highlighted {
            theme.guide_active
        } else {
            theme.guide
        };
        ctx.draw(&CanvasLine {
            x1: guide.x,
            y1: 0.0,
            x2: guide.x,
            y2: motion::CANVAS_HEIGHT,
            color,
        });
    }

    for pair in frame.curve.windows(2) {
        ctx.draw(&CanvasLine {
            x1: pair[0].x,
            y1: flip(pair[0].y),
            x2: pair[1].x,
            y2: flip(pair[1].y),
            color: curve_color,
        });
    }

    for marker in &frame.markers {
        let x = marker.at.x;
        let y = flip(marker.at.y);
        match marker.shape {
            MarkerShape::Circle => {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: marker.size,
                    color: curve_color,
                });
            }
            MarkerShape::Square => {
                let half = marker.size / 2.0;
                ctx.draw(&ratatui::widgets::canvas::Rectangle {
                    x: x - half,
                    y: y - half,
                    width: marker.size,
                    height: marker.size,
                    color: curve_color,
                });
            }
            MarkerShape::Triangle => {
                let half = marker.size / 2.0;
                let top = (x, y + half);
                let left = (x - half, y - half);
                let right = (x + half, y - half);
                for (a, b) in [(top, left), (left, right), (right, top)] {
                    ctx.draw(&CanvasLine {
                        x1: a.0,
                        y1: a.1,
                        x2: b.0,
                        y2: b.1,
                        color: curve_color,
                    });
                }
            }
        }
    }
}

/// A centered popup rect with fixed width/height, clamped to the area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin(), 120.0, 70, Some("classical"), true)
    }

    #[test]
    fn new_app_defaults() {
        let app = app();
        assert!(!app.is_playing);
        assert_eq!(app.current_beat, 1);
        assert_eq!(app.selected, 0);
        assert_eq!(app.detail_tab, DetailTab::Analysis);
    }

    #[test]
    fn unknown_startup_genre_falls_back_to_first() {
        let app = App::new(Catalog::builtin(), 120.0, 70, Some("krump"), true);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn startup_tempo_is_clamped() {
        let app = App::new(Catalog::builtin(), 300.0, 70, None, true);
        assert_eq!(app.tempo_bpm, TEMPO_MAX);
        let app = App::new(Catalog::builtin(), 10.0, 70, None, true);
        assert_eq!(app.tempo_bpm, TEMPO_MIN);
    }

    #[test]
    fn tempo_adjustment_clamps_to_slider_range() {
        let mut app = app();
        for _ in 0..20 {
            app.handle_action(Action::AdjustTempo(10));
        }
        assert_eq!(app.tempo_bpm, TEMPO_MAX);
        for _ in 0..30 {
            app.handle_action(Action::AdjustTempo(-10));
        }
        assert_eq!(app.tempo_bpm, TEMPO_MIN);
    }

    #[test]
    fn intensity_adjustment_clamps() {
        let mut app = app();
        for _ in 0..20 {
            app.handle_action(Action::AdjustIntensity(5));
        }
        assert_eq!(app.intensity, INTENSITY_MAX);
        for _ in 0..30 {
            app.handle_action(Action::AdjustIntensity(-5));
        }
        assert_eq!(app.intensity, 0);
    }

    #[test]
    fn genre_selection_cycles_and_bounds() {
        let mut app = app();
        app.handle_action(Action::SelectGenre(3));
        assert_eq!(app.selected_genre().unwrap().id, "latin");
        app.handle_action(Action::SelectGenre(99));
        assert_eq!(app.selected, 3);
        app.handle_action(Action::NextGenre);
        assert_eq!(app.selected, 0);
        app.handle_action(Action::PrevGenre);
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn playback_toggle_starts_and_stops_clock() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_action_at(Action::TogglePlayback, t0);
        assert!(app.is_playing);

        // One interval later the beat advances.
        app.tick_clock(t0 + Duration::from_millis(500));
        assert_eq!(app.current_beat, 2);

        // After stopping, no tick ever fires.
        app.handle_action_at(Action::TogglePlayback, t0 + Duration::from_millis(600));
        assert!(!app.is_playing);
        app.tick_clock(t0 + Duration::from_secs(60));
        assert_eq!(app.current_beat, 2);
    }

    #[test]
    fn beat_wraps_through_cycle() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_action_at(Action::TogglePlayback, t0);
        let mut now = t0;
        let mut beats = Vec::new();
        for _ in 0..5 {
            now += Duration::from_millis(500);
            app.tick_clock(now);
            beats.push(app.current_beat);
        }
        assert_eq!(beats, [2, 3, 4, 1, 2]);
    }

    #[test]
    fn tempo_change_while_playing_rebuilds_schedule() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_action_at(Action::TogglePlayback, t0);
        // 120 → 60 BPM half-way through the 500ms interval.
        let mid = t0 + Duration::from_millis(250);
        for _ in 0..60 {
            app.handle_action_at(Action::AdjustTempo(-1), mid);
        }
        assert_eq!(app.tempo_bpm, 60.0);
        // Old 500ms deadline is gone; the next tick is 1s after the change.
        app.tick_clock(t0 + Duration::from_millis(500));
        assert_eq!(app.current_beat, 1);
        app.tick_clock(mid + Duration::from_secs(1));
        assert_eq!(app.current_beat, 2);
    }

    #[test]
    fn muted_tick_still_advances_beat() {
        let mut app = app();
        assert!(app.muted);
        let t0 = Instant::now();
        app.handle_action_at(Action::TogglePlayback, t0);
        app.tick_clock(t0 + Duration::from_millis(500));
        assert_eq!(app.current_beat, 2);
    }

    #[test]
    fn tab_and_focus_and_help_actions() {
        let mut app = app();
        app.handle_action(Action::ToggleTab);
        assert_eq!(app.detail_tab, DetailTab::Cultural);
        app.handle_action(Action::CycleFocus);
        assert_eq!(app.focus, FocusPanel::Visualization);
        app.handle_action(Action::ToggleHelp);
        assert!(app.help_visible);
        app.handle_action(Action::Escape);
        assert!(!app.help_visible);
    }

    #[test]
    fn theme_cycles_through_builtins() {
        let mut app = app();
        let first = app.theme.name.clone();
        app.handle_action(Action::CycleTheme);
        assert_ne!(app.theme.name, first);
        app.handle_action(Action::CycleTheme);
        app.handle_action(Action::CycleTheme);
        assert_eq!(app.theme.name, first);
    }

    #[test]
    fn quit_action_sets_flag() {
        let mut app = app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn status_reflects_state() {
        let mut app = app();
        app.handle_action(Action::SelectGenre(1));
        app.refresh_status();
        assert_eq!(app.status.genre_name, "Hip-Hop Dance");
        assert_eq!(app.status.audio, AudioStatus::Muted);
        app.handle_action(Action::ToggleMute);
        app.refresh_status();
        assert_eq!(app.status.audio, AudioStatus::Idle);
    }
}
