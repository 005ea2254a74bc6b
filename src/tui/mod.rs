//! Ratatui-based terminal UI.
//!
//! Left: the three probability fields, a Visualize button and the results panel.
//! Right: the proportional-area diagram. Calculator errors open a modal dialog
//! and leave the previous diagram on screen.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Terminal,
};

use crate::app::Presenter;
use crate::cli::TuiArgs;
use crate::config::AppConfig;
use crate::domain::{PatchKind, ProbabilityField};
use crate::error::{AppError, BayesError};
use crate::layout::patches;

mod plotters_chart;

use plotters_chart::BayesPlottersChart;

/// Row index of the Visualize button (after the three fields).
const BUTTON_ROW: usize = ProbabilityField::ALL.len();

/// Start the TUI.
pub fn run(args: &TuiArgs, config: &AppConfig) -> Result<(), AppError> {
    let p = &args.probabilities;
    let presenter = Presenter::new(config.canvas_width, config.canvas_height).with_fields(
        &p.prior,
        &p.likelihood,
        &p.false_positive,
    );
    let mut app = App::new(presenter, config.export_dir.clone());
    // Render the initial fields before the first frame, like pressing Visualize.
    app.visualize();

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    tracing::info!("tui started");
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// A blocking error message; while open, keys only dismiss it.
#[derive(Debug, Clone, PartialEq)]
struct ErrorDialog {
    title: String,
    message: String,
}

impl From<&BayesError> for ErrorDialog {
    fn from(err: &BayesError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

struct App {
    presenter: Presenter,
    selected_row: usize,
    /// Field text before editing started (restored on Esc).
    edit_backup: Option<String>,
    dialog: Option<ErrorDialog>,
    status: String,
    export_dir: PathBuf,
}

impl App {
    fn new(presenter: Presenter, export_dir: PathBuf) -> Self {
        Self {
            presenter,
            selected_row: 0,
            edit_backup: None,
            dialog: None,
            status: "Enter to edit a field, v to visualize.".to_string(),
            export_dir,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.dialog.is_some() {
            self.dialog = None;
            return false;
        }
        if self.edit_backup.is_some() {
            self.handle_field_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::BackTab => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Tab => {
                if self.selected_row < BUTTON_ROW {
                    self.selected_row += 1;
                }
            }
            KeyCode::Enter => match self.selected_field() {
                Some(field) => {
                    self.edit_backup = Some(self.presenter.field(field).to_string());
                    self.status = format!("Editing {field}. Enter to apply, Esc to cancel.");
                }
                None => self.visualize(),
            },
            KeyCode::Char('v') => self.visualize(),
            KeyCode::Char('r') => {
                self.presenter.reset_fields();
                self.status = "Fields reset to defaults (press v to visualize).".to_string();
            }
            KeyCode::Char('e') => self.export_svg(),
            _ => {}
        }

        false
    }

    fn handle_field_edit(&mut self, code: KeyCode) {
        let Some(field) = self.selected_field() else {
            self.edit_backup = None;
            return;
        };

        match code {
            KeyCode::Esc => {
                if let Some(backup) = self.edit_backup.take() {
                    self.presenter.set_field(field, backup);
                }
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.edit_backup = None;
                self.visualize();
            }
            KeyCode::Backspace => {
                self.presenter.field_mut(field).pop();
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.presenter.field_mut(field).push(c);
            }
            _ => {}
        }
    }

    fn selected_field(&self) -> Option<ProbabilityField> {
        ProbabilityField::ALL.get(self.selected_row).copied()
    }

    fn visualize(&mut self) {
        match self.presenter.visualize() {
            Ok(render) => {
                self.status = format!("Visualized: P(H|e) = {:.3}", render.result.posterior);
            }
            Err(err) => {
                self.dialog = Some(ErrorDialog::from(&err));
                self.status = "Input rejected; previous diagram kept.".to_string();
            }
        }
    }

    fn export_svg(&mut self) {
        let Some(render) = self.presenter.current() else {
            self.status = "Nothing to export yet.".to_string();
            return;
        };
        let path = crate::io::timestamped_path(&self.export_dir, "svg");
        match crate::io::write_diagram_svg(&path, &render.result, &render.layout) {
            Ok(()) => {
                self.status = format!("Wrote diagram: {}", path.display());
            }
            Err(err) => {
                tracing::warn!(error = %err, "svg export failed");
                self.status = format!("Export failed: {err}");
            }
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if let Some(dialog) = &self.dialog {
            draw_dialog(frame, size, dialog);
        }
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("bayes", Style::default().fg(Color::Cyan)),
            Span::raw(" - Bayes' theorem visualizer"),
        ]));

        let summary = match self.presenter.current() {
            Some(render) => format!(
                "{} | P(e) = {:.3} | canvas {}x{}",
                crate::report::format_title(&render.result),
                render.result.evidence,
                render.layout.canvas_width,
                render.layout.canvas_height,
            ),
            None => "P(H|e) = -".to_string(),
        };
        lines.push(Line::from(Span::styled(
            summary,
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(chunks[0]);

        self.draw_inputs(frame, left[0]);
        self.draw_results(frame, left[1]);
        self.draw_diagram(frame, chunks[1]);
    }

    fn draw_inputs(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::new();
        for field in ProbabilityField::ALL {
            let editing = self.edit_backup.is_some() && self.selected_field() == Some(field);
            let cursor = if editing { "▏" } else { "" };
            items.push(ListItem::new(format!(
                "{:<10} {}{cursor}",
                format!("{}:", field.label()),
                self.presenter.field(field)
            )));
        }
        items.push(ListItem::new("[ Visualize ]").style(Style::default().add_modifier(Modifier::BOLD)));

        let list = List::new(items)
            .block(Block::default().title("Inputs").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_row));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_results(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let text = self
            .presenter
            .current()
            .map(|r| r.explanation.clone())
            .unwrap_or_default();
        let p = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Results").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_diagram(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Diagram").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(render) = self.presenter.current() else {
            let msg = Paragraph::new("Nothing visualized yet. Press v.")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let patches = patches(&render.layout);
        let widget = BayesPlottersChart {
            patches: &patches,
            layout: &render.layout,
        };
        frame.render_widget(widget, chunks[0]);
        frame.render_widget(Paragraph::new(legend_line()).alignment(Alignment::Center), chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  Enter edit/apply  v visualize  r reset  e export svg  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn legend_line() -> Line<'static> {
    let mut spans = Vec::new();
    for kind in [
        PatchKind::Hypothesis,
        PatchKind::NotHypothesis,
        PatchKind::EvidenceGivenH,
        PatchKind::EvidenceGivenNotH,
    ] {
        let (r, g, b) = kind.color();
        spans.push(Span::styled("██", Style::default().fg(Color::Rgb(r, g, b))));
        spans.push(Span::raw(format!(" {}  ", kind.label())));
    }
    Line::from(spans)
}

fn draw_dialog(frame: &mut ratatui::Frame<'_>, area: Rect, dialog: &ErrorDialog) {
    let rect = centered_rect(area, 50, 7);
    frame.render_widget(Clear, rect);

    let text = Text::from(vec![
        Line::from(dialog.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("Press any key", Style::default().fg(Color::Gray))),
    ]);
    let p = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(dialog.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(p, rect);
}

/// A `width × height` rectangle centered in `area` (clamped to fit).
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
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
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Presenter::new(600, 600), PathBuf::from("."))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn edit_field_and_visualize() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert!(app.edit_backup.is_some());
        for _ in 0..3 {
            app.handle_key(KeyCode::Backspace);
        }
        type_text(&mut app, "0.5");
        app.handle_key(KeyCode::Enter);

        assert!(app.edit_backup.is_none());
        assert!(app.dialog.is_none());
        let render = app.presenter.current().unwrap();
        assert_eq!(render.layout.column_h_split, 300);
    }

    #[test]
    fn escape_restores_field() {
        let mut app = app();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        type_text(&mut app, "zz");
        assert_eq!(app.presenter.field(ProbabilityField::Likelihood), "0.9zz");
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.presenter.field(ProbabilityField::Likelihood), "0.9");
    }

    #[test]
    fn invalid_input_opens_dialog_and_keeps_render() {
        let mut app = app();
        app.visualize();
        let before = app.presenter.current().cloned();

        app.handle_key(KeyCode::Enter);
        type_text(&mut app, "x");
        app.handle_key(KeyCode::Enter);

        let dialog = app.dialog.clone().unwrap();
        assert_eq!(dialog.title, "Invalid input");
        assert_eq!(app.presenter.current().cloned(), before);

        // While the dialog is open, keys only dismiss it.
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(app.dialog.is_none());
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn undefined_posterior_dialog() {
        let mut app = App::new(
            Presenter::new(600, 600).with_fields("0", "0.9", "0"),
            PathBuf::from("."),
        );
        app.selected_row = BUTTON_ROW;
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.dialog.as_ref().unwrap().title, "Undefined posterior");
        assert!(app.presenter.current().is_none());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_row, 0);
        for _ in 0..10 {
            app.handle_key(KeyCode::Tab);
        }
        assert_eq!(app.selected_row, BUTTON_ROW);
        assert_eq!(app.selected_field(), None);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = App::new(
            Presenter::new(600, 600).with_fields("0.3", "0.3", "0.3"),
            PathBuf::from("."),
        );
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.presenter.field(ProbabilityField::Prior), "0.1");
    }

    #[test]
    fn export_without_render_only_sets_status() {
        let mut app = app();
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.status, "Nothing to export yet.");
    }

    #[test]
    fn export_writes_svg_into_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Presenter::new(600, 600), dir.path().to_path_buf());
        app.visualize();
        app.handle_key(KeyCode::Char('e'));
        assert!(app.status.starts_with("Wrote diagram: "), "{}", app.status);
        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn draws_inputs_before_first_render() {
        let app = app();
        let screen = screen_text(&app);
        assert!(screen.contains("Visualize"));
        assert!(screen.contains("Nothing visualized yet"));
    }

    #[test]
    fn draws_diagram_after_visualize() {
        let legend = "██ P(H)  ██ P(¬H)  ██ P(e | H)  ██ P(e | ¬H)";
        // Defaults, then zero-width ¬H / H columns and an empty evidence fill.
        for (prior, lh, lnh) in [("0.1", "0.9", "0.2"), ("0", "0.5", "0.5"), ("1", "1", "0"), ("0.5", "0", "1")] {
            let mut app = App::new(Presenter::new(600, 600).with_fields(prior, lh, lnh), PathBuf::from("."));
            app.visualize();
            assert!(app.dialog.is_none(), "({prior}, {lh}, {lnh})");

            let title = crate::report::format_title(&app.presenter.current().unwrap().result);
            let screen = screen_text(&app);
            assert!(screen.contains(&title), "({prior}, {lh}, {lnh}): missing {title}");
            assert!(screen.contains(legend), "({prior}, {lh}, {lnh}): missing legend");
            assert!(!screen.contains("Nothing visualized yet"));
            assert!(!screen.contains("Diagram area too small"));
        }

        let mut app = app();
        app.visualize();
        assert!(screen_text(&app).contains("P(H|e) = 0.333 | P(e) = 0.270 | canvas 600x600"));
    }

    #[test]
    fn draws_dialog() {
        let mut app = App::new(
            Presenter::new(600, 600).with_fields("2", "0.9", "0.2"),
            PathBuf::from("."),
        );
        app.visualize();
        let screen = screen_text(&app);
        assert!(screen.contains("Invalid input"));
        assert!(screen.contains("Press any key"));
    }

    #[test]
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 5);
        let r = centered_rect(area, 50, 7);
        assert_eq!(r, Rect::new(0, 0, 20, 5));

        let area = Rect::new(0, 0, 100, 30);
        let r = centered_rect(area, 50, 7);
        assert_eq!(r, Rect::new(25, 11, 50, 7));
    }
}
