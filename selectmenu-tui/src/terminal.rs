//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use selectmenu_core::Selection;

use crate::app::{App, HandleResult};
use crate::event::poll_event;
use crate::ui::DIM;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Split the screen into the menu area and a one-line status bar
///
/// Returns: (menu_area, status_area)
pub fn screen_areas(area: Rect) -> (Rect, Rect) {
    let status_height = area.height.min(1);
    let menu = Rect {
        height: area.height - status_height,
        ..area
    };
    let status = Rect {
        y: menu.bottom(),
        height: status_height,
        ..area
    };
    (menu, status)
}

/// Run the select menu until the user quits; returns the final selection
pub fn run(mut app: App) -> Result<Selection> {
    // Initialize terminal
    let mut terminal = init_terminal()?;

    app.open_menu();

    // Main event loop
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result.map(|()| app.selected())
}

/// Main event loop
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => {
                    if app.handle_key(key) == HandleResult::Quit {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        let size = terminal.size()?;
                        let screen = Rect::new(0, 0, size.width, size.height);
                        let (menu_area, _) = screen_areas(screen);
                        app.handle_click(mouse.column, mouse.row, menu_area);
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Render the menu (when open) and the status bar
fn render(frame: &mut Frame, app: &App) {
    let (menu_area, status_area) = screen_areas(frame.area());

    if let Some(menu) = app.menu() {
        frame.render_widget(menu, menu_area);
    }

    let hints = if app.is_menu_open() {
        "Up/Down: move  Enter: confirm  type: filter  Esc: close  Ctrl+C: quit"
    } else {
        ""
    };
    let status = app.status_message.as_deref().unwrap_or("");

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(DIM)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(line), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_areas() {
        let (menu, status) = screen_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(menu, Rect::new(0, 0, 80, 23));
        assert_eq!(status, Rect::new(0, 23, 80, 1));

        let (menu, status) = screen_areas(Rect::new(0, 0, 80, 0));
        assert_eq!(menu.height, 0);
        assert_eq!(status.height, 0);
    }
}
