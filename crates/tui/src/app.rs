//! Main application state and event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::prelude::*;
use tracing::{debug, warn};

use projectmgt_core::{
    Project, Theme, check_contiguous, mock_attachment, mock_clients, mock_project,
};

use crate::create_task::CreateTaskForm;
use crate::error::TuiResult;
use crate::event::{is_down, is_escape, is_interrupt, is_quit, is_tab, is_up, poll_key};
use crate::timeline::TimelineViewState;
use crate::ui;

/// The screen shown below the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Timeline,
    CreateTask,
}

impl ActiveTab {
    /// Cycle to the next tab.
    pub fn next(self) -> Self {
        match self {
            Self::Timeline => Self::CreateTask,
            Self::CreateTask => Self::Timeline,
        }
    }

    /// Get the index of the current tab (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Self::Timeline => 0,
            Self::CreateTask => 1,
        }
    }
}

/// Main application state.
pub struct App {
    /// Project shown on the timeline.
    project: Project,
    theme: Theme,
    /// The active screen.
    active_tab: ActiveTab,
    /// Selected row on the timeline.
    timeline_state: TimelineViewState,
    form: CreateTaskForm,
    /// Whether the application is still running.
    running: bool,
}

impl App {
    /// Create an app showing the sample project.
    pub fn new(theme: Theme) -> Self {
        Self::with_project(mock_project(), theme)
    }

    /// Create an app showing `project`.
    ///
    /// Tasks sharing a time-code are expected to be adjacent; if they are
    /// not, a warning is logged and the timeline renders anyway.
    pub fn with_project(project: Project, theme: Theme) -> Self {
        if let Err(e) = check_contiguous(&project.tasks) {
            warn!(error = %e, "timeline groups are not contiguous");
        }

        let form = CreateTaskForm::new(
            mock_clients(),
            project.users.clone(),
            vec![mock_attachment()],
        );

        Self {
            project,
            theme,
            active_tab: ActiveTab::default(),
            timeline_state: TimelineViewState::default(),
            form,
            running: true,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Get the active tab.
    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn timeline_state(&self) -> TimelineViewState {
        self.timeline_state
    }

    pub fn form(&self) -> &CreateTaskForm {
        &self.form
    }

    /// Check if the application is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Cycle to the next tab.
    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        debug!(tab = ?self.active_tab, "switched tab");
    }

    /// Select the next task on the timeline.
    ///
    /// Clamps to the last task (does not wrap).
    pub fn select_next_task(&mut self) {
        let count = self.project.tasks.len();
        if count > 0 && self.timeline_state.selected_index < count - 1 {
            self.timeline_state.selected_index += 1;
        }
    }

    /// Select the previous task on the timeline.
    ///
    /// Clamps to the first task (does not wrap).
    pub fn select_previous_task(&mut self) {
        self.timeline_state.selected_index = self.timeline_state.selected_index.saturating_sub(1);
    }

    /// Run the main application loop.
    ///
    /// This initializes the terminal, runs the event loop, and ensures
    /// the terminal is restored on exit (even on panic).
    pub fn run(&mut self) -> TuiResult<()> {
        let mut terminal = init_terminal()?;

        // Restores the terminal even if the loop panics
        let _guard = scopeguard::guard((), |()| {
            let _ = restore_terminal();
        });

        let result = self.event_loop(&mut terminal);

        drop(_guard);

        result
    }

    /// The main event loop.
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> TuiResult<()> {
        while self.running {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if let Some(key) = poll_key(Duration::from_millis(100))? {
                self.handle_key(&key);
            }
        }
        Ok(())
    }

    /// Handle a keyboard event.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        let typing = self.active_tab == ActiveTab::CreateTask && self.form.is_editing_text();

        // While typing, letters belong to the field
        let quit = if typing {
            is_interrupt(key) || is_escape(key)
        } else {
            is_quit(key)
        };
        if quit {
            self.quit();
            return;
        }

        if is_tab(key) {
            self.next_tab();
            return;
        }

        match self.active_tab {
            ActiveTab::Timeline => {
                if is_down(key) {
                    self.select_next_task();
                } else if is_up(key) {
                    self.select_previous_task();
                }
            }
            ActiveTab::CreateTask => self.form.handle_key(key),
        }
    }
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> TuiResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
