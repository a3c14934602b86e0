//! Create-task screen.
//!
//! A local form: client, project name, start and end dates, assignees,
//! category and attachments, with a `CREATE TASK` action that validates the
//! input and reports the resulting draft or the first problem found. Nothing
//! is persisted.

use crossterm::event::KeyEvent;
use projectmgt_core::{
    Attachment, Category, Client, Color, CoreError, CoreResult, ProjectTimeline, Theme, User,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
};
use tracing::{info, warn};

use crate::avatar::avatar_spans;
use crate::event::{
    is_backspace, is_down_arrow, is_enter, is_left, is_right, is_up_arrow, typed_char,
};
use crate::palette::term;

const DATE_PLACEHOLDER: &str = "DD.MM.YYYY";
const NAME_PLACEHOLDER: &str = "Project name";
const CURSOR: &str = "▏";

/// A focusable part of the form, in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Client,
    Name,
    StartDate,
    EndDate,
    Assignees,
    Category,
    Attachments,
    Create,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Client,
        FormField::Name,
        FormField::StartDate,
        FormField::EndDate,
        FormField::Assignees,
        FormField::Category,
        FormField::Attachments,
        FormField::Create,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// The field below, stopping at the last one.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1).min(Self::ALL.len() - 1)]
    }

    /// The field above, stopping at the first one.
    pub fn previous(self) -> Self {
        Self::ALL[self.position().saturating_sub(1)]
    }

    /// Whether the field takes typed characters.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::StartDate | Self::EndDate)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Name => "Project name",
            Self::StartDate => "Start date",
            Self::EndDate => "End date",
            Self::Assignees => "Assigned to",
            Self::Category => "Category",
            Self::Attachments => "Attachments",
            Self::Create => "CREATE TASK",
        }
    }
}

/// A validated form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub client: String,
    pub name: String,
    pub timeline: ProjectTimeline,
    pub category: Category,
    pub assignees: Vec<String>,
    pub attachments: Vec<String>,
}

impl TaskDraft {
    /// One-line description for the status line.
    pub fn summary(&self) -> String {
        let days = self.timeline.days();
        format!(
            "Draft \"{}\" for {}: {} {} from {}, {}, {} assigned",
            self.name,
            self.client,
            days,
            if days == 1 { "day" } else { "days" },
            self.timeline.start.format("%d.%m.%Y"),
            self.category.tag(),
            self.assignees.len(),
        )
    }
}

/// Outcome of the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Created(TaskDraft),
    Invalid(String),
}

/// Form state for the create-task screen.
#[derive(Debug, Clone)]
pub struct CreateTaskForm {
    clients: Vec<Client>,
    client_index: usize,
    name: String,
    start_date: String,
    end_date: String,
    assignees: Vec<User>,
    category: Category,
    attachments: Vec<Attachment>,
    focus: FormField,
    status: Option<FormStatus>,
}

impl CreateTaskForm {
    pub fn new(clients: Vec<Client>, assignees: Vec<User>, attachments: Vec<Attachment>) -> Self {
        Self {
            clients,
            client_index: 0,
            name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            assignees,
            category: Category::default(),
            attachments,
            focus: FormField::default(),
            status: None,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    /// The selected client, if any were offered.
    pub fn client(&self) -> Option<&Client> {
        self.clients.get(self.client_index)
    }

    /// Whether the focused field is taking typed characters.
    pub fn is_editing_text(&self) -> bool {
        self.focus.is_text()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::StartDate => Some(&mut self.start_date),
            FormField::EndDate => Some(&mut self.end_date),
            _ => None,
        }
    }

    fn cycle_client(&mut self, forward: bool) {
        let count = self.clients.len();
        if count == 0 {
            return;
        }
        self.client_index = if forward {
            (self.client_index + 1) % count
        } else {
            (self.client_index + count - 1) % count
        };
    }

    /// Route a key to the focused field.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if is_down_arrow(key) {
            self.focus_next();
            return;
        }
        if is_up_arrow(key) {
            self.focus_previous();
            return;
        }

        match self.focus {
            FormField::Client => {
                if is_left(key) {
                    self.cycle_client(false);
                } else if is_right(key) {
                    self.cycle_client(true);
                } else if is_enter(key) {
                    self.focus_next();
                }
            }
            FormField::Category => {
                if is_left(key) {
                    self.category = self.category.previous();
                } else if is_right(key) {
                    self.category = self.category.next();
                } else if is_enter(key) {
                    self.focus_next();
                }
            }
            FormField::Create => {
                if is_enter(key) {
                    self.submit();
                }
            }
            FormField::Name | FormField::StartDate | FormField::EndDate => {
                if is_enter(key) {
                    self.focus_next();
                } else if is_backspace(key) {
                    if let Some(text) = self.text_mut() {
                        text.pop();
                    }
                } else if let Some(c) = typed_char(key)
                    && let Some(text) = self.text_mut()
                {
                    text.push(c);
                }
            }
            FormField::Assignees | FormField::Attachments => {
                if is_enter(key) {
                    self.focus_next();
                }
            }
        }
    }

    /// Check the form and build a draft from it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ValidationError` if the name is blank or no client
    /// is selected, or the date errors from [`ProjectTimeline::parse`].
    pub fn validate(&self) -> CoreResult<TaskDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError {
                message: "Project name is required".to_string(),
            });
        }

        let client = self.client().ok_or_else(|| CoreError::ValidationError {
            message: "No client to create the task for".to_string(),
        })?;

        let timeline = ProjectTimeline::parse(&self.start_date, &self.end_date)?;

        Ok(TaskDraft {
            client: client.name.clone(),
            name: name.to_string(),
            timeline,
            category: self.category,
            assignees: self.assignees.iter().map(|u| u.name.clone()).collect(),
            attachments: self.attachments.iter().map(|a| a.name.clone()).collect(),
        })
    }

    /// Validate and record the outcome in the status line.
    pub fn submit(&mut self) {
        self.status = Some(match self.validate() {
            Ok(draft) => {
                info!(name = %draft.name, client = %draft.client, "task draft created");
                FormStatus::Created(draft)
            }
            Err(e) => {
                warn!(error = %e, "task form rejected");
                FormStatus::Invalid(e.full_message())
            }
        });
    }
}

/// Gauge ratio for an attachment upload, clamped into `[0, 1]`.
fn gauge_ratio(progress: f32) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        f64::from(progress.clamp(0.0, 1.0))
    }
}

/// Render the create-task screen.
pub fn render_create_task_view(
    frame: &mut Frame,
    area: Rect,
    form: &CreateTaskForm,
    theme: &Theme,
) {
    let surface = Style::default()
        .bg(term(theme.form_background))
        .fg(term(theme.card));
    let block = Block::default()
        .title(" Create Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(term(theme.accent)))
        .style(surface);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let attachments_height = 2 + form.attachments.len().max(1) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Client
            Constraint::Length(3),                  // Name
            Constraint::Length(3),                  // Dates
            Constraint::Length(3),                  // Assignees
            Constraint::Length(3),                  // Category
            Constraint::Length(attachments_height), // Attachments
            Constraint::Length(3),                  // Create button
            Constraint::Length(1),                  // Status line
            Constraint::Min(0),
        ])
        .split(inner);

    let client = form.client().map_or("", |c| c.name.as_str());
    render_field(
        frame,
        chunks[0],
        form,
        FormField::Client,
        Line::from(vec![
            Span::raw("◀ "),
            Span::styled(client.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ▶"),
        ]),
        theme,
    );

    render_field(
        frame,
        chunks[1],
        form,
        FormField::Name,
        text_line(&form.name, NAME_PLACEHOLDER, form.focus == FormField::Name, theme),
        theme,
    );

    let dates = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_field(
        frame,
        dates[0],
        form,
        FormField::StartDate,
        text_line(
            &form.start_date,
            DATE_PLACEHOLDER,
            form.focus == FormField::StartDate,
            theme,
        ),
        theme,
    );
    render_field(
        frame,
        dates[1],
        form,
        FormField::EndDate,
        text_line(
            &form.end_date,
            DATE_PLACEHOLDER,
            form.focus == FormField::EndDate,
            theme,
        ),
        theme,
    );

    render_field(
        frame,
        chunks[3],
        form,
        FormField::Assignees,
        Line::from(avatar_spans(&form.assignees, true, theme)),
        theme,
    );

    render_field(
        frame,
        chunks[4],
        form,
        FormField::Category,
        category_chips(form.category, theme),
        theme,
    );

    render_attachments(frame, chunks[5], form, theme);
    render_create_button(frame, chunks[6], form, theme);
    render_status_line(frame, chunks[7], form, theme);
}

fn field_block(form: &CreateTaskForm, field: FormField, theme: &Theme) -> Block<'static> {
    let focused = form.focus == field;
    let border = if focused { theme.accent } else { theme.muted_text };
    let mut title_style = Style::default().fg(term(border));
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    Block::default()
        .title(Span::styled(format!(" {} ", field.label()), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(term(border)))
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &CreateTaskForm,
    field: FormField,
    content: Line<'static>,
    theme: &Theme,
) {
    let paragraph = Paragraph::new(content).block(field_block(form, field, theme));
    frame.render_widget(paragraph, area);
}

/// Field text with a cursor when focused, or a muted placeholder when empty.
fn text_line(value: &str, placeholder: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(term(theme.muted_text)),
        ));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(term(theme.accent))));
    }
    Line::from(spans)
}

fn category_chips(selected: Category, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for category in Category::ALL {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        let (mark, style) = if category == selected {
            (
                "(●)",
                Style::default()
                    .fg(term(theme.accent))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("( )", Style::default().fg(term(theme.muted_text)))
        };
        spans.push(Span::styled(format!("{} {}", mark, category.label()), style));
    }
    Line::from(spans)
}

fn render_attachments(frame: &mut Frame, area: Rect, form: &CreateTaskForm, theme: &Theme) {
    let block = field_block(form, FormField::Attachments, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if form.attachments.is_empty() {
        let empty = Paragraph::new("No attachments")
            .style(Style::default().fg(term(theme.muted_text)));
        frame.render_widget(empty, inner);
        return;
    }

    for (i, attachment) in form.attachments.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Min(0),
                Constraint::Length(8),
            ])
            .split(row);

        frame.render_widget(Paragraph::new(attachment.name.clone()), columns[0]);
        frame.render_widget(
            LineGauge::default()
                .ratio(gauge_ratio(attachment.progress))
                .filled_style(Style::default().fg(term(theme.accent)))
                .unfilled_style(Style::default().fg(term(theme.muted_text))),
            columns[1],
        );
        frame.render_widget(
            Paragraph::new(attachment.size_label())
                .style(Style::default().fg(term(theme.muted_text)))
                .alignment(Alignment::Right),
            columns[2],
        );
    }
}

fn render_create_button(frame: &mut Frame, area: Rect, form: &CreateTaskForm, theme: &Theme) {
    let focused = form.focus == FormField::Create;
    let style = if focused {
        Style::default()
            .fg(term(theme.form_background))
            .bg(term(theme.accent))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(term(theme.accent))
    };
    let button = Paragraph::new(FormField::Create.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(term(theme.accent))),
        );
    frame.render_widget(button, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, form: &CreateTaskForm, theme: &Theme) {
    let line = match form.status() {
        Some(FormStatus::Created(draft)) => {
            Line::from(Span::styled(draft.summary(), Style::default().fg(term(theme.accent))))
        }
        Some(FormStatus::Invalid(message)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(term(Color::RED)),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}
