//! Draws the TUI: header, notice, entry table, input line, footer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{App, InputMode};

/// Accent for titles and the selection cursor
const ACCENT: Color = Color::Rgb(94, 196, 206);
/// Validation and failure text
const ALERT: Color = Color::Rgb(224, 108, 108);
/// Notice border and title
const NOTICE: Color = Color::Rgb(152, 195, 121);

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let editing = app.input_mode == InputMode::Editing;
    let error_lines = app.field_errors.messages("timestamp").len() as u16;

    let mut constraints = vec![
        Constraint::Length(1), // header
    ];
    if app.notice_visible() {
        constraints.push(Constraint::Length(4)); // notice
    }
    constraints.push(Constraint::Min(5)); // entry table
    if editing {
        constraints.push(Constraint::Length(3)); // input field
        if error_lines > 0 {
            constraints.push(Constraint::Length(error_lines)); // validation
        }
    }
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::vertical(constraints).split(frame.area());
    let mut idx = 0;

    render_header(frame, app, chunks[idx]);
    idx += 1;

    if app.notice_visible() {
        render_notice(frame, app, chunks[idx]);
        idx += 1;
    }

    if app.boundary.is_failed() {
        render_failure(frame, app, chunks[idx]);
    } else {
        render_entries(frame, app, chunks[idx]);
    }
    idx += 1;

    if editing {
        render_input(frame, app, chunks[idx]);
        idx += 1;
        if error_lines > 0 {
            render_field_errors(frame, app, chunks[idx]);
            idx += 1;
        }
    }

    render_footer(frame, app, chunks[idx]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode = if app.absolute {
        "pinned absolute"
    } else {
        "live relative"
    };
    let line = Line::from(vec![
        Span::styled("whence", Style::default().fg(ACCENT).bold()),
        Span::styled(
            format!("  {}  │  {} entries", mode, app.entries.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.notice.as_ref() else {
        return;
    };
    let notice = state.notice();
    let lines = vec![
        Line::from(notice.body.clone()),
        Line::from(Span::styled(
            "d dismisses this notice",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(NOTICE))
            .title(format!(" {} ", notice.title))
            .title_style(Style::default().fg(NOTICE).bold()),
    );
    frame.render_widget(panel, area);
}

fn render_entries(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut titles = vec!["Name", "When"];
    if app.tooltip {
        titles.push("Absolute");
    }
    let header_cells = titles
        .into_iter()
        .map(|h| Cell::from(h).style(Style::default().fg(ACCENT).bold()));
    let header = Row::new(header_cells).height(1);

    let rows = app.entries.iter().map(|entry| {
        let mut cells = vec![
            Cell::from(entry.name.clone()),
            Cell::from(entry.label.text()),
        ];
        if app.tooltip {
            cells.push(
                Cell::from(entry.label.tooltip().unwrap_or_default())
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }
        Row::new(cells)
    });

    let widths: Vec<Constraint> = if app.tooltip {
        vec![
            Constraint::Fill(1),    // Name (flexible)
            Constraint::Length(18), // When
            Constraint::Length(24), // Absolute
        ]
    } else {
        vec![Constraint::Fill(1), Constraint::Length(18)]
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Entries "),
        )
        .row_highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(Color::Cyan),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_failure(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Something went wrong",
        Style::default().fg(ALERT).bold(),
    ))];
    if let Some((error, context)) = app.boundary.failure() {
        lines.push(Line::raw(""));
        lines.push(Line::from(error.to_string()));
        lines.push(Line::from(Span::styled(
            format!("while {}", context),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::styled(
            " resets and resumes rendering",
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ALERT)),
    );
    frame.render_widget(panel, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::raw(app.input_buffer.clone()),
        Span::styled("▌", Style::default().fg(ACCENT)),
    ]);
    let field = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Add entry (epoch millis or ISO timestamp) "),
    );
    frame.render_widget(field, area);
}

fn render_field_errors(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .field_errors
        .messages("timestamp")
        .iter()
        .map(|msg| {
            Line::from(Span::styled(
                format!("✗ {}", msg),
                Style::default().fg(ALERT),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = match app.input_mode {
        InputMode::Normal => vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit  "),
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(" move  "),
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(" absolute  "),
            Span::styled("t", Style::default().fg(Color::Yellow)),
            Span::raw(" tooltip  "),
            Span::styled("i", Style::default().fg(Color::Yellow)),
            Span::raw(" add  "),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw(" reset"),
        ],
        InputMode::Editing => vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" add  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" cancel"),
        ],
    };

    if app.notice_visible() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("d", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" dismiss"));
    }

    let footer =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
