//! Drawing. Pure view of app state; no transitions happen here.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::notice::NoticeKind;
use crate::ui::screen::Control;
use crate::ui::theme::{palette, Palette};
use crate::workflow::SubmissionOutcome;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let colors = palette(app.dark_mode());
    let (header, body, notice_line, footer) = layout_regions(frame.area());

    draw_header(frame, app, colors, header);

    let (document_area, params_area, result_area) = body_regions(body);
    draw_document_panel(frame, app, colors, document_area);
    draw_params_panel(frame, app, colors, params_area);
    draw_result_panel(frame, app, colors, result_area);

    draw_notice(frame, app, colors, notice_line);
    draw_footer(frame, app, colors, footer);
}

fn bordered(title: &'static str, colors: &Palette) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
}

fn focus_style(focused: bool, colors: &Palette) -> Style {
    if focused {
        Style::default().fg(colors.accent).bg(colors.highlight)
    } else {
        Style::default().fg(colors.text)
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &App, colors: &Palette, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "  condense",
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(colors.dim)),
        Span::styled(
            app.server_url().to_string(),
            Style::default().fg(colors.text),
        ),
        Span::styled("  │  ", Style::default().fg(colors.dim)),
        Span::styled(
            if app.dark_mode() { "dark" } else { "light" },
            Style::default().fg(colors.dim),
        ),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(widget, area);
}

fn draw_document_panel(frame: &mut Frame<'_>, app: &App, colors: &Palette, area: Rect) {
    let screen = app.screen();
    let input_focused = screen.focused == Control::PathInput;

    let mut input = screen.path_input.clone();
    if input_focused {
        input.push('▏');
    }

    let selected_line = match app.controller().document() {
        Some(document) => Line::from(vec![
            Span::styled(
                document.name().to_string(),
                Style::default().fg(colors.ok).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:.2} KB", document.size_bytes() as f64 / 1024.0),
                Style::default().fg(colors.dim),
            ),
        ]),
        None => Line::from(Span::styled(
            "Type the path of a .txt file and press Enter",
            Style::default().fg(colors.dim),
        )),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Path: ", Style::default().fg(colors.dim)),
            Span::styled(input, focus_style(input_focused, colors)),
        ]),
        selected_line,
    ];

    frame.render_widget(Paragraph::new(lines).block(bordered("Document", colors)), area);
}

fn param_line(
    label: &'static str,
    value: String,
    focused: bool,
    colors: &Palette,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<18}"), Style::default().fg(colors.text)),
        Span::styled("◄ ", Style::default().fg(colors.dim)),
        Span::styled(value, focus_style(focused, colors).add_modifier(Modifier::BOLD)),
        Span::styled(" ►", Style::default().fg(colors.dim)),
    ])
}

fn draw_params_panel(frame: &mut Frame<'_>, app: &App, colors: &Palette, area: Rect) {
    let screen = app.screen();
    let params = app.controller().params();
    let busy = app.controller().is_busy();
    let submit_enabled = !busy && app.controller().document().is_some();

    let submit_label = if busy {
        "[ Processing... ]"
    } else {
        "[ Generate Summary ]"
    };
    let submit_style = if !submit_enabled {
        Style::default().fg(colors.dim)
    } else if screen.focused == Control::Submit {
        Style::default().fg(colors.ok).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.ok)
    };

    let lines = vec![
        param_line(
            "Summary ratio",
            format!("{:.0}%", params.ratio() * 100.0),
            screen.focused == Control::Ratio,
            colors,
        ),
        param_line(
            "Min sentences",
            params.min_sentences().to_string(),
            screen.focused == Control::MinSentences,
            colors,
        ),
        param_line(
            "Max sentences",
            params.max_sentences().to_string(),
            screen.focused == Control::MaxSentences,
            colors,
        ),
        Line::from(Span::styled(submit_label, submit_style)).alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).block(bordered("Settings", colors)), area);
}

fn draw_result_panel(frame: &mut Frame<'_>, app: &App, colors: &Palette, area: Rect) {
    let lines = match app.controller().outcome() {
        SubmissionOutcome::Idle => vec![Line::from(Span::styled(
            "No summary yet.",
            Style::default().fg(colors.dim),
        ))],
        SubmissionOutcome::InFlight => vec![Line::from(Span::styled(
            "Summarizing…",
            Style::default().fg(colors.accent),
        ))],
        SubmissionOutcome::Success { summary, artifact } => {
            let hint = if app.is_downloading() {
                "Downloading…".to_string()
            } else {
                format!("Ctrl+D saves \"{}\"", artifact.download_name)
            };
            let mut lines: Vec<Line> = summary
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(colors.text))))
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                hint,
                Style::default().fg(colors.dim),
            )));
            lines
        }
        // The persistent inline channel for the stored error message.
        SubmissionOutcome::Failure { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(colors.error),
        ))],
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(bordered("Summary", colors));
    frame.render_widget(widget, area);
}

fn draw_notice(frame: &mut Frame<'_>, app: &App, colors: &Palette, area: Rect) {
    let Some(notice) = app.notices().latest() else {
        return;
    };
    let style = match notice.kind {
        NoticeKind::Info => Style::default().fg(colors.accent),
        NoticeKind::Success => Style::default().fg(colors.ok),
        NoticeKind::Error => Style::default().fg(colors.error),
    };
    let line = Line::from(Span::styled(format!(" {}", notice.text), style));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_footer(frame: &mut Frame<'_>, _app: &App, colors: &Palette, area: Rect) {
    let hints =
        " Tab: Focus │ ◄ ►: Adjust │ Enter: Select/Submit │ Ctrl+Y: Copy │ Ctrl+D: Download │ Ctrl+T: Theme │ Ctrl+Q: Quit";
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count, so the separators don't shift.
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(colors.dim);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(widget, area);
}
