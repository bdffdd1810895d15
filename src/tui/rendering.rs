use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::filters::SearchQuery;
use crate::models::{Conversation, Message, Sender};
use crate::utils::{format_date, strip_ansi_codes};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ASSISTANT: Color = Color::Rgb(245, 158, 11);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// What the current screen shows
pub enum ScreenView<'a> {
    List { conversations: &'a [&'a Conversation], selected_idx: usize },
    /// `conversation` is `None` when the opened id is not in the store
    Detail { conversation: Option<&'a Conversation>, scroll: u16 },
}

/// Everything needed to draw one frame
pub struct RenderState<'a> {
    pub screen: ScreenView<'a>,
    pub query: &'a SearchQuery,
    pub import_path: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
    pub total_count: usize,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    if let Some(path) = state.import_path {
        render_import_prompt(frame, layout.header_area, path);
    } else {
        match &state.screen {
            ScreenView::List { .. } => render_search_box(frame, layout.header_area, state.query),
            ScreenView::Detail { conversation, .. } => {
                render_title(frame, layout.header_area, *conversation)
            }
        }
    }

    match &state.screen {
        ScreenView::List { conversations, selected_idx } => render_conversation_list(
            frame,
            layout.main_area,
            conversations,
            *selected_idx,
            state.total_count,
        ),
        ScreenView::Detail { conversation: Some(conversation), scroll } => {
            render_thread(frame, layout.main_area, conversation, *scroll)
        }
        ScreenView::Detail { conversation: None, .. } => render_not_found(frame, layout.main_area),
    }

    render_status_bar(frame, layout.status_area, state);
}

fn bordered(title: String) -> Block<'static> {
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)).title(title)
}

fn render_search_box(frame: &mut Frame, area: Rect, query: &SearchQuery) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::raw(query.text.as_str()),
    ]))
    .block(bordered(format!(" Search ({}) ", query.scope.label())));

    frame.render_widget(paragraph, area);
}

fn render_import_prompt(frame: &mut Frame, area: Rect, path: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("File: ", Style::default().fg(MUTED)),
        Span::raw(path),
    ]))
    .block(bordered(" Import conversations (Enter: import, Esc: cancel) ".to_string()));

    frame.render_widget(paragraph, area);
}

fn render_title(frame: &mut Frame, area: Rect, conversation: Option<&Conversation>) {
    let line = match conversation {
        Some(conversation) => Line::from(vec![
            Span::styled(
                conversation.display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format_date(conversation.created_at.as_ref())),
                Style::default().fg(MUTED),
            ),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line).block(bordered(" Conversation ".to_string())), area);
}

fn render_conversation_list(
    frame: &mut Frame,
    area: Rect,
    conversations: &[&Conversation],
    selected_idx: usize,
    total_count: usize,
) {
    if conversations.is_empty() {
        let text = if total_count == 0 {
            "No conversations imported yet. Press Ctrl+O to import an export file."
        } else {
            "No conversations match your search."
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center)
            .block(bordered(" Conversations ".to_string()));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = conversations
        .iter()
        .map(|conversation| {
            ListItem::new(Line::from(vec![
                Span::raw(conversation.display_name()),
                Span::styled(
                    format!(
                        "  {} messages | {}",
                        conversation.message_count(),
                        format_date(conversation.created_at.as_ref())
                    ),
                    Style::default().fg(MUTED),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(bordered(format!(" Conversations ({}) ", conversations.len())))
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default().with_selected(Some(selected_idx));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Lines of the thread view: one header per message, its text, then attachments
pub fn thread_lines(conversation: &Conversation) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, message) in conversation.messages.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        push_message_lines(&mut lines, message);
    }
    lines
}

fn push_message_lines(lines: &mut Vec<Line<'static>>, message: &Message) {
    let sender_color = match message.sender {
        Sender::Human => ACCENT,
        Sender::Assistant => ASSISTANT,
    };
    lines.push(Line::from(vec![
        Span::styled(
            message.sender.display_label(),
            Style::default().fg(sender_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", format_date(message.created_at.as_ref())),
            Style::default().fg(MUTED),
        ),
    ]));

    for line in strip_ansi_codes(&message.text).lines() {
        lines.push(Line::from(line.to_string()));
    }

    for attachment in &message.attachments {
        lines.push(Line::from(Span::styled(
            format!("  📎 {}", strip_ansi_codes(&attachment.file_name)),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )));
        if let Some(content) = attachment.extracted_content.as_deref() {
            for line in strip_ansi_codes(content).lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", line),
                    Style::default().fg(MUTED),
                )));
            }
        }
    }
}

fn render_thread(frame: &mut Frame, area: Rect, conversation: &Conversation, scroll: u16) {
    let title = format!(" {} messages ", conversation.message_count());
    let paragraph = Paragraph::new(Text::from(thread_lines(conversation)))
        .block(bordered(title))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled("Conversation not found", Style::default().fg(ERROR))),
        Line::from(""),
        Line::from(Span::styled("Press Esc to go back", Style::default().fg(MUTED))),
    ])
    .alignment(Alignment::Center)
    .block(bordered(" Conversation ".to_string()));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let bar = Style::default().fg(BRIGHT).bg(BAR_BG);

    let (status_text, style) = if let Some(message) = state.status_message {
        let style = match message.message_type {
            MessageType::Success => bar.fg(ACCENT),
            MessageType::Error => bar.fg(ERROR),
            MessageType::Info => bar,
        };
        (format!(" {} ", message.text), style)
    } else if state.import_path.is_some() {
        (" Type a file path | Enter: import | Esc: cancel ".to_string(), bar)
    } else {
        let parts = match &state.screen {
            ScreenView::List { conversations, selected_idx } => {
                let mut parts = vec![];
                if conversations.len() < state.total_count {
                    let shown = conversations.len();
                    parts.push(format!("{}/{} conversations", shown, state.total_count));
                } else {
                    parts.push(format!("{} conversations", state.total_count));
                }
                if !conversations.is_empty() {
                    parts.push(format!("{}/{}", selected_idx + 1, conversations.len()));
                }
                parts.push("Enter: open".to_string());
                parts.push("Tab: search scope".to_string());
                parts.push("Ctrl+O: import".to_string());
                parts.push("Ctrl+C: quit".to_string());
                parts
            }
            ScreenView::Detail { .. } => vec![
                "Esc: back".to_string(),
                "↑/↓ PgUp/PgDn: scroll".to_string(),
                "Ctrl+O: import".to_string(),
                "Ctrl+C: quit".to_string(),
            ],
        };
        (format!(" {} ", parts.join(" | ")), bar)
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
