use jobhub_core::{AppViewModel, CueState, FilterView, ListingsView, PostingCard, ScreenView};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use super::constants::*;
use super::layout::{landing_layout, listings_layout, place_cards, HitMap, Target};
use super::Focus;

/// Draw the current view and return the clickable regions of this frame.
pub fn render(frame: &mut Frame, view: &AppViewModel, focus: Focus) -> HitMap {
    match &view.screen {
        ScreenView::Landing => render_landing(frame),
        ScreenView::Listings(listings) => render_listings(frame, listings, focus),
    }
}

fn render_landing(frame: &mut Frame) -> HitMap {
    let layout = landing_layout(frame.area());
    let mut hits = HitMap::default();

    let title = Line::from(vec![
        Span::styled("Job", Style::new().add_modifier(Modifier::BOLD)),
        Span::styled(
            "hub",
            Style::new().fg(COLOR_ORANGE).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), layout.title);

    frame.render_widget(button(OPEN_LISTINGS_LABEL, true), layout.open_listings);
    hits.push(layout.open_listings, Target::OpenListings);

    frame.render_widget(help_line(LANDING_HELP, None), layout.help);
    hits
}

fn render_listings(frame: &mut Frame, view: &ListingsView, focus: Focus) -> HitMap {
    let layout = listings_layout(frame.area());
    let mut hits = HitMap::default();

    frame.render_widget(button(BACK_LABEL, false), layout.back);
    hits.push(layout.back, Target::Back);

    let title = Line::from(vec![
        Span::styled("Job ", Style::new().add_modifier(Modifier::BOLD)),
        Span::styled(
            "Listings",
            Style::new().fg(COLOR_ORANGE).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), layout.title);

    render_search(frame, layout.search, &view.search, focus);
    hits.push(layout.search, Target::Search);

    for (filter, area) in view.filters.iter().zip(layout.filters) {
        frame.render_widget(dropdown(filter), area);
        hits.push(area, Target::Filter(filter.slot));
    }

    let list_block = Block::new()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(COLOR_BORDER));
    let inner = list_block.inner(layout.list);
    frame.render_widget(list_block, layout.list);

    if view.loading {
        frame.render_widget(
            Paragraph::new("Loading listings...")
                .style(Style::new().fg(COLOR_MUTED))
                .alignment(Alignment::Center),
            inner,
        );
    }

    let placement = place_cards(inner, view.cards.len(), view.selected);
    hits.columns = placement.columns;
    for (index, area) in placement.cards {
        let card = &view.cards[index];
        render_card(frame, area, card, view.selected == Some(index));
        hits.push(area, Target::Card(index));
    }
    hits.push(layout.list, Target::ListRegion);

    if view.show_load_more {
        frame.render_widget(button(LOAD_MORE_LABEL, false), layout.load_more);
        hits.push(layout.load_more, Target::LoadMore);
    }

    let status = format!(
        "{} of {}{}",
        view.cards.len(),
        view.total,
        if view.cue == CueState::Playing { "  ♪" } else { "" }
    );
    let help = match focus {
        Focus::Search => SEARCH_HELP,
        Focus::Cards => LISTINGS_HELP,
    };
    frame.render_widget(help_line(help, Some(status)), layout.help);
    hits
}

fn render_search(frame: &mut Frame, area: Rect, text: &str, focus: Focus) {
    let focused = focus == Focus::Search;
    let border = if focused { COLOR_ORANGE } else { COLOR_BORDER };
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border));
    let content = if text.is_empty() {
        Line::styled(format!("⌕ {SEARCH_PLACEHOLDER}"), Style::new().fg(COLOR_MUTED))
    } else {
        Line::from(format!("⌕ {text}"))
    };
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused {
        let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let offset = typed.saturating_add(2);
        frame.set_cursor_position((
            inner.x.saturating_add(offset).min(inner.right().saturating_sub(1)),
            inner.y,
        ));
    }
}

fn dropdown(filter: &FilterView) -> Paragraph<'static> {
    let style = if filter.is_placeholder {
        Style::new().fg(COLOR_WHITE).bg(COLOR_BLACK)
    } else {
        Style::new().fg(COLOR_ORANGE).bg(COLOR_BLACK)
    };
    Paragraph::new(format!("{} ▾", filter.label))
        .style(style)
        .block(Block::new().borders(Borders::ALL).border_style(style))
}

fn render_card(frame: &mut Frame, area: Rect, card: &PostingCard, selected: bool) {
    let border = if selected { COLOR_ORANGE } else { COLOR_BORDER };
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [date_area, body_area] =
        Layout::horizontal([Constraint::Length(DATE_COLUMN_WIDTH), Constraint::Min(1)])
            .areas(inner);

    let bold = Style::new().add_modifier(Modifier::BOLD);
    let date = vec![
        Line::styled(card.date_head.clone(), bold.fg(COLOR_ORANGE)),
        Line::styled(card.date_tail.clone(), bold),
    ];
    frame.render_widget(Paragraph::new(date).alignment(Alignment::Center), date_area);

    let body = vec![
        Line::styled(card.position.clone(), bold),
        Line::from(card.company.clone()),
        Line::from(card.location.clone()),
    ];
    frame.render_widget(Paragraph::new(body), body_area);
}

fn button(label: &'static str, accent: bool) -> Paragraph<'static> {
    let bg = if accent { COLOR_ORANGE } else { COLOR_BLACK };
    let style = Style::new().fg(COLOR_WHITE).bg(bg);
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::new().borders(Borders::ALL).border_style(style))
}

fn help_line(help: &'static str, status: Option<String>) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(help, Style::new().fg(COLOR_MUTED))];
    if let Some(status) = status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status, Style::new().fg(COLOR_ORANGE)));
    }
    Paragraph::new(Line::from(spans))
}
