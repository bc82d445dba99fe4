//! Layout and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use reelview_core::{BrowserState, BrowserView, CatalogView, Section};
use reelview_model::Movie;

pub const APP_TITLE: &str = "Reelview";
pub const TAGLINE: &str = "Explore the most beloved films of all time.";
pub const SEARCH_PLACEHOLDER: &str = "Search movies...";
pub const LOADING_TEXT: &str = "Loading movies...";
pub const FOOTER_TEXT: &str =
    "Data source: Letterboxd Top 250. Posters and links belong to their respective owners.";

pub fn render(frame: &mut Frame, state: &BrowserState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, rows[0]);
    render_search(frame, rows[1], state.query());

    match state.view() {
        BrowserView::Loading => render_notice(
            frame,
            rows[2],
            LOADING_TEXT,
            Style::default().fg(Color::Blue),
        ),
        BrowserView::Failed(message) => render_notice(
            frame,
            rows[2],
            message,
            Style::default().fg(Color::Red),
        ),
        BrowserView::Ready(catalog) => render_sections(frame, rows[2], &catalog),
    }

    frame.render_widget(
        Paragraph::new(FOOTER_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Text::from(vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Cyan))),
    ]);
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        area,
    );
}

fn render_search(frame: &mut Frame, area: Rect, query: &str) {
    let content = if query.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(query)
    };
    frame.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search")
                .border_style(Style::default().fg(Color::Blue)),
        ),
        area,
    );

    let typed = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.right().saturating_sub(2);
    let cursor_x = area.x.saturating_add(1).saturating_add(typed).min(max_x);
    frame.set_cursor(cursor_x, area.y + 1);
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let padded = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .wrap(Wrap { trim: true }),
        padded[1],
    );
}

fn render_sections(frame: &mut Frame, area: Rect, catalog: &CatalogView<'_>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let sections = catalog.sections();
    for ((section, movies), column) in sections.iter().zip(columns.iter()) {
        let items: Vec<ListItem> = if movies.is_empty() {
            vec![ListItem::new(Span::styled(
                "Nothing here",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            movies.iter().map(|movie| movie_card(movie)).collect()
        };

        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(section_title(section, movies.len())),
            ),
            *column,
        );
    }
}

pub fn section_title(section: Section, count: usize) -> String {
    format!("{} ({})", section.title(), count)
}

pub fn movie_card(movie: &Movie) -> ListItem<'_> {
    ListItem::new(Text::from(card_lines(movie)))
}

/// One card: title, year when known, poster, link when known, then a
/// blank separator.
pub fn card_lines(movie: &Movie) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(5);

    let title = if movie.title().is_empty() {
        Span::styled("(untitled)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            movie.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(title));

    if let Some(year) = movie.year() {
        lines.push(Line::from(Span::styled(
            year,
            Style::default().fg(Color::Cyan),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled("poster ", Style::default().fg(Color::DarkGray)),
        if movie.has_poster() {
            Span::raw(movie.poster_url())
        } else {
            Span::styled(movie.poster_url(), Style::default().fg(Color::DarkGray))
        },
    ]));

    if let Some(link) = movie.link() {
        lines.push(Line::from(vec![
            Span::styled("link   ", Style::default().fg(Color::DarkGray)),
            Span::styled(link, Style::default().fg(Color::Blue)),
        ]));
    }

    lines.push(Line::default());
    lines
}
