//! # Screen Layouts
//!
//! Composes the components into the two screens: the browse grid and the
//! per-show detail view. Also owns the loading/error/empty treatments,
//! which mirror each other across screens.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::filters::GenreSelector;
use crate::core::genres::{genre_title, genre_titles};
use crate::core::state::{App, DetailState, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Pagination, SeasonView, ShowGrid, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    match app.screen {
        Screen::Browse => draw_browse(frame, app, tui),
        Screen::Detail => draw_detail(frame, app, tui),
    }
}

// ============================================================================
// Browse screen
// ============================================================================

fn draw_browse(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, filter_area, grid_area, pagination_area, help_area] =
        layout.areas(frame.area());

    let show_count = (!app.is_loading && app.error.is_none()).then(|| app.catalog.len());
    TitleBar::new(show_count, app.status_message.clone()).render(frame, title_area);

    draw_filter_line(frame, filter_area, app, tui);

    if app.is_loading {
        draw_message_view(frame, grid_area, "Loading podcasts...");
    } else if let Some(error) = &app.error {
        draw_error_view(
            frame,
            grid_area,
            &format!("Error occurred while fetching podcasts: {error}"),
        );
    } else {
        let page = app.visible_page();
        ShowGrid::new(&page, tui.selected_card).render(frame, grid_area);
        Pagination::new(page.page, page.total_pages).render(frame, pagination_area);
    }

    draw_help(
        frame,
        help_area,
        " / search   g genre   s sort   ←/→ page   ↑/↓ select   Enter open   r reset   q quit",
    );
}

fn draw_filter_line(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);

    let left = Line::from(vec![
        Span::styled("Filter: ", label_style),
        Span::styled(genre_label(app.filters.genre()), value_style),
        Span::styled("   Sort: ", label_style),
        Span::styled(app.filters.sort_key().label(), value_style),
        Span::raw("   "),
    ]);
    let left_width = left.width() as u16;

    let [left_area, search_area] =
        Layout::horizontal([Constraint::Length(left_width), Constraint::Min(10)]).areas(area);
    frame.render_widget(left, left_area);
    tui.search.render(frame, search_area);
}

/// Display label for the genre selector ("All Genres" or the genre title).
fn genre_label(selector: GenreSelector) -> String {
    match selector {
        GenreSelector::All => "All Genres".to_string(),
        GenreSelector::Id(id) => genre_title(id)
            .map(|t| t.to_string())
            .unwrap_or_else(|| format!("Genre {id}")),
    }
}

// ============================================================================
// Detail screen
// ============================================================================

fn draw_detail(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, body_area, help_area] = layout.areas(frame.area());

    frame.render_widget(
        Line::styled(
            "Podview / show details",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        title_area,
    );

    match app.detail.as_ref() {
        Some(detail) if detail.is_loading => {
            draw_message_view(frame, body_area, "Loading show details...");
        }
        Some(DetailState { error: Some(error), .. }) => {
            draw_error_view(frame, body_area, &format!("Error loading show details: {error}"));
        }
        Some(DetailState { show: Some(show), genres, selected_season, .. }) => {
            let layout = Layout::vertical([Length(9), Min(0)]);
            let [hero_area, season_area] = layout.areas(body_area);

            draw_hero(frame, hero_area, show, genres);
            SeasonView::new(show, *selected_season, &app.durations, &mut tui.season_view)
                .render(frame, season_area);
        }
        _ => {
            draw_message_view(frame, body_area, "Show not found.");
        }
    }

    draw_help(frame, help_area, " Esc back   ←/→ season   ↑/↓ scroll   q quit");
}

fn draw_hero(frame: &mut Frame, area: Rect, show: &crate::api::ShowDetail, genres: &[u32]) {
    let season_count = show.seasons.len();
    let episode_count = show.episode_count();

    let mut lines = vec![
        Line::styled(
            show.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            genre_titles(genres).join(" · "),
            Style::default().fg(Color::Cyan),
        ),
        Line::from(vec![
            Span::styled("Last Updated: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_date_long(&show.updated)),
            Span::styled("   ", Style::default()),
            Span::raw(format!(
                "{} Season{}, {} Episode{}",
                season_count,
                if season_count == 1 { "" } else { "s" },
                episode_count,
                if episode_count == 1 { "" } else { "s" }
            )),
        ]),
        Line::raw(""),
    ];
    for l in show.description.lines() {
        lines.push(Line::styled(l.to_string(), Style::default().fg(Color::Gray)));
    }

    let hero = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

// ============================================================================
// Shared views
// ============================================================================

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let error_paragraph = Paragraph::new(message)
        .block(Block::bordered().title("ERROR"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn draw_message_view(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Line::styled(text.to_string(), Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Convert an ISO date string into 'Month Day, Year' (en-US style).
fn format_date_long(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.with_timezone(&Utc).format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}
