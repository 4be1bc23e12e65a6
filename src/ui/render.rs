use crate::catalog::{Alien, ALIEN_X};
use crate::stats::AlienStats;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, selection_regions};
use crate::ui::sequencer::Screen;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, DIM_GREEN, FLASH_WHITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    OMNITRIX_GREEN, WARNING_RED,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let alien_name = app.selected_alien().map(|alien| alien.name.as_str());
    let header_widget = Header::new(app.screen(), alien_name, app.is_transitioning());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Selection => draw_selection(frame, app, body),
        Screen::Detail => draw_detail(frame, app, body),
        Screen::Special => draw_special(frame, app, body),
    }

    let footer_widget = Footer::new(app.screen(), app.notice());
    frame.render_widget(footer_widget.widget(footer), footer);

    draw_overlays(frame, app, area);
}

fn green() -> Style {
    Style::default().fg(OMNITRIX_GREEN)
}

fn muted() -> Style {
    Style::default().fg(MUTED_TEXT)
}

fn draw_selection(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let (hero, gallery) = selection_regions(body);

    let hero_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "THE OMNITRIX",
            green().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Unleash the Power Within",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled("────────", green())),
        Line::from(Span::styled("[ ALIEN TECHNOLOGY ]", muted())),
        Line::from(Span::styled(
            "Transform • Adapt • Overcome",
            muted().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(hero_lines).alignment(Alignment::Center),
        hero,
    );

    let [cards_area, gauge_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(gallery);
    let [list_area, preview_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .areas(cards_area);

    let highlighted = app.highlighted();
    let items: Vec<ListItem> = app
        .catalog()
        .iter()
        .enumerate()
        .map(|(index, alien)| {
            let is_highlighted = index == highlighted;
            let marker = if is_highlighted { "▸ " } else { "  " };
            let check = if app.selection() == Some(index) { " ✓" } else { "" };
            let style = if is_highlighted {
                green()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}. {} {}", index + 1, alien.icon, alien.name), style),
                Span::styled(format!("  {}", alien.category), muted()),
                Span::styled(check, green()),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .title(" SELECT YOUR ALIEN ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        list_area,
    );

    if let Some(alien) = app.highlighted_alien() {
        draw_preview(frame, app, alien, preview_area);
    }

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .gauge_style(Style::default().fg(OMNITRIX_GREEN).bg(DIM_GREEN))
        .ratio(app.scroll_progress().clamp(0.0, 1.0))
        .label(format!(
            "SCROLL {:>3}%",
            (app.scroll_progress() * 100.0).round() as u16
        ));
    frame.render_widget(gauge, gauge_area);
}

fn draw_preview(frame: &mut Frame<'_>, app: &App, alien: &Alien, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(alien.icon.clone(), Style::default())),
        Line::from(Span::styled(
            alien.name.to_uppercase(),
            green().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(alien.category.clone(), muted())),
        Line::from(""),
        Line::from(alien.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!("▶ {}  #{}", alien.video, app.media_generation()),
            muted().add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled("CLICK TO TRANSFORM (Enter)", green())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        area,
    );
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let Some(alien) = app.selected_alien() else {
        return;
    };
    let border = if app.overlays().materializing {
        green().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    let outer = Block::default().borders(Borders::ALL).border_style(border);
    let inner = outer.inner(body);
    frame.render_widget(outer, body);

    let [title_area, content_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", alien.icon, alien.name.to_uppercase()),
                green().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(alien.category.clone(), muted())),
        ])
        .alignment(Alignment::Center),
        title_area,
    );

    let [stats_area, abilities_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(content_area);

    let stats = AlienStats::for_alien(alien);
    let rows = Layout::vertical([Constraint::Length(3); 4]).split(stats_area);
    for ((label, value), row) in stats.rows().into_iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(format!(" {label} ")).borders(Borders::ALL))
            .gauge_style(Style::default().fg(OMNITRIX_GREEN).bg(DIM_GREEN))
            .percent(u16::from(value).min(100))
            .label(format!("{value}"));
        frame.render_widget(gauge, *row);
    }

    let mut lines = Vec::new();
    for ability in alien.abilities() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", ability.icon, ability.name),
            green().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(ability.description, muted())));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" ABILITIES ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        abilities_area,
    );
}

fn draw_special(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let briefing = app.briefing();

    if briefing.is_flashing() {
        frame.render_widget(Block::default().style(Style::default().bg(FLASH_WHITE)), body);
        return;
    }

    if let Some(text) = briefing.access_text() {
        let cursor = if app.animation_tick() % 2 == 0 { "█" } else { " " };
        let area = centered_rect(80, 20, body);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(text, green().add_modifier(Modifier::BOLD)),
                Span::styled(cursor, green()),
            ]))
            .alignment(Alignment::Center),
            area,
        );
        return;
    }

    if !briefing.content_visible() {
        return;
    }

    let border = if briefing.effect_active() {
        let color = if app.animation_tick() % 2 == 0 {
            OMNITRIX_GREEN
        } else {
            FLASH_WHITE
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            ALIEN_X.name,
            Style::default()
                .fg(FLASH_WHITE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(ALIEN_X.species, muted())),
        Line::from(""),
        Line::from(Span::styled(
            "CLASSIFIED OMNITRIX FILE",
            green().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("POWERS:", Style::default().fg(HEADER_TEXT))),
    ];
    lines.extend(
        ALIEN_X
            .powers
            .iter()
            .map(|power| Line::from(Span::styled(format!("  ◆ {power}"), green()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "WEAKNESS:",
        Style::default().fg(WARNING_RED),
    )));
    lines.push(Line::from(Span::styled(ALIEN_X.weakness, muted())));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" ⚠ RESTRICTED ")
                .borders(Borders::ALL)
                .border_style(border),
        ),
        body,
    );
}

fn draw_overlays(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let overlays = app.overlays();

    if overlays.flash {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(FLASH_WHITE)), area);
        return;
    }

    let caption = if overlays.transforming {
        "TRANSFORMING"
    } else if overlays.transform_back {
        "REVERTING"
    } else {
        return;
    };

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(DIM_GREEN)), area);
    let pulse = "◉".repeat((app.animation_tick() % 4) as usize + 1);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(pulse.clone(), green())),
            Line::from(Span::styled(
                caption,
                green().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(pulse, green())),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(DIM_GREEN)),
        centered_rect(60, 30, area),
    );
}
