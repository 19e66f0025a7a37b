use std::io;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

use gala_terminal::animation::{self, ViewTimer};
use gala_terminal::config::Settings;
use gala_terminal::csr::{group_thousands, impact_metrics, wellness_services};
use gala_terminal::engagement::{EngagementTab, badge_icon, leaderboard};
use gala_terminal::filters::{star_rating, team_matches, top_scorers};
use gala_terminal::models::{Match, MatchStatus};
use gala_terminal::rankings::{RankingTab, league_rankings, player_rankings, team_rankings};
use gala_terminal::seed::seed_app_data;
use gala_terminal::standings::{podium, table_summary};
use gala_terminal::state::{AppState, Delta, Page, REACTIONS, apply_delta};

struct App {
    state: AppState,
    settings: Settings,
    should_quit: bool,
    delta_tx: mpsc::Sender<Delta>,
    timer: Option<ViewTimer>,
    timer_page: Option<Page>,
}

impl App {
    fn new(state: AppState, settings: Settings, delta_tx: mpsc::Sender<Delta>) -> Self {
        let mut app = Self {
            state,
            settings,
            should_quit: false,
            delta_tx,
            timer: None,
            timer_page: None,
        };
        app.sync_timer();
        app
    }

    /// One background timer at a time, owned by whichever page is showing.
    fn sync_timer(&mut self) {
        let page = self.state.page;
        if self.timer_page == Some(page) && self.timer.is_some() {
            return;
        }
        // Join the outgoing timer before its replacement starts.
        self.timer = None;
        let tx = self.delta_tx.clone();
        self.timer = match page {
            Page::Home if self.state.live_league_matches().len() > 1 => Some(
                animation::start_ticker(self.settings.ticker_interval, tx),
            ),
            Page::Match => Some(animation::start_cheer_meter(
                self.settings.cheer_interval,
                tx,
            )),
            Page::Csr => Some(animation::start_counter_ramp(
                self.settings.counter_duration,
                self.settings.counter_steps,
                tx,
            )),
            _ => None,
        };
        self.timer_page = Some(page);
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.comment_draft.is_some() {
            self.on_comment_key(key);
            return;
        }
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_overlay = false;
            } else if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = true,
            KeyCode::Char(c @ '1'..='6') if self.state.page == Page::Match => {
                let idx = c as usize - '1' as usize;
                self.state.react(idx);
            }
            KeyCode::Char(c @ '0'..='9') => {
                if let Some(page) = page_for_key(c) {
                    self.state.set_page(page);
                }
            }
            KeyCode::Char('h') => self.state.set_page(Page::Home),
            KeyCode::Char('l') => self.state.cycle_league(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Enter => self.state.activate(),
            KeyCode::Char('b') | KeyCode::Esc => self.state.back(),
            KeyCode::Char('s') => self.state.cycle_sport_filter(),
            KeyCode::Char('f') => self.state.cycle_view_mode(),
            KeyCode::Char('+') if self.state.page == Page::Match => {
                self.state.adjust_score(1, 0)
            }
            KeyCode::Char('=') if self.state.page == Page::Match => {
                self.state.adjust_score(0, 1)
            }
            KeyCode::Char('-') if self.state.page == Page::Match => {
                self.state.adjust_score(-1, 0)
            }
            KeyCode::Char('_') if self.state.page == Page::Match => {
                self.state.adjust_score(0, -1)
            }
            KeyCode::Char('L') if self.state.page == Page::Feed => {
                self.state.like_selected_post()
            }
            KeyCode::Char('c') if self.state.page == Page::Feed => self.state.begin_comment(),
            KeyCode::Char('v') if self.state.page == Page::Engagement => {
                self.state.vote_selected()
            }
            KeyCode::Char('p') if self.state.page == Page::Engagement => {
                self.state.predict_selected()
            }
            _ => {}
        }
    }

    fn on_comment_key(&mut self, key: KeyEvent) {
        let Some(draft) = self.state.comment_draft.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.state.comment_draft = None,
            KeyCode::Backspace => {
                draft.pop();
            }
            KeyCode::Char(c) => draft.push(c),
            KeyCode::Enter => self.state.submit_draft(),
            _ => {}
        }
    }
}

fn page_for_key(c: char) -> Option<Page> {
    let page = match c {
        '1' => Page::Home,
        '2' => Page::Feed,
        '3' => Page::Match,
        '4' => Page::Results,
        '5' => Page::Rankings,
        '6' => Page::Teams,
        '7' => Page::Players,
        '8' => Page::Table,
        '9' => Page::Engagement,
        '0' => Page::Csr,
        _ => return None,
    };
    Some(page)
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let settings = Settings::from_env();
    let data = seed_app_data()?;
    let state = AppState::new(data, &settings);

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend).context("create terminal")?;

    let (tx, rx) = mpsc::channel();
    let mut app = App::new(state, settings, tx);
    let res = run_app(&mut terminal, &mut app, rx);
    app.timer = None;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = app.settings.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
            app.sync_timer();
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let state = &app.state;
    let body = chunks[1];
    match state.page {
        Page::Home => render_home(frame, body, state),
        Page::Feed => render_feed(frame, body, state),
        Page::Match => render_match(frame, body, state),
        Page::Results => render_results(frame, body, state),
        Page::Rankings => render_rankings(frame, body, state),
        Page::Teams => render_teams(frame, body, state),
        Page::Players => render_players(frame, body, state),
        Page::Table => render_table(frame, body, state),
        Page::Engagement => render_engagement(frame, body, state),
        Page::Csr => render_csr(frame, body, state),
    }

    let console = Paragraph::new(console_text(state))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(state)).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[3]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let league = state
        .current_league()
        .map(|l| l.name.as_str())
        .unwrap_or("No league");
    let sport = state.sport_filter().map(|s| s.label()).unwrap_or("All Sports");
    let line1 = format!("  GALA | {league} | {}", state.page.label());
    let line2 = if state.sport_filter_applies() {
        format!("  Sport: {sport}")
    } else {
        String::new()
    };
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    let page_keys = match state.page {
        Page::Home => "Enter Match | s Sport",
        Page::Feed => "L Like | c Comment",
        Page::Match => "1-6 React | +/- Home | =/_ Away",
        Page::Results => "Enter Match | s Sport | f Window",
        Page::Rankings => "f Tab | s Sport",
        Page::Teams => "Enter Profile",
        Page::Players => "Enter Profile | f View",
        Page::Table => "s Sport",
        Page::Engagement => "f Tab | v Vote | p Predict",
        Page::Csr => "",
    };
    format!("1-0 Pages | l League | j/k Move | b Back | {page_keys} | ? Help | q Quit")
}

fn empty_text(frame: &mut Frame, area: Rect, text: &str) {
    let empty = Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(empty, area);
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

/// Renders `rows` one line each, scrolled so the selection stays visible.
fn render_list(frame: &mut Frame, area: Rect, rows: &[String], selected: usize) {
    if area.height == 0 {
        return;
    }
    let (start, end) = visible_range(selected, rows.len(), area.height as usize);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + i as u16,
            width: area.width,
            height: 1,
        };
        render_cell_text(frame, row_area, &rows[idx], row_style(idx == selected));
    }
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let text_area = Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(text.to_string()).style(style);
    frame.render_widget(paragraph, text_area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn match_line(state: &AppState, m: &Match) -> String {
    let (home, away) = state.data.match_teams(m);
    let home = home.map(|t| t.name.as_str()).unwrap_or("?");
    let away = away.map(|t| t.name.as_str()).unwrap_or("?");
    let clock = match m.status {
        MatchStatus::Live => format!("LIVE {}", m.time),
        MatchStatus::Scheduled => m.time.clone(),
        other => other.label().to_string(),
    };
    format!(
        "{:<10} {:<10} {} {}-{} {}  [{} · {}]",
        clock,
        m.sport.label(),
        home,
        m.home_score,
        m.away_score,
        away,
        m.pitch,
        m.date
    )
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(area);

    let live = state.live_league_matches();
    let ticker = match live.get(state.ticker_index.min(live.len().saturating_sub(1))) {
        Some(m) => format!("LIVE NOW  {}", match_line(state, m)),
        None => "No live matches right now".to_string(),
    };
    let ticker = Paragraph::new(ticker)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().title("Ticker").borders(Borders::ALL));
    frame.render_widget(ticker, sections[0]);

    let fixtures = state.home_fixtures();
    let block = Block::default().title("Fixtures").borders(Borders::ALL);
    let inner = block.inner(sections[1]);
    frame.render_widget(block, sections[1]);
    if fixtures.is_empty() {
        empty_text(frame, inner, "No fixtures for this sport");
    } else {
        let rows: Vec<String> = fixtures.iter().map(|m| match_line(state, m)).collect();
        render_list(frame, inner, &rows, state.selected);
    }

    let scorers = top_scorers(state.current_league_players(), 3)
        .into_iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {} ({}) {} goals", i + 1, p.name, p.team, p.goals))
        .collect::<Vec<_>>()
        .join("\n");
    let scorers = Paragraph::new(scorers)
        .block(Block::default().title("Top Scorers").borders(Borders::ALL));
    frame.render_widget(scorers, sections[2]);
}

fn render_feed(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(6)])
        .split(area);

    let posts = state.data.social_posts();
    if posts.is_empty() {
        empty_text(frame, sections[0], "No posts yet");
        return;
    }
    let rows: Vec<String> = posts
        .iter()
        .map(|p| {
            let heart = if state.liked_posts.contains(&p.id) { "♥" } else { "♡" };
            format!(
                "{:<16} {:<40} {heart} {}  💬 {}  {}",
                p.author, p.content, p.likes, p.comments, p.timestamp
            )
        })
        .collect();
    render_list(frame, sections[0], &rows, state.selected);

    let mut detail = Vec::new();
    if let Some(post) = state.selected_post() {
        detail.push(post.content.clone());
        if let Some(echo) = state.comment_echo.get(&post.id) {
            detail.extend(echo.iter().map(|c| format!("  you: {c}")));
        }
    }
    if let Some(draft) = state.comment_draft.as_deref() {
        detail.push(format!("> {draft}_"));
    }
    let detail = Paragraph::new(detail.join("\n"))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Post").borders(Borders::ALL));
    frame.render_widget(detail, sections[1]);
}

fn render_match(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(m) = state.selected_match() else {
        empty_text(frame, area, "Match not found");
        return;
    };
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let (home, away) = state.data.match_teams(m);
    let home_name = home.map(|t| t.name.as_str()).unwrap_or("?");
    let away_name = away.map(|t| t.name.as_str()).unwrap_or("?");
    let score = format!(
        "{home_name}  {} - {}  {away_name}\n{} · {} · {} · {}",
        m.home_score,
        m.away_score,
        m.status.label(),
        m.time,
        m.venue,
        m.pitch
    );
    let score = Paragraph::new(score)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(score, sections[0]);

    let cheer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(sections[1]);
    let home_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("{home_name} {:.0}%", state.cheer.home))
        .percent(state.cheer.home.round().clamp(0.0, 100.0) as u16);
    let away_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .label(format!("{away_name} {:.0}%", state.cheer.away))
        .percent(state.cheer.away.round().clamp(0.0, 100.0) as u16);
    frame.render_widget(home_gauge, cheer[0]);
    frame.render_widget(away_gauge, cheer[1]);

    let reactions: Vec<String> = REACTIONS
        .iter()
        .enumerate()
        .map(|(i, (emoji, _))| format!("{} {emoji} {}", i + 1, m.reaction_count(emoji)))
        .collect();
    let reactions = Paragraph::new(reactions.join("   "))
        .block(Block::default().title("Fan Reactions").borders(Borders::ALL));
    frame.render_widget(reactions, sections[2]);

    let commentary = if m.commentary.is_empty() {
        "No commentary yet".to_string()
    } else {
        m.commentary
            .iter()
            .map(|c| format!("{:>4}  {}", c.time, c.text))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let commentary = Paragraph::new(commentary)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Commentary").borders(Borders::ALL));
    frame.render_widget(commentary, sections[3]);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let board = state.results_board();
    let title = format!("Results · {}", state.date_window.label());
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if board.is_empty() {
        empty_text(frame, inner, "No matches in this window");
        return;
    }
    let rows: Vec<String> = state
        .results_rows()
        .into_iter()
        .map(|m| match_line(state, m))
        .collect();
    render_list(frame, inner, &rows, state.selected);
}

fn render_rankings(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows: Vec<String> = match state.ranking_tab {
        RankingTab::Leagues => league_rankings(state.data.leagues())
            .into_iter()
            .map(|r| {
                format!(
                    "#{:<3} {:<28} {:.1}  {} teams",
                    r.position, r.entry.name, r.entry.rating, r.entry.total_teams
                )
            })
            .collect(),
        RankingTab::Teams => team_rankings(
            state.data.teams(),
            &state.league_id,
            state.sport_filter().map(|s| s.label()),
        )
        .into_iter()
        .map(|r| {
            format!(
                "#{:<3} {:<20} {:<12} {:.1}",
                r.position,
                r.entry.name,
                r.entry.sport.label(),
                r.entry.rating
            )
        })
        .collect(),
        RankingTab::Players => player_rankings(state.data.players(), &state.league_id)
            .into_iter()
            .map(|r| {
                format!(
                    "#{:<3} {:<20} {:<16} {:.1}",
                    r.position, r.entry.name, r.entry.team, r.entry.rating
                )
            })
            .collect(),
    };
    let block = Block::default()
        .title(format!("Rankings · {}", state.ranking_tab.label()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if rows.is_empty() {
        empty_text(frame, inner, "Nothing to rank");
    } else {
        render_list(frame, inner, &rows, state.selected);
    }
}

fn render_teams(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(team) = state.team_profile.as_deref().and_then(|id| state.data.team(id)) {
        let mut lines = vec![
            format!("{} · {}", team.name, team.sport.label()),
            format!(
                "W{} D{} L{}  GF {} GA {}  Pts {}  Rating {:.1}",
                team.wins,
                team.draws,
                team.losses,
                team.goals_for,
                team.goals_against,
                team.points,
                team.rating
            ),
            format!("Roster: {}", team.roster.join(", ")),
            String::new(),
        ];
        lines.extend(
            team_matches(state.data.matches(), &team.id)
                .into_iter()
                .map(|m| match_line(state, m)),
        );
        let profile = Paragraph::new(lines.join("\n"))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Team").borders(Borders::ALL));
        frame.render_widget(profile, area);
        return;
    }

    let teams = state.current_league_teams();
    if teams.is_empty() {
        empty_text(frame, area, "No teams in this league");
        return;
    }
    let rows: Vec<String> = teams
        .iter()
        .map(|t| {
            format!(
                "{:<20} {:<12} {} pts  {}W {}D {}L",
                t.name,
                t.sport.label(),
                t.points,
                t.wins,
                t.draws,
                t.losses
            )
        })
        .collect();
    render_list(frame, area, &rows, state.selected);
}

fn render_players(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(player) = state
        .player_profile
        .as_deref()
        .and_then(|id| state.data.players().iter().find(|p| p.id == id))
    {
        let stars = "★".repeat(star_rating(player) as usize);
        let lines = [
            format!("{} · {} · {}", player.name, player.position, player.team),
            format!(
                "Goals {}  Assists {}  MVP votes {}  {stars}",
                player.goals, player.assists, player.mvp_votes
            ),
            player.bio.clone(),
        ];
        let profile = Paragraph::new(lines.join("\n"))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Player").borders(Borders::ALL));
        frame.render_widget(profile, area);
        return;
    }

    let players = state.player_rows();
    let block = Block::default()
        .title(state.player_view.label())
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if players.is_empty() {
        empty_text(frame, inner, "No players match");
        return;
    }
    let rows: Vec<String> = players
        .iter()
        .map(|p| {
            let fav = if p.is_fan_favorite { "♥" } else { " " };
            format!(
                "{fav} {:<18} {:<16} G{:<3} A{:<3} MVP {}",
                p.name, p.team, p.goals, p.assists, p.mvp_votes
            )
        })
        .collect();
    render_list(frame, inner, &rows, state.selected);
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let rows = state.table_rows();
    let summary = table_summary(rows.iter().map(|r| r.team));
    let podium_line = podium(&rows)
        .iter()
        .map(|r| format!("{}. {}", r.position, r.team.name))
        .collect::<Vec<_>>()
        .join("   ");
    let top = format!(
        "{podium_line}\n{} teams · {} goals · {} games",
        summary.team_count, summary.total_goals, summary.total_games
    );
    frame.render_widget(Paragraph::new(top), sections[0]);

    let header = format!(
        "{:<4}{:<20}{:>4}{:>4}{:>4}{:>4}{:>5}{:>5}{:>5}{:>6}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    render_cell_text(
        frame,
        sections[1],
        &header,
        Style::default().add_modifier(Modifier::BOLD),
    );

    if rows.is_empty() {
        empty_text(frame, sections[2], "No teams for this sport");
        return;
    }
    let lines: Vec<String> = rows
        .iter()
        .map(|r| {
            format!(
                "{:<4}{:<20}{:>4}{:>4}{:>4}{:>4}{:>5}{:>5}{:>+5}{:>6}",
                r.position,
                r.team.name,
                r.played,
                r.team.wins,
                r.team.draws,
                r.team.losses,
                r.team.goals_for,
                r.team.goals_against,
                r.goal_difference,
                r.team.points
            )
        })
        .collect();
    render_list(frame, sections[2], &lines, state.selected);
}

fn render_engagement(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows: Vec<String> = match state.engagement_tab {
        EngagementTab::Leaderboard => leaderboard(state.data.fan_leaderboard())
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let badges: String = e.badges.iter().map(|b| badge_icon(b)).collect();
                format!("{}. {:<18} {:>6} pts  {badges}", i + 1, e.name, e.points)
            })
            .collect(),
        EngagementTab::Polls => state
            .poll_rows()
            .into_iter()
            .filter_map(|(poll_id, idx)| {
                let poll = state.polls.polls.iter().find(|p| p.id == poll_id)?;
                let option = poll.options.get(idx)?;
                let pct = poll.percentages().get(idx).copied().unwrap_or(0);
                let mark = if state.polls.choice(&poll_id) == Some(idx) { "✓" } else { " " };
                let question = if idx == 0 { poll.question.as_str() } else { "" };
                Some(format!(
                    "{:<34} {mark} {:<40} {:>3}% ({})",
                    question, option.name, pct, option.votes
                ))
            })
            .collect(),
        EngagementTab::Predictions => state
            .prediction_rows()
            .into_iter()
            .map(|m| {
                let pick = state
                    .predictions
                    .get(&m.id)
                    .map(|p| p.winner.label())
                    .unwrap_or("-");
                format!("{}  → {pick}", match_line(state, m))
            })
            .collect(),
        EngagementTab::Challenges => state
            .challenges
            .iter()
            .map(|c| {
                format!(
                    "{:<20} {}/{} ({}%)  {}",
                    c.title,
                    c.progress,
                    c.total,
                    c.progress_pct(),
                    c.reward
                )
            })
            .collect(),
    };
    let block = Block::default()
        .title(format!("Fan Zone · {}", state.engagement_tab.label()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if rows.is_empty() {
        empty_text(frame, inner, "Nothing here yet");
    } else {
        render_list(frame, inner, &rows, state.selected);
    }
}

fn render_csr(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(area);

    let metrics = impact_metrics(&state.csr_display);
    let gauges = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 4])
        .split(sections[0]);
    for (metric, slot) in metrics.iter().zip(gauges.iter()) {
        let value = if metric.currency {
            format!("₹{}", group_thousands(metric.value))
        } else {
            group_thousands(metric.value)
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .label(format!("{}: {value}", metric.title))
            .percent(metric.progress_pct().min(100) as u16);
        frame.render_widget(gauge, *slot);
    }

    let services = wellness_services(&state.data.csr_stats())
        .iter()
        .map(|s| format!("{:<24} {:>5} participants  {}", s.title, s.participants, s.description))
        .collect::<Vec<_>>()
        .join("\n");
    let services = Paragraph::new(services)
        .block(Block::default().title("Wellness Services").borders(Borders::ALL));
    frame.render_widget(services, sections[1]);
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Gala Terminal - Help",
        "",
        "Global:",
        "  1-9, 0       Pages (Home .. Wellness)",
        "  l            Next league",
        "  j/k or ↑/↓   Move",
        "  Enter        Open match / profile",
        "  b / Esc      Back",
        "  s            Cycle sport filter",
        "  f            Cycle view / tab / window",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Match Center:",
        "  1-6          React",
        "  + / -        Home score",
        "  = / _        Away score",
        "",
        "Feed:  L Like | c Comment",
        "Fan Zone:  v Vote | p Predict",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
