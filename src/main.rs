mod app;
mod config;
mod event;
mod review;
mod session;
mod source;
mod speech;
mod ui;
mod vocab;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use app::App;
use event::{AppEvent, EventHandler};
use ui::components::goal_progress::GoalProgress;
use ui::components::review_alert::ReviewAlert;
use ui::components::sentence_card::SentenceCard;
use ui::components::status_bar::StatusBar;
use ui::components::word_modal::WordModal;
use ui::layout::StudyLayout;

rust_i18n::i18n!("locales", fallback = "en");

#[derive(Parser)]
#[command(
    name = "kelime",
    version,
    about = "Terminal English sentence trainer with spaced review"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "UI language (en, tr)")]
    language: Option<String>,

    #[arg(short, long, help = "Monthly word goal")]
    goal: Option<u32>,

    #[arg(long, help = "Skip the quote API and study the built-in sentences")]
    offline: bool,
}

fn main() -> Result<()> {
    // Logger goes up before the alternate screen; RUST_LOG=kelime=debug
    // is the switch for fetch diagnostics.
    env_logger::init();
    let cli = Cli::parse();

    let events = EventHandler::new(Duration::from_millis(250));
    let mut app = App::new(events.sender(), cli.offline);

    if let Some(goal) = cli.goal {
        app.config.monthly_goal = goal.max(1);
    }
    if let Some(language) = cli.language {
        if config::UI_LANGUAGES.contains(&language.as_str()) {
            app.config.language = language;
        }
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }
    rust_i18n::set_locale(&app.config.language);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Sentences(batch) => app.on_sentences(batch),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.selected_word.is_some() {
        handle_modal_key(app, key);
    } else {
        handle_study_key(app, key);
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('y') | KeyCode::Enter => app.mark_selected(true),
        KeyCode::Char('2') | KeyCode::Char('n') => app.mark_selected(false),
        KeyCode::Esc => app.close_modal(),
        _ => {}
    }
}

fn handle_study_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => app.advance_sentence(),
        KeyCode::Left | KeyCode::Char('p') => app.retreat_sentence(),
        KeyCode::Char('t') | KeyCode::Enter => app.toggle_translation(),
        KeyCode::Char('s') => app.speak_current(),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch as usize - '1' as usize;
            app.select_word(index);
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    if app.deck.current().is_none() {
        render_loading(frame, app);
        return;
    }

    render_study(frame, app);

    if let Some(ref word) = app.selected_word {
        let modal_area = ui::layout::centered_rect(40, 40, area);
        frame.render_widget(WordModal::new(word, app.theme), modal_area);
    }
}

fn render_loading(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let centered = ui::layout::centered_rect(40, 20, area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            t!("study.loading").into_owned(),
            Style::default().fg(colors.text_muted()),
        )),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), centered);
}

fn render_study(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let due_count = app.tracker.due_count();

    let layout = StudyLayout::new(area, due_count > 0);

    frame.render_widget(
        StatusBar::new(&app.progress, app.config.monthly_goal, due_count, app.theme),
        layout.header,
    );

    if let Some(alert_area) = layout.alert {
        frame.render_widget(ReviewAlert::new(due_count, app.theme), alert_area);
    }

    // `current()` was checked by the caller; the unwrap-free guard keeps
    // the render total even if the deck shifts between frames.
    let Some(sentence) = app.deck.current() else {
        return;
    };

    frame.render_widget(
        GoalProgress::new(
            app.deck.position(),
            &sentence.topic,
            app.progress.goal_ratio(app.config.monthly_goal),
            app.progress.monthly_words,
            app.config.monthly_goal,
            app.theme,
        ),
        layout.progress,
    );

    frame.render_widget(
        SentenceCard::new(
            sentence,
            &app.tracker,
            app.show_translation,
            app.config.speech_enabled && app.speech.is_available(),
            app.speech.is_playing(),
            app.theme,
        ),
        layout.card,
    );

    let mut footer_spans = vec![Span::styled(
        format!(" {}", t!("footer.study")),
        Style::default().fg(colors.text_muted()),
    )];
    if app.fetch_in_flight {
        footer_spans.push(Span::styled(
            format!("  {}", t!("study.loading_more")),
            Style::default().fg(colors.accent()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(footer_spans)), layout.footer);
}
