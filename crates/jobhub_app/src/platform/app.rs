use std::io::{self, Stdout};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use jobhub_core::{update, AppState, AppViewModel, FilterSlot, Msg, ScreenView};
use jobhub_logging::{jobhub_info, jobhub_warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::layout::{HitMap, Target};
use super::ui::{render, Focus};

/// Input poll interval; also bounds how late a finished cue is noticed.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match config::load(Path::new(config::CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(Path::new(logging::LOG_FILENAME), config.log_level());
    if let Some(err) = config_error {
        jobhub_warn!("Using default config: {}", err);
    }
    jobhub_info!("Starting jobhub_app against {}", config.endpoint);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(&config, msg_tx);

    let mut terminal = setup_terminal()?;
    let result = App::new(runner).run(&mut terminal, &msg_rx);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

struct App {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    focus: Focus,
    hits: HitMap,
    quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            runner,
            focus: Focus::default(),
            hits: HitMap::default(),
            quit: false,
        }
    }

    fn run(
        mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        msg_rx: &mpsc::Receiver<Msg>,
    ) -> anyhow::Result<()> {
        let mut needs_redraw = true;
        while !self.quit {
            if needs_redraw {
                terminal.draw(|frame| self.hits = render::render(frame, &self.view, self.focus))?;
                needs_redraw = false;
            }

            while let Ok(msg) = msg_rx.try_recv() {
                needs_redraw |= self.dispatch_msg(msg);
            }
            if self.runner.take_cue_finished() {
                needs_redraw |= self.dispatch_msg(Msg::CueFinished);
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let focus_before = self.focus;
                        let msg = self.map_key(key);
                        needs_redraw |= self.dispatch_msg(msg) || focus_before != self.focus;
                    }
                    Event::Mouse(mouse) => {
                        let focus_before = self.focus;
                        let msg = self.map_mouse(mouse);
                        needs_redraw |= self.dispatch_msg(msg) || focus_before != self.focus;
                    }
                    Event::Resize(..) => needs_redraw = true,
                    _ => {}
                }
            }
        }
        jobhub_info!("Exiting jobhub_app");
        Ok(())
    }

    /// Runs one message through the core; returns whether the view changed.
    fn dispatch_msg(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        if was_dirty {
            self.view = state.view();
        }
        self.state = state;
        if self.view.screen.listings().is_none() {
            self.focus = Focus::Cards;
        }
        self.runner.enqueue(effects);
        was_dirty
    }

    fn map_key(&mut self, key: KeyEvent) -> Msg {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Msg::NoOp;
        }

        match &self.view.screen {
            ScreenView::Landing => match key.code {
                KeyCode::Enter | KeyCode::Char('o') => Msg::ListingsOpened,
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.quit = true;
                    Msg::NoOp
                }
                _ => Msg::NoOp,
            },
            ScreenView::Listings(listings) if self.focus == Focus::Search => {
                let mut search = listings.search.clone();
                match key.code {
                    KeyCode::Char(ch) => {
                        search.push(ch);
                        Msg::SearchChanged(search)
                    }
                    KeyCode::Backspace => {
                        search.pop();
                        Msg::SearchChanged(search)
                    }
                    KeyCode::Enter | KeyCode::Esc => {
                        self.focus = Focus::Cards;
                        Msg::NoOp
                    }
                    _ => Msg::NoOp,
                }
            }
            ScreenView::Listings(_) => {
                let columns = self.hits.columns.max(1) as isize;
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => Msg::SelectionMoved { delta: -columns },
                    KeyCode::Down | KeyCode::Char('j') => Msg::SelectionMoved { delta: columns },
                    KeyCode::Left | KeyCode::Char('h') => Msg::SelectionMoved { delta: -1 },
                    KeyCode::Right | KeyCode::Char('l') => Msg::SelectionMoved { delta: 1 },
                    KeyCode::Enter | KeyCode::Char(' ') => Msg::SelectedActivated,
                    KeyCode::Char('m') => Msg::LoadMoreClicked,
                    KeyCode::Char('/') => {
                        self.focus = Focus::Search;
                        Msg::NoOp
                    }
                    KeyCode::Char('1') => Msg::FilterCycled(FilterSlot::Date),
                    KeyCode::Char('2') => Msg::FilterCycled(FilterSlot::Location),
                    KeyCode::Char('3') => Msg::FilterCycled(FilterSlot::Title),
                    KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => Msg::BackClicked,
                    KeyCode::Char('q') => {
                        self.quit = true;
                        Msg::NoOp
                    }
                    _ => Msg::NoOp,
                }
            }
        }
    }

    fn map_mouse(&mut self, mouse: MouseEvent) -> Msg {
        let target = self.hits.target_at(mouse.column, mouse.row);
        let columns = self.hits.columns.max(1) as isize;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if target != Some(Target::Search) {
                    self.focus = Focus::Cards;
                }
                target_msg(target, &mut self.focus)
            }
            MouseEventKind::ScrollDown if is_list(target) => Msg::SelectionMoved { delta: columns },
            MouseEventKind::ScrollUp if is_list(target) => Msg::SelectionMoved { delta: -columns },
            _ => Msg::NoOp,
        }
    }
}

fn target_msg(target: Option<Target>, focus: &mut Focus) -> Msg {
    match target {
        Some(Target::OpenListings) => Msg::ListingsOpened,
        Some(Target::Back) => Msg::BackClicked,
        Some(Target::Search) => {
            *focus = Focus::Search;
            Msg::NoOp
        }
        Some(Target::Filter(slot)) => Msg::FilterCycled(slot),
        Some(Target::Card(index)) => Msg::ListClicked { index: Some(index) },
        Some(Target::ListRegion) => Msg::ListClicked { index: None },
        Some(Target::LoadMore) => Msg::LoadMoreClicked,
        None => Msg::NoOp,
    }
}

fn is_list(target: Option<Target>) -> bool {
    matches!(target, Some(Target::Card(_) | Target::ListRegion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_map_to_core_messages() {
        let mut focus = Focus::Cards;
        assert_eq!(
            target_msg(Some(Target::Card(4)), &mut focus),
            Msg::ListClicked { index: Some(4) }
        );
        assert_eq!(
            target_msg(Some(Target::ListRegion), &mut focus),
            Msg::ListClicked { index: None }
        );
        assert_eq!(target_msg(Some(Target::LoadMore), &mut focus), Msg::LoadMoreClicked);
        assert_eq!(target_msg(None, &mut focus), Msg::NoOp);
        assert_eq!(focus, Focus::Cards);

        assert_eq!(target_msg(Some(Target::Search), &mut focus), Msg::NoOp);
        assert_eq!(focus, Focus::Search);
    }

    #[test]
    fn scrolling_only_counts_inside_the_list() {
        assert!(is_list(Some(Target::Card(0))));
        assert!(is_list(Some(Target::ListRegion)));
        assert!(!is_list(Some(Target::Back)));
        assert!(!is_list(None));
    }
}
