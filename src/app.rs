//! Application state and event handling
//!
//! The App owns all state: the dataset, the selected structure and
//! algorithm, the active animation run, and the modal stack. Events come
//! in as key presses and ticks, get converted to Actions, and are applied
//! in `update`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, CodePanel, HelpDialog, HomeComponent, HomeRenderContext, InputDialog,
    QuitDialog, SplashComponent,
};
use crate::config::{step_delay, Config, MAX_SPEED, MIN_SPEED};
use crate::model::{
    dataset::parse_value, scripts, Algorithm, AnimationRun, Dataset, DemoGraph, Highlight,
    InputPurpose, Modal, ModalStack, Outcome, Script, Structure,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use std::time::Instant;

/// Which screen the app is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Main application state
pub struct App {
    mode: AppMode,
    should_quit: bool,

    dataset: Dataset,
    structure: Structure,
    algo_cursor: usize,

    /// The active animation, if any. A new run is refused until the
    /// current one reaches its final frame.
    run: Option<AnimationRun>,
    /// Set once the finished run's outcome has been applied
    run_settled: bool,

    speed: u64,
    show_code: bool,
    status_message: String,
    modals: ModalStack,
    config: Config,

    splash: SplashComponent,
    home: HomeComponent,
    code_panel: CodePanel,
    help_dialog: HelpDialog,
    quit_dialog: QuitDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();

        Self {
            mode: AppMode::Splash,
            should_quit: false,
            dataset: Dataset::new(),
            structure: Structure::Array,
            algo_cursor: 0,
            run: None,
            run_settled: false,
            speed: config.speed,
            show_code: config.show_code,
            status_message: "press ? for help".to_string(),
            modals: ModalStack::new(),
            config,
            splash: SplashComponent::new(),
            home: HomeComponent,
            code_panel: CodePanel::default(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    pub fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether an animation is still playing (the Run Guard predicate)
    fn is_running(&self) -> bool {
        self.run.as_ref().map(|r| !r.is_finished()).unwrap_or(false)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Event handling
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C always quits, no matter what screen or modal is up
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.dispatch(Action::ForceQuit);
        }

        let action = match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key)?,
            AppMode::Running => match self.modals.top() {
                Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key)?,
                Some(Modal::Help { .. }) => {
                    let action = self.help_dialog.handle_key_event(key)?;
                    // The modal records the offset so reopening restores it
                    if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                        *scroll_offset = self.help_dialog.scroll_offset;
                    }
                    action
                }
                Some(Modal::ValueInput { .. }) => InputDialog::handle_key_event(key),
                None => self.home.handle_key_event(key)?,
            },
        };

        if let Some(action) = action {
            self.dispatch(action)?;
        }
        Ok(())
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.dispatch(Action::Resize(width, height))
    }

    pub fn tick(&mut self) -> Result<()> {
        self.dispatch(Action::Tick)
    }

    /// Apply an action and any follow-up actions it produces
    fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            next = self.update(action)?;
        }
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                self.advance_run(Instant::now());
            }
            Action::Resize(_, _) => {}
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.config.speed = self.speed;
                self.config.show_code = self.show_code;
                let _ = self.config.save();
                self.should_quit = true;
            }

            Action::NextStructure => self.cycle_structure(1),
            Action::PrevStructure => self.cycle_structure(-1),
            Action::NextAlgorithm => {
                self.algo_cursor = (self.algo_cursor + 1) % Algorithm::all().len();
            }
            Action::PrevAlgorithm => {
                let count = Algorithm::all().len();
                self.algo_cursor = (self.algo_cursor + count - 1) % count;
            }

            Action::OpenValueInput(purpose) => self.open_value_input(purpose),
            Action::InputChar(c) => {
                if let Some(Modal::ValueInput { buffer, .. }) = self.modals.top_mut() {
                    let minus_ok = c != '-' || buffer.is_empty();
                    if buffer.len() < 12 && minus_ok {
                        buffer.push(c);
                    }
                }
            }
            Action::InputBackspace => {
                if let Some(Modal::ValueInput { buffer, .. }) = self.modals.top_mut() {
                    buffer.pop();
                }
            }
            Action::SubmitInput => self.submit_input(),

            Action::GenerateRandom => {
                if self.guard_idle() {
                    self.drop_finished_run();
                    self.dataset.generate_random();
                    self.status_message = format!("generated {} values", self.dataset.len());
                }
            }
            Action::ClearAll => {
                if self.guard_idle() {
                    self.drop_finished_run();
                    self.dataset.clear();
                    self.status_message = "cleared".to_string();
                }
            }

            Action::StartAlgorithm => self.start_selected_algorithm(),
            Action::SpeedUp => {
                self.speed = (self.speed + 1).min(MAX_SPEED);
                self.status_message = format!("speed {}/10", self.speed);
            }
            Action::SpeedDown => {
                self.speed = self.speed.saturating_sub(1).max(MIN_SPEED);
                self.status_message = format!("speed {}/10", self.speed);
            }

            Action::ToggleCodePanel => {
                self.show_code = !self.show_code;
            }
            Action::ScrollDown => self.code_panel.scroll_down(),
            Action::ScrollUp => self.code_panel.scroll_up(),

            Action::OpenQuitDialog => {
                if self.modals.is_empty() {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                if self.modals.is_empty() {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help { scroll_offset: 0 });
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────

    /// Advance the active run, applying its outcome exactly once when it
    /// reaches the final frame. The finished frame stays on screen until
    /// the next run or dataset change.
    fn advance_run(&mut self, now: Instant) {
        let step = step_delay(self.speed);
        let Some(run) = self.run.as_mut() else {
            return;
        };

        run.advance(now, step);

        if run.is_finished() && !self.run_settled {
            self.run_settled = true;
            self.status_message = run.summary().to_string();
            if run.outcome() == Some(&Outcome::SortComplete) {
                let sorted = run.final_values().to_vec();
                self.dataset.replace(sorted);
            }
        }
    }

    /// Start a run if the script builder produced one
    fn start_run(&mut self, script: Option<Script>) {
        match script {
            Some(script) => {
                let step = step_delay(self.speed);
                self.run = Some(AnimationRun::start(script, Instant::now(), step));
                self.run_settled = false;
            }
            None => {
                self.status_message = "add some values first (i or g)".to_string();
            }
        }
    }

    /// Run Guard: report and refuse when an animation is still playing
    fn guard_idle(&mut self) -> bool {
        if self.is_running() {
            self.status_message = "animation in progress, hang on".to_string();
            return false;
        }
        true
    }

    fn start_selected_algorithm(&mut self) {
        if !self.guard_idle() {
            return;
        }
        self.drop_finished_run();

        let algorithm = Algorithm::all()[self.algo_cursor];
        // Traversals play on the graph; everything else on the array
        self.structure = algorithm.canvas();

        let values = self.dataset.values();
        let script = match algorithm {
            Algorithm::LinearSearch => scripts::linear_search(values),
            Algorithm::BinarySearch => scripts::binary_search(values),
            Algorithm::BubbleSort => scripts::bubble_sort(values),
            Algorithm::SelectionSort => scripts::selection_sort(values),
            Algorithm::InsertionSort => scripts::insertion_sort(values),
            Algorithm::Dfs => scripts::dfs(&DemoGraph::build(values)),
            Algorithm::Bfs => scripts::bfs(&DemoGraph::build(values)),
        };
        self.start_run(script);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dataset operations
    // ─────────────────────────────────────────────────────────────────────

    fn cycle_structure(&mut self, direction: i32) {
        if !self.guard_idle() {
            return;
        }
        self.drop_finished_run();

        let all = Structure::all();
        let current = all.iter().position(|s| *s == self.structure).unwrap_or(0);
        let count = all.len() as i32;
        let next = (current as i32 + direction + count) % count;
        self.structure = all[next as usize];
    }

    fn open_value_input(&mut self, purpose: InputPurpose) {
        if !self.guard_idle() || !self.modals.is_empty() {
            return;
        }

        // Stacks and queues only remove from one end, so delete acts
        // immediately instead of prompting
        if purpose == InputPurpose::Delete {
            match self.structure {
                Structure::Stack => {
                    self.drop_finished_run();
                    self.status_message = match self.dataset.pop() {
                        Some(value) => format!("popped {}", value),
                        None => "stack is empty".to_string(),
                    };
                    return;
                }
                Structure::Queue => {
                    self.drop_finished_run();
                    self.status_message = match self.dataset.dequeue() {
                        Some(value) => format!("dequeued {}", value),
                        None => "queue is empty".to_string(),
                    };
                    return;
                }
                _ => {}
            }
        }

        self.modals.push(Modal::ValueInput {
            purpose,
            buffer: String::new(),
        });
    }

    fn submit_input(&mut self) {
        let Some(Modal::ValueInput { purpose, buffer }) = self.modals.pop() else {
            return;
        };

        // Non-numeric input is dropped without complaint
        let Some(value) = parse_value(&buffer) else {
            return;
        };

        match purpose {
            InputPurpose::Insert => {
                self.drop_finished_run();
                self.dataset.insert(value);
                self.status_message = format!("inserted {}", value);
            }
            InputPurpose::Delete => {
                self.drop_finished_run();
                self.status_message = if self.dataset.delete(value) {
                    format!("removed {}", value)
                } else {
                    format!("{} is not in the data", value)
                };
            }
            InputPurpose::Search => {
                self.drop_finished_run();
                let view = self.structure.view_values(self.dataset.values());
                self.start_run(scripts::structure_search(&view, value));
            }
        }
    }

    /// Clear a finished run so the canvas falls back to the dataset
    fn drop_finished_run(&mut self) {
        if !self.is_running() {
            self.run = None;
            self.run_settled = false;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.mode == AppMode::Splash {
            let _ = self.splash.draw(frame, area);
            return;
        }

        let idle_view;
        let (values, highlights, caption): (&[i64], &[Highlight], Option<&str>) =
            if let Some(run) = &self.run {
                let current = run.current_frame();
                (
                    &current.values,
                    &current.highlights,
                    current.caption.as_deref(),
                )
            } else {
                idle_view = self.structure.view_values(self.dataset.values());
                (&idle_view, &[], None)
            };

        let ctx = HomeRenderContext {
            structure: self.structure,
            algo_cursor: self.algo_cursor,
            values,
            highlights,
            caption,
            dataset_len: self.dataset.len(),
            speed: self.speed,
            running: self.is_running(),
            status: &self.status_message,
            show_code: self.show_code,
        };
        draw_home_screen(frame, area, &ctx, &mut self.code_panel);

        match self.modals.top() {
            Some(Modal::QuitConfirm) => {
                let _ = self.quit_dialog.draw(frame, area);
            }
            Some(Modal::Help { scroll_offset }) => {
                self.help_dialog.scroll_offset = *scroll_offset;
                let _ = self.help_dialog.draw(frame, area);
            }
            Some(Modal::ValueInput { purpose, buffer }) => {
                InputDialog::draw(frame, area, *purpose, buffer);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ready_app() -> App {
        let mut app = App::new();
        app.mode = AppMode::Running;
        app
    }

    /// Drive the active run to completion with fabricated far-future ticks
    fn finish_run(app: &mut App) {
        let mut now = Instant::now();
        for _ in 0..10_000 {
            let done = match app.run.as_ref() {
                Some(run) => run.is_finished() && app.run_settled,
                None => true,
            };
            if done {
                break;
            }
            now += Duration::from_secs(600);
            app.advance_run(now);
        }
    }

    #[test]
    fn test_run_guard_refuses_second_start() {
        let mut app = ready_app();
        app.dataset.replace(vec![4, 2, 7, 1]);

        app.dispatch(Action::StartAlgorithm).unwrap();
        assert!(app.is_running());

        let cursor_before = app.algo_cursor;
        app.dispatch(Action::StartAlgorithm).unwrap();
        assert_eq!(app.status_message, "animation in progress, hang on");
        assert_eq!(app.algo_cursor, cursor_before);
    }

    #[test]
    fn test_run_guard_releases_after_completion() {
        let mut app = ready_app();
        app.dataset.replace(vec![4, 2]);

        app.dispatch(Action::StartAlgorithm).unwrap();
        finish_run(&mut app);
        assert!(!app.is_running());

        app.dispatch(Action::StartAlgorithm).unwrap();
        assert!(app.is_running());
    }

    #[test]
    fn test_sort_commits_final_values_to_dataset() {
        let mut app = ready_app();
        app.dataset.replace(vec![9, 1, 5, 3]);
        // Bubble Sort
        app.algo_cursor = Algorithm::all()
            .iter()
            .position(|a| *a == Algorithm::BubbleSort)
            .unwrap();

        app.dispatch(Action::StartAlgorithm).unwrap();
        finish_run(&mut app);

        assert_eq!(app.dataset.values(), &[1, 3, 5, 9]);
        assert!(!app.is_running());
    }

    #[test]
    fn test_search_leaves_dataset_untouched() {
        let mut app = ready_app();
        app.dataset.replace(vec![9, 1, 5]);
        app.algo_cursor = Algorithm::all()
            .iter()
            .position(|a| *a == Algorithm::BinarySearch)
            .unwrap();

        app.dispatch(Action::StartAlgorithm).unwrap();
        finish_run(&mut app);

        assert_eq!(app.dataset.values(), &[9, 1, 5]);
    }

    #[test]
    fn test_start_on_empty_dataset_is_refused() {
        let mut app = ready_app();

        app.dispatch(Action::StartAlgorithm).unwrap();
        assert!(app.run.is_none());
        assert_eq!(app.status_message, "add some values first (i or g)");
    }

    #[test]
    fn test_traversal_switches_canvas_to_graph() {
        let mut app = ready_app();
        app.dataset.replace(vec![1, 2, 3]);
        app.algo_cursor = Algorithm::all()
            .iter()
            .position(|a| *a == Algorithm::Dfs)
            .unwrap();

        app.dispatch(Action::StartAlgorithm).unwrap();
        assert_eq!(app.structure, Structure::Graph);
    }

    #[test]
    fn test_insert_flow_through_input_modal() {
        let mut app = ready_app();

        app.dispatch(Action::OpenValueInput(InputPurpose::Insert))
            .unwrap();
        app.dispatch(Action::InputChar('4')).unwrap();
        app.dispatch(Action::InputChar('2')).unwrap();
        app.dispatch(Action::SubmitInput).unwrap();

        assert!(app.modals.is_empty());
        assert_eq!(app.dataset.values(), &[42]);
    }

    #[test]
    fn test_invalid_input_is_silently_ignored() {
        let mut app = ready_app();

        app.dispatch(Action::OpenValueInput(InputPurpose::Insert))
            .unwrap();
        app.dispatch(Action::SubmitInput).unwrap();

        assert!(app.modals.is_empty());
        assert!(app.dataset.is_empty());
    }

    #[test]
    fn test_minus_only_accepted_at_start_of_buffer() {
        let mut app = ready_app();

        app.dispatch(Action::OpenValueInput(InputPurpose::Insert))
            .unwrap();
        app.dispatch(Action::InputChar('-')).unwrap();
        app.dispatch(Action::InputChar('7')).unwrap();
        app.dispatch(Action::InputChar('-')).unwrap();
        app.dispatch(Action::SubmitInput).unwrap();

        assert_eq!(app.dataset.values(), &[-7]);
    }

    #[test]
    fn test_delete_on_stack_pops_without_dialog() {
        let mut app = ready_app();
        app.dataset.replace(vec![5, 3, 8]);
        app.structure = Structure::Stack;

        app.dispatch(Action::OpenValueInput(InputPurpose::Delete))
            .unwrap();

        assert!(app.modals.is_empty());
        assert_eq!(app.dataset.values(), &[5, 3]);
        assert_eq!(app.status_message, "popped 8");
    }

    #[test]
    fn test_delete_on_queue_dequeues_front() {
        let mut app = ready_app();
        app.dataset.replace(vec![5, 3, 8]);
        app.structure = Structure::Queue;

        app.dispatch(Action::OpenValueInput(InputPurpose::Delete))
            .unwrap();

        assert_eq!(app.dataset.values(), &[3, 8]);
        assert_eq!(app.status_message, "dequeued 5");
    }

    #[test]
    fn test_speed_clamps_at_bounds() {
        let mut app = ready_app();
        app.speed = MAX_SPEED;
        app.dispatch(Action::SpeedUp).unwrap();
        assert_eq!(app.speed, MAX_SPEED);

        app.speed = MIN_SPEED;
        app.dispatch(Action::SpeedDown).unwrap();
        assert_eq!(app.speed, MIN_SPEED);
    }

    #[test]
    fn test_structure_cycle_wraps_both_ways() {
        let mut app = ready_app();
        assert_eq!(app.structure, Structure::Array);

        app.dispatch(Action::PrevStructure).unwrap();
        assert_eq!(app.structure, Structure::Graph);

        app.dispatch(Action::NextStructure).unwrap();
        assert_eq!(app.structure, Structure::Array);
    }

    #[test]
    fn test_dataset_edits_blocked_while_running() {
        let mut app = ready_app();
        app.dataset.replace(vec![4, 2]);
        app.dispatch(Action::StartAlgorithm).unwrap();
        assert!(app.is_running());

        app.dispatch(Action::ClearAll).unwrap();
        assert_eq!(app.dataset.values(), &[4, 2]);

        app.dispatch(Action::OpenValueInput(InputPurpose::Insert))
            .unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_search_via_input_modal_starts_run() {
        let mut app = ready_app();
        app.dataset.replace(vec![5, 3, 8]);

        app.dispatch(Action::OpenValueInput(InputPurpose::Search))
            .unwrap();
        app.dispatch(Action::InputChar('8')).unwrap();
        app.dispatch(Action::SubmitInput).unwrap();

        assert!(app.is_running());
        finish_run(&mut app);
        assert_eq!(
            app.run.as_ref().and_then(|r| r.outcome()),
            Some(&Outcome::FoundAt(2))
        );
    }
}
