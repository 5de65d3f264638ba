use crate::constants::{
    HINTS_EDITING, HINTS_FORM, HINTS_LIST, HINTS_SELECTION, INFO_NOTHING_SELECTED, SUCCESS_TASKS_COMPLETED,
    SUCCESS_TASKS_DELETED, SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED,
};
use crate::notify::Notifier;
use crate::task::{Task, TaskId};
use crate::ui::components::{Footer, StatusBar, TaskEntryForm, TaskListComponent};
use crate::ui::core::{Action, AppContext, Component, DelayRequest, DelayTarget, EventType, Focus, TaskManager};
use crate::ui::layout::{AppLayout, LayoutManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};
use std::collections::HashSet;
use tokio::sync::mpsc;

/// Upper bound on actions processed for one input; a cycle means a bug
const MAX_CHAINED_ACTIONS: usize = 64;

/// The parent: owns the task collection and routes every child action
pub struct AppComponent {
    // Component composition
    form: TaskEntryForm,
    task_list: TaskListComponent,
    status_bar: StatusBar,
    footer: Footer,

    // Application state
    tasks: Vec<Task>,
    selected: HashSet<TaskId>,
    focus: Focus,

    // Services
    ctx: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    layout: Option<AppLayout>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(ctx: AppContext) -> Self {
        Self::with_tasks(ctx, Vec::new())
    }

    pub fn with_tasks(ctx: AppContext, tasks: Vec<Task>) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut app = Self {
            form: TaskEntryForm::new(&ctx),
            task_list: TaskListComponent::new(&ctx),
            status_bar: StatusBar::new(ctx.clock.clone(), ctx.config.ui.toast_seconds),
            footer: Footer::new(&ctx),
            tasks,
            selected: HashSet::new(),
            focus: Focus::List,
            ctx,
            task_manager,
            background_action_rx,
            layout: None,
            should_quit: false,
        };
        app.task_list.on_focus();
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected(&self) -> &HashSet<TaskId> {
        &self.selected
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn form(&self) -> &TaskEntryForm {
        &self.form
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Delays still running in the background
    pub fn pending_delays(&self) -> usize {
        self.task_manager.task_count()
    }

    fn sync_component_data(&mut self) {
        self.task_list.set_tasks(&self.tasks, &self.selected);
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        log::debug!("Focus moved to {:?}", focus);
        match focus {
            Focus::Form => {
                self.task_list.on_blur();
                self.form.on_focus();
            }
            Focus::List => {
                self.form.on_blur();
                self.task_list.on_focus();
            }
        }
        self.focus = focus;
    }

    fn schedule_delay(&mut self, request: DelayRequest) -> Action {
        if request.is_immediate() {
            return Action::DelayElapsed {
                target: request.target,
                token: request.token,
            };
        }
        self.task_manager.spawn_delay(request);
        Action::None
    }

    fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == *id)
    }

    fn remove_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != *id);
        self.selected.remove(id);
        self.task_manager.cancel(&DelayTarget::Item(id.clone()));
        self.tasks.len() != before
    }

    /// Apply one action; may produce a follow-up action
    fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::CreateTask(new_task) => {
                let task = Task::from_new(TaskId::generate(), new_task);
                log::info!("Created task {} '{}'", task.id, task.text);
                self.tasks.insert(0, task);
                Action::success(SUCCESS_TASK_CREATED)
            }
            Action::ToggleCompletion(id) => {
                if let Some(task) = self.find_task_mut(&id) {
                    task.completed = !task.completed;
                    log::info!("Task {} completed: {}", id, task.completed);
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                if self.remove_task(&id) {
                    log::info!("Deleted task {}", id);
                    Action::success(SUCCESS_TASK_DELETED)
                } else {
                    Action::None
                }
            }
            Action::EditTask { id, text } => match self.find_task_mut(&id) {
                Some(task) => {
                    log::info!("Updated task {} to '{}'", id, text);
                    task.text = text;
                    Action::success(SUCCESS_TASK_UPDATED)
                }
                None => Action::None,
            },
            Action::SelectTask(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
                Action::None
            }
            Action::Notify { message, severity } => {
                self.status_bar.notify(&message, severity);
                Action::None
            }
            Action::ScheduleDelay(request) => self.schedule_delay(request),
            Action::DelayElapsed { target, token } => match target {
                DelayTarget::EntryForm => self.form.update(Action::DelayElapsed { target, token }),
                DelayTarget::Item(_) => self.task_list.update(Action::DelayElapsed { target, token }),
            },
            Action::SetFocus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::ToggleSelectionMode => {
                let selection_mode = !self.task_list.selection_mode();
                self.task_list.set_selection_mode(selection_mode);
                if !selection_mode {
                    self.selected.clear();
                }
                log::debug!("Selection mode: {}", selection_mode);
                Action::None
            }
            Action::CompleteSelected => {
                if self.selected.is_empty() {
                    return Action::info(INFO_NOTHING_SELECTED);
                }
                let selected = &self.selected;
                for task in self.tasks.iter_mut().filter(|task| selected.contains(&task.id)) {
                    task.completed = true;
                }
                log::info!("Completed {} selected tasks", self.selected.len());
                self.selected.clear();
                Action::success(SUCCESS_TASKS_COMPLETED)
            }
            Action::DeleteSelected => {
                if self.selected.is_empty() {
                    return Action::info(INFO_NOTHING_SELECTED);
                }
                let ids: Vec<TaskId> = self.selected.iter().cloned().collect();
                for id in &ids {
                    self.remove_task(id);
                }
                log::info!("Deleted {} selected tasks", ids.len());
                Action::success(SUCCESS_TASKS_DELETED)
            }
            Action::CycleIconTheme => {
                self.ctx.icons.cycle_icon_theme();
                let icons = self.ctx.icons.clone();
                self.form.set_icons(icons.clone());
                self.task_list.set_icons(icons.clone());
                self.footer.set_icons(icons);
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Run `action` and everything it triggers
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        for _ in 0..MAX_CHAINED_ACTIONS {
            if next.is_none() {
                break;
            }
            next = self.handle_app_action(next);
            self.sync_component_data();
        }
        if !next.is_none() {
            log::warn!("Dropped action after {} chained steps: {:?}", MAX_CHAINED_ACTIONS, next);
        }
    }

    /// Deliver timers that fired since the last call
    pub fn process_background_actions(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(action) = self.background_action_rx.try_recv() {
            delivered += 1;
            self.dispatch(action);
        }
        self.task_manager.cleanup_finished_tasks();
        delivered
    }

    /// Wait for the next timer, then deliver it. Returns `false` when the
    /// channel is closed.
    pub async fn next_background_action(&mut self) -> bool {
        match self.background_action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                self.task_manager.cleanup_finished_tasks();
                true
            }
            None => false,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            EventType::Tick => {
                self.process_background_actions();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }

    fn current_hints(&self) -> &'static str {
        match self.focus {
            Focus::Form => HINTS_FORM,
            Focus::List if self.task_list.is_editing() => HINTS_EDITING,
            Focus::List if self.task_list.selection_mode() => HINTS_SELECTION,
            Focus::List => HINTS_LIST,
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match self.focus {
            Focus::Form => self.form.handle_key_events(key),
            Focus::List => self.task_list.handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some(layout) = self.layout else {
            return Action::None;
        };
        let position = Position::new(mouse.column, mouse.row);
        let pressed = matches!(mouse.kind, MouseEventKind::Down(_));

        // The dropdown may overlap the list, so ask the form first
        let on_form = layout.form.contains(position) || self.form.owns_position(mouse.column, mouse.row);
        let form_action = self.form.handle_mouse_events(mouse);

        if on_form {
            if pressed {
                self.set_focus(Focus::Form);
            }
            return form_action;
        }

        if layout.list.contains(position) {
            if pressed {
                self.set_focus(Focus::List);
            }
            return self.task_list.handle_mouse_events(mouse);
        }

        if mouse.kind == MouseEventKind::Moved {
            // Pointer left the list: clear any hover state
            self.task_list.handle_mouse_events(mouse);
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let column = LayoutManager::content_column(rect, self.ctx.config.ui.max_width);
        let layout = LayoutManager::main_layout(column, self.form.height());
        self.layout = Some(layout);

        self.form.render(f, layout.form);
        self.task_list.render(f, layout.list);
        self.status_bar.set_hints(self.current_hints());
        self.status_bar.render(f, layout.status);
        self.footer.render(f, layout.footer);

        // Overlays go last so they sit on top of the list
        self.form.render_overlay(f, rect);
    }
}
