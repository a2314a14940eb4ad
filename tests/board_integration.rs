//! End-to-end tests driving the board through terminal events.

use std::rc::Rc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use dragboard_config::{Config, FormRules};
use dragboard_protocol::{ProjectStatus, ProjectStore};
use dragboard_tui::{App, Focus, event::event_to_message, widgets::INVALID_INPUT_ALERT};
use ratatui::{Terminal, backend::TestBackend};

struct Harness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl Harness {
    fn new(config: &Config) -> Self {
        let mut harness = Self {
            app: App::with_config(ProjectStore::shared(), config),
            terminal: Terminal::new(TestBackend::new(80, 24)).unwrap(),
        };
        harness.draw();
        harness
    }

    fn draw(&mut self) -> String {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.view(frame)).unwrap();
        let buf = self.terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn send(&mut self, event: Event) {
        if let Some(msg) = event_to_message(&event, self.app.state().focus) {
            self.app.update(msg);
        }
        self.draw();
    }

    fn key(&mut self, code: KeyCode) {
        self.send(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.key(KeyCode::Char(ch));
        }
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.send(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn add_project(&mut self, title: &str, description: &str, people: &str) {
        self.type_text(title);
        self.key(KeyCode::Tab);
        self.type_text(description);
        self.key(KeyCode::Tab);
        self.type_text(people);
        self.key(KeyCode::Enter);
    }

    fn titles(&self, status: ProjectStatus) -> Vec<String> {
        let list = self.app.list(status).unwrap();
        (0..list.len())
            .filter_map(|idx| list.project(idx))
            .map(|project| project.title)
            .collect()
    }
}

#[test]
fn typed_project_appears_in_active_column() {
    let mut harness = Harness::new(&Config::default());
    harness.add_project("Build shed", "Weekend project", "3");

    let screen = harness.draw();
    assert!(screen.contains("ACTIVE PROJECTS (1)"));
    assert!(screen.contains("Build shed"));
    assert!(screen.contains("3 persons assigned"));
    assert!(screen.contains("Weekend project"));
    assert_eq!(harness.titles(ProjectStatus::Active), ["Build shed"]);
}

#[test]
fn single_person_label_is_singular() {
    let mut harness = Harness::new(&Config::default());
    harness.add_project("Paint fence", "Two coats please", "1");

    assert!(harness.draw().contains("1 person assigned"));
}

#[test]
fn rejected_input_shows_alert_and_creates_nothing() {
    let mut harness = Harness::new(&Config::default());
    // Five characters is not longer than the minimum.
    harness.add_project("Shed", "Short", "2");

    assert!(harness.draw().contains(INVALID_INPUT_ALERT));
    assert!(harness.app.store().borrow().is_empty());

    harness.key(KeyCode::Esc);
    assert!(harness.app.state().alert.is_none());
    assert!(!harness.draw().contains(INVALID_INPUT_ALERT));
}

#[test]
fn people_upper_bound_is_exclusive() {
    let mut harness = Harness::new(&Config::default());
    harness.add_project("Crew", "Too many hands", "5");
    assert!(harness.app.state().alert.is_some());

    let mut harness = Harness::new(&Config::default());
    harness.add_project("Crew", "Just enough hands", "4");
    assert!(harness.app.state().alert.is_none());
    assert_eq!(harness.app.store().borrow().len(), 1);
}

#[test]
fn configured_rules_apply_to_form() {
    let config = Config {
        form: FormRules {
            people_max: 20,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut harness = Harness::new(&config);
    harness.add_project("Barn raising", "Whole village helps", "15");

    assert!(harness.app.state().alert.is_none());
    assert!(harness.draw().contains("15 persons assigned"));
}

#[test]
fn keyboard_moves_project_to_finished() {
    let mut harness = Harness::new(&Config::default());
    harness.add_project("Build shed", "Weekend project", "3");
    harness.add_project("Paint fence", "Two coats please", "2");

    harness.key(KeyCode::Esc);
    assert_eq!(harness.app.state().focus, Focus::Board);

    harness.key(KeyCode::Down);
    harness.key(KeyCode::Down);
    harness.key(KeyCode::Enter);
    assert!(harness.draw().contains("Moving to Active"));
    harness.key(KeyCode::Right);
    assert!(harness.draw().contains("Moving to Finished"));
    harness.key(KeyCode::Enter);

    assert_eq!(harness.titles(ProjectStatus::Active), ["Build shed"]);
    assert_eq!(harness.titles(ProjectStatus::Finished), ["Paint fence"]);
    let screen = harness.draw();
    assert!(screen.contains("ACTIVE PROJECTS (1)"));
    assert!(screen.contains("FINISHED PROJECTS (1)"));
}

#[test]
fn mouse_drags_project_between_columns() {
    let mut harness = Harness::new(&Config::default());
    harness.add_project("Build shed", "Weekend project", "3");

    // First active card spans rows 9-13 of the left column.
    harness.mouse(MouseEventKind::Down(MouseButton::Left), 10, 10);
    harness.mouse(MouseEventKind::Drag(MouseButton::Left), 20, 11);
    harness.mouse(MouseEventKind::Drag(MouseButton::Left), 55, 11);
    assert!(harness.app.list(ProjectStatus::Finished).unwrap().is_droppable());

    harness.mouse(MouseEventKind::Up(MouseButton::Left), 55, 11);
    assert!(harness.app.drag().is_none());
    assert!(harness.titles(ProjectStatus::Active).is_empty());
    assert_eq!(harness.titles(ProjectStatus::Finished), ["Build shed"]);

    // And back again.
    harness.mouse(MouseEventKind::Down(MouseButton::Left), 55, 10);
    harness.mouse(MouseEventKind::Drag(MouseButton::Left), 10, 10);
    harness.mouse(MouseEventKind::Up(MouseButton::Left), 10, 10);
    assert_eq!(harness.titles(ProjectStatus::Active), ["Build shed"]);
    assert!(harness.app.lists().iter().all(|list| !list.is_droppable()));
}

#[test]
fn lists_track_store_changes_made_elsewhere() {
    let mut harness = Harness::new(&Config::default());
    let store = Rc::clone(harness.app.store());

    let id = store
        .borrow_mut()
        .add_project("Seeded", "Added outside the form", 2);
    assert_eq!(harness.titles(ProjectStatus::Active), ["Seeded"]);

    store.borrow_mut().move_project(id, ProjectStatus::Finished);
    assert!(harness.titles(ProjectStatus::Active).is_empty());
    assert!(harness.draw().contains("FINISHED PROJECTS (1)"));
}

#[test]
fn ctrl_c_quits() {
    let mut harness = Harness::new(&Config::default());
    harness.send(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(harness.app.should_quit());
}
