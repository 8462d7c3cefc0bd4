use crate::ui::app::{App, Focus};
use crate::ui::form::{FormField, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Form => handle_form_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }

    match key.code {
        KeyCode::Enter => match app.form().focused {
            FormField::Title => app.dispatch_form(FormIntent::NextField),
            FormField::Description => app.submit_form(),
        },
        KeyCode::Up | KeyCode::Down => app.dispatch_form(FormIntent::NextField),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Esc => app.toggle_focus(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_form(FormIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('v') => app.vote_selected(),
        KeyCode::Char('r') => app.load_features(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::Feature;
    use crate::ui::worker::UiCommand;
    use crossterm::event::KeyEventState;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, key(KeyCode::Char(ch)));
        }
    }

    fn app_with_features() -> (App, mpsc::Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel(8);
        let mut app = App::new(Config::default());
        app.set_command_sender(tx);
        app.on_features_loaded(Ok(vec![
            Feature {
                id: 1,
                title: "Dark mode".to_string(),
                description: None,
                vote_count: 2,
                created_at: "2024-01-01 00:00:00".to_string(),
            },
            Feature {
                id: 2,
                title: "Export".to_string(),
                description: None,
                vote_count: 1,
                created_at: "2024-01-02 00:00:00".to_string(),
            },
        ]));
        (app, rx)
    }

    #[test]
    fn ctrl_q_and_ctrl_c_quit_from_any_focus() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());

        let mut app = App::new(Config::default());
        app.toggle_focus();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(Config::default());
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release);
        assert!(app.form().title.is_empty());
    }

    #[test]
    fn typing_in_form_edits_focused_field() {
        let mut app = App::new(Config::default());
        type_text(&mut app, "Dark");
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "q");
        assert_eq!(app.form().title, "Dar");
        assert_eq!(app.form().description, "q");
        assert!(!app.should_quit());
    }

    #[test]
    fn enter_on_description_submits() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = App::new(Config::default());
        app.set_command_sender(tx);
        type_text(&mut app, "Dark mode");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(rx.try_recv(), Ok(UiCommand::CreateFeature(_))));
    }

    #[test]
    fn ctrl_s_submits_from_title() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = App::new(Config::default());
        app.set_command_sender(tx);
        type_text(&mut app, "Dark mode");
        handle_key(&mut app, ctrl('s'));
        assert!(matches!(rx.try_recv(), Ok(UiCommand::CreateFeature(_))));
        assert!(app.form().title.contains("Dark mode"));
    }

    #[test]
    fn tab_and_esc_switch_focus() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::List);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Form);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::List);
    }

    #[test]
    fn list_keys_move_and_vote() {
        let (mut app, mut rx) = app_with_features();
        app.toggle_focus();
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.selection(), 1);
        handle_key(&mut app, key(KeyCode::Char('v')));
        assert_eq!(rx.try_recv().unwrap(), UiCommand::Vote { id: 2 });
        handle_key(&mut app, key(KeyCode::Up));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(rx.try_recv().unwrap(), UiCommand::Vote { id: 1 });
    }

    #[test]
    fn list_r_reloads() {
        let (mut app, mut rx) = app_with_features();
        app.toggle_focus();
        handle_key(&mut app, key(KeyCode::Char('r')));
        assert_eq!(rx.try_recv().unwrap(), UiCommand::LoadFeatures);
        assert!(app.store().is_loading());
    }

    #[test]
    fn q_quits_only_from_list() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.toggle_focus();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
