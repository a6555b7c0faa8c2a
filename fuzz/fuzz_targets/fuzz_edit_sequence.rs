//! Fuzz target for random editing sessions.
//!
//! Replays arbitrary keystrokes, selections and clipboard actions through
//! `InputHandler` and checks that the field stays in sync with the engine,
//! the raw text stays masked, and the caret never leaves the text.

#![no_main]

use arbitrary::Arbitrary;
use currency_mask::{
    FieldAdapter, InputHandler, KeyCode, KeyEvent, MaskConfig, MaskEngine, MaskSource, TextField,
    apply_mask,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Char(char),
    Backspace,
    Delete,
    KeyCode(u32),
    Select(u8, u8),
    Paste(String),
    Cut,
    Focus,
    Click(u8),
    SetValue(Option<f64>),
}

#[derive(Arbitrary, Debug)]
struct Session {
    config: u8,
    max_length: Option<u8>,
    actions: Vec<Action>,
}

fn config_for(index: u8) -> MaskConfig {
    match index % 4 {
        0 => MaskConfig::default(),
        1 => MaskConfig::default()
            .with_prefix("")
            .with_suffix(" €")
            .with_decimal_separator(Some(','))
            .with_thousands_separator(Some('.')),
        2 => MaskConfig::plain_integer().with_prefix("¥"),
        _ => MaskConfig::default()
            .with_precision(4)
            .with_allow_negative(false),
    }
}

fuzz_target!(|session: Session| {
    let config = config_for(session.config);
    let mut field = TextField::new();
    field.set_max_length(session.max_length.map(usize::from));
    let Ok(engine) = MaskEngine::new(field, config.clone()) else {
        return;
    };
    let mut handler = InputHandler::new(engine);

    for action in session.actions.into_iter().take(200) {
        match action {
            Action::Char(ch) => {
                handler.handle_key(KeyEvent::char(ch));
            }
            Action::Backspace => {
                handler.handle_key(KeyEvent::key(KeyCode::Backspace));
            }
            Action::Delete => {
                handler.handle_key(KeyEvent::key(KeyCode::Delete));
            }
            Action::KeyCode(code) => {
                handler.handle_key_code(code);
            }
            Action::Select(a, b) => {
                handler
                    .engine_mut()
                    .field_mut()
                    .select(usize::from(a), usize::from(b));
            }
            Action::Paste(text) => {
                let text: String = text.chars().take(64).collect();
                handler.handle_paste(&text);
            }
            Action::Cut => {
                handler.handle_cut();
            }
            Action::Focus => handler.handle_focus(),
            Action::Click(offset) => {
                handler.engine_mut().field_mut().set_cursor(usize::from(offset));
                handler.handle_click();
            }
            Action::SetValue(value) => handler.engine_mut().set_value(value),
        }

        let engine = handler.engine();
        let raw = engine.raw_text();
        assert_eq!(engine.field().text(), raw);
        assert_eq!(apply_mask(&config, MaskSource::Text(raw)), raw);
        let selection = engine.field().selection();
        assert!(selection.start <= selection.end);
        assert!(selection.end <= raw.chars().count());
    }
});
