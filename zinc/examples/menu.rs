use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEventKind};
use crossterm::terminal;
use simplelog::{Config, LevelFilter, WriteLogger};
use zinc::{Menu, MenuConfig, MenuEvent};
use zincdom::{Document, FocusState, Key, Modifiers};

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("menu.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new();
    let menu = Menu::mount(
        &mut doc,
        [
            Menu::item("New file"),
            Menu::item("Open..."),
            Menu::checkbox_item("Autosave", true),
            Menu::item("Quit"),
        ],
        MenuConfig::default(),
    )
    .expect("menu host is well formed");
    menu.on_slot_change(&mut doc);

    let mut focus = FocusState::new();
    terminal::enable_raw_mode()?;
    let result = run(&mut doc, &menu, &mut focus);
    terminal::disable_raw_mode()?;
    result
}

fn run(doc: &mut Document, menu: &Menu, focus: &mut FocusState) -> io::Result<()> {
    draw(doc, menu)?;
    loop {
        let CtEvent::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }
        if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc) {
            return Ok(());
        }

        let key = Key::from(key_event.code);
        let modifiers = Modifiers::from(key_event.modifiers);
        if menu.on_key(doc, key, focus).is_consumed() {
            log::debug!("[demo] {key:?} {modifiers:?} consumed");
        }

        // Keyboard activation arrives as a synthesized click
        for event in focus.take_events() {
            if let zincdom::Event::Click { target, .. } = event {
                if let Ok(Some(MenuEvent::Select { item })) = menu.on_click(doc, target, focus) {
                    let label = doc.attribute(item, "label").unwrap_or("?");
                    print!("selected {label}\r\n");
                }
            }
        }
        draw(doc, menu)?;
    }
}

fn draw(doc: &Document, menu: &Menu) -> io::Result<()> {
    let mut out = io::stdout();
    let current = menu.current_item(doc);
    for item in menu.items(doc) {
        let marker = if Some(item) == current { '>' } else { ' ' };
        let check = if doc.has_attribute(item, "checked") { "[x]" } else { "   " };
        let label = doc.attribute(item, "label").unwrap_or("");
        write!(out, "{marker} {check} {label}\r\n")?;
    }
    write!(out, "(arrows move, enter selects, q quits)\r\n\r\n")?;
    out.flush()
}
