use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use zincdom::{resolve_tabbable, Document, Element, Overflow, ScrollExtents, ShadowMode};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("tab_order.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new();
    let root = doc.mount(
        Element::div()
            .id("page")
            .child(Element::link().id("skip").tab_index(1))
            .child(
                Element::custom("zn-card")
                    .id("card")
                    .shadow(
                        ShadowMode::Open,
                        [
                            Element::button().id("card-close"),
                            Element::slot(),
                        ],
                    )
                    .child(Element::input("text").id("card-input"))
                    .child(Element::input("radio").id("card-radio")),
            )
            .child(
                Element::div()
                    .id("log")
                    .overflow_y(Overflow::Auto)
                    .scroll(ScrollExtents::new(40, 10, 40, 200)),
            )
            .child(Element::button().id("inert-save").inert(true))
            .child(Element::button().id("submit")),
    );

    println!("Tab order:");
    for (i, node) in resolve_tabbable(&doc, root).into_iter().enumerate() {
        let id = doc.element_id(node).unwrap_or("?");
        println!("  {i}: {id}");
    }
    Ok(())
}
