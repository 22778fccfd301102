use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use compound_select::prelude::*;
use crossterm::event::{Event, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

const PRODUCTS: &[(&str, &str)] = &[
    ("sku-laptop", "Laptop 14\""),
    ("sku-phone", "Phone Mini"),
    ("sku-tablet", "Tablet Pro"),
    ("sku-watch", "Smart Watch"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("product_picker.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let picked: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&picked);
    let mut rt = Runtime::new(RuntimeConfig::new("product_picker").viewport(40, 10), move || {
        ui(Rc::clone(&sink))
    });
    rt.render()?;
    print_frame("initial", &rt);

    // Open the picker with a real mouse press/release pair
    let (x, y) = center(&rt, "trigger");
    rt.handle_crossterm(&mouse(MouseEventKind::Down(CtButton::Left), x, y))?;
    rt.handle_crossterm(&mouse(MouseEventKind::Up(CtButton::Left), x, y))?;
    print_frame("opened", &rt);

    // Pick the third product
    let tablet = rt.find_role("item").get(2).cloned().ok_or("no items rendered")?;
    rt.click_element(&tablet)?;
    print_frame("picked", &rt);

    // Reopen, then dismiss by pressing outside the picker
    let (x, y) = center(&rt, "trigger");
    rt.click(x, y)?;
    rt.click(39, 9)?;
    print_frame("dismissed", &rt);

    println!("on_select calls: {:?}", picked.borrow());
    Ok(())
}

fn ui(picked: Rc<RefCell<Vec<String>>>) -> View {
    let items = PRODUCTS.iter().map(|(sku, name)| {
        let picked = Rc::clone(&picked);
        SelectItem::new(*sku)
            .on_select(move |value| picked.borrow_mut().push(value.to_string()))
            .child(*name)
    });

    col()
        .gap(1)
        .child(text("Product picker"))
        .child(
            Select::new()
                .key("product")
                .class("picker")
                .child(
                    SelectTrigger::new()
                        .on_click(|event| log::info!("trigger clicked at {},{}", event.x, event.y))
                        .child(SelectValue::new().placeholder("select a product"))
                        .child("▼"),
                )
                .child(SelectContent::new().children(items)),
        )
        .into()
}

fn center(rt: &Runtime, role: &str) -> (u16, u16) {
    rt.find_role(role)
        .first()
        .and_then(|id| rt.layout().get(id))
        .map(|rect| rect.center())
        .unwrap_or_default()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn print_frame(label: &str, rt: &Runtime) {
    println!("--- {label} ---");
    for line in rt.to_text() {
        if !line.is_empty() {
            println!("{line}");
        }
    }
}
