//! Line-oriented interactive shell.
//!
//! The minimal interaction surface: one command per line, staged fields,
//! and a notice dump after every action. No layout or styling.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::StockApp;
use crate::notify::NoticeLevel;
use crate::session::{EditSessionState, SessionIntent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Name(String),
    Description(String),
    Quantity(String),
    Photo,
    Edit(String),
    Save,
    Delete(String),
    Cancel,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "list" | "ls" => Command::List,
        "show" => Command::Show,
        "name" => Command::Name(rest.to_string()),
        "desc" | "description" => Command::Description(rest.to_string()),
        "qty" | "quantity" => Command::Quantity(rest.to_string()),
        "photo" => Command::Photo,
        "edit" if !rest.is_empty() => Command::Edit(rest.to_string()),
        "save" => Command::Save,
        "delete" | "del" if !rest.is_empty() => Command::Delete(rest.to_string()),
        "cancel" => Command::Cancel,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Read commands until quit or EOF.
pub async fn run(app: &mut StockApp) -> std::io::Result<()> {
    println!(
        "stockpile — {} product(s) loaded. Type 'help' for commands.",
        app.products().len()
    );
    print_notices(app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => print_help(),
            Command::List => print_products(app),
            Command::Show => print_session(app.session()),
            Command::Name(value) => app.apply(SessionIntent::SetName(value)),
            Command::Description(value) => app.apply(SessionIntent::SetDescription(value)),
            Command::Quantity(value) => app.apply(SessionIntent::SetQuantity(value)),
            Command::Photo => app.pick_image().await,
            Command::Edit(id) => app.start_edit(&id),
            Command::Save => app.submit().await,
            Command::Delete(id) => app.delete(&id).await,
            Command::Cancel => app.apply(SessionIntent::Reset),
            Command::Unknown(text) => println!("Unrecognized command: {text}"),
        }
        print_notices(app);
        prompt()?;
    }
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_notices(app: &StockApp) {
    for notice in app.notices().drain() {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        println!("[{tag}] {}", notice.text);
    }
}

fn print_products(app: &StockApp) {
    if app.products().is_empty() {
        println!("No products.");
        return;
    }
    for product in app.products() {
        let photo = match &product.photo {
            Some(_) => " [photo]",
            None => "",
        };
        println!(
            "{}  {} — {} (qty {}){}",
            product.id, product.name, product.description, product.quantity, photo
        );
    }
}

fn print_session(session: &EditSessionState) {
    match &session.target {
        Some(id) => println!("Editing product {id}:"),
        None => println!("New product:"),
    }
    println!("  name: {}", session.name);
    println!("  description: {}", session.description);
    println!("  quantity: {}", session.quantity);
    match (&session.photo, session.photo_data.is_empty()) {
        (_, false) => println!("  photo: (new image staged)"),
        (Some(reference), true) => println!("  photo: {reference}"),
        (None, true) => println!("  photo: none"),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list                 show the collection");
    println!("  show                 show the staged record");
    println!("  name <text>          stage the product name");
    println!("  desc <text>          stage the description");
    println!("  qty <text>           stage the quantity");
    println!("  photo                pick an image");
    println!("  edit <id>            edit an existing product");
    println!("  save                 create or update the staged record");
    println!("  delete <id>          delete a product");
    println!("  cancel               discard the staged record");
    println!("  quit                 exit");
}
