//! Form demo: assemble a small login form, type into it and print the frame.
//!
//! Runs headless; keys are parsed from names and the result is drawn into
//! an in-memory buffer.

use tessera::{
    Align, Buffer, ComponentConfig, ComponentEvent, Container, ContainerConfig, EventKind,
    FocusRing, Input, InputConfig, KeyEvent, Padding, Rect, Rgb, Style, Text, TextConfig, Tree,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = Tree::new();

    let root = tree.insert_with(
        Container::with_config(ContainerConfig {
            padding: Padding::symmetric(0, 1),
            title: Some("Sign in".to_string()),
            title_align: Align::Center,
        }),
        ComponentConfig::styled(Style::bordered().with_fg(Rgb::new(120, 180, 255))),
    );
    let intro = tree.insert(Text::with_config(TextConfig {
        content: "Enter your name and a password to continue.".to_string(),
        ..TextConfig::default()
    }));
    let name = tree.insert(Input::with_config(InputConfig {
        placeholder: "name".to_string(),
        ..InputConfig::default()
    }));
    let password = tree.insert(Input::with_config(InputConfig {
        placeholder: "password".to_string(),
        password: true,
        max_length: Some(16),
        ..InputConfig::default()
    }));
    for child in [intro, name, password] {
        tree.add_child(root, child)?;
    }

    let changes = tree
        .subscribe_filtered(name, &[EventKind::ValueChange])
        .ok_or("name field vanished")?;

    tree.set_bounds(root, Rect::new(0, 0, 30, 7));
    tree.layout(root);

    let mut focus = FocusRing::new(root);
    let script = [
        "tab", "a", "d", "a", "left", "home", "delete", "A", "end", "tab", "h", "u", "n", "t", "e",
        "r", "2",
    ];
    for key_name in script {
        let key: KeyEvent = key_name.parse()?;
        focus.route_key(&mut tree, key);
    }

    let mut buffer = Buffer::new(30, 7);
    tree.render(root, &mut buffer);
    for y in 0..buffer.height() {
        println!("{}", buffer.row_text(y));
    }

    println!();
    for notification in changes.try_iter() {
        if let ComponentEvent::ValueChange(value) = notification.event {
            println!("name -> {value:?}");
        }
    }

    tree.destroy(root);
    println!("components left: {}", tree.len());
    Ok(())
}
