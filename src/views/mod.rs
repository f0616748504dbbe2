//! # Page Renderer
//!
//! Turns handler data into HTML. Rendering is pure: the same page value
//! always produces the same markup, and every interpolated value is escaped.
//!
//! Forms that need PUT or DELETE post with a `_method` query parameter,
//! which the HTTP layer's method override turns back into the intended verb.

mod html;

use std::fmt::Write;

use axum::response::Html;

use crate::fruits::Fruit;

pub use html::escape;

/// A renderable page and the data it needs
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Home,
    Index { fruits: &'a [Fruit] },
    New,
    Show { fruit: &'a Fruit },
    Edit { fruit: &'a Fruit },
    NotFound,
    Error,
}

impl Page<'_> {
    /// Template name, as it appears in logs
    pub fn template(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Index { .. } => "fruits/index",
            Page::New => "fruits/new",
            Page::Show { .. } => "fruits/show",
            Page::Edit { .. } => "fruits/edit",
            Page::NotFound => "not_found",
            Page::Error => "error",
        }
    }
}

/// Render a page to HTML
pub fn render(page: &Page<'_>) -> Html<String> {
    let markup = match page {
        Page::Home => html::layout("Fruits", HOME_BODY),
        Page::Index { fruits } => html::layout("All Fruits", &index_body(fruits)),
        Page::New => html::layout("Add a Fruit", NEW_BODY),
        Page::Show { fruit } => html::layout(&fruit.name, &show_body(fruit)),
        Page::Edit { fruit } => html::layout(&format!("Edit {}", fruit.name), &edit_body(fruit)),
        Page::NotFound => html::layout("Not Found", NOT_FOUND_BODY),
        Page::Error => html::layout("Something went wrong", ERROR_BODY),
    };
    Html(markup)
}

const HOME_BODY: &str = r#"    <h1>Welcome to the Fruits app!</h1>
    <p>This is the home page.</p>
    <a href="/fruits">Browse all fruits</a>
"#;

const NEW_BODY: &str = r#"    <h1>Add a Fruit</h1>
    <form action="/fruits" method="POST">
      <label for="name">Name:</label>
      <input type="text" name="name" id="name">
      <label for="color">Color:</label>
      <input type="text" name="color" id="color">
      <label for="isReadyToEat">Ready to eat?</label>
      <input type="checkbox" name="isReadyToEat" id="isReadyToEat">
      <button type="submit">Add Fruit</button>
    </form>
"#;

const NOT_FOUND_BODY: &str = r#"    <h1>Fruit not found</h1>
    <p>That fruit does not exist or has been deleted.</p>
    <a href="/fruits">Back to all fruits</a>
"#;

const ERROR_BODY: &str = r#"    <h1>Something went wrong</h1>
    <p>The request could not be completed. Please try again.</p>
    <a href="/fruits">Back to all fruits</a>
"#;

fn index_body(fruits: &[Fruit]) -> String {
    let mut body = String::from("    <h1>All Fruits</h1>\n");
    if fruits.is_empty() {
        body.push_str("    <p>No fruits yet.</p>\n");
        return body;
    }

    body.push_str("    <ul>\n");
    for fruit in fruits {
        let _ = writeln!(
            body,
            r#"      <li><a href="/fruits/{id}">{name}</a></li>"#,
            id = fruit.id,
            name = escape(&fruit.name),
        );
    }
    body.push_str("    </ul>\n");
    body
}

fn show_body(fruit: &Fruit) -> String {
    let name = escape(&fruit.name);
    let readiness = if fruit.is_ready_to_eat {
        format!("{name} is ready to eat!")
    } else {
        format!("{name} is not ready to eat.")
    };

    format!(
        r#"    <h1>{name}</h1>
    <p>Color: {color}</p>
    <p>{readiness}</p>
    <a href="/fruits/{id}/edit">Edit {name}</a>
    <form action="/fruits/{id}?_method=DELETE" method="POST">
      <button type="submit">Delete {name}</button>
    </form>
"#,
        color = escape(&fruit.color),
        id = fruit.id,
    )
}

fn edit_body(fruit: &Fruit) -> String {
    let checked = if fruit.is_ready_to_eat { " checked" } else { "" };

    format!(
        r#"    <h1>Edit {name}</h1>
    <form action="/fruits/{id}?_method=PUT" method="POST">
      <label for="name">Name:</label>
      <input type="text" name="name" id="name" value="{name}">
      <label for="color">Color:</label>
      <input type="text" name="color" id="color" value="{color}">
      <label for="isReadyToEat">Ready to eat?</label>
      <input type="checkbox" name="isReadyToEat" id="isReadyToEat"{checked}>
      <button type="submit">Update Fruit</button>
    </form>
"#,
        name = escape(&fruit.name),
        color = escape(&fruit.color),
        id = fruit.id,
    )
}
