//! Server-rendered HTML pages.
//!
//! Every page goes through `layout`, which prints the flash message handed
//! to it. Callers take the flash from the session before rendering so that
//! it is shown exactly once.

use axum::http::StatusCode;
use todo_lists::unfinished_first;
use todo_models::{Todo, TodoList, COMPLETE_CLASS};

use crate::session::Flash;

/// Escapes text for use in HTML bodies and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn class_attr(class: Option<&str>) -> String {
    class
        .map(|class| format!(" class=\"{}\"", class))
        .unwrap_or_default()
}

/// Wraps a page body in the shared document shell.
pub fn layout(title: &str, flash: Option<Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|flash| {
            format!(
                "<div class=\"{}\"><p>{}</p></div>\n",
                flash.css_class(),
                escape(flash.message())
            )
        })
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - Todo Tracker</title>\n\
         </head>\n\
         <body>\n\
         <header><h1><a href=\"/lists\">Todo Tracker</a></h1></header>\n\
         <main>\n\
         {flash_html}{body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// All lists, unfinished ones first.
pub fn lists_page(lists: &[TodoList], flash: Option<Flash>) -> String {
    let mut body = String::from("<section id=\"lists\">\n<h2>Lists</h2>\n");

    if lists.is_empty() {
        body.push_str("<p>You have no lists yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for (index, list) in unfinished_first(lists, TodoList::is_complete) {
            body.push_str(&format!(
                "<li{class}><a href=\"/lists/{index}\"><h3>{name}</h3>\
                 <p>{unfinished} / {total}</p></a></li>\n",
                class = class_attr(list.list_class()),
                name = escape(&list.name),
                unfinished = list.unfinished_count(),
                total = list.todo_count(),
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<a class=\"add\" href=\"/lists/new\">New List</a>\n</section>\n");
    layout("Lists", flash, &body)
}

/// Form for creating a list. `value` refills the input after a rejection.
pub fn new_list_page(value: &str, flash: Option<Flash>) -> String {
    let body = format!(
        "<form action=\"/lists\" method=\"post\">\n\
         <label for=\"list_name\">Enter the name for your new list:</label>\n\
         <input id=\"list_name\" name=\"list_name\" placeholder=\"List Name\" \
         type=\"text\" value=\"{value}\">\n\
         <input type=\"submit\" value=\"Save\">\n\
         <a href=\"/lists\">Cancel</a>\n\
         </form>\n",
        value = escape(value),
    );
    layout("New List", flash, &body)
}

/// Form for renaming a list, with its delete button.
pub fn edit_list_page(index: usize, list: &TodoList, value: &str, flash: Option<Flash>) -> String {
    let body = format!(
        "<section id=\"edit-list\">\n\
         <h2>Editing '{name}'</h2>\n\
         <form action=\"/lists/{index}/destroy\" method=\"post\">\n\
         <button class=\"delete\" type=\"submit\">Delete List</button>\n\
         </form>\n\
         <form action=\"/lists/{index}\" method=\"post\">\n\
         <label for=\"list_name\">Enter the new name for the list:</label>\n\
         <input id=\"list_name\" name=\"list_name\" type=\"text\" value=\"{value}\">\n\
         <input type=\"submit\" value=\"Save\">\n\
         <a href=\"/lists/{index}\">Cancel</a>\n\
         </form>\n\
         </section>\n",
        name = escape(&list.name),
        value = escape(value),
    );
    layout("Edit List", flash, &body)
}

fn todo_item(list_index: usize, todo_index: usize, todo: &Todo) -> String {
    let class = todo.completed.then_some(COMPLETE_CLASS);
    format!(
        "<li{class}>\n\
         <form action=\"/lists/{list_index}/todos/{todo_index}\" method=\"post\" class=\"check\">\n\
         <input type=\"hidden\" name=\"completed\" value=\"{toggle}\">\n\
         <button type=\"submit\">{label}</button>\n\
         </form>\n\
         <h3>{name}</h3>\n\
         <form action=\"/lists/{list_index}/todos/{todo_index}/destroy\" method=\"post\" class=\"delete\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n\
         </li>\n",
        class = class_attr(class),
        toggle = !todo.completed,
        label = if todo.completed { "Reopen" } else { "Complete" },
        name = escape(&todo.name),
    )
}

/// One list with its todos, open todos first.
///
/// `todo_value` refills the add-todo input after a rejection.
pub fn list_page(index: usize, list: &TodoList, todo_value: &str, flash: Option<Flash>) -> String {
    let mut body = format!(
        "<section id=\"todos\"{class}>\n\
         <header>\n\
         <h2>{name}</h2>\n\
         <p>{unfinished} / {total}</p>\n\
         <form action=\"/lists/{index}/complete_all\" method=\"post\">\n\
         <button class=\"check\" type=\"submit\">Complete All</button>\n\
         </form>\n\
         <a class=\"edit\" href=\"/lists/{index}/edit\">Edit list</a>\n\
         </header>\n\
         <ul>\n",
        class = class_attr(list.list_class()),
        name = escape(&list.name),
        unfinished = list.unfinished_count(),
        total = list.todo_count(),
    );

    for (todo_index, todo) in unfinished_first(&list.todos, |todo| todo.completed) {
        body.push_str(&todo_item(index, todo_index, todo));
    }

    body.push_str(&format!(
        "</ul>\n\
         </section>\n\
         <form action=\"/lists/{index}/todos\" method=\"post\">\n\
         <label for=\"todo\">Enter a new todo item:</label>\n\
         <input id=\"todo\" name=\"todo\" placeholder=\"Something to do\" \
         type=\"text\" value=\"{value}\">\n\
         <input type=\"submit\" value=\"Add\">\n\
         </form>\n\
         <a href=\"/lists\">All Lists</a>\n",
        value = escape(todo_value),
    ));
    layout(&list.name, flash, &body)
}

/// Page shown for not-found and other failed requests.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<section id=\"error\">\n\
         <h2>{code} {reason}</h2>\n\
         <p>{message}</p>\n\
         <a href=\"/lists\">Back to all lists</a>\n\
         </section>\n",
        code = status.as_u16(),
        message = escape(message),
    );
    layout(reason, None, &body)
}
