//! HTML rendering of the list pages.

use std::fmt::Write;

/// Message shown in place of the table when there are no rows.
pub const EMPTY_STATE: &str = "Данные отсутствуют";

/// A row type that can be shown on a list page.
pub trait ListPage {
    /// Page heading.
    const TITLE: &'static str;

    /// Column headers, in display order.
    const COLUMNS: &'static [&'static str];

    /// Visible cells of one row, aligned with `COLUMNS`.
    fn cells(&self) -> Vec<String>;
}

/// Link targets of the index page: path segment and label.
pub const SECTIONS: &[(&str, &str)] = &[
    ("clients", "Клиенты"),
    ("offers", "Договоры"),
    ("suppliers", "Поставщики"),
    ("manufacturer", "Производители"),
    ("quipment", "Оборудование"),
    ("equipmentsales", "Продажи оборудования"),
    ("staff", "Сотрудники"),
];

/// Render all rows of one entity as a full HTML page.
pub fn list_page<T: ListPage>(rows: &[T]) -> String {
    let mut body = String::new();

    if rows.is_empty() {
        let _ = write!(body, "<p class=\"empty\">{}</p>", EMPTY_STATE);
    } else {
        body.push_str("<table>\n<thead><tr>");
        for column in T::COLUMNS {
            let _ = write!(body, "<th>{}</th>", escape(column));
        }
        body.push_str("</tr></thead>\n<tbody>\n");
        for row in rows {
            body.push_str("<tr>");
            for cell in row.cells() {
                let _ = write!(body, "<td>{}</td>", escape(&cell));
            }
            body.push_str("</tr>\n");
        }
        body.push_str("</tbody>\n</table>");
    }

    document(T::TITLE, &body)
}

/// Index page linking every list page under `prefix`.
pub fn index_page(prefix: &str) -> String {
    let mut body = String::from("<ul>\n");
    for (path, label) in SECTIONS {
        let _ = writeln!(body, "<li><a href=\"{}/{}/\">{}</a></li>", prefix, path, label);
    }
    body.push_str("</ul>");

    document("Учёт оборудования", &body)
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

/// Escape text placed in element content. Quotes are left as they are since
/// row values never end up inside attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
