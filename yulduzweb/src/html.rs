//! HTML content helpers for the yulduzweb UI.
//!
//! Exports the static landing page (`INDEX_PAGE`) and the
//! `timetable_page` helper which renders the filtered timetable. Keep the
//! HTML blobs here to avoid runtime template dependencies. Everything that
//! came from the database or the query string goes through `escape` before
//! it is spliced into a page.
//!
use yulduzdb::entry::TimetableEntry;

/// Message shown when a level has no stored sessions
pub const NO_DATA_MESSAGE: &str = "No data found for this level.";

/// HTML page for the landing form that asks for a level
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Yulduz Timetable</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { background: #121212; color: #e0e0e0; font-family: 'Segoe UI', sans-serif; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
        .card { background: #1e1e1e; padding: 2rem; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.5); width: 100%; max-width: 350px; }
        h2 { text-align: center; color: #00ff41; margin-bottom: 1.5rem; font-family: monospace; }
        input { width: 100%; padding: 12px; margin: 10px 0; border-radius: 6px; border: 1px solid #333; background: #252525; color: white; box-sizing: border-box; }
        button { width: 100%; padding: 12px; background: #007bff; border: none; color: white; border-radius: 6px; cursor: pointer; font-weight: bold; margin-top: 10px; }
        button:hover { background: #0056b3; }
    </style>
</head>
<body>
    <div class="card">
        <h2>TIMETABLE</h2>
        <form action="/timetable" method="GET">
            <input type="text" name="level" placeholder="Level (e.g. L3)" required>
            <button type="submit">Show timetable</button>
        </form>
    </div>
</body>
</html>"#;

/// Replace the HTML metacharacters of `text` with entities so values from
/// the database or the query string render as inert text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Render the timetable results page for a level.
///
/// Shows a table of the matching sessions, or the `message` paragraph when
/// there are none. The queried level is echoed in the heading.
///
/// # Arguments
/// * `entries` - Sessions returned for the level, already ordered
/// * `message` - Empty-result message, `None` when there are entries
/// * `level` - The level the caller asked for, echoed as page context
pub fn timetable_page(entries: &[TimetableEntry], message: Option<&str>, level: &str) -> String {
    let body = match message {
        Some(message) => format!("<p class='empty'>{}</p>", escape(message)),
        None => {
            let rows: String = entries
                .iter()
                .map(|entry| {
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        escape(&entry.course_id),
                        escape(&entry.course_name),
                        escape(&entry.day),
                        escape(&entry.time),
                        escape(&entry.room),
                    )
                })
                .collect();
            format!(
                "<table>\
                 <tr><th>Course</th><th>Name</th><th>Day</th><th>Time</th><th>Room</th></tr>\
                 {rows}</table>"
            )
        }
    };

    format!(
        "<!DOCTYPE html>
<html>
<head>
    <title>Timetable - {level}</title>
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
    <style>
        body {{ background: #121212; color: #e0e0e0; font-family: 'Segoe UI', sans-serif; margin: 0; padding: 40px; }}
        h2 {{ color: #00ff41; font-family: monospace; }}
        table {{ border-collapse: collapse; width: 100%; max-width: 700px; background: #1e1e1e; border-radius: 8px; overflow: hidden; }}
        th, td {{ padding: 10px 14px; text-align: left; border-bottom: 1px solid #333; }}
        th {{ background: #252525; color: #00ff41; font-family: monospace; }}
        .empty {{ color: #888; font-style: italic; }}
        a {{ color: #007bff; }}
    </style>
</head>
<body>
    <h2>Timetable for level {level}</h2>
    {body}
    <p><a href=\"/\">Back</a></p>
</body>
</html>",
        level = escape(level),
    )
}
