use crate::models::{Habit, StreakEntry};
use crate::tracker::Tracker;
use std::fmt::Write;

pub fn render_index(tracker: &Tracker, streaks: &[StreakEntry]) -> String {
    let (title, body) = match &tracker.active {
        None => ("Habit Tracker".to_string(), render_profile_picker(&tracker.profiles)),
        Some(profile) => (
            format!("Habit Tracker - {}", escape_html(profile)),
            render_habits(tracker, streaks),
        ),
    };

    PAGE_HTML.replace("{{TITLE}}", &title).replace("{{BODY}}", &body)
}

fn render_profile_picker(profiles: &[String]) -> String {
    let mut html = String::from("<p class=\"subtitle\">Welcome! Create or select a profile.</p>\n");

    if !profiles.is_empty() {
        html.push_str("<section class=\"card\">\n<h2>Select existing profile</h2>\n<ul class=\"profiles\">\n");
        for profile in profiles {
            let name = escape_html(profile);
            let _ = writeln!(
                html,
                "<li><form method=\"post\" action=\"/profiles/select\">\
                 <input type=\"hidden\" name=\"name\" value=\"{name}\" />\
                 <button class=\"btn-soft\" type=\"submit\">{name}</button></form></li>"
            );
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str(
        "<form class=\"add-form\" method=\"post\" action=\"/profiles\">\n\
         <label for=\"profile-name\">Create new profile</label>\n\
         <input type=\"text\" id=\"profile-name\" name=\"name\" placeholder=\"Enter profile name\" />\n\
         <button class=\"btn-main\" type=\"submit\">Create profile</button>\n\
         </form>\n",
    );
    html
}

fn render_habits(tracker: &Tracker, streaks: &[StreakEntry]) -> String {
    let mut html = String::from(
        "<form method=\"post\" action=\"/profiles/switch\">\
         <button class=\"btn-soft\" type=\"submit\">Switch profile</button></form>\n",
    );

    html.push_str("<ul class=\"habit-list\">\n");
    for habit in &tracker.habits {
        html.push_str(&render_habit(habit));
    }
    if tracker.habits.is_empty() {
        html.push_str("<li class=\"hint\">No habits yet.</li>\n");
    }
    html.push_str("</ul>\n");

    html.push_str(
        "<form class=\"add-form\" method=\"post\" action=\"/habits\">\n\
         <label for=\"new-habit\">Add a new habit</label>\n\
         <input type=\"text\" id=\"new-habit\" name=\"name\" />\n\
         <button class=\"btn-main\" type=\"submit\">Add habit</button>\n\
         </form>\n",
    );

    let label = if tracker.show_streaks { "Hide streaks" } else { "Show streaks" };
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"/streaks/toggle\">\
         <button class=\"btn-soft\" type=\"submit\">{label}</button></form>"
    );

    if tracker.show_streaks {
        html.push_str("<section class=\"card streaks\">\n<h2>Current streaks</h2>\n<ul>\n");
        for entry in streaks {
            let unit = if entry.streak == 1 { "day" } else { "days" };
            let _ = writeln!(
                html,
                "<li>{}: <strong>{}</strong> {unit}</li>",
                escape_html(&entry.name),
                entry.streak
            );
        }
        html.push_str("</ul>\n</section>\n");
    }

    html
}

fn render_habit(habit: &Habit) -> String {
    let checked = if habit.completed { "checked" } else { "" };
    format!(
        "<li class=\"habit\">\
         <form method=\"post\" action=\"/habits/{id}/toggle\">\
         <button class=\"check {checked}\" type=\"submit\" aria-pressed=\"{pressed}\">{mark}</button></form>\
         <span class=\"name\">{name}</span>\
         <form method=\"post\" action=\"/habits/{id}/delete\">\
         <button class=\"btn-delete\" type=\"submit\">Delete</button></form></li>\n",
        id = habit.id,
        pressed = habit.completed,
        mark = if habit.completed { "&#10003;" } else { "&nbsp;" },
        name = escape_html(&habit.name),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ea;
      --bg-2: #bfe3c4;
      --ink: #23302a;
      --accent: #3f9b6b;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1e0 60%, #f4f8f1 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle,
    .hint {
      margin: 0;
      color: #5f645e;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .habit {
      display: flex;
      align-items: center;
      gap: 14px;
      background: white;
      border-radius: 16px;
      padding: 10px 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .habit .name {
      flex: 1;
      font-weight: 500;
    }

    form {
      margin: 0;
    }

    .add-form {
      display: grid;
      gap: 10px;
    }

    input[type="text"] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 14px;
      padding: 12px 14px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-main {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(63, 155, 107, 0.3);
    }

    .btn-soft {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-delete {
      background: transparent;
      color: #c63b2b;
      padding: 8px 12px;
    }

    .check {
      width: 34px;
      height: 34px;
      padding: 0;
      border-radius: 10px;
      background: white;
      border: 2px solid var(--accent);
      color: white;
    }

    .check.checked {
      background: var(--accent);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{TITLE}}</h1>
    </header>
{{BODY}}
  </main>
</body>
</html>
"#;
