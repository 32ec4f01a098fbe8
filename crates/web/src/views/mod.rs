//! Server-rendered HTML pages.

use domain::User;

const PAGE_TITLE: &str = "User Registry";

/// Render the listing page for all users.
pub fn users_page(users: &[User]) -> String {
    let mut body = String::from("<h1>Users</h1>\n");

    if users.is_empty() {
        body.push_str("<p class=\"empty\">No users registered.</p>\n");
    } else {
        body.push_str("<table>\n<thead><tr><th>ID</th><th>Username</th><th>Age</th></tr></thead>\n<tbody>\n");
        for user in users {
            body.push_str(&format!(
                "<tr><td><a href=\"/user/{id}\">{id}</a></td><td>{name}</td><td>{age}</td></tr>\n",
                id = user.id,
                name = escape_html(&user.username),
                age = user.age,
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    layout(PAGE_TITLE, &body)
}

/// Render the detail page for a single user.
pub fn user_page(user: &User) -> String {
    let name = escape_html(&user.username);
    let body = format!(
        r#"<h1>{name}</h1>
<dl>
<dt>ID</dt><dd>{id}</dd>
<dt>Username</dt><dd>{name}</dd>
<dt>Age</dt><dd>{age}</dd>
</dl>
<p><a href="/">All users</a></p>
"#,
        id = user.id,
        age = user.age,
    );

    layout(&format!("{} - {}", name, PAGE_TITLE), &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}</body>
</html>
"#
    )
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
