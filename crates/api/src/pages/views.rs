//! HTML rendering for the form flow.
//!
//! Pages are plain `format!` templates served behind [`axum::response::Html`].

use bbs_core::types::DbId;
use bbs_db::models::post::Post;

use crate::requests::{CommentBody, PostBody};

const STYLE_AND_SCRIPT: &str = r#"<style>
body { font-family: sans-serif; max-width: 720px; margin: 24px auto; padding: 0 12px; }
nav { margin-bottom: 16px; }
input, textarea { width: 100%; box-sizing: border-box; }
.error { color: #b00020; white-space: pre-line; }
.comment { border-top: 1px solid #ddd; padding: 8px 0; }
</style>
<script>
async function send(method, url, form) {
  const opts = { method: method };
  if (form) {
    opts.body = new URLSearchParams(new FormData(form));
  }
  const resp = await fetch(url, opts);
  if (resp.redirected) {
    window.location = resp.url;
  } else {
    document.open();
    document.write(await resp.text());
    document.close();
  }
}
</script>"#;

/// Escape text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n{STYLE_AND_SCRIPT}\n</head>\n<body>\n<nav><a href=\"/posts\">Posts</a> | <a href=\"/posts/write\">Write</a></nav>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn push_report(body: &mut String, report: Option<&str>) {
    if let Some(report) = report {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(report)));
    }
}

pub fn list_page(posts: &[Post]) -> String {
    let mut items = String::new();
    for post in posts {
        items.push_str(&format!(
            "<li><a href=\"/posts/{}\">{}</a></li>\n",
            post.id,
            escape(&post.title),
        ));
    }
    if posts.is_empty() {
        items.push_str("<li>No posts yet.</li>\n");
    }

    layout("Posts", &format!("<h1>Posts</h1>\n<ul>\n{items}</ul>\n"))
}

pub fn detail_page(post: &Post) -> String {
    let mut body = format!(
        "<h1>{title}</h1>\n<p>{content}</p>\n<p>\n<a href=\"/posts/{id}/modify\">Modify</a>\n<form style=\"display:inline\" onsubmit=\"send('DELETE', '/posts/{id}', null); return false\"><button>Delete</button></form>\n</p>\n",
        title = escape(&post.title),
        content = escape(&post.content),
        id = post.id,
    );

    body.push_str("<h2>Comments</h2>\n");
    for comment in post.comments() {
        body.push_str(&format!(
            "<div class=\"comment\">\n<p>{content}</p>\n<a href=\"/posts/{post_id}/comments/{id}/modify\">Modify</a>\n<form style=\"display:inline\" onsubmit=\"send('DELETE', '/posts/{post_id}/comments/{id}', null); return false\"><button>Delete</button></form>\n</div>\n",
            content = escape(&comment.content),
            post_id = post.id,
            id = comment.id,
        ));
    }

    body.push_str(&format!(
        "<h3>Write a comment</h3>\n<form method=\"post\" action=\"/posts/{id}/comments/write\">\n<p><textarea name=\"content\" rows=\"3\"></textarea></p>\n<button>Submit</button>\n</form>\n",
        id = post.id,
    ));

    layout(&post.title, &body)
}

pub fn write_page(input: &PostBody, report: Option<&str>) -> String {
    let mut body = String::from("<h1>Write a post</h1>\n");
    push_report(&mut body, report);
    body.push_str(&format!(
        "<form method=\"post\" action=\"/posts/write\">\n<p><input name=\"title\" value=\"{title}\" placeholder=\"Title\"></p>\n<p><textarea name=\"content\" rows=\"8\" placeholder=\"Content\">{content}</textarea></p>\n<button>Save</button>\n</form>\n",
        title = escape(&input.title),
        content = escape(&input.content),
    ));

    layout("Write", &body)
}

pub fn modify_page(post_id: DbId, input: &PostBody, report: Option<&str>) -> String {
    let mut body = format!("<h1>Modify post {post_id}</h1>\n");
    push_report(&mut body, report);
    body.push_str(&format!(
        "<form method=\"post\" onsubmit=\"send('PUT', '/posts/{post_id}', this); return false\">\n<p><input name=\"title\" value=\"{title}\"></p>\n<p><textarea name=\"content\" rows=\"8\">{content}</textarea></p>\n<button>Save</button>\n</form>\n<p><a href=\"/posts/{post_id}\">Back</a></p>\n",
        title = escape(&input.title),
        content = escape(&input.content),
    ));

    layout("Modify", &body)
}

pub fn comment_modify_page(
    post_id: DbId,
    comment_id: DbId,
    input: &CommentBody,
    report: Option<&str>,
) -> String {
    let mut body = format!("<h1>Modify comment {comment_id}</h1>\n");
    push_report(&mut body, report);
    body.push_str(&format!(
        "<form method=\"post\" onsubmit=\"send('PUT', '/posts/{post_id}/comments/{comment_id}', this); return false\">\n<p><textarea name=\"content\" rows=\"3\">{content}</textarea></p>\n<button>Save</button>\n</form>\n<p><a href=\"/posts/{post_id}\">Back</a></p>\n",
        content = escape(&input.content),
    ));

    layout("Modify comment", &body)
}

pub fn error_page(code: &str, msg: &str) -> String {
    layout(
        "Error",
        &format!(
            "<h1>Request failed</h1>\n<p><strong>{}</strong></p>\n<p class=\"error\">{}</p>\n<p><a href=\"/posts\">Back to posts</a></p>\n",
            escape(code),
            escape(msg),
        ),
    )
}
