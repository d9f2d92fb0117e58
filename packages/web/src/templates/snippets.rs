use maud::{html, Markup};
use models::snippets::Model as Snippet;

use super::{csrf_input, field_error, human_date, layout, TemplateData};
use crate::forms::{SnippetCreateForm, EXPIRY_DAYS};

pub fn home(data: &TemplateData, snippets: &[Snippet]) -> Markup {
    let content = html! {
        h2 { "Latest Snippets" }
        @if snippets.is_empty() {
            p { "There's nothing to see here... yet!" }
        } @else {
            table {
                tr {
                    th { "Title" }
                    th { "Created" }
                    th { "ID" }
                }
                @for snippet in snippets {
                    tr {
                        td { a href={ "/snippet/view/" (snippet.id) } { (snippet.title) } }
                        td { (human_date(&snippet.created.and_utc())) }
                        td { "#" (snippet.id) }
                    }
                }
            }
        }
    };
    layout(data, "Home", content)
}

pub fn view(data: &TemplateData, snippet: &Snippet) -> Markup {
    let content = html! {
        div class="snippet" {
            div class="metadata" {
                strong { (snippet.title) }
                span { "#" (snippet.id) }
            }
            pre { code { (snippet.content) } }
            div class="metadata" {
                time { "Created: " (human_date(&snippet.created.and_utc())) }
                time { "Expires: " (human_date(&snippet.expires.and_utc())) }
            }
        }
    };
    layout(data, &format!("Snippet #{}", snippet.id), content)
}

fn expiry_label(days: i32) -> &'static str {
    match days {
        1 => "One Day",
        7 => "One Week",
        _ => "One Year",
    }
}

pub fn create(data: &TemplateData, form: &SnippetCreateForm) -> Markup {
    let v = &form.validator;
    let content = html! {
        form action="/snippet/create" method="POST" {
            (csrf_input(data))
            div {
                label { "Title:" }
                (field_error(v, "title"))
                input type="text" name="title" value=(form.title);
            }
            div {
                label { "Content:" }
                (field_error(v, "content"))
                textarea name="content" { (form.content) }
            }
            div {
                label { "Delete in:" }
                (field_error(v, "expires"))
                @for days in EXPIRY_DAYS.iter().rev() {
                    input type="radio" name="expires" value=(days) checked[form.expires == *days];
                    " " (expiry_label(*days))
                }
            }
            div {
                input type="submit" value="Publish snippet";
            }
        }
    };
    layout(data, "Create a New Snippet", content)
}
